use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, error};

use crate::error::EffectError;

pub mod command;

pub use command::{animation, still, strip_frames, FrameOp, FrameSpec, Invocation};

/// Handle to the delegated ImageMagick executable.
pub struct Magick {
  name: String,
  binary: PathBuf,
}

impl Magick {
  /// Locates the tool on PATH up front, so a missing installation surfaces
  /// as install guidance instead of a spawn failure halfway through.
  pub fn locate(binary: &str) -> Result<Magick, EffectError> {
    match which::which(binary) {
      Ok(path) => Ok(Magick {
        name: binary.to_owned(),
        binary: path,
      }),
      Err(_) => Err(EffectError::MissingTool {
        tool: binary.to_owned(),
      }),
    }
  }

  /// Reads the source dimensions with a single identify query.
  pub fn identify(&self, path: &Path) -> Result<(u32, u32), EffectError> {
    let output = Command::new(&self.binary)
      .arg("identify")
      .args(["-format", "%w %h\n"])
      .arg(path)
      .output()
      .map_err(|e| EffectError::Spawn {
        tool: self.name.clone(),
        source: e,
      })?;

    if !output.status.success() {
      return Err(self.delegated_failure(&output));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    // Multi-frame inputs print one line per frame; the first is the source.
    let mut fields = stdout.lines().next().unwrap_or("").split_whitespace();
    let parsed = match (fields.next(), fields.next()) {
      (Some(w), Some(h)) => w.parse::<u32>().ok().zip(h.parse::<u32>().ok()),
      _ => None,
    };

    parsed.ok_or_else(|| {
      EffectError::Source(format!(
        "could not read dimensions of {}: unexpected identify output",
        path.display()
      ))
    })
  }

  /// Runs one composed invocation to completion, relaying stderr on failure.
  pub fn run(&self, invocation: &Invocation) -> Result<(), EffectError> {
    debug!(args = ?invocation.args, "invoking {}", self.name);

    let output = Command::new(&self.binary)
      .args(&invocation.args)
      .output()
      .map_err(|e| EffectError::Spawn {
        tool: self.name.clone(),
        source: e,
      })?;

    if !output.status.success() {
      return Err(self.delegated_failure(&output));
    }

    Ok(())
  }

  fn delegated_failure(&self, output: &std::process::Output) -> EffectError {
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_owned();
    error!(%stderr, "{} failed", self.name);

    EffectError::Delegated {
      tool: self.name.clone(),
      status: output.status.code().unwrap_or(1),
      stderr,
    }
  }
}
