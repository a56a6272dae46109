use std::fs;
use std::path::{Path, PathBuf};

use crate::error::EffectError;

/// The resolved input; dimensions are probed once via the delegated tool
/// before frame generation begins.
#[derive(Debug, Clone)]
pub struct SourceImage {
  pub path: PathBuf,
  pub width: u32,
  pub height: u32,
}

/// Extensions the convert subcommand picks up when given a directory.
const IMAGE_EXTENSIONS: &[&str] = &[
  "png", "jpg", "jpeg", "gif", "webp", "bmp", "tiff", "tif", "heic", "avif",
];

/// Resolves the positional FILE argument. An existing file wins; an
/// extensionless argument is matched against `<arg>.*` next to it, and
/// anything other than exactly one match is an error.
pub fn resolve(arg: &Path) -> Result<PathBuf, EffectError> {
  if arg.is_file() {
    return Ok(arg.to_path_buf());
  }
  if arg.is_dir() {
    return Err(EffectError::Source(format!(
      "{} is a directory",
      arg.display()
    )));
  }
  if arg.extension().is_some() {
    return Err(EffectError::Source(format!(
      "{} does not exist",
      arg.display()
    )));
  }

  let mut matches = stem_matches(arg)?;
  match matches.len() {
    0 => Err(EffectError::Source(format!(
      "no file matching {}.*",
      arg.display()
    ))),
    1 => Ok(matches.remove(0)),
    _ => Err(EffectError::Source(format!(
      "{} is ambiguous, candidates: {}",
      arg.display(),
      matches
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
    ))),
  }
}

fn stem_matches(arg: &Path) -> Result<Vec<PathBuf>, EffectError> {
  let dir = match arg.parent() {
    Some(parent) if !parent.as_os_str().is_empty() => parent,
    _ => Path::new("."),
  };
  let stem = match arg.file_name() {
    Some(name) => name.to_owned(),
    None => {
      return Err(EffectError::Source(format!(
        "{} has no file name",
        arg.display()
      )))
    }
  };

  let entries = fs::read_dir(dir).map_err(|e| EffectError::Io {
    context: format!("failed to list {}", dir.display()),
    source: e,
  })?;

  let mut found = Vec::new();
  for entry in entries {
    let entry = entry.map_err(|e| EffectError::Io {
      context: format!("failed to list {}", dir.display()),
      source: e,
    })?;
    let path = entry.path();
    if path.is_file() && path.file_stem() == Some(stem.as_os_str()) {
      found.push(path);
    }
  }
  found.sort();

  Ok(found)
}

/// Every regular image file directly inside `dir`, non-recursive.
pub fn directory_images(dir: &Path) -> Result<Vec<PathBuf>, EffectError> {
  let entries = fs::read_dir(dir).map_err(|e| EffectError::Io {
    context: format!("failed to list {}", dir.display()),
    source: e,
  })?;

  let mut found = Vec::new();
  for entry in entries {
    let entry = entry.map_err(|e| EffectError::Io {
      context: format!("failed to list {}", dir.display()),
      source: e,
    })?;
    let path = entry.path();
    let known = path
      .extension()
      .and_then(|e| e.to_str())
      .map(|e| IMAGE_EXTENSIONS.contains(&e.to_lowercase().as_str()))
      .unwrap_or(false);
    if path.is_file() && known {
      found.push(path);
    }
  }
  found.sort();

  if found.is_empty() {
    return Err(EffectError::Source(format!(
      "no image files in {}",
      dir.display()
    )));
  }

  Ok(found)
}

/// Derives the output path next to the source: `photo.png` with suffix
/// `_exploding` and extension `gif` becomes `photo_exploding.gif`; a `None`
/// extension keeps the source's.
pub fn derived_output(source: &Path, suffix: &str, ext: Option<&str>) -> PathBuf {
  let stem = source
    .file_stem()
    .map(|s| s.to_string_lossy().into_owned())
    .unwrap_or_default();
  let ext = match ext {
    Some(e) => Some(e.to_owned()),
    None => source.extension().map(|e| e.to_string_lossy().into_owned()),
  };

  let name = match ext {
    Some(e) => format!("{stem}{suffix}.{e}"),
    None => format!("{stem}{suffix}"),
  };
  source.with_file_name(name)
}
