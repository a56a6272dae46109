use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Looked up in the working directory when no `--config` flag is given.
pub const DEFAULT_CONFIG_FILE: &str = "rusty-magick.toml";

#[derive(Deserialize, Default)]
pub struct Config {
  #[serde(default)]
  pub magick: MagickConfig,
  #[serde(default)]
  pub defaults: DefaultsConfig,
}

#[derive(Deserialize)]
pub struct MagickConfig {
  #[serde(default = "default_binary")]
  pub binary: String,
}

impl Default for MagickConfig {
  fn default() -> Self {
    MagickConfig {
      binary: default_binary(),
    }
  }
}

fn default_binary() -> String {
  "magick".to_owned()
}

/// Per-run defaults sitting between the built-in constants and the
/// command-line flags in the merge order.
#[derive(Deserialize, Default)]
pub struct DefaultsConfig {
  pub delay: Option<u32>,
  pub frames: Option<u32>,
  pub expansion: Option<u8>,
  pub amplitude: Option<u8>,
  pub fuzz: Option<u8>,
}

pub fn load(explicit: Option<&Path>) -> Result<Config> {
  match explicit {
    Some(path) => parse(path),
    None => {
      let default = Path::new(DEFAULT_CONFIG_FILE);
      if default.is_file() {
        parse(default)
      } else {
        Ok(Config::default())
      }
    }
  }
}

pub fn parse(config_path: &Path) -> Result<Config> {
  // Load config
  let toml_str = fs::read_to_string(config_path)
    .with_context(|| format!("failed to read config file {}", config_path.display()))?;
  let cfg: Config = toml::from_str(&toml_str)
    .with_context(|| format!("failed to deserialize {}", config_path.display()))?;

  Ok(cfg)
}
