use lazy_static::lazy_static;
use regex::Regex;

use crate::error::EffectError;
use crate::magick::command::FrameSpec;
use crate::source::SourceImage;

pub mod convert;
pub mod explode;
pub mod flip;
pub mod intensify;
pub mod partify;
pub mod rotate;
pub mod spin;
pub mod train;

/// Below this the GIF format stops rendering delays reliably.
pub const MIN_DELAY_MS: u32 = 20;

/// Shared fallback when neither a flag nor a config default names a delay.
pub const DEFAULT_DELAY_MS: u32 = 50;

/// One visual transformation: where its output goes and which per-frame
/// transforms produce it.
pub trait Effect {
  /// Suffix appended to the source stem, e.g. `_exploding`.
  fn suffix(&self) -> &'static str;

  /// Extension of the produced artifact; `None` keeps the source extension.
  fn output_ext(&self) -> Option<&str> {
    Some("gif")
  }

  /// Frame delay for animated output; `None` marks a static pipeline.
  fn delay_ms(&self) -> Option<u32>;

  /// Per-clone transform parameters, in animation order. The unmodified
  /// source is always frame 0 and is not part of this list.
  fn frames(&self, source: &SourceImage) -> Vec<FrameSpec>;

  /// Leading frames the delegated tool is asked to drop after assembly.
  fn stripped_frames(&self) -> usize {
    0
  }
}

lazy_static! {
  static ref COLOR_REGEX: Regex =
    Regex::new(r"^(#[0-9a-fA-F]{3}|#[0-9a-fA-F]{6}|[a-zA-Z]+)$").unwrap();
  static ref FORMAT_REGEX: Regex = Regex::new(r"^[a-zA-Z0-9]{1,6}$").unwrap();
}

pub fn validate_delay(ms: u32) -> Result<u32, EffectError> {
  if ms < MIN_DELAY_MS {
    return Err(EffectError::Usage(format!(
      "--delay must be at least {MIN_DELAY_MS}ms, got {ms}"
    )));
  }
  Ok(ms)
}

pub fn validate_frames(flag: &str, frames: u32) -> Result<u32, EffectError> {
  if frames == 0 {
    return Err(EffectError::Usage(format!("--{flag} must be at least 1")));
  }
  Ok(frames)
}

pub fn validate_percent(flag: &str, value: u8, min: u8) -> Result<u8, EffectError> {
  if value < min || value > 100 {
    return Err(EffectError::Usage(format!(
      "--{flag} must be between {min} and 100, got {value}"
    )));
  }
  Ok(value)
}

/// Accepts `#rgb`, `#rrggbb` and named colors; everything else the delegated
/// tool would interpret is rejected before it gets the chance.
pub fn validate_color(flag: &str, value: &str) -> Result<String, EffectError> {
  if !COLOR_REGEX.is_match(value) {
    return Err(EffectError::Usage(format!(
      "--{flag} must be a named color or #rgb/#rrggbb hex value, got {value}"
    )));
  }
  Ok(value.to_owned())
}

pub fn validate_format(flag: &str, value: &str) -> Result<String, EffectError> {
  if !FORMAT_REGEX.is_match(value) {
    return Err(EffectError::Usage(format!(
      "--{flag} must be a bare file extension like png or webp, got {value}"
    )));
  }
  Ok(value.to_lowercase())
}
