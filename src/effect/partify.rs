use super::{validate_color, validate_delay, validate_percent, Effect};
use crate::error::EffectError;
use crate::magick::command::{FrameOp, FrameSpec};
use crate::source::SourceImage;

pub const DEFAULT_FUZZ: u8 = 40;

/// Nine-step rainbow ramp, warm to cool and back.
pub const PALETTE: [&str; 9] = [
  "#FF6B6B", "#FF9E6B", "#FFD93D", "#9EFF6B", "#6BFF9E", "#6BD9FF", "#6B83FF", "#B66BFF",
  "#FF6BD9",
];

/// Replaces a target color with the palette, one color per frame. The
/// palette runs twice because the delegated tool does not apply the fill on
/// the very first clone; the whole first iteration (source frame included)
/// is dropped in a post-assembly pass, leaving one clean cycle.
pub struct Partify {
  delay_ms: u32,
  fuzz: u8,
  target: String,
}

impl Partify {
  pub fn new(delay_ms: u32, fuzz: u8, target: &str) -> Result<Partify, EffectError> {
    Ok(Partify {
      delay_ms: validate_delay(delay_ms)?,
      fuzz: validate_percent("fuzz", fuzz, 0)?,
      target: validate_color("color", target)?,
    })
  }
}

impl Effect for Partify {
  fn suffix(&self) -> &'static str {
    "_partified"
  }

  fn delay_ms(&self) -> Option<u32> {
    Some(self.delay_ms)
  }

  fn frames(&self, _source: &SourceImage) -> Vec<FrameSpec> {
    (0..PALETTE.len() * 2)
      .map(|i| {
        FrameSpec::new(vec![FrameOp::Fill {
          target: self.target.clone(),
          fill: PALETTE[i % PALETTE.len()].to_owned(),
          fuzz: self.fuzz,
        }])
      })
      .collect()
  }

  fn stripped_frames(&self) -> usize {
    PALETTE.len() + 1
  }
}
