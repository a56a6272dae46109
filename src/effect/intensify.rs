use rand::Rng;

use super::{validate_delay, validate_frames, validate_percent, Effect};
use crate::error::EffectError;
use crate::magick::command::{FrameOp, FrameSpec};
use crate::source::SourceImage;

pub const DEFAULT_FRAMES: u32 = 10;
pub const DEFAULT_AMPLITUDE: u8 = 5;

/// Shake: every frame rolls the image to a fresh pseudo-random offset.
/// Offsets are intentionally unseeded; two runs produce different shakes.
pub struct Intensify {
  delay_ms: u32,
  frames: u32,
  amplitude: u8,
}

impl Intensify {
  pub fn new(delay_ms: u32, frames: u32, amplitude: u8) -> Result<Intensify, EffectError> {
    Ok(Intensify {
      delay_ms: validate_delay(delay_ms)?,
      frames: validate_frames("frames", frames)?,
      amplitude: validate_percent("amplitude", amplitude, 1)?,
    })
  }
}

impl Effect for Intensify {
  fn suffix(&self) -> &'static str {
    "_intensifies"
  }

  fn delay_ms(&self) -> Option<u32> {
    Some(self.delay_ms)
  }

  fn frames(&self, source: &SourceImage) -> Vec<FrameSpec> {
    let max_dx = (i64::from(source.width) * i64::from(self.amplitude) / 100).max(1);
    let max_dy = (i64::from(source.height) * i64::from(self.amplitude) / 100).max(1);
    let mut rng = rand::rng();

    (1..self.frames)
      .map(|_| {
        FrameSpec::new(vec![FrameOp::Roll {
          dx: rng.random_range(-max_dx..=max_dx),
          dy: rng.random_range(-max_dy..=max_dy),
        }])
      })
      .collect()
  }
}
