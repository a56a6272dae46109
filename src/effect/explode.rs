use super::{validate_delay, validate_frames, validate_percent, Effect};
use crate::error::EffectError;
use crate::magick::command::{FrameOp, FrameSpec};
use crate::source::SourceImage;

pub const DEFAULT_FRAMES: u32 = 20;
pub const DEFAULT_EXPANSION: u8 = 5;

/// Shared sequencer for explode and implode; only the seed sign and the
/// output suffix differ.
#[derive(Debug)]
pub struct Blast {
  seed: f64,
  suffix: &'static str,
  delay_ms: u32,
  frames: u32,
  expansion: u8,
}

impl Blast {
  pub fn explode(delay_ms: u32, frames: u32, expansion: u8) -> Result<Blast, EffectError> {
    Blast::new(-1.0, "_exploding", delay_ms, frames, expansion)
  }

  pub fn implode(delay_ms: u32, frames: u32, expansion: u8) -> Result<Blast, EffectError> {
    Blast::new(1.0, "_imploding", delay_ms, frames, expansion)
  }

  fn new(
    seed: f64,
    suffix: &'static str,
    delay_ms: u32,
    frames: u32,
    expansion: u8,
  ) -> Result<Blast, EffectError> {
    Ok(Blast {
      seed,
      suffix,
      delay_ms: validate_delay(delay_ms)?,
      frames: validate_frames("frames", frames)?,
      expansion: validate_percent("rate", expansion, 1)?,
    })
  }
}

impl Effect for Blast {
  fn suffix(&self) -> &'static str {
    self.suffix
  }

  fn delay_ms(&self) -> Option<u32> {
    Some(self.delay_ms)
  }

  fn frames(&self, _source: &SourceImage) -> Vec<FrameSpec> {
    let growth = 1.0 + f64::from(self.expansion) / 100.0;

    (1..self.frames)
      .map(|i| {
        // Every clone derives from the source, so the per-step doubling and
        // expansion compound with the clone index.
        let intensity = self.seed * 2f64.powi(i as i32 - 1);
        let resize = 100.0 * growth.powi(i as i32);
        FrameSpec::new(vec![FrameOp::Resize(resize), FrameOp::Implode(intensity)])
      })
      .collect()
  }
}
