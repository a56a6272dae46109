use super::Effect;
use crate::error::EffectError;
use crate::magick::command::{FrameOp, FrameSpec};
use crate::source::SourceImage;

pub const DEFAULT_DEGREES: f64 = 90.0;

pub struct Rotate {
  degrees: f64,
}

impl Rotate {
  pub fn new(degrees: f64) -> Result<Rotate, EffectError> {
    if !degrees.is_finite() {
      return Err(EffectError::Usage(format!(
        "--degrees must be a finite angle, got {degrees}"
      )));
    }
    Ok(Rotate { degrees })
  }
}

impl Effect for Rotate {
  fn suffix(&self) -> &'static str {
    "_rotated"
  }

  fn output_ext(&self) -> Option<&str> {
    None
  }

  fn delay_ms(&self) -> Option<u32> {
    None
  }

  fn frames(&self, _source: &SourceImage) -> Vec<FrameSpec> {
    vec![FrameSpec::new(vec![FrameOp::Rotate(self.degrees)])]
  }
}
