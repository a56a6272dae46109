use clap::ValueEnum;

use super::{validate_color, validate_delay, Effect};
use crate::error::EffectError;
use crate::magick::command::{FrameOp, FrameSpec};
use crate::source::SourceImage;

pub const DEFAULT_STEP_DEGREES: u32 = 18;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SpinDirection {
  Clockwise,
  CounterClockwise,
}

/// One full revolution at a fixed angle step.
#[derive(Debug)]
pub struct Spin {
  delay_ms: u32,
  step: u32,
  direction: SpinDirection,
  background: String,
}

impl Spin {
  pub fn new(
    delay_ms: u32,
    step: u32,
    direction: SpinDirection,
    background: &str,
  ) -> Result<Spin, EffectError> {
    // A step that does not divide 360 would never land back on the source
    // frame and the loop would jump.
    if step == 0 || 360 % step != 0 {
      return Err(EffectError::Usage(format!(
        "--degrees must evenly divide 360, got {step}"
      )));
    }

    Ok(Spin {
      delay_ms: validate_delay(delay_ms)?,
      step,
      direction,
      background: validate_color("background", background)?,
    })
  }
}

impl Effect for Spin {
  fn suffix(&self) -> &'static str {
    "_spinning"
  }

  fn delay_ms(&self) -> Option<u32> {
    Some(self.delay_ms)
  }

  fn frames(&self, _source: &SourceImage) -> Vec<FrameSpec> {
    let sign = match self.direction {
      SpinDirection::Clockwise => 1.0,
      SpinDirection::CounterClockwise => -1.0,
    };
    let total = 360 / self.step;

    (1..total)
      .map(|i| {
        let degrees = f64::from(self.step * i) * sign;
        FrameSpec::new(vec![FrameOp::Distort {
          degrees,
          background: self.background.clone(),
        }])
      })
      .collect()
  }
}
