use clap::ValueEnum;

use super::{validate_delay, validate_frames, Effect};
use crate::error::EffectError;
use crate::magick::command::{FrameOp, FrameSpec};
use crate::source::SourceImage;

pub const DEFAULT_MIN_FRAMES: u32 = 30;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SlideDirection {
  Up,
  Down,
  Left,
  Right,
}

/// Slides the image across its own wrap-around canvas, one full traversal.
pub struct Train {
  delay_ms: u32,
  min_frames: u32,
  direction: SlideDirection,
}

impl Train {
  pub fn new(
    delay_ms: u32,
    min_frames: u32,
    direction: SlideDirection,
  ) -> Result<Train, EffectError> {
    Ok(Train {
      delay_ms: validate_delay(delay_ms)?,
      min_frames: validate_frames("frames", min_frames)?,
      direction,
    })
  }
}

impl Effect for Train {
  fn suffix(&self) -> &'static str {
    "_train"
  }

  fn delay_ms(&self) -> Option<u32> {
    Some(self.delay_ms)
  }

  fn frames(&self, source: &SourceImage) -> Vec<FrameSpec> {
    let span = match self.direction {
      SlideDirection::Left | SlideDirection::Right => i64::from(source.width),
      SlideDirection::Up | SlideDirection::Down => i64::from(source.height),
    };
    // A small image may not offer min_frames distinct offsets; one pixel per
    // frame is the floor.
    let increment = (span / i64::from(self.min_frames)).max(1);

    let mut frames = Vec::new();
    let mut offset = increment;
    // The full-span offset wraps back onto the source frame, so the
    // traversal stops one increment short.
    while offset < span {
      let (dx, dy) = match self.direction {
        SlideDirection::Left => (-offset, 0),
        SlideDirection::Right => (offset, 0),
        SlideDirection::Up => (0, -offset),
        SlideDirection::Down => (0, offset),
      };
      frames.push(FrameSpec::new(vec![FrameOp::Roll { dx, dy }]));
      offset += increment;
    }

    frames
  }
}
