use clap::ValueEnum;

use super::Effect;
use crate::magick::command::{FrameOp, FrameSpec};
use crate::source::SourceImage;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FlipAxis {
  /// Top becomes bottom.
  Vertical,
  /// Left becomes right.
  Horizontal,
}

pub struct Flip {
  axis: FlipAxis,
}

impl Flip {
  pub fn new(axis: FlipAxis) -> Flip {
    Flip { axis }
  }
}

impl Effect for Flip {
  fn suffix(&self) -> &'static str {
    "_flipped"
  }

  fn output_ext(&self) -> Option<&str> {
    None
  }

  fn delay_ms(&self) -> Option<u32> {
    None
  }

  fn frames(&self, _source: &SourceImage) -> Vec<FrameSpec> {
    let op = match self.axis {
      FlipAxis::Vertical => FrameOp::Flip,
      FlipAxis::Horizontal => FrameOp::Flop,
    };
    vec![FrameSpec::new(vec![op])]
  }
}
