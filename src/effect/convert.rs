use super::{validate_format, Effect};
use crate::error::EffectError;
use crate::magick::command::FrameSpec;
use crate::source::SourceImage;

/// Format conversion is pure delegation: the tool picks the codec from the
/// output extension, so the pipeline carries no transform at all.
pub struct Convert {
  format: String,
}

impl Convert {
  pub fn new(format: &str) -> Result<Convert, EffectError> {
    Ok(Convert {
      format: validate_format("format", format)?,
    })
  }
}

impl Effect for Convert {
  fn suffix(&self) -> &'static str {
    ""
  }

  fn output_ext(&self) -> Option<&str> {
    Some(&self.format)
  }

  fn delay_ms(&self) -> Option<u32> {
    None
  }

  fn frames(&self, _source: &SourceImage) -> Vec<FrameSpec> {
    vec![FrameSpec::default()]
  }
}
