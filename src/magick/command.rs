use std::ffi::OsString;
use std::path::Path;

/// One discrete transform handed to the delegated tool. Every variant maps
/// onto a fixed set of argv entries; nothing is ever spliced through a shell.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameOp {
  /// Resize the canvas to `percent` of the source.
  Resize(f64),
  /// ImageMagick implosion factor; negative values explode.
  Implode(f64),
  /// Wrap-around offset in pixels.
  Roll { dx: i64, dy: i64 },
  /// Rotation about the canvas center, keeping the geometry fixed.
  Distort { degrees: f64, background: String },
  /// Plain rotation, growing the canvas to fit.
  Rotate(f64),
  Flip,
  Flop,
  /// Replace `target` (within `fuzz` percent tolerance) by `fill`.
  Fill {
    target: String,
    fill: String,
    fuzz: u8,
  },
}

impl FrameOp {
  fn push_args(&self, args: &mut Vec<OsString>) {
    match self {
      FrameOp::Resize(percent) => {
        args.push("-resize".into());
        args.push(format!("{percent:.2}%").into());
      }
      FrameOp::Implode(factor) => {
        args.push("-implode".into());
        args.push(format!("{factor}").into());
      }
      FrameOp::Roll { dx, dy } => {
        args.push("-roll".into());
        args.push(format!("{dx:+}{dy:+}").into());
      }
      FrameOp::Distort {
        degrees,
        background,
      } => {
        args.push("-background".into());
        args.push(background.clone().into());
        args.push("-virtual-pixel".into());
        args.push("background".into());
        args.push("-distort".into());
        args.push("SRT".into());
        args.push(format!("{degrees}").into());
      }
      FrameOp::Rotate(degrees) => {
        args.push("-rotate".into());
        args.push(format!("{degrees}").into());
      }
      FrameOp::Flip => args.push("-flip".into()),
      FrameOp::Flop => args.push("-flop".into()),
      FrameOp::Fill { target, fill, fuzz } => {
        args.push("-fuzz".into());
        args.push(format!("{fuzz}%").into());
        args.push("-fill".into());
        args.push(fill.clone().into());
        args.push("-opaque".into());
        args.push(target.clone().into());
      }
    }
  }
}

/// The transforms producing one generated frame, in application order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameSpec {
  pub ops: Vec<FrameOp>,
}

impl FrameSpec {
  pub fn new(ops: Vec<FrameOp>) -> FrameSpec {
    FrameSpec { ops }
  }
}

/// A fully composed delegated call, ready to hand to the tool as discrete
/// arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
  pub args: Vec<OsString>,
}

/// Assembles an animation: the unmodified source is frame 0, followed by one
/// parenthesized `-clone 0` sub-expression per generated frame, then the
/// shared delay/loop settings. The GIF delay unit is a 10ms tick.
pub fn animation(source: &Path, frames: &[FrameSpec], delay_ms: u32, output: &Path) -> Invocation {
  let mut args: Vec<OsString> = vec![source.as_os_str().to_owned()];

  for spec in frames {
    args.push("(".into());
    args.push("-clone".into());
    args.push("0".into());
    for op in &spec.ops {
      op.push_args(&mut args);
    }
    args.push(")".into());
  }

  args.push("-set".into());
  args.push("delay".into());
  args.push((delay_ms / 10).to_string().into());
  args.push("-loop".into());
  args.push("0".into());
  args.push(output.as_os_str().to_owned());

  Invocation { args }
}

/// A static pipeline: source, transforms, output.
pub fn still(source: &Path, ops: &[FrameOp], output: &Path) -> Invocation {
  let mut args: Vec<OsString> = vec![source.as_os_str().to_owned()];
  for op in ops {
    op.push_args(&mut args);
  }
  args.push(output.as_os_str().to_owned());

  Invocation { args }
}

/// Second pass over an assembled GIF, dropping its `count` leading frames.
pub fn strip_frames(gif: &Path, count: usize) -> Invocation {
  let args: Vec<OsString> = vec![
    gif.as_os_str().to_owned(),
    "-delete".into(),
    format!("0-{}", count - 1).into(),
    gif.as_os_str().to_owned(),
  ];

  Invocation { args }
}
