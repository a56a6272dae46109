use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::effect::flip::FlipAxis;
use crate::effect::rotate::DEFAULT_DEGREES;
use crate::effect::spin::{SpinDirection, DEFAULT_STEP_DEGREES};
use crate::effect::train::{SlideDirection, DEFAULT_MIN_FRAMES};

#[derive(Parser)]
#[command(name = "rusty-magick")]
#[command(about = "Turns images into animated GIFs and friends by driving ImageMagick")]
#[command(version)]
pub struct Cli {
  #[command(subcommand)]
  pub command: Command,

  /// Defaults file (default: rusty-magick.toml in the working directory)
  #[arg(short, long, global = true)]
  pub config: Option<PathBuf>,

  /// Answer yes to every overwrite prompt
  #[arg(short, long, global = true)]
  pub yes: bool,
}

#[derive(Subcommand)]
pub enum Command {
  /// Blow the image apart frame by frame
  Explode(BlastArgs),

  /// Collapse the image into itself frame by frame
  Implode(BlastArgs),

  /// Rotate the image through one full turn
  Spin(SpinArgs),

  /// Shake the image around its origin
  Intensify(IntensifyArgs),

  /// Cycle a rainbow palette over a target color
  Partify(PartifyArgs),

  /// Slide the image across its own canvas
  Train(TrainArgs),

  /// Rotate the image by a fixed angle
  Rotate(RotateArgs),

  /// Mirror the image along an axis
  Flip(FlipArgs),

  /// Re-encode the image in another format
  Convert(ConvertArgs),
}

#[derive(Args)]
pub struct BlastArgs {
  /// Image to transform
  pub file: PathBuf,

  /// Frame delay in milliseconds (minimum 20)
  #[arg(short, long)]
  pub delay: Option<u32>,

  /// Number of frames in the animation
  #[arg(short = 'n', long)]
  pub frames: Option<u32>,

  /// Canvas expansion per frame, in percent (1-100)
  #[arg(short, long)]
  pub rate: Option<u8>,
}

#[derive(Args)]
pub struct SpinArgs {
  /// Image to transform
  pub file: PathBuf,

  /// Frame delay in milliseconds (minimum 20)
  #[arg(short, long)]
  pub delay: Option<u32>,

  /// Rotation per frame, in degrees; must evenly divide 360
  #[arg(short = 'g', long, default_value_t = DEFAULT_STEP_DEGREES)]
  pub degrees: u32,

  /// Direction of rotation
  #[arg(short = 'r', long, value_enum, default_value_t = SpinDirection::Clockwise)]
  pub direction: SpinDirection,

  /// Color revealed at the corners while rotating
  #[arg(short, long, default_value = "none")]
  pub background: String,
}

#[derive(Args)]
pub struct IntensifyArgs {
  /// Image to transform
  pub file: PathBuf,

  /// Frame delay in milliseconds (minimum 20)
  #[arg(short, long)]
  pub delay: Option<u32>,

  /// Number of frames in the animation
  #[arg(short = 'n', long)]
  pub frames: Option<u32>,

  /// Maximum shake offset as a percentage of each dimension (1-100)
  #[arg(short, long)]
  pub amplitude: Option<u8>,
}

#[derive(Args)]
pub struct PartifyArgs {
  /// Image to transform
  pub file: PathBuf,

  /// Frame delay in milliseconds (minimum 20)
  #[arg(short, long)]
  pub delay: Option<u32>,

  /// Color-match tolerance, in percent (0-100)
  #[arg(short = 'z', long)]
  pub fuzz: Option<u8>,

  /// Color to replace with the palette
  #[arg(short = 'o', long, default_value = "black")]
  pub color: String,
}

#[derive(Args)]
pub struct TrainArgs {
  /// Image to transform
  pub file: PathBuf,

  /// Frame delay in milliseconds (minimum 20)
  #[arg(short, long)]
  pub delay: Option<u32>,

  /// Minimum number of frames for one traversal
  #[arg(short = 'n', long, default_value_t = DEFAULT_MIN_FRAMES)]
  pub frames: u32,

  /// Direction of travel
  #[arg(short = 'r', long, value_enum, default_value_t = SlideDirection::Left)]
  pub direction: SlideDirection,
}

#[derive(Args)]
pub struct RotateArgs {
  /// Image to transform
  pub file: PathBuf,

  /// Rotation angle in degrees
  #[arg(short = 'g', long, default_value_t = DEFAULT_DEGREES)]
  pub degrees: f64,

  /// Overwrite the source instead of writing a new file
  #[arg(short, long)]
  pub in_place: bool,
}

#[derive(Args)]
pub struct FlipArgs {
  /// Image to transform
  pub file: PathBuf,

  /// Mirror axis
  #[arg(short = 'r', long, value_enum, default_value_t = FlipAxis::Vertical)]
  pub direction: FlipAxis,

  /// Overwrite the source instead of writing a new file
  #[arg(short, long)]
  pub in_place: bool,
}

#[derive(Args)]
pub struct ConvertArgs {
  /// Image to convert, or a directory of images
  pub file: PathBuf,

  /// Target format, given as a file extension (png, jpg, webp, ...)
  #[arg(short, long)]
  pub format: String,
}
