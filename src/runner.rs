use std::io::{self, Write};
use std::path::Path;

use tracing::info;

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::effect::{
  self,
  convert::Convert,
  explode::{self, Blast},
  flip::Flip,
  intensify::{self, Intensify},
  partify::{self, Partify},
  rotate::Rotate,
  spin::Spin,
  train::Train,
  Effect,
};
use crate::error::EffectError;
use crate::magick::{self, Magick};
use crate::source::{self, SourceImage};

/// Linear pipeline: resolve -> probe -> sequence -> compose -> invoke ->
/// optional post-process. Every step is terminal on failure.
pub fn run(cli: &Cli, cfg: &Config) -> Result<(), EffectError> {
  let magick = Magick::locate(&cfg.magick.binary)?;
  let defaults = &cfg.defaults;
  let delay = |flag: Option<u32>| flag.or(defaults.delay).unwrap_or(effect::DEFAULT_DELAY_MS);

  match &cli.command {
    Command::Explode(args) => {
      let blast = Blast::explode(
        delay(args.delay),
        args
          .frames
          .or(defaults.frames)
          .unwrap_or(explode::DEFAULT_FRAMES),
        args
          .rate
          .or(defaults.expansion)
          .unwrap_or(explode::DEFAULT_EXPANSION),
      )?;
      apply(&magick, &blast, &source::resolve(&args.file)?, false, cli.yes)
    }
    Command::Implode(args) => {
      let blast = Blast::implode(
        delay(args.delay),
        args
          .frames
          .or(defaults.frames)
          .unwrap_or(explode::DEFAULT_FRAMES),
        args
          .rate
          .or(defaults.expansion)
          .unwrap_or(explode::DEFAULT_EXPANSION),
      )?;
      apply(&magick, &blast, &source::resolve(&args.file)?, false, cli.yes)
    }
    Command::Spin(args) => {
      let spin = Spin::new(
        delay(args.delay),
        args.degrees,
        args.direction,
        &args.background,
      )?;
      apply(&magick, &spin, &source::resolve(&args.file)?, false, cli.yes)
    }
    Command::Intensify(args) => {
      let shake = Intensify::new(
        delay(args.delay),
        args
          .frames
          .or(defaults.frames)
          .unwrap_or(intensify::DEFAULT_FRAMES),
        args
          .amplitude
          .or(defaults.amplitude)
          .unwrap_or(intensify::DEFAULT_AMPLITUDE),
      )?;
      apply(&magick, &shake, &source::resolve(&args.file)?, false, cli.yes)
    }
    Command::Partify(args) => {
      let party = Partify::new(
        delay(args.delay),
        args.fuzz.or(defaults.fuzz).unwrap_or(partify::DEFAULT_FUZZ),
        &args.color,
      )?;
      apply(&magick, &party, &source::resolve(&args.file)?, false, cli.yes)
    }
    Command::Train(args) => {
      let train = Train::new(delay(args.delay), args.frames, args.direction)?;
      apply(&magick, &train, &source::resolve(&args.file)?, false, cli.yes)
    }
    Command::Rotate(args) => {
      let rotate = Rotate::new(args.degrees)?;
      apply(
        &magick,
        &rotate,
        &source::resolve(&args.file)?,
        args.in_place,
        cli.yes,
      )
    }
    Command::Flip(args) => {
      let flip = Flip::new(args.direction);
      apply(
        &magick,
        &flip,
        &source::resolve(&args.file)?,
        args.in_place,
        cli.yes,
      )
    }
    Command::Convert(args) => {
      let convert = Convert::new(&args.format)?;
      if args.file.is_dir() {
        for path in source::directory_images(&args.file)? {
          apply(&magick, &convert, &path, false, cli.yes)?;
        }
        Ok(())
      } else {
        apply(
          &magick,
          &convert,
          &source::resolve(&args.file)?,
          false,
          cli.yes,
        )
      }
    }
  }
}

fn apply(
  magick: &Magick,
  effect: &dyn Effect,
  path: &Path,
  in_place: bool,
  assume_yes: bool,
) -> Result<(), EffectError> {
  let (width, height) = magick.identify(path)?;
  let source = SourceImage {
    path: path.to_path_buf(),
    width,
    height,
  };

  let output = if in_place {
    source.path.clone()
  } else {
    source::derived_output(&source.path, effect.suffix(), effect.output_ext())
  };
  if !confirm_overwrite(&output, assume_yes)? {
    info!("skipped {}", source.path.display());
    return Ok(());
  }

  let frames = effect.frames(&source);
  let invocation = match effect.delay_ms() {
    Some(delay_ms) => magick::animation(&source.path, &frames, delay_ms, &output),
    None => {
      let ops = frames.first().map(|f| f.ops.as_slice()).unwrap_or(&[]);
      magick::still(&source.path, ops, &output)
    }
  };
  magick.run(&invocation)?;

  let stripped = effect.stripped_frames();
  if stripped > 0 {
    magick.run(&magick::strip_frames(&output, stripped))?;
  }

  info!("wrote {}", output.display());
  Ok(())
}

fn confirm_overwrite(output: &Path, assume_yes: bool) -> Result<bool, EffectError> {
  if assume_yes || !output.exists() {
    return Ok(true);
  }

  print!("{} exists, overwrite? [y/N] ", output.display());
  io::stdout().flush().map_err(|e| EffectError::Io {
    context: "failed to flush stdout".to_owned(),
    source: e,
  })?;

  let mut answer = String::new();
  io::stdin().read_line(&mut answer).map_err(|e| EffectError::Io {
    context: "failed to read confirmation".to_owned(),
    source: e,
  })?;

  Ok(matches!(answer.trim(), "y" | "Y" | "yes" | "Yes"))
}
