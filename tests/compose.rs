use std::ffi::OsString;
use std::path::Path;

use rusty_magick::magick::command::{animation, still, strip_frames, FrameOp, FrameSpec};

fn strings(args: &[OsString]) -> Vec<String> {
  args
    .iter()
    .map(|a| a.to_string_lossy().into_owned())
    .collect()
}

fn contains_run(args: &[String], run: &[&str]) -> bool {
  args.windows(run.len()).any(|w| w == run)
}

#[test]
fn animation_emits_one_clone_group_per_frame() {
  let frames = vec![
    FrameSpec::new(vec![FrameOp::Implode(-1.0)]),
    FrameSpec::new(vec![FrameOp::Implode(-2.0)]),
    FrameSpec::new(vec![FrameOp::Implode(-4.0)]),
  ];
  let invocation = animation(Path::new("in.png"), &frames, 50, Path::new("out.gif"));
  let args = strings(&invocation.args);

  assert_eq!(args[0], "in.png");
  assert_eq!(args.last().map(String::as_str), Some("out.gif"));
  assert_eq!(args.iter().filter(|a| *a == "(").count(), 3);
  assert_eq!(args.iter().filter(|a| *a == ")").count(), 3);
  assert_eq!(args.iter().filter(|a| *a == "-clone").count(), 3);
}

#[test]
fn animation_sets_delay_ticks_and_infinite_loop() {
  let frames = vec![FrameSpec::new(vec![FrameOp::Implode(1.0)])];
  let invocation = animation(Path::new("in.png"), &frames, 50, Path::new("out.gif"));
  let args = strings(&invocation.args);

  // 50ms is five 10ms GIF ticks.
  assert!(contains_run(&args, &["-set", "delay", "5"]));
  assert!(contains_run(&args, &["-loop", "0"]));
}

#[test]
fn fill_descriptor_expands_to_discrete_tokens() {
  let frames = vec![FrameSpec::new(vec![FrameOp::Fill {
    target: "black".to_owned(),
    fill: "#FF6B6B".to_owned(),
    fuzz: 40,
  }])];
  let invocation = animation(Path::new("in.png"), &frames, 50, Path::new("out.gif"));
  let args = strings(&invocation.args);

  assert!(contains_run(
    &args,
    &["-fuzz", "40%", "-fill", "#FF6B6B", "-opaque", "black"]
  ));
}

#[test]
fn roll_offsets_are_always_signed() {
  let frames = vec![FrameSpec::new(vec![FrameOp::Roll { dx: -3, dy: 12 }])];
  let invocation = animation(Path::new("in.png"), &frames, 50, Path::new("out.gif"));
  let args = strings(&invocation.args);

  assert!(contains_run(&args, &["-roll", "-3+12"]));
}

#[test]
fn resize_percentages_keep_two_decimals() {
  let frames = vec![FrameSpec::new(vec![FrameOp::Resize(110.25)])];
  let invocation = animation(Path::new("in.png"), &frames, 50, Path::new("out.gif"));
  let args = strings(&invocation.args);

  assert!(contains_run(&args, &["-resize", "110.25%"]));
}

#[test]
fn distort_carries_background_and_virtual_pixel() {
  let frames = vec![FrameSpec::new(vec![FrameOp::Distort {
    degrees: -18.0,
    background: "none".to_owned(),
  }])];
  let invocation = animation(Path::new("in.png"), &frames, 50, Path::new("out.gif"));
  let args = strings(&invocation.args);

  assert!(contains_run(&args, &["-background", "none"]));
  assert!(contains_run(&args, &["-virtual-pixel", "background"]));
  assert!(contains_run(&args, &["-distort", "SRT", "-18"]));
}

#[test]
fn still_pipeline_is_source_ops_output() {
  let invocation = still(
    Path::new("photo.png"),
    &[FrameOp::Rotate(90.0)],
    Path::new("photo_rotated.png"),
  );
  let args = strings(&invocation.args);

  assert_eq!(args, vec!["photo.png", "-rotate", "90", "photo_rotated.png"]);
}

#[test]
fn still_pipeline_with_no_ops_is_a_bare_conversion() {
  let invocation = still(Path::new("photo.png"), &[], Path::new("photo.webp"));
  let args = strings(&invocation.args);

  assert_eq!(args, vec!["photo.png", "photo.webp"]);
}

#[test]
fn flip_and_flop_are_single_tokens() {
  let invocation = still(
    Path::new("a.png"),
    &[FrameOp::Flip, FrameOp::Flop],
    Path::new("b.png"),
  );
  let args = strings(&invocation.args);

  assert_eq!(args, vec!["a.png", "-flip", "-flop", "b.png"]);
}

#[test]
fn strip_frames_rewrites_the_gif_in_place() {
  let invocation = strip_frames(Path::new("out.gif"), 10);
  let args = strings(&invocation.args);

  assert_eq!(args, vec!["out.gif", "-delete", "0-9", "out.gif"]);
}
