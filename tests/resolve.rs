use std::fs::File;
use std::path::{Path, PathBuf};

use rusty_magick::source::{derived_output, directory_images, resolve};
use tempfile::tempdir;

fn touch(path: &Path) {
  File::create(path).expect("failed creating fixture");
}

#[test]
fn existing_file_resolves_to_itself() {
  let dir = tempdir().expect("tempdir");
  let photo = dir.path().join("photo.png");
  touch(&photo);

  assert_eq!(resolve(&photo).expect("resolves"), photo);
}

#[test]
fn extensionless_argument_matches_a_unique_sibling() {
  let dir = tempdir().expect("tempdir");
  let photo = dir.path().join("photo.png");
  touch(&photo);

  assert_eq!(resolve(&dir.path().join("photo")).expect("resolves"), photo);
}

#[test]
fn ambiguous_stem_match_lists_the_candidates() {
  let dir = tempdir().expect("tempdir");
  touch(&dir.path().join("photo.png"));
  touch(&dir.path().join("photo.jpg"));

  let err = resolve(&dir.path().join("photo")).unwrap_err();
  let message = err.to_string();
  assert!(message.contains("ambiguous"));
  assert!(message.contains("photo.png"));
  assert!(message.contains("photo.jpg"));
}

#[test]
fn missing_stem_match_is_rejected() {
  let dir = tempdir().expect("tempdir");
  touch(&dir.path().join("other.png"));

  let err = resolve(&dir.path().join("photo")).unwrap_err();
  assert!(err.to_string().contains("no file matching"));
}

#[test]
fn missing_file_with_extension_is_rejected() {
  let dir = tempdir().expect("tempdir");

  let err = resolve(&dir.path().join("photo.png")).unwrap_err();
  assert!(err.to_string().contains("does not exist"));
}

#[test]
fn directory_argument_is_rejected() {
  let dir = tempdir().expect("tempdir");

  let err = resolve(dir.path()).unwrap_err();
  assert!(err.to_string().contains("is a directory"));
}

#[test]
fn directory_images_skips_non_image_files() {
  let dir = tempdir().expect("tempdir");
  touch(&dir.path().join("a.png"));
  touch(&dir.path().join("b.txt"));
  touch(&dir.path().join("c.JPG"));

  let images = directory_images(dir.path()).expect("lists images");
  assert_eq!(
    images,
    vec![dir.path().join("a.png"), dir.path().join("c.JPG")]
  );
}

#[test]
fn empty_directory_has_no_images() {
  let dir = tempdir().expect("tempdir");
  touch(&dir.path().join("notes.txt"));

  let err = directory_images(dir.path()).unwrap_err();
  assert!(err.to_string().contains("no image files"));
}

#[test]
fn rotated_output_keeps_the_source_extension() {
  let output = derived_output(Path::new("photo.png"), "_rotated", None);

  assert_eq!(output, PathBuf::from("photo_rotated.png"));
  assert_ne!(output, PathBuf::from("photo.png"));
}

#[test]
fn animated_output_switches_to_gif() {
  let output = derived_output(Path::new("shots/photo.jpg"), "_exploding", Some("gif"));

  assert_eq!(output, PathBuf::from("shots/photo_exploding.gif"));
}

#[test]
fn conversion_output_replaces_the_extension() {
  let output = derived_output(Path::new("photo.png"), "", Some("webp"));

  assert_eq!(output, PathBuf::from("photo.webp"));
}

#[test]
fn extensionless_source_gets_no_trailing_dot() {
  let output = derived_output(Path::new("photo"), "_flipped", None);

  assert_eq!(output, PathBuf::from("photo_flipped"));
}
