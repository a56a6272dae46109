use thiserror::Error;

#[derive(Error, Debug)]
pub enum EffectError {
  #[error("{0}")]
  Usage(String),
  #[error("{0}")]
  Source(String),
  #[error("{context}: {source}")]
  Io {
    context: String,
    #[source]
    source: std::io::Error,
  },
  #[error("`{tool}` was not found on PATH; install ImageMagick 7 (e.g. `apt install imagemagick` or `brew install imagemagick`)")]
  MissingTool { tool: String },
  #[error("failed to run `{tool}`: {source}")]
  Spawn {
    tool: String,
    #[source]
    source: std::io::Error,
  },
  #[error("`{tool}` exited with status {status}: {stderr}")]
  Delegated {
    tool: String,
    status: i32,
    stderr: String,
  },
}

impl EffectError {
  /// Delegated failures propagate the child's exit status, everything else is
  /// a plain failure.
  pub fn exit_code(&self) -> i32 {
    match self {
      EffectError::Delegated { status, .. } => *status,
      _ => 1,
    }
  }
}
