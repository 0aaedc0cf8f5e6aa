//! Error type for `recall-store-json`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] recall_core::Error),

  #[error("history file {0:?} must have a '.json' or '.json.gz' extension")]
  UnsupportedExtension(PathBuf),

  #[error(
    "found both {plain:?} and {compressed:?}; pass an explicit --file to pick one"
  )]
  AmbiguousHistory {
    plain:      PathBuf,
    compressed: PathBuf,
  },

  #[error("io error: {0}")]
  Io(#[from] std::io::Error),

  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),

  #[error("could not move history into place: {0}")]
  Persist(#[from] tempfile::PersistError),
}

impl Error {
  /// Whether the stored document belongs to another quiz.
  pub fn is_quiz_mismatch(&self) -> bool {
    matches!(self, Self::Core(recall_core::Error::QuizMismatch { .. }))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
