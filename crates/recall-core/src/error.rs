//! Error types for `recall-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error(
    "history file belongs to quiz {found:?}, refusing to mix it with {expected:?}"
  )]
  QuizMismatch { expected: String, found: String },

  #[error("cannot finalize a session with no recorded questions")]
  EmptySession,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
