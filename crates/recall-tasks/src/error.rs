//! Error types for the built-in task providers.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid --{option}: {reason}")]
  InvalidOption {
    option: &'static str,
    reason: String,
  },

  #[error("unknown quiz task {0:?}")]
  UnknownTask(String),

  #[error(transparent)]
  Args(#[from] clap::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
