//! JSON file backend for recall history.
//!
//! One file per quiz, either plain (`.json`) or gzip-compressed
//! (`.json.gz`). The extension alone selects the format. Every append
//! rewrites the whole document through a temporary file that is renamed
//! into place.

mod format;
mod locate;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use format::HistoryFormat;
pub use locate::{DEFAULT_RESULTS_DIR, resolve_history_path, safe_filename};
pub use store::JsonHistoryStore;
