//! Core types and trait definitions for the recall quiz runner.
//!
//! This crate is deliberately free of terminal and file-format dependencies.
//! All other crates depend on it: providers implement [`TaskProvider`], the
//! history backend implements [`HistoryStore`], and the session engine
//! consumes both.

pub mod error;
pub mod history;
pub mod provider;
pub mod question;
pub mod session;
pub mod statistics;
pub mod store;

pub use error::{Error, Result};
pub use history::HistoryDocument;
pub use provider::TaskProvider;
pub use question::{Answer, QuestionRecord, Task};
pub use session::{ErrorDisplay, SessionDraft, SessionRecord, Settings};
pub use statistics::Statistics;
pub use store::HistoryStore;
