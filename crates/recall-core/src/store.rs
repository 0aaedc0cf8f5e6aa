//! The `HistoryStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `recall-store-json`).
//! The session engine depends on this abstraction, not on any concrete
//! backend or file format.

use std::path::Path;

use crate::{history::HistoryDocument, session::SessionRecord};

/// Abstraction over the durable home of one quiz's history.
///
/// A store is bound to a single location. Writes never drop or reorder
/// sessions: after a successful [`append`](HistoryStore::append) the
/// document holds every previous session followed by the new one.
///
/// Concurrent writers from other processes are not guarded against.
pub trait HistoryStore {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Where the history lives, for display.
  fn location(&self) -> &Path;

  /// Read the document for `quiz_name`. Returns `None` if nothing has been
  /// stored yet; fails if the stored document belongs to a different quiz.
  fn load(&self, quiz_name: &str) -> Result<Option<HistoryDocument>, Self::Error>;

  /// Merge `session` into the stored document for `quiz_name`, creating it
  /// if needed, and return the document as written.
  ///
  /// Fails without writing anything if the existing document cannot be read
  /// or belongs to a different quiz.
  fn append(
    &self,
    quiz_name: &str,
    session: SessionRecord,
  ) -> Result<HistoryDocument, Self::Error>;
}
