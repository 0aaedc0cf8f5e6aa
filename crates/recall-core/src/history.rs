//! The durable per-quiz document holding every past session.

use serde::{Deserialize, Serialize};

use crate::{Error, Result, session::SessionRecord};

/// All sessions ever recorded for one quiz identity, oldest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryDocument {
  pub quiz_name: String,
  pub sessions:  Vec<SessionRecord>,
}

impl HistoryDocument {
  /// An empty document for `quiz_name`.
  pub fn new(quiz_name: impl Into<String>) -> Self {
    Self {
      quiz_name: quiz_name.into(),
      sessions:  Vec::new(),
    }
  }

  /// Fail with [`Error::QuizMismatch`] unless this document belongs to
  /// `quiz_name`.
  pub fn ensure_quiz(&self, quiz_name: &str) -> Result<()> {
    if self.quiz_name == quiz_name {
      Ok(())
    } else {
      Err(Error::QuizMismatch {
        expected: quiz_name.to_owned(),
        found:    self.quiz_name.clone(),
      })
    }
  }

  /// Append `session` after all existing sessions.
  pub fn push(&mut self, session: SessionRecord) { self.sessions.push(session); }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn ensure_quiz_accepts_own_identity() {
    let doc = HistoryDocument::new("Multiplication Quiz");
    assert!(doc.ensure_quiz("Multiplication Quiz").is_ok());
  }

  #[test]
  fn ensure_quiz_rejects_foreign_identity() {
    let doc = HistoryDocument::new("French Vocabulary Practice");
    match doc.ensure_quiz("Multiplication Quiz") {
      Err(Error::QuizMismatch { expected, found }) => {
        assert_eq!(expected, "Multiplication Quiz");
        assert_eq!(found, "French Vocabulary Practice");
      }
      other => panic!("expected QuizMismatch, got {other:?}"),
    }
  }
}
