//! Questions, expected answers, and the per-question record kept in a session.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The answer a provider expects for a generated question.
///
/// Serialised as the bare value, so history files read naturally:
/// `6`, `"oui"`, or `["la ville", "la municipalité"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
  /// A numeric result, or a 1-based index into the options of a
  /// multiple-choice question.
  Integer(i64),
  Text(String),
  /// Any one of these equivalent strings is accepted.
  Alternatives(Vec<String>),
}

impl fmt::Display for Answer {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Integer(n) => write!(f, "{n}"),
      Self::Text(s) => f.write_str(s),
      Self::Alternatives(list) => f.write_str(&list.join(", ")),
    }
  }
}

impl From<i64> for Answer {
  fn from(value: i64) -> Self { Self::Integer(value) }
}

/// A generated question together with the answer it expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
  pub question: String,
  pub expected: Answer,
}

impl Task {
  pub fn new(question: impl Into<String>, expected: impl Into<Answer>) -> Self {
    Self {
      question: question.into(),
      expected: expected.into(),
    }
  }
}

/// One asked question as stored in a session. Never modified after it has
/// been appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionRecord {
  pub question:       String,
  pub correct_answer: Answer,
  /// `None` when the question timed out before a line was entered.
  pub user_answer:    Option<String>,
  /// Seconds, rounded to two decimals.
  pub time_taken:     f64,
  pub is_correct:     bool,
}
