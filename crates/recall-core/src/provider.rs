//! The contract every question generator fulfils.
//!
//! The session engine never looks inside an [`Answer`]; generating questions
//! and judging submissions both belong to the provider.

use serde_json::{Map, Value};

use crate::question::{Answer, Task};

/// A source of questions for one kind of quiz.
pub trait TaskProvider {
  /// Stable name of the quiz. Used as the join key for history documents,
  /// so changing it orphans existing history.
  fn identity(&self) -> &str;

  /// Text shown before the quiz starts.
  fn description(&self) -> String;

  /// Produce the next question.
  fn generate(&mut self) -> Task;

  /// Judge `submitted` against `expected`. Malformed submissions (e.g. a
  /// non-numeric reply to a numeric question) are simply incorrect.
  fn validate(&self, submitted: &str, expected: &Answer) -> bool;

  /// Provider-specific options, recorded in each session's settings.
  fn options(&self) -> Map<String, Value> { Map::new() }
}
