//! Session records and the settings snapshot stored with each of them.

use std::{path::PathBuf, time::Duration};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum::{Display, EnumString, VariantNames};

use crate::{
  Error, Result,
  question::QuestionRecord,
  statistics::{Statistics, round2},
};

// ─── Settings ────────────────────────────────────────────────────────────────

/// How much feedback is shown after each answer.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
  Serialize,
  Deserialize,
  Display,
  EnumString,
  VariantNames,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ErrorDisplay {
  /// No feedback at all.
  Hide,
  /// Correct / incorrect only.
  Show,
  /// Correct / incorrect, plus the expected answer after a mistake.
  #[default]
  Hint,
}

/// Snapshot of the configuration a session ran with.
///
/// Field names match the keys history files have always used, so older
/// documents load without migration. Options contributed by the task
/// provider are flattened into the same JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
  /// Registry key of the task provider.
  pub task:          String,
  pub num_questions: usize,
  /// Per-question limit in seconds; `None` waits forever.
  pub time_limit:    Option<f64>,
  pub clean_screen:  bool,
  pub file:          Option<PathBuf>,
  pub no_summary:    bool,
  pub errors:        ErrorDisplay,
  /// Number of leading questions that are retry-protected.
  pub mistakes:      usize,
  #[serde(flatten)]
  pub task_options:  Map<String, Value>,
}

impl Default for Settings {
  fn default() -> Self {
    Self {
      task:          String::new(),
      num_questions: 10,
      time_limit:    None,
      clean_screen:  false,
      file:          None,
      no_summary:    false,
      errors:        ErrorDisplay::default(),
      mistakes:      0,
      task_options:  Map::new(),
    }
  }
}

impl Settings {
  /// The per-question limit as a [`Duration`]. Non-positive or non-finite
  /// values mean "no limit".
  pub fn question_timeout(&self) -> Option<Duration> {
    self
      .time_limit
      .filter(|secs| *secs > 0.0)
      .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
  }

  /// How many leading questions are retry-protected: an empty answer there
  /// is wrong without asking the provider. Capped at `num_questions`.
  pub fn protected_count(&self) -> usize { self.mistakes.min(self.num_questions) }
}

// ─── Session ─────────────────────────────────────────────────────────────────

/// A completed, finalized session. Immutable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
  pub start_time: NaiveDateTime,
  pub end_time:   NaiveDateTime,
  /// Seconds between `start_time` and `end_time`, rounded to two decimals.
  pub duration:   f64,
  pub questions:  Vec<QuestionRecord>,
  pub statistics: Statistics,
  pub settings:   Settings,
}

/// An in-progress session. Only grows by [`SessionDraft::push`] until it is
/// consumed by [`SessionDraft::finalize`].
#[derive(Debug, Clone)]
pub struct SessionDraft {
  start_time: NaiveDateTime,
  settings:   Settings,
  questions:  Vec<QuestionRecord>,
}

impl SessionDraft {
  pub fn new(start_time: NaiveDateTime, settings: Settings) -> Self {
    Self {
      start_time,
      settings,
      questions: Vec::new(),
    }
  }

  pub fn push(&mut self, record: QuestionRecord) { self.questions.push(record); }

  pub fn questions(&self) -> &[QuestionRecord] { &self.questions }

  pub fn is_empty(&self) -> bool { self.questions.is_empty() }

  pub fn settings(&self) -> &Settings { &self.settings }

  /// Stamp the end time and compute the derived fields.
  pub fn finalize(self, end_time: NaiveDateTime) -> Result<SessionRecord> {
    if self.questions.is_empty() {
      return Err(Error::EmptySession);
    }
    let elapsed = end_time - self.start_time;
    let duration = round2(elapsed.num_milliseconds() as f64 / 1000.0);
    let statistics = Statistics::compute(&self.questions);

    Ok(SessionRecord {
      start_time: self.start_time,
      end_time,
      duration,
      questions: self.questions,
      statistics,
      settings: self.settings,
    })
  }
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;
  use serde_json::json;

  use super::*;
  use crate::question::Answer;

  fn at(h: u32, m: u32, s: u32, ms: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 1)
      .unwrap()
      .and_hms_milli_opt(h, m, s, ms)
      .unwrap()
  }

  fn answered(is_correct: bool) -> QuestionRecord {
    QuestionRecord {
      question: "2 × 3 = ".into(),
      correct_answer: Answer::Integer(6),
      user_answer: Some("6".into()),
      time_taken: 1.0,
      is_correct,
    }
  }

  #[test]
  fn finalize_computes_duration_and_statistics() {
    let mut draft = SessionDraft::new(at(9, 0, 0, 0), Settings::default());
    draft.push(answered(true));
    draft.push(answered(false));

    let record = draft.finalize(at(9, 1, 2, 340)).unwrap();
    assert_eq!(record.duration, 62.34);
    assert_eq!(record.statistics.total_questions, Some(2));
    assert_eq!(record.statistics.accuracy, Some(50.0));
  }

  #[test]
  fn finalize_rejects_empty_draft() {
    let draft = SessionDraft::new(at(9, 0, 0, 0), Settings::default());
    assert!(matches!(
      draft.finalize(at(9, 0, 1, 0)),
      Err(Error::EmptySession)
    ));
  }

  #[test]
  fn settings_flatten_task_options() {
    let mut settings = Settings {
      task: "multiplication".into(),
      ..Settings::default()
    };
    settings.task_options.insert("max_factor".into(), json!(9));

    let value = serde_json::to_value(&settings).unwrap();
    assert_eq!(value["max_factor"], json!(9));
    assert_eq!(value["errors"], json!("hint"));

    let back: Settings = serde_json::from_value(value).unwrap();
    assert_eq!(back, settings);
  }

  #[test]
  fn settings_accept_sparse_documents() {
    let settings: Settings =
      serde_json::from_value(json!({ "num_questions": 3, "time_limit": 2.5 })).unwrap();
    assert_eq!(settings.num_questions, 3);
    assert_eq!(settings.question_timeout(), Some(Duration::from_millis(2500)));
    assert_eq!(settings.errors, ErrorDisplay::Hint);
  }

  #[test]
  fn protected_count_is_capped_by_question_count() {
    let settings = Settings {
      num_questions: 4,
      mistakes: 10,
      ..Settings::default()
    };
    assert_eq!(settings.protected_count(), 4);
  }

  #[test]
  fn zero_time_limit_means_unbounded() {
    let settings = Settings {
      time_limit: Some(0.0),
      ..Settings::default()
    };
    assert_eq!(settings.question_timeout(), None);
  }

  #[test]
  fn error_display_parses_lowercase() {
    assert_eq!("show".parse::<ErrorDisplay>().unwrap(), ErrorDisplay::Show);
    assert_eq!(ErrorDisplay::Hide.to_string(), "hide");
    assert!("loud".parse::<ErrorDisplay>().is_err());
  }
}
