//! Summary metrics over the questions of a finished session.

use serde::{Deserialize, Serialize};

use crate::question::QuestionRecord;

/// Derived summary of a session. A pure function of its question list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Statistics {
  pub average_time:    f64,
  pub median_time:     f64,
  /// `None` when no question was answered correctly.
  pub fastest_correct: Option<f64>,
  pub slowest_answer:  f64,
  /// The counts below were added in a later format revision and are `None`
  /// in sessions recorded before it.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub total_questions: Option<usize>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub correct_answers: Option<usize>,
  /// Percentage of correct answers, rounded to two decimals.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub accuracy:        Option<f64>,
}

impl Statistics {
  /// Compute the statistics for `questions`.
  ///
  /// An empty slice yields all-zero timings, `fastest_correct: None` and an
  /// accuracy of zero.
  pub fn compute(questions: &[QuestionRecord]) -> Self {
    let mut times: Vec<f64> = questions.iter().map(|q| q.time_taken).collect();
    times.sort_by(f64::total_cmp);

    let total_questions = questions.len();
    let correct_answers = questions.iter().filter(|q| q.is_correct).count();

    let fastest_correct = questions
      .iter()
      .filter(|q| q.is_correct)
      .map(|q| q.time_taken)
      .min_by(f64::total_cmp)
      .map(round2);

    let accuracy = if total_questions == 0 {
      0.0
    } else {
      round2(correct_answers as f64 / total_questions as f64 * 100.0)
    };

    Self {
      average_time: mean(&times).map(round2).unwrap_or(0.0),
      median_time: median(&times).map(round2).unwrap_or(0.0),
      fastest_correct,
      slowest_answer: times.last().copied().map(round2).unwrap_or(0.0),
      total_questions: Some(total_questions),
      correct_answers: Some(correct_answers),
      accuracy: Some(accuracy),
    }
  }
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 { (value * 100.0).round() / 100.0 }

fn mean(values: &[f64]) -> Option<f64> {
  if values.is_empty() {
    return None;
  }
  Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Median of an already-sorted slice.
fn median(sorted: &[f64]) -> Option<f64> {
  let n = sorted.len();
  match n {
    0 => None,
    _ if n % 2 == 1 => Some(sorted[n / 2]),
    _ => Some((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::question::Answer;

  fn record(time_taken: f64, is_correct: bool) -> QuestionRecord {
    QuestionRecord {
      question: "q".into(),
      correct_answer: Answer::Integer(1),
      user_answer: Some("1".into()),
      time_taken,
      is_correct,
    }
  }

  #[test]
  fn mixed_session() {
    let questions = vec![
      record(1.5, true),
      record(4.0, false),
      record(2.25, true),
      record(3.0, true),
    ];
    let stats = Statistics::compute(&questions);

    assert_eq!(stats.total_questions, Some(4));
    assert_eq!(stats.correct_answers, Some(3));
    assert_eq!(stats.accuracy, Some(75.0));
    assert_eq!(stats.average_time, 2.69);
    assert_eq!(stats.median_time, 2.63);
    assert_eq!(stats.fastest_correct, Some(1.5));
    assert_eq!(stats.slowest_answer, 4.0);
  }

  #[test]
  fn odd_length_median_is_middle_value() {
    let questions = vec![record(9.0, false), record(1.0, false), record(2.0, true)];
    assert_eq!(Statistics::compute(&questions).median_time, 2.0);
  }

  #[test]
  fn fastest_correct_is_null_without_correct_answers() {
    let questions = vec![record(0.4, false), record(0.1, false)];
    let stats = Statistics::compute(&questions);

    assert_eq!(stats.fastest_correct, None);
    assert_eq!(stats.accuracy, Some(0.0));
    assert_eq!(stats.slowest_answer, 0.4);

    let json = serde_json::to_value(&stats).unwrap();
    assert!(json["fastest_correct"].is_null());
  }

  #[test]
  fn fastest_correct_ignores_faster_wrong_answers() {
    let questions = vec![record(0.2, false), record(3.0, true)];
    assert_eq!(Statistics::compute(&questions).fastest_correct, Some(3.0));
  }

  #[test]
  fn accuracy_rounds_to_two_decimals() {
    let questions = vec![record(1.0, true), record(1.0, false), record(1.0, false)];
    let stats = Statistics::compute(&questions);

    assert_eq!(stats.accuracy, Some(33.33));
    assert!(stats.correct_answers <= stats.total_questions);
  }

  #[test]
  fn empty_input_is_all_zero() {
    let stats = Statistics::compute(&[]);
    assert_eq!(stats.average_time, 0.0);
    assert_eq!(stats.fastest_correct, None);
    assert_eq!(stats.total_questions, Some(0));
    assert_eq!(stats.accuracy, Some(0.0));
  }

  #[test]
  fn older_documents_without_counts_still_parse() {
    let stats: Statistics = serde_json::from_str(
      r#"{"average_time": 1.0, "median_time": 1.0,
          "fastest_correct": null, "slowest_answer": 2.0}"#,
    )
    .unwrap();
    assert_eq!(stats.total_questions, None);
    assert_eq!(stats.accuracy, None);
    assert_eq!(stats.fastest_correct, None);

    // Absent counts stay absent when written back.
    let json = serde_json::to_value(&stats).unwrap();
    assert!(json.get("total_questions").is_none());
    assert!(json.get("accuracy").is_none());
    assert!(json["fastest_correct"].is_null());
  }
}
