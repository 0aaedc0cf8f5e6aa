//! Picking previously missed questions to ask again.

use std::collections::HashSet;

use rand::{Rng, seq::SliceRandom};
use recall_core::{Answer, HistoryDocument, HistoryStore, Task};

/// A question missed in an earlier session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryCandidate {
  pub question:       String,
  pub correct_answer: Answer,
}

impl From<RetryCandidate> for Task {
  fn from(candidate: RetryCandidate) -> Self {
    Task {
      question: candidate.question,
      expected: candidate.correct_answer,
    }
  }
}

/// Load `quiz_name`'s history from `store` and pick at most `limit`
/// recently missed questions.
///
/// A missing, unreadable, or foreign history file yields no candidates; the
/// failure is logged and the session proceeds normally.
pub fn select_retries<S: HistoryStore>(
  store: &S,
  quiz_name: &str,
  limit: usize,
) -> Vec<RetryCandidate> {
  if limit == 0 {
    return Vec::new();
  }
  match store.load(quiz_name) {
    Ok(Some(doc)) => recent_mistakes(&doc, limit, &mut rand::rng()),
    Ok(None) => Vec::new(),
    Err(e) => {
      tracing::warn!(
        path = %store.location().display(),
        error = %e,
        "could not load history, skipping retries"
      );
      Vec::new()
    }
  }
}

/// Pick at most `limit` missed questions from the `3 × limit` most recently
/// asked ones, in random order.
///
/// Only a question's most recent outcome counts: one that was missed and
/// later answered correctly is not picked, and no question is picked twice.
pub fn recent_mistakes<R: Rng + ?Sized>(
  doc: &HistoryDocument,
  limit: usize,
  rng: &mut R,
) -> Vec<RetryCandidate> {
  let window = limit.saturating_mul(3);
  let mut seen = HashSet::new();

  // Newest first; the first sighting of a question is its latest outcome.
  let mut mistakes: Vec<RetryCandidate> = doc
    .sessions
    .iter()
    .rev()
    .flat_map(|session| session.questions.iter().rev())
    .take(window)
    .filter(|q| seen.insert(q.question.as_str()))
    .filter(|q| !q.is_correct)
    .map(|q| RetryCandidate {
      question:       q.question.clone(),
      correct_answer: q.correct_answer.clone(),
    })
    .collect();

  // Back to the order the questions were asked in.
  mistakes.reverse();
  mistakes.shuffle(rng);
  mistakes.truncate(limit);
  mistakes
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;
  use rand::{SeedableRng, rngs::StdRng};
  use recall_core::{QuestionRecord, SessionDraft, Settings};

  use super::*;

  fn doc(sessions: &[&[(&str, bool)]]) -> HistoryDocument {
    let start = NaiveDate::from_ymd_opt(2024, 5, 1)
      .unwrap()
      .and_hms_opt(9, 0, 0)
      .unwrap();
    let mut doc = HistoryDocument::new("Multiplication Quiz");
    for questions in sessions {
      let mut draft = SessionDraft::new(start, Settings::default());
      for (question, is_correct) in *questions {
        draft.push(QuestionRecord {
          question:       (*question).into(),
          correct_answer: Answer::Integer(0),
          user_answer:    None,
          time_taken:     1.0,
          is_correct:     *is_correct,
        });
      }
      doc.push(draft.finalize(start).unwrap());
    }
    doc
  }

  fn questions(candidates: &[RetryCandidate]) -> Vec<&str> {
    let mut names: Vec<&str> = candidates.iter().map(|c| c.question.as_str()).collect();
    names.sort_unstable();
    names
  }

  #[test]
  fn picks_only_missed_questions() {
    let doc = doc(&[&[("a", true), ("b", false), ("c", false), ("d", true)]]);
    let picked = recent_mistakes(&doc, 10, &mut StdRng::seed_from_u64(1));
    assert_eq!(questions(&picked), ["b", "c"]);
  }

  #[test]
  fn never_returns_more_than_limit() {
    let missed: Vec<(String, bool)> = (0..20).map(|i| (format!("q{i}"), false)).collect();
    let refs: Vec<(&str, bool)> = missed.iter().map(|(q, c)| (q.as_str(), *c)).collect();
    let doc = doc(&[refs.as_slice()]);

    for seed in 0..10 {
      let picked = recent_mistakes(&doc, 3, &mut StdRng::seed_from_u64(seed));
      assert_eq!(picked.len(), 3);
    }
  }

  #[test]
  fn only_the_recent_window_is_considered() {
    // limit 1 → window of the 3 most recent questions, all correct.
    let doc = doc(&[
      &[("old miss", false)],
      &[("x", true), ("y", true), ("z", true)],
    ]);
    assert!(recent_mistakes(&doc, 1, &mut StdRng::seed_from_u64(1)).is_empty());
  }

  #[test]
  fn later_correct_answer_clears_an_old_mistake() {
    let doc = doc(&[&[("2 × 3 = ", false)], &[("2 × 3 = ", true), ("4 × 4 = ", false)]]);
    let picked = recent_mistakes(&doc, 5, &mut StdRng::seed_from_u64(3));
    assert_eq!(questions(&picked), ["4 × 4 = "]);
  }

  #[test]
  fn repeated_mistakes_are_not_duplicated() {
    let doc = doc(&[&[("a", false)], &[("a", false), ("b", false)]]);
    let picked = recent_mistakes(&doc, 5, &mut StdRng::seed_from_u64(9));
    assert_eq!(questions(&picked), ["a", "b"]);
  }

  #[test]
  fn two_sessions_of_mistakes_yield_up_to_three_distinct() {
    let doc = doc(&[
      &[("1", false), ("2", true), ("3", false)],
      &[("4", false), ("5", false), ("6", true), ("7", false)],
    ]);
    let all_missed = ["1", "3", "4", "5", "7"];

    for seed in 0..20 {
      let picked = recent_mistakes(&doc, 3, &mut StdRng::seed_from_u64(seed));
      assert!(picked.len() <= 3);
      let names = questions(&picked);
      let mut unique = names.clone();
      unique.dedup();
      assert_eq!(unique, names);
      assert!(names.iter().all(|n| all_missed.contains(n)));
    }
  }

  #[test]
  fn a_miss_five_questions_back_is_inside_a_window_of_ten() {
    let doc = doc(&[
      &[("7 × 8 = ", false)],
      &[("a", true), ("b", true), ("c", true), ("d", true)],
    ]);
    let picked = recent_mistakes(&doc, 10, &mut StdRng::seed_from_u64(4));
    assert_eq!(questions(&picked), ["7 × 8 = "]);
  }

  #[test]
  fn zero_limit_selects_nothing() {
    let doc = doc(&[&[("a", false)]]);
    assert!(recent_mistakes(&doc, 0, &mut StdRng::seed_from_u64(0)).is_empty());
  }
}
