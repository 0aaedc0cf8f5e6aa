//! Times-table practice.

use clap::Args;
use rand::{Rng, SeedableRng, rngs::StdRng};
use recall_core::{Answer, Task, TaskProvider};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::{Error, Result, registry::TaskFactory};

pub const IDENTITY: &str = "Multiplication Quiz";

/// Largest factor whose square still fits in an `i64`.
pub const MAX_FACTOR: i64 = 3_037_000_499;

#[derive(Debug, Clone, Args, Serialize)]
pub struct MultiplicationOptions {
  /// Largest factor that can appear in a question.
  #[arg(long, default_value_t = 12)]
  pub max_factor: i64,
}

/// Asks `a × b` for factors drawn uniformly from `1..=max_factor`.
pub struct Multiplication {
  options: MultiplicationOptions,
  rng:     StdRng,
}

impl Multiplication {
  pub fn new(options: MultiplicationOptions) -> Result<Self> {
    Self::with_rng(options, StdRng::from_os_rng())
  }

  pub fn with_rng(options: MultiplicationOptions, rng: StdRng) -> Result<Self> {
    if options.max_factor < 1 {
      return Err(Error::InvalidOption {
        option: "max-factor",
        reason: format!("must be at least 1, got {}", options.max_factor),
      });
    }
    if options.max_factor > MAX_FACTOR {
      return Err(Error::InvalidOption {
        option: "max-factor",
        reason: format!("must be at most {MAX_FACTOR}, got {}", options.max_factor),
      });
    }
    Ok(Self { options, rng })
  }
}

impl TaskProvider for Multiplication {
  fn identity(&self) -> &str { IDENTITY }

  fn description(&self) -> String {
    let n = self.options.max_factor;
    format!(
      "Multiplication Practice (Up to {n}x{n})\n\n\
       Solve the problems as quickly as you can!\n\
       Press Enter to begin when ready."
    )
  }

  fn generate(&mut self) -> Task {
    let a = self.rng.random_range(1..=self.options.max_factor);
    let b = self.rng.random_range(1..=self.options.max_factor);
    Task::new(format!("{a} × {b} = "), a * b)
  }

  fn validate(&self, submitted: &str, expected: &Answer) -> bool {
    let Answer::Integer(product) = expected else {
      return false;
    };
    submitted.trim().parse::<i64>().is_ok_and(|n| n == *product)
  }

  fn options(&self) -> Map<String, Value> {
    match serde_json::to_value(&self.options) {
      Ok(Value::Object(map)) => map,
      _ => Map::new(),
    }
  }
}

impl TaskFactory for Multiplication {
  const KEY: &'static str = "multiplication";
  const ABOUT: &'static str = "Multiplication tables";

  type Options = MultiplicationOptions;

  fn from_options(options: Self::Options) -> Result<Self> { Self::new(options) }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn provider(max_factor: i64) -> Multiplication {
    Multiplication::with_rng(MultiplicationOptions { max_factor }, StdRng::seed_from_u64(7))
      .unwrap()
  }

  #[test]
  fn generated_questions_stay_within_bounds() {
    let mut p = provider(4);
    for _ in 0..200 {
      let task = p.generate();
      let Answer::Integer(product) = task.expected else {
        panic!("expected an integer answer");
      };
      assert!((1..=16).contains(&product));
      assert!(task.question.ends_with(" = "));
    }
  }

  #[test]
  fn question_text_matches_answer() {
    let mut p = provider(1);
    let task = p.generate();
    assert_eq!(task.question, "1 × 1 = ");
    assert_eq!(task.expected, Answer::Integer(1));
  }

  #[test]
  fn validation_parses_integers() {
    let p = provider(12);
    let six = Answer::Integer(6);
    assert!(p.validate("6", &six));
    assert!(p.validate(" 6 ", &six));
    assert!(!p.validate("7", &six));
    assert!(!p.validate("six", &six));
    assert!(!p.validate("", &six));
    assert!(!p.validate("6", &Answer::Text("6".into())));
  }

  #[test]
  fn zero_max_factor_is_rejected() {
    let err = Multiplication::new(MultiplicationOptions { max_factor: 0 }).err().unwrap();
    assert!(matches!(err, Error::InvalidOption { option: "max-factor", .. }));
  }

  #[test]
  fn factors_whose_product_overflows_are_rejected() {
    for max_factor in [MAX_FACTOR + 1, i64::MAX] {
      let err = Multiplication::new(MultiplicationOptions { max_factor }).err().unwrap();
      assert!(matches!(err, Error::InvalidOption { option: "max-factor", .. }));
    }
  }

  #[test]
  fn largest_factor_generates_without_overflow() {
    let mut p = provider(MAX_FACTOR);
    for _ in 0..100 {
      let Answer::Integer(product) = p.generate().expected else {
        panic!("expected an integer answer");
      };
      assert!(product >= 1);
    }
  }

  #[test]
  fn options_are_recorded() {
    assert_eq!(provider(9).options()["max_factor"], 9);
  }
}
