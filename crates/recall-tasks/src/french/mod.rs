//! French vocabulary practice: direct translation and multiple choice.

mod vocab;

use clap::Args;
use rand::{
  SeedableRng,
  rngs::StdRng,
  seq::{IndexedRandom, SliceRandom},
};
use recall_core::{Answer, Task, TaskProvider};
use serde::Serialize;
use serde_json::{Map, Value};
use strum::Display;

use crate::{Error, Result, normalize::normalize, registry::TaskFactory};

pub const IDENTITY: &str = "French Vocabulary Practice";

// ─── Options ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Args, Serialize)]
pub struct FrenchOptions {
  /// English to French translation.
  #[arg(long)]
  pub e2f: bool,

  /// French to English translation.
  #[arg(long)]
  pub f2e: bool,

  /// Enable direct translation tasks.
  #[arg(long)]
  pub direct: bool,

  /// Enable matching (multiple-choice) tasks.
  #[arg(long = "match")]
  #[serde(rename = "match")]
  pub match_tasks: bool,

  /// Treat accented and non-accented letters as identical.
  #[arg(long)]
  pub ignore_accents: bool,

  /// How many options a matching task lists.
  #[arg(long, default_value_t = 3)]
  pub match_options: usize,
}

// ─── Vocabulary ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Language {
  English,
  French,
}

impl Language {
  fn target(self) -> &'static str {
    match self {
      Self::English => "French",
      Self::French => "English",
    }
  }

  fn table(self) -> &'static [(&'static str, &'static [&'static str])] {
    match self {
      Self::English => vocab::ENGLISH_TO_FRENCH,
      Self::French => vocab::FRENCH_TO_ENGLISH,
    }
  }
}

#[derive(Debug, Clone, Copy)]
struct Word {
  text:         &'static str,
  translations: &'static [&'static str],
  source:       Language,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
enum Mode {
  Direct,
  Match,
}

// ─── Provider ────────────────────────────────────────────────────────────────

pub struct FrenchVocabulary {
  options: FrenchOptions,
  sources: Vec<Language>,
  modes:   Vec<Mode>,
  words:   Vec<Word>,
  rng:     StdRng,
}

impl FrenchVocabulary {
  pub fn new(options: FrenchOptions) -> Result<Self> {
    Self::with_rng(options, StdRng::from_os_rng())
  }

  pub fn with_rng(options: FrenchOptions, rng: StdRng) -> Result<Self> {
    if options.match_options < 2 {
      return Err(Error::InvalidOption {
        option: "match-options",
        reason: format!("must be at least 2, got {}", options.match_options),
      });
    }

    // Selecting both directions, or neither, practises both.
    let sources = match (options.e2f, options.f2e) {
      (true, false) => vec![Language::English],
      (false, true) => vec![Language::French],
      _ => vec![Language::English, Language::French],
    };

    let mut modes = Vec::new();
    if options.direct {
      modes.push(Mode::Direct);
    }
    if options.match_tasks {
      modes.push(Mode::Match);
    }
    if modes.is_empty() {
      modes = vec![Mode::Direct, Mode::Match];
    }

    let words = sources
      .iter()
      .flat_map(|&source| {
        source.table().iter().map(move |&(text, translations)| Word {
          text,
          translations,
          source,
        })
      })
      .collect();

    Ok(Self {
      options,
      sources,
      modes,
      words,
      rng,
    })
  }

  fn direction_label(&self) -> &'static str {
    match self.sources.as_slice() {
      [Language::English] => "English to French",
      [Language::French] => "French to English",
      _ => "English and French",
    }
  }

  fn direct_task(&self, word: Word) -> Task {
    Task::new(
      format!("Translate to {}: {}", word.source.target(), word.text),
      Answer::Alternatives(word.translations.iter().map(|t| (*t).to_owned()).collect()),
    )
  }

  fn match_task(&mut self, word: Word) -> Task {
    let correct = word
      .translations
      .choose(&mut self.rng)
      .copied()
      .unwrap_or(word.text);

    let mut distractors: Vec<&'static str> = word
      .source
      .table()
      .iter()
      .filter(|(other, _)| *other != word.text)
      .flat_map(|(_, translations)| translations.iter().copied())
      .filter(|t| !word.translations.contains(t))
      .collect();
    distractors.sort_unstable();
    distractors.dedup();

    let mut options: Vec<&'static str> = distractors
      .choose_multiple(&mut self.rng, self.options.match_options - 1)
      .copied()
      .collect();
    options.push(correct);
    options.shuffle(&mut self.rng);

    let index = options.iter().position(|o| *o == correct).unwrap_or(0) + 1;

    let mut question = format!("Match {} translation for:\n{}\n", word.source.target(), word.text);
    for (i, option) in options.iter().enumerate() {
      question.push_str(&format!("\n{}) {option}", i + 1));
    }
    Task::new(question, index as i64)
  }
}

impl TaskProvider for FrenchVocabulary {
  fn identity(&self) -> &str { IDENTITY }

  fn description(&self) -> String {
    let modes: Vec<String> = self.modes.iter().map(Mode::to_string).collect();
    let accents = if self.options.ignore_accents {
      "Ignored"
    } else {
      "Strict"
    };
    format!(
      "French Vocabulary Practice ({})\n\n\
       Task types enabled: {}\n\
       Accent handling: {accents}\n\
       Total words in vocabulary: {}\n\
       Press Enter to begin when ready.",
      self.direction_label(),
      modes.join(", "),
      self.words.len(),
    )
  }

  fn generate(&mut self) -> Task {
    let mode = self.modes.choose(&mut self.rng).copied().unwrap_or(Mode::Direct);
    let Some(word) = self.words.choose(&mut self.rng).copied() else {
      return Task::new("", Answer::Alternatives(Vec::new()));
    };
    match mode {
      Mode::Direct => self.direct_task(word),
      Mode::Match => self.match_task(word),
    }
  }

  fn validate(&self, submitted: &str, expected: &Answer) -> bool {
    let strip = self.options.ignore_accents;
    match expected {
      Answer::Alternatives(accepted) => {
        let submitted = normalize(submitted, strip);
        accepted.iter().any(|a| normalize(a, strip) == submitted)
      }
      Answer::Text(accepted) => normalize(accepted, strip) == normalize(submitted, strip),
      Answer::Integer(index) => submitted.trim().parse::<i64>().is_ok_and(|n| n == *index),
    }
  }

  fn options(&self) -> Map<String, Value> {
    match serde_json::to_value(&self.options) {
      Ok(Value::Object(map)) => map,
      _ => Map::new(),
    }
  }
}

impl TaskFactory for FrenchVocabulary {
  const KEY: &'static str = "french";
  const ABOUT: &'static str = "French vocabulary: translation and matching";

  type Options = FrenchOptions;

  fn from_options(options: Self::Options) -> Result<Self> { Self::new(options) }
}
