//! User preferences: an optional TOML file, then `RECALL_*` environment
//! variables. Command-line flags override both.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use config::{Config, ConfigError, Environment, File};
use recall_core::{ErrorDisplay, Settings};
use recall_store_json::DEFAULT_RESULTS_DIR;
use serde::Deserialize;

use crate::args::QuizArgs;

/// Read when `--config` is not given; may be absent.
pub const DEFAULT_CONFIG_FILE: &str = "recall.toml";
const ENV_PREFIX: &str = "RECALL";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Preferences {
  /// Where histories live when no `--file` is given.
  pub results_dir:   PathBuf,
  pub num_questions: usize,
  pub time_limit:    Option<f64>,
  pub errors:        ErrorDisplay,
  pub mistakes:      usize,
  pub clean_screen:  bool,
  /// Print the summary after a saved session.
  pub summary:       bool,
}

impl Default for Preferences {
  fn default() -> Self {
    let settings = Settings::default();
    Self {
      results_dir:   PathBuf::from(DEFAULT_RESULTS_DIR),
      num_questions: settings.num_questions,
      time_limit:    settings.time_limit,
      errors:        settings.errors,
      mistakes:      settings.mistakes,
      clean_screen:  settings.clean_screen,
      summary:       true,
    }
  }
}

impl Preferences {
  /// Load from `path` (which must exist) or from [`DEFAULT_CONFIG_FILE`]
  /// (which may not), then the process environment.
  pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
    Self::from_sources(path, Environment::with_prefix(ENV_PREFIX).try_parsing(true))
  }

  fn from_sources(path: Option<&Path>, env: Environment) -> Result<Self, ConfigError> {
    let file = match path {
      Some(path) => File::from(path).required(true),
      None => File::from(Path::new(DEFAULT_CONFIG_FILE)).required(false),
    };
    Config::builder()
      .add_source(file)
      .add_source(env)
      .build()?
      .try_deserialize()
  }

  /// The settings for a session of `task`, with `args` taking precedence.
  /// The history file is filled in once it has been resolved.
  pub fn settings(&self, task: &str, args: &QuizArgs) -> Result<Settings> {
    let time_limit = args.time_limit.or(self.time_limit);
    if let Some(secs) = time_limit
      && !(secs.is_finite() && secs > 0.0)
    {
      bail!("time limit must be a positive number of seconds, got {secs}");
    }

    Ok(Settings {
      task: task.to_owned(),
      num_questions: args.num_questions.unwrap_or(self.num_questions),
      time_limit,
      clean_screen: args.clean_screen || self.clean_screen,
      file: args.file.clone(),
      no_summary: args.no_summary || !self.summary,
      errors: args.errors.unwrap_or(self.errors),
      mistakes: args.mistakes.unwrap_or(self.mistakes),
      ..Settings::default()
    })
  }
}
