//! Options shared by every quiz subcommand.

use std::path::PathBuf;

use clap::Args;
use recall_core::ErrorDisplay;

/// Registered on each task subcommand next to the provider's own options.
/// Unset values fall back to the preferences file, then to built-in
/// defaults.
#[derive(Args, Debug, Clone, Default)]
pub struct QuizArgs {
  /// Number of questions to ask [default: 10].
  #[arg(short = 'n', long, value_name = "N")]
  pub num_questions: Option<usize>,

  /// Seconds allowed per question [default: no limit].
  #[arg(short = 't', long, value_name = "SECONDS")]
  pub time_limit: Option<f64>,

  /// Clear the screen between questions.
  #[arg(long)]
  pub clean_screen: bool,

  /// History file (.json or .json.gz) [default: results/<quiz>.json.gz].
  #[arg(short, long, value_name = "FILE")]
  pub file: Option<PathBuf>,

  /// Do not print the summary after the session.
  #[arg(long)]
  pub no_summary: bool,

  /// Feedback after each answer: hide, show, or hint [default: hint].
  #[arg(long, value_name = "MODE")]
  pub errors: Option<ErrorDisplay>,

  /// Number of leading questions where an empty answer counts as wrong
  /// without being checked [default: 0].
  #[arg(short, long, value_name = "N")]
  pub mistakes: Option<usize>,
}
