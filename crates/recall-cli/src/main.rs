//! `recall`: timed quizzes in the terminal, with missed questions asked
//! again in later sessions.
//!
//! # Usage
//!
//! ```text
//! recall multiplication --max-factor 9 -n 20 --time-limit 5
//! recall french --e2f --match --mistakes 3
//! recall --config ~/.config/recall.toml french --file vocab.json
//! ```

mod args;
mod preferences;
mod terminal;

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use args::QuizArgs;
use clap::{Args, Command, CommandFactory, FromArgMatches, Parser};
use preferences::Preferences;
use recall_core::HistoryStore;
use recall_session::{Interrupt, Outcome, SessionRunner};
use recall_store_json::{JsonHistoryStore, resolve_history_path};
use recall_tasks::TaskRegistry;
use terminal::TerminalConsole;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "recall", version, about = "Timed quizzes that remember your mistakes")]
struct Cli {
  /// Path to a TOML preferences file [default: recall.toml, if present].
  #[arg(short, long, value_name = "FILE", global = true)]
  config: Option<PathBuf>,

  /// Log debug output to stderr.
  #[arg(short, long, global = true)]
  verbose: bool,
}

/// The top-level command with one subcommand per registered task, each
/// carrying the shared quiz options and the provider's own.
fn command(registry: &TaskRegistry) -> Command {
  registry
    .entries()
    .fold(Cli::command(), |cmd, entry| {
      cmd.subcommand(QuizArgs::augment_args(entry.command()))
    })
    .subcommand_required(true)
    .arg_required_else_help(true)
}

// ─── Entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  let registry = TaskRegistry::builtin();
  let matches = command(&registry).get_matches();
  let cli = Cli::from_arg_matches(&matches)?;
  init_tracing(cli.verbose);

  let (key, sub) = matches
    .subcommand()
    .ok_or_else(|| anyhow!("no quiz task given"))?;
  let quiz = QuizArgs::from_arg_matches(sub)?;

  let prefs = Preferences::load(cli.config.as_deref()).context("failed to read preferences")?;
  let mut settings = prefs.settings(key, &quiz)?;
  let mut provider = registry.get(key)?.build(sub)?;

  // Everything that can be rejected is checked before the first question.
  let path = match settings.file.take() {
    Some(path) => path,
    None => resolve_history_path(&prefs.results_dir, provider.identity())?,
  };
  let store = JsonHistoryStore::open(&path)?;
  preflight(&store, provider.identity())?;
  settings.file = Some(path);

  let mut console = TerminalConsole::new(Interrupt::ctrl_c());
  let outcome = SessionRunner::new(provider.as_mut(), &store, &mut console, settings)
    .run()
    .await?;

  match outcome {
    Outcome::Saved { location, .. } => tracing::debug!(path = %location.display(), "done"),
    Outcome::NothingToSave { interrupted } => tracing::debug!(interrupted, "nothing saved"),
  }
  Ok(())
}

/// Refuse to start a session whose history file belongs to another quiz.
/// Other read failures only cost the retries, so they are logged and the
/// final append reports them if they persist.
fn preflight(store: &JsonHistoryStore, quiz_name: &str) -> Result<()> {
  match store.load(quiz_name) {
    Ok(_) => Ok(()),
    Err(e) if e.is_quiz_mismatch() => {
      Err(e).with_context(|| format!("refusing to use {}", store.location().display()))
    }
    Err(e) => {
      tracing::warn!(path = %store.location().display(), error = %e, "could not read history");
      Ok(())
    }
  }
}

fn init_tracing(verbose: bool) {
  // Stay quiet by default; log lines would interleave with the prompts.
  let default = if verbose {
    LevelFilter::DEBUG
  } else {
    LevelFilter::WARN
  };
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(default.into())
        .from_env_lossy(),
    )
    .init();
}

#[cfg(test)]
mod tests {
  use super::*;

  fn parse(argv: &[&str]) -> clap::ArgMatches {
    command(&TaskRegistry::builtin())
      .try_get_matches_from(argv)
      .unwrap()
  }

  #[test]
  fn command_is_well_formed() { command(&TaskRegistry::builtin()).debug_assert(); }

  #[test]
  fn quiz_and_task_options_share_a_subcommand() {
    let matches = parse(&[
      "recall",
      "multiplication",
      "-n",
      "3",
      "--max-factor",
      "5",
      "--verbose",
    ]);
    assert!(Cli::from_arg_matches(&matches).unwrap().verbose);

    let (key, sub) = matches.subcommand().unwrap();
    assert_eq!(key, "multiplication");
    assert_eq!(QuizArgs::from_arg_matches(sub).unwrap().num_questions, Some(3));

    let provider = TaskRegistry::builtin().get(key).unwrap().build(sub).unwrap();
    assert_eq!(provider.options()["max_factor"], 5);
  }

  #[test]
  fn a_task_is_required() {
    assert!(
      command(&TaskRegistry::builtin())
        .try_get_matches_from(["recall"])
        .is_err()
    );
  }
}
