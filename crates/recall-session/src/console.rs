//! The runner's view of the terminal.

use std::{io, path::Path, time::Duration};

use recall_core::{Answer, SessionRecord};

/// Result of waiting for one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
  /// A full line, whitespace-trimmed. May be empty.
  Line(String),
  /// The time limit passed before a line arrived.
  Timeout,
  /// The user asked to stop (Ctrl-C).
  Interrupted,
  /// The input stream is closed; no further lines will arrive.
  Eof,
}

/// Something the runner wants the user to see.
#[derive(Debug, Clone, Copy)]
pub enum Notice<'a> {
  /// Provider description, shown before the start prompt.
  Description(&'a str),
  Question { number: usize, text: &'a str },
  TimeUp,
  Correct,
  /// `reveal` carries the expected answer when hints are enabled.
  Incorrect { reveal: Option<&'a Answer> },
  /// The user stopped the quiz; `started` is false if it happened at the
  /// start prompt.
  Interrupted { started: bool },
  /// Reading from the console failed; the quiz stops as if interrupted.
  InputFailed,
  NothingToSave,
  Summary { session: &'a SessionRecord, location: &'a Path },
}

/// Prompting and display, as seen by [`SessionRunner`](crate::SessionRunner).
pub trait Console {
  /// Show `prompt` and wait for a line, at most `limit` if given.
  async fn read_line(&mut self, prompt: &str, limit: Option<Duration>) -> io::Result<Input>;

  fn notify(&mut self, notice: Notice<'_>);

  fn clear(&mut self) -> io::Result<()>;
}
