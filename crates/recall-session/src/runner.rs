//! The session state machine.
//!
//! A run moves through [`Phase`]s in order:
//!
//! ```text
//! NotStarted → AwaitingStart → Running → Finalizing → Done
//!                    │            │           ▲
//!                    └──────► Interrupted ────┘
//! ```
//!
//! Finalizing is reached on every path, so whatever was answered before an
//! interruption is still saved.

use std::{collections::VecDeque, path::PathBuf, time::Instant};

use chrono::{Local, NaiveDateTime};
use recall_core::{
  Answer, ErrorDisplay, HistoryStore, QuestionRecord, SessionDraft, SessionRecord, Settings, Task,
  TaskProvider, statistics::round2,
};

use crate::{
  Error, Result,
  console::{Console, Input, Notice},
  retry::select_retries,
};

const START_PROMPT: &str = "Press Enter to start the quiz...";
const ANSWER_PROMPT: &str = "Answer: ";
const CONTINUE_PROMPT: &str = "Press Enter to continue...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
  NotStarted,
  AwaitingStart,
  Running,
  Interrupted,
  Finalizing,
  Done,
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
  /// At least one question was answered and the session was appended to the
  /// history.
  Saved {
    session:     SessionRecord,
    location:    PathBuf,
    interrupted: bool,
  },
  /// No question was recorded; the history was not touched.
  NothingToSave { interrupted: bool },
}

impl Outcome {
  pub fn interrupted(&self) -> bool {
    match self {
      Self::Saved { interrupted, .. } | Self::NothingToSave { interrupted } => *interrupted,
    }
  }
}

/// Why a run stopped before asking every question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Halt {
  /// Ctrl-C or end of input.
  Interrupted,
  /// Reading from the console failed.
  InputFailed,
}

/// Drives one quiz session from the start prompt to the saved record.
pub struct SessionRunner<'a, P: ?Sized, S, C> {
  provider: &'a mut P,
  store:    &'a S,
  console:  &'a mut C,
  settings: Settings,
  phase:    Phase,
}

impl<'a, P, S, C> SessionRunner<'a, P, S, C>
where
  P: TaskProvider + ?Sized,
  S: HistoryStore,
  C: Console,
{
  /// The provider's options are merged into `settings` so each session
  /// records exactly what it ran with.
  pub fn new(
    provider: &'a mut P,
    store: &'a S,
    console: &'a mut C,
    mut settings: Settings,
  ) -> Self {
    settings.task_options.extend(provider.options());
    Self {
      provider,
      store,
      console,
      settings,
      phase: Phase::NotStarted,
    }
  }

  pub fn phase(&self) -> Phase { self.phase }

  pub fn settings(&self) -> &Settings { &self.settings }

  /// Run the session to completion.
  ///
  /// Interruptions are not errors; the only failure is the history store
  /// refusing the finished session.
  pub async fn run(&mut self) -> Result<Outcome> {
    self.enter(Phase::AwaitingStart);
    let description = self.provider.description();
    self.console.notify(Notice::Description(&description));

    if let Err(halt) = self.acknowledge(START_PROMPT).await {
      self.halt(halt, false);
      return self.finalize(None, true);
    }
    self.clear();

    self.enter(Phase::Running);
    let mut draft = SessionDraft::new(now(), self.settings.clone());
    let interrupted = match self.ask_all(&mut draft).await {
      Ok(()) => false,
      Err(halt) => {
        self.halt(halt, true);
        true
      }
    };

    self.finalize(Some(draft), interrupted)
  }

  fn halt(&mut self, halt: Halt, started: bool) {
    self.enter(Phase::Interrupted);
    self.console.notify(match halt {
      Halt::Interrupted => Notice::Interrupted { started },
      Halt::InputFailed => Notice::InputFailed,
    });
  }

  /// Ask every question, previously missed ones first.
  async fn ask_all(&mut self, draft: &mut SessionDraft) -> Result<(), Halt> {
    let total = self.settings.num_questions;
    let protected = self.settings.protected_count();
    let mut retries: VecDeque<Task> = select_retries(self.store, self.provider.identity(), total)
      .into_iter()
      .map(Task::from)
      .collect();
    tracing::debug!(retries = retries.len(), protected, "starting questions");

    for ordinal in 0..total {
      let task = retries
        .pop_front()
        .unwrap_or_else(|| self.provider.generate());
      let record = self.ask(ordinal, ordinal < protected, task).await?;
      let is_correct = record.is_correct;
      let expected = record.correct_answer.clone();
      draft.push(record);

      self.feedback(is_correct, &expected).await?;
      self.clear();
    }
    Ok(())
  }

  /// Ask one question and score the reply.
  async fn ask(
    &mut self,
    ordinal: usize,
    protected: bool,
    task: Task,
  ) -> Result<QuestionRecord, Halt> {
    self.console.notify(Notice::Question {
      number: ordinal + 1,
      text:   &task.question,
    });

    let started = Instant::now();
    let answer = match self
      .console
      .read_line(ANSWER_PROMPT, self.settings.question_timeout())
      .await
    {
      Ok(Input::Line(line)) => Some(line),
      Ok(Input::Timeout) => {
        self.console.notify(Notice::TimeUp);
        None
      }
      Ok(Input::Interrupted | Input::Eof) => return Err(Halt::Interrupted),
      Err(e) => {
        tracing::warn!(error = %e, "could not read answer");
        return Err(Halt::InputFailed);
      }
    };
    let elapsed = started.elapsed().as_secs_f64();

    let is_correct = match answer.as_deref() {
      None => false,
      Some("") if protected => false,
      Some(submitted) => self.provider.validate(submitted, &task.expected),
    };

    Ok(QuestionRecord {
      question: task.question,
      correct_answer: task.expected,
      user_answer: answer,
      time_taken: round2(elapsed),
      is_correct,
    })
  }

  /// Show the verdict per the error display policy, then wait at the
  /// continue prompt.
  async fn feedback(&mut self, is_correct: bool, expected: &Answer) -> Result<(), Halt> {
    let notice = match (self.settings.errors, is_correct) {
      (ErrorDisplay::Hide, _) => return Ok(()),
      (_, true) => Notice::Correct,
      (ErrorDisplay::Show, false) => Notice::Incorrect { reveal: None },
      (ErrorDisplay::Hint, false) => Notice::Incorrect {
        reveal: Some(expected),
      },
    };
    self.console.notify(notice);
    self.acknowledge(CONTINUE_PROMPT).await
  }

  /// Wait for Enter.
  async fn acknowledge(&mut self, prompt: &str) -> Result<(), Halt> {
    match self.console.read_line(prompt, None).await {
      Ok(Input::Line(_) | Input::Timeout) => Ok(()),
      Ok(Input::Interrupted | Input::Eof) => Err(Halt::Interrupted),
      Err(e) => {
        tracing::warn!(error = %e, "could not read from console");
        Err(Halt::InputFailed)
      }
    }
  }

  fn clear(&mut self) {
    if !self.settings.clean_screen {
      return;
    }
    if let Err(e) = self.console.clear() {
      tracing::warn!(error = %e, "could not clear screen");
    }
  }

  fn finalize(&mut self, draft: Option<SessionDraft>, interrupted: bool) -> Result<Outcome> {
    self.enter(Phase::Finalizing);

    let Some(draft) = draft.filter(|d| !d.is_empty()) else {
      self.console.notify(Notice::NothingToSave);
      self.enter(Phase::Done);
      return Ok(Outcome::NothingToSave { interrupted });
    };

    let session = draft.finalize(now())?;
    self
      .store
      .append(self.provider.identity(), session.clone())
      .map_err(|e| Error::Store(Box::new(e)))?;
    let location = self.store.location().to_path_buf();
    tracing::info!(
      path = %location.display(),
      questions = session.questions.len(),
      accuracy = session.statistics.accuracy.unwrap_or_default(),
      "session saved"
    );

    if !self.settings.no_summary {
      self.console.notify(Notice::Summary {
        session:  &session,
        location: &location,
      });
    }
    self.enter(Phase::Done);
    Ok(Outcome::Saved {
      session,
      location,
      interrupted,
    })
  }

  fn enter(&mut self, phase: Phase) {
    tracing::debug!(from = ?self.phase, to = ?phase, "session phase");
    self.phase = phase;
  }
}

fn now() -> NaiveDateTime { Local::now().naive_local() }
