//! [`Console`] over stdin/stdout.

use std::{
  fmt::Write as _,
  io::{self, BufReader, Stdin, Stdout, Write},
  path::Path,
  time::Duration,
};

use crossterm::{
  cursor::MoveTo,
  execute,
  style::Stylize,
  terminal::{Clear, ClearType},
};
use recall_core::SessionRecord;
use recall_session::{Console, Input, Interrupt, Notice, TimedReader};

pub struct TerminalConsole {
  reader:    TimedReader<BufReader<Stdin>>,
  interrupt: Interrupt,
  out:       Stdout,
}

impl TerminalConsole {
  pub fn new(interrupt: Interrupt) -> Self {
    Self {
      reader: TimedReader::new(BufReader::new(io::stdin())),
      interrupt,
      out: io::stdout(),
    }
  }

  fn print(&mut self, text: impl std::fmt::Display) {
    if let Err(e) = writeln!(self.out, "{text}") {
      tracing::warn!(error = %e, "could not write to stdout");
    }
  }
}

impl Console for TerminalConsole {
  async fn read_line(&mut self, prompt: &str, limit: Option<Duration>) -> io::Result<Input> {
    write!(self.out, "{prompt}")?;
    self.out.flush()?;
    self.reader.read_line(limit, &mut self.interrupt).await
  }

  fn notify(&mut self, notice: Notice<'_>) {
    match notice {
      Notice::Description(text) => self.print(format_args!("\n{text}\n")),
      Notice::Question { number, text } => self.print(format_args!("\nQ{number}: {text}")),
      Notice::TimeUp => self.print("\nTime's up!"),
      Notice::Correct => self.print("Correct!".green()),
      Notice::Incorrect { reveal: None } => self.print("Incorrect!".red()),
      Notice::Incorrect {
        reveal: Some(answer),
      } => self.print(format!("Incorrect! Correct answer: {answer}").red()),
      Notice::Interrupted { started: true } => self.print("\nQuiz interrupted by the user."),
      Notice::Interrupted { started: false } => {
        self.print("\nQuiz session terminated by the user before starting.")
      }
      Notice::InputFailed => self.print("\nCould not read input; stopping the quiz."),
      Notice::NothingToSave => self.print("No questions were completed. Exiting without saving."),
      Notice::Summary { session, location } => self.print(summary(session, location)),
    }
  }

  fn clear(&mut self) -> io::Result<()> { execute!(self.out, Clear(ClearType::All), MoveTo(0, 0)) }
}

/// The end-of-session report. Times and the accuracy always carry a
/// fractional part (`2.0s`, `50.0%`), as earlier versions printed them.
pub fn summary(session: &SessionRecord, location: &Path) -> String {
  let stats = &session.statistics;
  let fastest = match stats.fastest_correct {
    Some(secs) => format!("{secs:?}s"),
    None => "N/A".to_owned(),
  };

  let mut out = String::from("\nSession Summary:\n");
  let _ = writeln!(
    out,
    "\tQuestions: {}/{}",
    stats.correct_answers.unwrap_or_default(),
    stats.total_questions.unwrap_or(session.questions.len())
  );
  let _ = writeln!(
    out,
    "\tSession accuracy: {:?}%",
    stats.accuracy.unwrap_or_default()
  );
  let _ = writeln!(out, "\tAverage time per question: {:?}s", stats.average_time);
  let _ = writeln!(out, "\tFastest correct answer: {fastest}");
  let _ = writeln!(out, "\tSlowest answer: {:?}s", stats.slowest_answer);
  let _ = writeln!(out, "\tTotal time: {:?}s", session.duration);
  let _ = write!(out, "\tFilename: {}", location.display());
  out
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;
  use recall_core::{Answer, QuestionRecord, SessionDraft, Settings};

  use super::*;

  fn session(correct: &[bool]) -> SessionRecord {
    let start = NaiveDate::from_ymd_opt(2024, 5, 1)
      .unwrap()
      .and_hms_opt(9, 0, 0)
      .unwrap();
    let mut draft = SessionDraft::new(start, Settings::default());
    for (i, is_correct) in correct.iter().enumerate() {
      draft.push(QuestionRecord {
        question:       "2 × 3 = ".into(),
        correct_answer: Answer::Integer(6),
        user_answer:    Some("6".into()),
        time_taken:     (i + 1) as f64,
        is_correct:     *is_correct,
      });
    }
    draft
      .finalize(start + chrono::Duration::milliseconds(4_500))
      .unwrap()
  }

  #[test]
  fn summary_lists_every_statistic() {
    let text = summary(
      &session(&[false, true]),
      Path::new("results/Multiplication_Quiz.json.gz"),
    );
    assert_eq!(
      text,
      "\nSession Summary:\n\
       \tQuestions: 1/2\n\
       \tSession accuracy: 50.0%\n\
       \tAverage time per question: 1.5s\n\
       \tFastest correct answer: 2.0s\n\
       \tSlowest answer: 2.0s\n\
       \tTotal time: 4.5s\n\
       \tFilename: results/Multiplication_Quiz.json.gz"
    );
  }

  #[test]
  fn whole_numbers_keep_a_fractional_part() {
    let text = summary(&session(&[true]), Path::new("q.json"));
    assert!(text.contains("\tSession accuracy: 100.0%\n"), "{text}");
    assert!(text.contains("\tAverage time per question: 1.0s\n"), "{text}");
    assert!(text.contains("\tFastest correct answer: 1.0s\n"), "{text}");
  }

  #[test]
  fn summary_without_correct_answers_says_na() {
    let text = summary(&session(&[false]), Path::new("q.json"));
    assert!(text.contains("\tFastest correct answer: N/A\n"));
  }
}
