//! Line input with a deadline and a cancel signal.
//!
//! Blocking reads run on a detached worker thread that hands its line over a
//! single-slot [`oneshot`] channel. A caller that gives up (timeout or
//! interrupt) never joins the worker; the worker is kept so the next read can
//! pick it up, which means at most one thread ever waits on the source.

use std::{
  io::{self, BufRead},
  sync::{Arc, Mutex},
  thread,
  time::Duration,
};

use tokio::sync::{oneshot, watch};

use crate::console::Input;

type LineResult = io::Result<Option<String>>;

// ─── Interrupt ───────────────────────────────────────────────────────────────

/// Observer side of the stop signal. Once fired it stays fired.
#[derive(Debug, Clone)]
pub struct Interrupt {
  rx: watch::Receiver<bool>,
}

/// Firing side of the stop signal.
#[derive(Debug, Clone)]
pub struct InterruptTrigger {
  tx: Arc<watch::Sender<bool>>,
}

impl InterruptTrigger {
  pub fn fire(&self) { self.tx.send_replace(true); }
}

impl Interrupt {
  /// A connected trigger/observer pair.
  pub fn channel() -> (InterruptTrigger, Interrupt) {
    let (tx, rx) = watch::channel(false);
    (InterruptTrigger { tx: Arc::new(tx) }, Interrupt { rx })
  }

  /// An interrupt fired by Ctrl-C. Must be called inside a tokio runtime.
  pub fn ctrl_c() -> Self {
    let (trigger, interrupt) = Self::channel();
    tokio::spawn(async move {
      while tokio::signal::ctrl_c().await.is_ok() {
        tracing::debug!("received interrupt");
        trigger.fire();
      }
    });
    interrupt
  }

  pub fn is_fired(&self) -> bool { *self.rx.borrow() }

  /// Resolve once the signal has fired. Never resolves if every trigger is
  /// dropped unfired.
  pub async fn fired(&mut self) {
    if self.rx.wait_for(|fired| *fired).await.is_err() {
      std::future::pending::<()>().await;
    }
  }
}

// ─── TimedReader ─────────────────────────────────────────────────────────────

/// Reads lines from `R` with an optional deadline.
pub struct TimedReader<R> {
  source:  Arc<Mutex<R>>,
  /// Worker abandoned by an earlier read that may still deliver.
  pending: Option<oneshot::Receiver<LineResult>>,
}

impl<R: BufRead + Send + 'static> TimedReader<R> {
  pub fn new(source: R) -> Self {
    Self {
      source:  Arc::new(Mutex::new(source)),
      pending: None,
    }
  }

  /// Wait for the next line, the deadline, or the interrupt, whichever comes
  /// first.
  pub async fn read_line(
    &mut self,
    limit: Option<Duration>,
    interrupt: &mut Interrupt,
  ) -> io::Result<Input> {
    if interrupt.is_fired() {
      return Ok(Input::Interrupted);
    }

    let mut rx = self.worker()?;
    let deadline = async {
      match limit {
        Some(limit) => tokio::time::sleep(limit).await,
        None => std::future::pending().await,
      }
    };

    tokio::select! {
      biased;

      _ = interrupt.fired() => {
        self.pending = Some(rx);
        Ok(Input::Interrupted)
      }
      delivered = &mut rx => match delivered {
        Ok(Ok(Some(line))) => Ok(Input::Line(line.trim().to_owned())),
        Ok(Ok(None)) => Ok(Input::Eof),
        Ok(Err(e)) => Err(e),
        Err(_) => Err(io::Error::other("input worker exited without a result")),
      },
      _ = deadline => {
        self.pending = Some(rx);
        Ok(Input::Timeout)
      }
    }
  }

  /// Reuse the abandoned worker if it is still blocked; otherwise discard
  /// whatever it produced late and start a fresh one.
  fn worker(&mut self) -> io::Result<oneshot::Receiver<LineResult>> {
    if let Some(mut rx) = self.pending.take() {
      match rx.try_recv() {
        Err(oneshot::error::TryRecvError::Empty) => return Ok(rx),
        Ok(late) => tracing::debug!(?late, "discarding input that arrived after its deadline"),
        Err(oneshot::error::TryRecvError::Closed) => {}
      }
    }

    let (tx, rx) = oneshot::channel();
    let source = Arc::clone(&self.source);
    thread::Builder::new()
      .name("recall-input".into())
      .spawn(move || {
        let _ = tx.send(read_one(&source));
      })?;
    Ok(rx)
  }
}

fn read_one<R: BufRead>(source: &Mutex<R>) -> LineResult {
  let mut source = source
    .lock()
    .map_err(|_| io::Error::other("input source poisoned"))?;
  let mut line = String::new();
  match source.read_line(&mut line)? {
    0 => Ok(None),
    _ => Ok(Some(line)),
  }
}
