//! The quiz engine: timed input, retry selection, and the session loop.
//!
//! The engine is generic over a [`Console`] (where prompts go and answers
//! come from) and a [`HistoryStore`](recall_core::HistoryStore) (where the
//! finished session goes), so it runs the same against a terminal and
//! against scripted test doubles.

// Native `async fn` in traits; the futures are only awaited in place, never
// spawned, so the missing `Send` bound does not matter.
#![allow(async_fn_in_trait)]

pub mod console;
pub mod error;
pub mod input;
pub mod retry;
pub mod runner;

pub use console::{Console, Input, Notice};
pub use error::{Error, Result};
pub use input::{Interrupt, InterruptTrigger, TimedReader};
pub use retry::{RetryCandidate, select_retries};
pub use runner::{Outcome, Phase, SessionRunner};
