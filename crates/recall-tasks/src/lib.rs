//! Built-in task providers and the registry that exposes them on the
//! command line.
//!
//! Each provider implements [`recall_core::TaskProvider`] and
//! [`TaskFactory`]; the [`TaskRegistry`] maps a short key (`multiplication`,
//! `french`) to the provider's option parser and constructor.

pub mod error;
pub mod french;
pub mod multiplication;
pub mod normalize;
pub mod registry;

pub use error::{Error, Result};
pub use french::FrenchVocabulary;
pub use multiplication::Multiplication;
pub use registry::{TaskEntry, TaskFactory, TaskRegistry};
