//! Provider registry: a fixed table from task key to option parser and
//! constructor, populated at startup.

use clap::{ArgMatches, Args, Command, FromArgMatches};
use recall_core::TaskProvider;

use crate::{Error, FrenchVocabulary, Multiplication, Result};

// ─── Factory trait ───────────────────────────────────────────────────────────

/// A provider that can be built from its own command-line options.
pub trait TaskFactory: TaskProvider + Sized + 'static {
  /// Subcommand name, e.g. `"multiplication"`.
  const KEY: &'static str;
  /// One-line help text for the subcommand.
  const ABOUT: &'static str;

  /// Provider-specific options. Registered on the subcommand before parsing.
  type Options: Args;

  fn from_options(options: Self::Options) -> Result<Self>;
}

// ─── Entry ───────────────────────────────────────────────────────────────────

/// One registered provider.
#[derive(Clone)]
pub struct TaskEntry {
  key:      &'static str,
  about:    &'static str,
  register: fn(Command) -> Command,
  build:    fn(&ArgMatches) -> Result<Box<dyn TaskProvider>>,
}

impl TaskEntry {
  pub fn of<T: TaskFactory>() -> Self {
    Self {
      key:      T::KEY,
      about:    T::ABOUT,
      register: <T::Options as Args>::augment_args,
      build:    build_boxed::<T>,
    }
  }

  pub fn key(&self) -> &'static str { self.key }

  /// The subcommand for this provider, with its options registered.
  pub fn command(&self) -> Command {
    (self.register)(Command::new(self.key).about(self.about))
  }

  /// Construct the provider from the matches of its subcommand.
  pub fn build(&self, matches: &ArgMatches) -> Result<Box<dyn TaskProvider>> {
    (self.build)(matches)
  }
}

fn build_boxed<T: TaskFactory>(matches: &ArgMatches) -> Result<Box<dyn TaskProvider>> {
  let options = T::Options::from_arg_matches(matches)?;
  Ok(Box::new(T::from_options(options)?))
}

// ─── Registry ────────────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct TaskRegistry {
  entries: Vec<TaskEntry>,
}

impl TaskRegistry {
  /// A registry holding every provider shipped with recall.
  pub fn builtin() -> Self {
    let mut registry = Self::default();
    registry.register(TaskEntry::of::<Multiplication>());
    registry.register(TaskEntry::of::<FrenchVocabulary>());
    registry
  }

  /// Add `entry`, replacing any entry with the same key.
  pub fn register(&mut self, entry: TaskEntry) {
    self.entries.retain(|e| e.key != entry.key);
    self.entries.push(entry);
  }

  pub fn get(&self, key: &str) -> Result<&TaskEntry> {
    self
      .entries
      .iter()
      .find(|e| e.key == key)
      .ok_or_else(|| Error::UnknownTask(key.to_owned()))
  }

  pub fn entries(&self) -> impl Iterator<Item = &TaskEntry> { self.entries.iter() }
}
