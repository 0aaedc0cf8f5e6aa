//! Default history file naming.
//!
//! Without an explicit path, a quiz's history lives at
//! `<results_dir>/<safe name>.json` or `<results_dir>/<safe name>.json.gz`.

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Directory used when no results directory is configured.
pub const DEFAULT_RESULTS_DIR: &str = "results";

/// Map a quiz identity to a file-system-safe stem: anything that is not
/// alphanumeric, `_` or `-` becomes `_`, and `_` is trimmed from both ends.
pub fn safe_filename(name: &str) -> String {
  let replaced: String = name
    .chars()
    .map(|c| {
      if c.is_alphanumeric() || c == '_' || c == '-' {
        c
      } else {
        '_'
      }
    })
    .collect();
  replaced.trim_matches('_').to_owned()
}

/// Resolve the history file for `quiz_name` inside `results_dir`.
///
/// An existing plain file wins; otherwise the compressed name is used,
/// whether or not it exists yet. If both exist the choice is ambiguous and
/// the caller has to name the file explicitly.
pub fn resolve_history_path(results_dir: &Path, quiz_name: &str) -> Result<PathBuf> {
  let stem = safe_filename(quiz_name);
  let plain = results_dir.join(format!("{stem}.json"));
  let compressed = results_dir.join(format!("{stem}.json.gz"));

  match (plain.exists(), compressed.exists()) {
    (true, true) => Err(Error::AmbiguousHistory { plain, compressed }),
    (true, false) => Ok(plain),
    (false, _) => Ok(compressed),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn spaces_and_punctuation_become_underscores() {
    assert_eq!(safe_filename("Multiplication Quiz"), "Multiplication_Quiz");
    assert_eq!(safe_filename("  French: vocab! "), "French__vocab");
    assert_eq!(safe_filename("déjà-vu"), "déjà-vu");
  }
}
