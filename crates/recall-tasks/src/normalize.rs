//! Text normalization used when comparing free-text answers.

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Trim, lowercase, and NFKD-decompose `text`. With `strip_accents`, the
/// combining marks left by decomposition are dropped, so `"école"` and
/// `"ecole"` compare equal.
pub fn normalize(text: &str, strip_accents: bool) -> String {
  let folded = text.trim().to_lowercase();
  if strip_accents {
    folded.nfkd().filter(|c| !is_combining_mark(*c)).collect()
  } else {
    folded.nfkd().collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn case_and_whitespace_are_ignored() {
    assert_eq!(normalize("  La Ville ", false), normalize("la ville", false));
  }

  #[test]
  fn composed_and_decomposed_forms_match() {
    assert_eq!(normalize("caf\u{e9}", false), normalize("cafe\u{301}", false));
  }

  #[test]
  fn accents_are_strict_by_default() {
    assert_ne!(normalize("l'école", false), normalize("l'ecole", false));
  }

  #[test]
  fn accents_can_be_ignored() {
    assert_eq!(normalize("l'École", true), "l'ecole");
  }
}
