//! Encoding and decoding of history documents in both on-disk formats.
//!
//! Documents are pretty-printed with two-space indentation in either case;
//! the gzip variant simply wraps the same bytes in a gzip stream.

use std::{
  io::{BufReader, Read, Write},
  path::Path,
};

use flate2::{Compression, read::GzDecoder, write::GzEncoder};
use serde::{Serialize, de::DeserializeOwned};

use crate::{Error, Result};

/// On-disk representation, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryFormat {
  /// `.json`
  Json,
  /// `.json.gz`
  Gzip,
}

impl HistoryFormat {
  /// Pick the format for `path`, rejecting any other extension.
  pub fn from_path(path: &Path) -> Result<Self> {
    let name = path
      .file_name()
      .and_then(|n| n.to_str())
      .ok_or_else(|| Error::UnsupportedExtension(path.to_path_buf()))?;

    if name.ends_with(".json.gz") {
      Ok(Self::Gzip)
    } else if name.ends_with(".json") {
      Ok(Self::Json)
    } else {
      Err(Error::UnsupportedExtension(path.to_path_buf()))
    }
  }

  pub fn decode<T: DeserializeOwned>(self, reader: impl Read) -> Result<T> {
    let reader = BufReader::new(reader);
    let doc = match self {
      Self::Json => serde_json::from_reader(reader)?,
      Self::Gzip => serde_json::from_reader(GzDecoder::new(reader))?,
    };
    Ok(doc)
  }

  pub fn encode<T: Serialize + ?Sized>(self, doc: &T, mut writer: impl Write) -> Result<()> {
    match self {
      Self::Json => serde_json::to_writer_pretty(&mut writer, doc)?,
      Self::Gzip => {
        let mut encoder = GzEncoder::new(&mut writer, Compression::default());
        serde_json::to_writer_pretty(&mut encoder, doc)?;
        encoder.finish()?;
      }
    }
    writer.flush()?;
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use std::path::PathBuf;

  use recall_core::HistoryDocument;

  use super::*;

  #[test]
  fn extension_selects_format() {
    assert_eq!(
      HistoryFormat::from_path(Path::new("results/Quiz.json")).unwrap(),
      HistoryFormat::Json
    );
    assert_eq!(
      HistoryFormat::from_path(Path::new("results/Quiz.json.gz")).unwrap(),
      HistoryFormat::Gzip
    );
  }

  #[test]
  fn other_extensions_are_rejected() {
    for bad in ["results/Quiz.txt", "results/Quiz.gz", "results/Quiz", "results/"] {
      match HistoryFormat::from_path(Path::new(bad)) {
        Err(Error::UnsupportedExtension(path)) => assert_eq!(path, PathBuf::from(bad)),
        other => panic!("{bad}: expected UnsupportedExtension, got {other:?}"),
      }
    }
  }

  #[test]
  fn gzip_output_is_compressed() {
    let doc = HistoryDocument::new("Multiplication Quiz");
    let mut bytes = Vec::new();
    HistoryFormat::Gzip.encode(&doc, &mut bytes).unwrap();

    // gzip magic number
    assert_eq!(&bytes[..2], &[0x1f, 0x8b]);
    let back: HistoryDocument = HistoryFormat::Gzip.decode(bytes.as_slice()).unwrap();
    assert_eq!(back, doc);
  }

  #[test]
  fn plain_output_is_indented_json() {
    let doc = HistoryDocument::new("Multiplication Quiz");
    let mut bytes = Vec::new();
    HistoryFormat::Json.encode(&doc, &mut bytes).unwrap();

    let text = String::from_utf8(bytes).unwrap();
    assert!(text.contains("\n  \"quiz_name\": \"Multiplication Quiz\""));
  }
}
