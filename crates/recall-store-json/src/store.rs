//! [`JsonHistoryStore`]: the file implementation of [`HistoryStore`].

use std::{
  fs::{self, File},
  io::{self, BufWriter},
  path::{Path, PathBuf},
};

use recall_core::{HistoryDocument, HistoryStore, SessionRecord};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tempfile::NamedTempFile;

use crate::{Error, Result, format::HistoryFormat};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A quiz history kept in a single JSON (or gzip-compressed JSON) file.
#[derive(Debug, Clone)]
pub struct JsonHistoryStore {
  path:   PathBuf,
  format: HistoryFormat,
}

impl JsonHistoryStore {
  /// Bind a store to `path`. Only the extension is checked here; the file
  /// does not need to exist.
  pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
    let path = path.into();
    let format = HistoryFormat::from_path(&path)?;
    Ok(Self { path, format })
  }

  pub fn format(&self) -> HistoryFormat { self.format }

  /// Read whatever document is on disk as plain JSON, without checking its
  /// shape or identity.
  fn read_raw(&self) -> Result<Option<Value>> {
    let file = match File::open(&self.path) {
      Ok(file) => file,
      Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
      Err(e) => return Err(e.into()),
    };
    Ok(Some(self.format.decode(file)?))
  }

  /// Read the document on disk and check that it belongs to `quiz_name`.
  fn read(&self, quiz_name: &str) -> Result<Option<(HistoryDocument, Value)>> {
    let Some(raw) = self.read_raw()? else {
      return Ok(None);
    };
    let doc = HistoryDocument::deserialize(&raw)?;
    doc.ensure_quiz(quiz_name)?;
    tracing::debug!(
      path = %self.path.display(),
      sessions = doc.sessions.len(),
      "read history"
    );
    Ok(Some((doc, raw)))
  }

  /// Write `doc` to a sibling temporary file, then rename it over the
  /// destination. An existing file's permissions carry over.
  fn write(&self, doc: &StoredDocument) -> Result<()> {
    let dir = match self.path.parent() {
      Some(parent) if !parent.as_os_str().is_empty() => parent,
      _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    self.format.encode(doc, BufWriter::new(tmp.as_file_mut()))?;
    if let Ok(meta) = fs::metadata(&self.path) {
      tmp.as_file().set_permissions(meta.permissions())?;
    }
    tmp.as_file().sync_all()?;
    tmp.persist(&self.path)?;

    tracing::debug!(
      path = %self.path.display(),
      sessions = doc.sessions.len(),
      "wrote history"
    );
    Ok(())
  }
}

/// The document as it is written back. Sessions already on disk are kept as
/// the JSON they were read as, so fields this version does not know about
/// (or would fill in differently) survive an append unchanged.
#[derive(Debug, Serialize, Deserialize)]
struct StoredDocument {
  quiz_name: String,
  sessions:  Vec<Value>,
  #[serde(flatten)]
  rest:      Map<String, Value>,
}

impl StoredDocument {
  fn new(quiz_name: &str) -> Self {
    Self {
      quiz_name: quiz_name.to_owned(),
      sessions:  Vec::new(),
      rest:      Map::new(),
    }
  }
}

// ─── HistoryStore impl ───────────────────────────────────────────────────────

impl HistoryStore for JsonHistoryStore {
  type Error = Error;

  fn location(&self) -> &Path { &self.path }

  fn load(&self, quiz_name: &str) -> Result<Option<HistoryDocument>> {
    Ok(self.read(quiz_name)?.map(|(doc, _)| doc))
  }

  fn append(&self, quiz_name: &str, session: SessionRecord) -> Result<HistoryDocument> {
    let (mut doc, mut stored) = match self.read(quiz_name)? {
      Some((doc, raw)) => (doc, serde_json::from_value(raw)?),
      None => (HistoryDocument::new(quiz_name), StoredDocument::new(quiz_name)),
    };
    stored.sessions.push(serde_json::to_value(&session)?);
    self.write(&stored)?;
    doc.push(session);
    Ok(doc)
  }
}
