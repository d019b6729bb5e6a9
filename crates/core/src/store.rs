//! Note storage.
//!
//! Notes are addressed by path. Relative ids resolve against the store's
//! root; absolute ids are used as-is.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("note not found: {0}")]
    NotFound(String),

    #[error("failed to read note {0}: {1}")]
    ReadError(String, #[source] io::Error),

    #[error("failed to write note {0}: {1}")]
    WriteError(String, #[source] io::Error),
}

/// Read/write access to notes.
pub trait NoteStore {
    fn exists(&self, id: &Path) -> bool;

    fn read(&self, id: &Path) -> Result<String, StoreError>;

    fn write(&self, id: &Path, text: &str) -> Result<(), StoreError>;
}

/// Notes stored as files under a vault root.
#[derive(Debug, Clone)]
pub struct FsNoteStore {
    root: PathBuf,
}

impl FsNoteStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn resolve(&self, id: &Path) -> PathBuf {
        if id.is_absolute() { id.to_path_buf() } else { self.root.join(id) }
    }
}

impl NoteStore for FsNoteStore {
    fn exists(&self, id: &Path) -> bool {
        self.resolve(id).is_file()
    }

    fn read(&self, id: &Path) -> Result<String, StoreError> {
        let path = self.resolve(id);
        fs::read_to_string(&path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                StoreError::NotFound(path.display().to_string())
            } else {
                StoreError::ReadError(path.display().to_string(), e)
            }
        })
    }

    /// Write through a sibling temporary file and rename it over the note.
    fn write(&self, id: &Path, text: &str) -> Result<(), StoreError> {
        let path = self.resolve(id);
        let err = |e| StoreError::WriteError(path.display().to_string(), e);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(err)?;
        }

        let mut tmp_name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
        tmp_name.push(".dprompt.tmp");
        let tmp = path.with_file_name(tmp_name);

        fs::write(&tmp, text).map_err(err)?;
        if let Err(e) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(err(e));
        }

        debug!(path = %path.display(), bytes = text.len(), "note written");
        Ok(())
    }
}

/// Notes held in memory, keyed by id.
#[derive(Debug, Default)]
pub struct MemoryNoteStore {
    notes: Mutex<HashMap<PathBuf, String>>,
}

impl MemoryNoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_note(self, id: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        if let Ok(mut notes) = self.notes.lock() {
            notes.insert(id.into(), text.into());
        }
        self
    }

    pub fn get(&self, id: &Path) -> Option<String> {
        self.notes.lock().ok().and_then(|notes| notes.get(id).cloned())
    }
}

impl NoteStore for MemoryNoteStore {
    fn exists(&self, id: &Path) -> bool {
        self.notes.lock().is_ok_and(|notes| notes.contains_key(id))
    }

    fn read(&self, id: &Path) -> Result<String, StoreError> {
        self.get(id).ok_or_else(|| StoreError::NotFound(id.display().to_string()))
    }

    fn write(&self, id: &Path, text: &str) -> Result<(), StoreError> {
        let mut notes = self.notes.lock().map_err(|_| {
            StoreError::WriteError(
                id.display().to_string(),
                io::Error::other("note store lock poisoned"),
            )
        })?;
        notes.insert(id.to_path_buf(), text.to_string());
        Ok(())
    }
}
