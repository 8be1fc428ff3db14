//! Reads and writes the single entries blob.

use crate::entry::Entry;
use anyhow::Context;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::warn;

/// A problem talking to the entries blob. Load problems are reported
/// alongside the (empty) result; write problems are returned as errors so
/// the caller can tell the user the change did not stick.
#[derive(Debug)]
pub enum StoreError {
    Read { path: PathBuf, error: anyhow::Error },
    Parse { path: PathBuf, error: anyhow::Error },
    Write { path: PathBuf, error: anyhow::Error },
}

/// The outcome of loading the blob: whatever could be read, plus any
/// problems hit along the way.
#[derive(Debug)]
pub struct LoadResult {
    pub entries: Vec<Entry>,
    pub errors: Vec<StoreError>,
}

/// Owns the blob path and mirrors the whole collection to it.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the whole collection. A missing blob is an empty journal;
    /// unreadable or malformed content degrades to an empty journal with
    /// the problem recorded in `errors`. Never fails outright.
    pub fn load(&self) -> LoadResult {
        if !self.path.exists() {
            return LoadResult {
                entries: Vec::new(),
                errors: Vec::new(),
            };
        }
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(error) => {
                warn!(path = %self.path.display(), %error, "could not read entries blob");
                return LoadResult {
                    entries: Vec::new(),
                    errors: vec![StoreError::Read {
                        path: self.path.clone(),
                        error: error.into(),
                    }],
                };
            }
        };
        match serde_json::from_str::<Vec<Entry>>(&raw) {
            Ok(entries) => LoadResult {
                entries,
                errors: Vec::new(),
            },
            Err(error) => {
                warn!(path = %self.path.display(), %error, "entries blob is malformed, starting empty");
                LoadResult {
                    entries: Vec::new(),
                    errors: vec![StoreError::Parse {
                        path: self.path.clone(),
                        error: error.into(),
                    }],
                }
            }
        }
    }

    /// Serializes the full collection and overwrites the blob. The write
    /// goes through a temp file in the same directory, so a failure cannot
    /// leave a half-written snapshot behind.
    pub fn save(&self, entries: &[Entry]) -> Result<(), StoreError> {
        let write_error = |error: anyhow::Error| {
            warn!(path = %self.path.display(), error = %error, "could not save entries blob");
            StoreError::Write {
                path: self.path.clone(),
                error,
            }
        };
        let json = serde_json::to_string(entries)
            .map_err(|e| write_error(e.into()))?;
        self.write_blob(json.as_bytes()).map_err(write_error)
    }

    fn write_blob(&self, bytes: &[u8]) -> anyhow::Result<()> {
        let parent = self.path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
        let mut tmp = tempfile::NamedTempFile::new_in(parent)
            .with_context(|| format!("creating temp file in {}", parent.display()))?;
        tmp.write_all(bytes)
            .with_context(|| format!("writing {}", self.path.display()))?;
        tmp.persist(&self.path)
            .map_err(|e| e.error)
            .with_context(|| format!("replacing {}", self.path.display()))?;
        Ok(())
    }

    /// Deletes the blob entirely. A blob that never existed counts as
    /// cleared.
    pub fn clear(&self) -> Result<(), StoreError> {
        if !self.path.exists() {
            return Ok(());
        }
        fs::remove_file(&self.path).map_err(|error| {
            warn!(path = %self.path.display(), %error, "could not clear entries blob");
            StoreError::Write {
                path: self.path.clone(),
                error: error.into(),
            }
        })
    }
}
