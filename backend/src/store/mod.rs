//! # Ad Store
//!
//! Durable storage of the ad collection as a single pretty-printed JSON array.
//!
//! The store has no partial updates: callers read the whole collection, change it
//! in memory and write the whole collection back. Serialising those
//! read-modify-write cycles is the caller's job (see `AppState::write_gate`).
//!
//! - `read_all` returns an empty collection when the document is missing or blank,
//!   and fails with `StoreError::Corrupted` when it is not a valid JSON array of ads.
//! - `write_all` writes to a sibling `*.tmp` file and renames it over the document,
//!   so a failed write never truncates the previous content.

use common::model::ad::Ad;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("ads document {path} is corrupted: {source}")]
    Corrupted {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("I/O failure on ads document {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not encode ads: {0}")]
    Encode(#[from] serde_json::Error),
}

pub struct AdStore {
    path: PathBuf,
}

impl AdStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read_all(&self) -> Result<Vec<Ad>, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.io_error(e)),
        };

        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&raw).map_err(|source| StoreError::Corrupted {
            path: self.path.clone(),
            source,
        })
    }

    pub fn write_all(&self, ads: &[Ad]) -> Result<(), StoreError> {
        let encoded = serde_json::to_string_pretty(ads)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let tmp_path = self.tmp_path();
        let written = File::create(&tmp_path).and_then(|mut file| {
            file.write_all(encoded.as_bytes())?;
            file.write_all(b"\n")?;
            file.sync_all()
        });

        if let Err(e) = written.and_then(|_| fs::rename(&tmp_path, &self.path)) {
            let _ = fs::remove_file(&tmp_path);
            return Err(self.io_error(e));
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "ads.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
