//! CSV-backed user store.
//!
//! Sign-ups are appended as plaintext rows to a single flat file. The file is
//! never read back by the service; the only write-time decision is whether the
//! header line is still missing.

pub mod models;

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};

pub use models::UserRecord;

/// Append-only store writing one CSV row per accepted sign-up.
#[derive(Debug, Clone)]
pub struct CsvStore {
    /// Path to the CSV file.
    path: PathBuf,
}

impl CsvStore {
    /// Create a store for the given CSV path. No file is touched until the
    /// first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing CSV file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record to the CSV file.
    ///
    /// If the file does not exist yet, the `Username,Email,Password` header
    /// is written first. The header decision is a presence check only; an
    /// existing file is trusted to already carry its header.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be encoded or the file cannot be
    /// created or written.
    pub fn append(&self, record: &UserRecord) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let needs_header = !self.path.is_file();

        // Encode header and row into a buffer first so each sign-up lands in
        // the file as a single append-mode write.
        let mut buf = Vec::new();
        {
            let mut writer = csv::WriterBuilder::new()
                .has_headers(needs_header)
                .from_writer(&mut buf);
            writer.serialize(record)?;
            writer.flush()?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| Error::StoreOpen {
                path: self.path.clone(),
                source,
            })?;
        file.write_all(&buf)?;

        debug!(path = %self.path.display(), "appended user record");
        Ok(())
    }
}
