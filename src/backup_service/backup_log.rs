use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::debug;

use super::error::*;
use super::models::{BackupLogEntry, TIMESTAMP_FORMAT};

pub const LOG_FILE_NAME: &str = "backup_log.json";

///
/// The append-only JSON record of completed backups, stored beside the backups themselves.
/// Single writer; every append rewrites the whole document.
///
pub struct BackupLog {
    log_file_path: PathBuf,
}

impl BackupLog {
    pub fn new(backup_directory: &Path) -> Self {
        Self { log_file_path: backup_directory.join(LOG_FILE_NAME) }
    }

    #[cfg(test)]
    pub fn path(&self) -> &Path {
        &self.log_file_path
    }

    ///
    /// Creates the log as an empty array if it does not exist yet.
    /// An existing log is left untouched.
    ///
    pub async fn initialize(&self) -> Result<()> {
        if !tokio::fs::try_exists(&self.log_file_path).await? {
            debug!(path = %self.log_file_path.display(), "initializing empty backup log");
            self.write_entries(&[]).await?;
        }
        Ok(())
    }

    ///
    /// Loads every entry, in the order they were appended
    ///
    pub async fn entries(&self) -> Result<Vec<BackupLogEntry>> {
        let contents = tokio::fs::read(&self.log_file_path).await?;
        Ok(serde_json::from_slice(&contents)?)
    }

    ///
    /// Gets the time of the most recent backup, or `None` if nothing has been backed up
    ///
    pub async fn read_last_timestamp(&self) -> Result<Option<NaiveDateTime>> {
        let Some(last) = self.entries().await?.pop() else {
            return Ok(None);
        };

        NaiveDateTime::parse_from_str(&last.timestamp, TIMESTAMP_FORMAT)
            .map(Some)
            .map_err(|source| Error::InvalidTimestamp { timestamp: last.timestamp, source })
    }

    ///
    /// Appends a single entry, persisting the full sequence back to disk
    ///
    pub async fn append(&self, entry: BackupLogEntry) -> Result<()> {
        let mut entries = self.entries().await?;
        entries.push(entry);
        self.write_entries(&entries).await
    }

    async fn write_entries(&self, entries: &[BackupLogEntry]) -> Result<()> {
        let mut buf = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        entries.serialize(&mut ser)?;

        tokio::fs::write(&self.log_file_path, buf).await?;
        Ok(())
    }
}
