pub mod backup_log;
pub mod error;
pub mod models;

use std::path::{Path, PathBuf};

use chrono::Duration;
use filetime::{set_file_times, FileTime};
use tracing::{debug, error, info, warn};

use self::backup_log::BackupLog;
use self::error::*;
use self::models::{BackupLogEntry, BackupOutcome};
use crate::time_provider::TimeProvider;

pub trait BackupService {
    ///
    /// Copies the source database into the backup directory if it is present and the
    /// cooldown since the last logged backup has elapsed, then records the copy in the log.
    /// Declines and copy failures are reported through the `BackupOutcome`;
    /// only problems with the log itself are returned as errors.
    ///
    fn perform_backup(&self) -> impl std::future::Future<Output = Result<BackupOutcome>> + Send;
}

pub struct FileBackupService<'a> {
    source_file: PathBuf,
    backup_directory: PathBuf,
    cooldown: Duration,
    log: BackupLog,
    time_provider: &'a dyn TimeProvider,
}

impl<'a> FileBackupService<'a> {
    pub fn new(
        source_file: PathBuf, backup_directory: PathBuf, cooldown: Duration, time_provider: &'a dyn TimeProvider
    ) -> Self {
        let log = BackupLog::new(&backup_directory);
        Self { source_file, backup_directory, cooldown, log, time_provider }
    }

    #[cfg(test)]
    pub fn log(&self) -> &BackupLog {
        &self.log
    }

    async fn copy_source(&self, to_file: &Path) -> std::io::Result<()> {
        tokio::fs::copy(&self.source_file, to_file).await?;

        // Timestamps are carried over best effort; the copy itself already succeeded
        let metadata = tokio::fs::metadata(&self.source_file).await?;
        let atime = FileTime::from_last_access_time(&metadata);
        let mtime = FileTime::from_last_modification_time(&metadata);
        if let Err(e) = set_file_times(to_file, atime, mtime) {
            warn!(path = %to_file.display(), error = %e, "could not preserve source file times");
        }

        Ok(())
    }
}

impl<'a> BackupService for FileBackupService<'a> {
    async fn perform_backup(&self) -> Result<BackupOutcome> {
        tokio::fs::create_dir_all(&self.backup_directory).await?;
        self.log.initialize().await?;
        let last_backup = self.log.read_last_timestamp().await?;

        if !tokio::fs::try_exists(&self.source_file).await.unwrap_or(false) {
            info!(source = %self.source_file.display(), "source database not present");
            return Ok(BackupOutcome::DeviceNotPresent);
        }

        let now = self.time_provider.naive_local_now();
        if let Some(last_backup) = last_backup {
            if now - last_backup <= self.cooldown {
                let next_eligible = last_backup.checked_add_signed(self.cooldown);
                info!(%last_backup, ?next_eligible, "backup skipped, cooldown active");
                return Ok(BackupOutcome::CooldownActive { last_backup, next_eligible });
            }
        }

        let entry = BackupLogEntry::new(now);
        let to_file = self.backup_directory.join(&entry.backup_file);
        debug!(from = %self.source_file.display(), to = %to_file.display(), "copying database");

        if let Err(e) = self.copy_source(&to_file).await {
            error!(error = %e, "backup copy failed");
            if let Err(rm) = tokio::fs::remove_file(&to_file).await {
                debug!(error = %rm, "no partial backup to remove");
            }
            return Ok(BackupOutcome::CopyFailed(e));
        }

        self.log.append(entry.clone()).await?;
        info!(backup_file = %entry.backup_file, "backup completed");

        Ok(BackupOutcome::Completed(entry))
    }
}
