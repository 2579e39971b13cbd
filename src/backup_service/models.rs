use std::fmt::Display;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

///
/// Format of every timestamp written to the backup log and embedded in backup filenames.
/// Sorts lexicographically in chronological order.
///
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct BackupLogEntry {
    pub timestamp: String,
    pub backup_file: String,
}

impl BackupLogEntry {
    pub fn new(ts: NaiveDateTime) -> Self {
        let timestamp = ts.format(TIMESTAMP_FORMAT).to_string();
        let backup_file = format!("KoboReader_{timestamp}.sqlite");
        Self { timestamp, backup_file }
    }
}

#[derive(Debug)]
pub enum BackupOutcome {
    Completed(BackupLogEntry),
    DeviceNotPresent,
    // `next_eligible` is `None` when the cooldown reaches past the latest representable date
    CooldownActive { last_backup: NaiveDateTime, next_eligible: Option<NaiveDateTime> },
    CopyFailed(std::io::Error),
}

impl BackupOutcome {
    pub fn success(&self) -> bool {
        matches!(self, BackupOutcome::Completed(_))
    }
}

impl Display for BackupOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackupOutcome::Completed(entry) => write!(f, "Backup successful: {}", entry.backup_file),
            BackupOutcome::DeviceNotPresent => write!(f, "Kobo is not connected."),
            BackupOutcome::CooldownActive { next_eligible: Some(next_eligible), .. } => write!(
                f, "Backup skipped: within cooldown period (next backup after {}).",
                next_eligible.format("%Y-%m-%d %H:%M:%S")
            ),
            BackupOutcome::CooldownActive { next_eligible: None, .. } =>
                write!(f, "Backup skipped: within cooldown period."),
            BackupOutcome::CopyFailed(e) => write!(f, "Error during backup: {e}"),
        }
    }
}
