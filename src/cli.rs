use std::path::{Path, PathBuf};

use chrono::Duration;
use clap::{Parser, Subcommand};
use tracing::error;

use crate::{
    backup_service::{models::BackupOutcome, BackupService, FileBackupService},
    config::Config,
    device::find_database,
    export_service::export_highlights,
    time_provider::CoreTimeProvider,
};

const DEVICE_NOT_FOUND: &str =
    "Error: Kobo device not found. Please connect your Kobo or specify the database path with --source.";

/// Kobo e-reader utilities
#[derive(Parser, Debug)]
#[command(name = "kobo-utils")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a JSON config file (default: ./kobo_utils.json if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Backup Kobo e-reader database
    Backup {
        /// Path to the KoboReader.sqlite database file (default: auto-detect)
        #[arg(short, long)]
        source: Option<PathBuf>,
        /// Directory to save the backup (default: ./backups)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Cooldown period in hours (default: 12)
        #[arg(short, long)]
        cooldown: Option<u64>,
    },
    /// Export Kobo highlights to Markdown files
    Export {
        /// Path to the KoboReader.sqlite database file (default: auto-detect)
        #[arg(short, long)]
        source: Option<PathBuf>,
        /// Directory to save the Markdown files
        #[arg(short, long)]
        output: PathBuf,
    },
}

///
/// Runs the parsed command, reporting the result to the user.
/// Returns the process exit status.
///
pub async fn run(cli: Cli) -> u8 {
    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            println!("Error: {e}");
            return 1;
        }
    };

    match cli.command {
        Commands::Backup { source, output, cooldown } => backup(&config, source, output, cooldown).await,
        Commands::Export { source, output } => export(&config, source, &output).await,
    }
}

///
/// Converts a cooldown in hours, saturating at the longest representable duration
///
fn cooldown_from_hours(hours: u64) -> Duration {
    Duration::from_std(std::time::Duration::from_secs(hours.saturating_mul(3600)))
        .unwrap_or(Duration::max_value())
}

fn resolve_source(config: &Config, source: Option<PathBuf>) -> Option<PathBuf> {
    source.or_else(|| find_database(&config.mount_points))
}

async fn backup(config: &Config, source: Option<PathBuf>, output: Option<PathBuf>, cooldown: Option<u64>) -> u8 {
    let Some(source) = resolve_source(config, source) else {
        println!("{DEVICE_NOT_FOUND}");
        return 1;
    };
    let backup_directory = output.unwrap_or_else(|| config.backup_path.clone());
    let cooldown = cooldown_from_hours(cooldown.unwrap_or(config.cooldown_hours));

    let time_provider = CoreTimeProvider::new();
    let svc = FileBackupService::new(source, backup_directory.clone(), cooldown, &time_provider);

    match svc.perform_backup().await {
        Ok(BackupOutcome::Completed(entry)) => {
            println!("Backup successful: {}", backup_directory.join(&entry.backup_file).display());
            0
        },
        Ok(outcome @ BackupOutcome::CooldownActive { .. }) => {
            println!("{outcome}");
            0
        },
        Ok(outcome) => {
            println!("{outcome}");
            1
        },
        Err(e) => {
            error!(error = ?e, "backup aborted");
            println!("Error: {e}");
            1
        },
    }
}

async fn export(config: &Config, source: Option<PathBuf>, output: &Path) -> u8 {
    let Some(source) = resolve_source(config, source) else {
        println!("{DEVICE_NOT_FOUND}");
        return 1;
    };

    match export_highlights(&source, output).await {
        Ok(count) => {
            println!("Successfully exported {count} highlights to {}", output.display());
            0
        },
        Err(e) => {
            error!(error = ?e, "export aborted");
            println!("Error exporting highlights: {e}");
            1
        },
    }
}
