//! Command implementations for mqttctl

pub mod compose;
pub mod listen;
pub mod settings;
pub mod topic;

use crate::error::CliError;
use clap::Subcommand;
use mqtt_publisher_telemetry_config::{PublisherSettings, UserSettings, load_json};
use mqtt_publisher_telemetry_simhub::JsonSnapshot;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Subcommand, Debug)]
pub enum SettingsCommands {
    /// Write settings with a preset's toggle selection
    Preset {
        /// Preset name (none, basic, racing, strategy, all, analysis)
        name: String,
        /// Output settings file
        #[arg(short, long)]
        out: PathBuf,
        /// Existing settings to apply the preset to
        #[arg(short, long)]
        settings: Option<PathBuf>,
    },

    /// Export settings without the password
    Export {
        /// Settings file to export
        #[arg(short, long)]
        settings: PathBuf,
        /// Destination file
        #[arg(short, long)]
        out: PathBuf,
    },

    /// Import exported settings into a settings file
    Import {
        /// Settings file to update (created if missing)
        #[arg(short, long)]
        settings: PathBuf,
        /// Exported settings to import
        #[arg(short, long)]
        from: PathBuf,
    },

    /// Show settings and enabled toggles
    Show {
        /// Settings file (defaults when omitted)
        #[arg(short, long)]
        settings: Option<PathBuf>,
    },
}

/// Read a SimHub snapshot from a JSON file.
pub fn load_snapshot(path: &Path) -> Result<JsonSnapshot, CliError> {
    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CliError::FileNotFound(path.to_path_buf()),
        _ => CliError::IoError(e),
    })?;
    JsonSnapshot::from_slice(&bytes).map_err(|source| CliError::InvalidSnapshot {
        path: path.to_path_buf(),
        source,
    })
}

/// Settings from `path`, or the defaults when no path is given.
pub fn load_settings(path: Option<&Path>) -> Result<PublisherSettings, CliError> {
    match path {
        Some(path) => Ok(load_json(path)?),
        None => Ok(PublisherSettings::default()),
    }
}

/// User identity from `path`, or a fresh one when no path is given.
pub fn load_user(path: Option<&Path>) -> Result<UserSettings, CliError> {
    match path {
        Some(path) => Ok(load_json(path)?),
        None => Ok(UserSettings::default()),
    }
}
