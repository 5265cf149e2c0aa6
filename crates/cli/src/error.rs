//! Error types for mqttctl

use mqtt_publisher_telemetry_config::ConfigError;
use mqtt_publisher_telemetry_simhub::SnapshotError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Invalid snapshot {}: {source}", path.display())]
    InvalidSnapshot {
        path: PathBuf,
        #[source]
        source: SnapshotError,
    },

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::FileNotFound(_) => 2,
            CliError::InvalidSnapshot { .. }
            | CliError::InvalidSettings(_)
            | CliError::InvalidArgument(_)
            | CliError::JsonError(_) => 4,
            CliError::IoError(_) => 1,
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(error: ConfigError) -> Self {
        match error {
            ConfigError::NotFound(path) => CliError::FileNotFound(path),
            ConfigError::Io { source, .. } => CliError::IoError(source),
            ConfigError::InvalidJson(e) => CliError::InvalidSettings(e.to_string()),
            unknown @ ConfigError::UnknownPreset(_) => {
                CliError::InvalidArgument(unknown.to_string())
            }
        }
    }
}
