//! Inclusion policy and publisher settings.
//!
//! - `toggle` - the catalogue of ~90 named toggles and their domain groups
//! - `policy` - [`InclusionPolicy`] bitset and [`Preset`] selections
//! - `settings` - broker/user settings, JSON files, import/export

pub mod policy;
pub mod settings;
pub mod toggle;

pub use policy::{InclusionPolicy, Preset};
pub use settings::{
    DEFAULT_LOGIN, DEFAULT_PASSWORD, DEFAULT_SERVER, DEFAULT_TOPIC, PublisherSettings,
    UserSettings, load_json, save_json,
};
pub use toggle::{Toggle, ToggleGroup};

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Settings file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid settings JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Unknown preset '{0}' (expected one of: none, basic, racing, strategy, all, analysis)")]
    UnknownPreset(String),
}
