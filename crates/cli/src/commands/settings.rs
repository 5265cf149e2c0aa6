//! `mqttctl settings`: presets, import/export and inspection.

use crate::commands::{SettingsCommands, load_settings};
use crate::error::CliError;
use crate::output;
use anyhow::Result;
use mqtt_publisher_telemetry_config::{Preset, PublisherSettings, save_json};
use std::path::Path;
use tracing::info;

pub fn execute(cmd: &SettingsCommands, json: bool) -> Result<()> {
    match cmd {
        SettingsCommands::Preset {
            name,
            out,
            settings,
        } => preset(name, out, settings.as_deref(), json),
        SettingsCommands::Export { settings, out } => export(settings, out, json),
        SettingsCommands::Import { settings, from } => import(settings, from, json),
        SettingsCommands::Show { settings } => {
            let settings = load_settings(settings.as_deref())?;
            output::print_settings(&settings, json)
        }
    }
}

fn preset(name: &str, out: &Path, base: Option<&Path>, json: bool) -> Result<()> {
    let preset: Preset = name.parse().map_err(CliError::from)?;
    let mut settings = load_settings(base)?;
    settings.policy.apply_preset(preset);
    save_json(out, &settings).map_err(CliError::from)?;
    info!(%preset, path = %out.display(), "preset applied");
    output::print_success(
        &format!(
            "Applied preset '{preset}' ({} toggles) to {}",
            settings.policy.enabled_count(),
            out.display()
        ),
        json,
    )
}

fn export(settings: &Path, out: &Path, json: bool) -> Result<()> {
    let settings = load_settings(Some(settings))?;
    settings.export_to_file(out).map_err(CliError::from)?;
    output::print_success(&format!("Exported settings to {}", out.display()), json)
}

fn import(target: &Path, from: &Path, json: bool) -> Result<()> {
    let mut settings = if target.exists() {
        load_settings(Some(target))?
    } else {
        PublisherSettings::default()
    };
    settings.import_file(from).map_err(CliError::from)?;
    save_json(target, &settings).map_err(CliError::from)?;
    output::print_success(
        &format!("Imported {} into {}", from.display(), target.display()),
        json,
    )
}
