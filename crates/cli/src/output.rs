//! Output formatting for CLI responses

use anyhow::{Error, Result};
use colored::*;
use mqtt_publisher_service::ServiceStats;
use mqtt_publisher_telemetry_config::{PublisherSettings, ToggleGroup};
use serde_json::json;

use crate::error::CliError;

/// Print error in JSON format
pub fn print_error_json(error: &Error) {
    let error_json = json!({
        "success": false,
        "error": {
            "message": error.to_string(),
            "type": error_type_name(error)
        }
    });
    match serde_json::to_string_pretty(&error_json) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("Failed to format error as JSON: {e}"),
    }
}

/// Print error in human-readable format
pub fn print_error_human(error: &Error) {
    eprintln!("{} {}", "Error:".red().bold(), error);

    let mut source = error.source();
    while let Some(err) = source {
        eprintln!("  {} {}", "Caused by:".yellow(), err);
        source = err.source();
    }
}

fn error_type_name(error: &Error) -> &'static str {
    match error.downcast_ref::<CliError>() {
        Some(CliError::FileNotFound(_)) => "file_not_found",
        Some(CliError::InvalidSnapshot { .. }) => "invalid_snapshot",
        Some(CliError::InvalidSettings(_)) => "invalid_settings",
        Some(CliError::InvalidArgument(_)) => "invalid_argument",
        Some(CliError::IoError(_)) => "io_error",
        Some(CliError::JsonError(_)) => "json_error",
        None => "error",
    }
}

pub fn print_success(message: &str, json: bool) -> Result<()> {
    if json {
        let output = json!({ "success": true, "message": message });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{} {}", "✓".green(), message);
    }
    Ok(())
}

/// Print settings. The password is never shown.
pub fn print_settings(settings: &PublisherSettings, json: bool) -> Result<()> {
    if json {
        println!("{}", settings.export_json().map_err(CliError::from)?);
        return Ok(());
    }

    println!("{}", "Broker:".bold());
    println!("  Server: {}", settings.server);
    println!("  Login:  {}", settings.login);
    println!("  Topic:  {}", settings.topic.cyan());
    println!(
        "{} {} enabled",
        "Toggles:".bold(),
        settings.policy.enabled_count()
    );
    for group in ToggleGroup::ALL {
        let enabled: Vec<&str> = group
            .toggles()
            .filter(|t| settings.policy.is_enabled(*t))
            .map(|t| t.key())
            .collect();
        if enabled.is_empty() {
            println!("  {} {}", "○".dimmed(), group.name().dimmed());
        } else {
            println!("  {} {}: {}", "●".green(), group.name(), enabled.join(", "));
        }
    }
    Ok(())
}

pub fn print_stats(stats: &ServiceStats, json: bool) -> Result<()> {
    if json {
        let output = json!({
            "success": true,
            "received": stats.received,
            "published": stats.published,
            "skipped": stats.skipped,
            "failed": stats.failed,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!(
            "{} received {}, published {}, skipped {}, failed {}",
            "Stopped:".bold(),
            stats.received,
            stats.published.to_string().green(),
            stats.skipped,
            if stats.failed > 0 {
                stats.failed.to_string().red()
            } else {
                stats.failed.to_string().normal()
            }
        );
    }
    Ok(())
}
