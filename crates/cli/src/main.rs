//! mqttctl - SimHub MQTT publisher CLI
//!
//! Compose telemetry payloads and topics from SimHub snapshot files, manage
//! publisher settings, and run the publish loop on SimHub's UDP stream.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod commands;
mod error;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use mqtt_publisher_telemetry_simhub::SIMHUB_PORT;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::SettingsCommands;
use crate::commands::compose::ComposeArgs;
use crate::commands::listen::ListenArgs;
use crate::error::CliError;

#[derive(Parser, Debug)]
#[command(name = "mqttctl")]
#[command(about = "SimHub MQTT publisher CLI - compose, inspect and publish telemetry payloads")]
#[command(version)]
#[command(long_about = "
mqttctl composes the sparse telemetry payloads the SimHub MQTT publisher sends,
resolves topic templates, and manages publisher settings files.

Use --json for machine-readable output suitable for scripting.
")]
struct Cli {
    /// Output in JSON format for machine parsing
    #[arg(long, global = true)]
    json: bool,

    /// Verbose logging
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compose the payload for a snapshot file
    Compose {
        /// SimHub snapshot JSON
        #[arg(long)]
        snapshot: PathBuf,
        /// Publisher settings (defaults when omitted)
        #[arg(long)]
        settings: Option<PathBuf>,
        /// User id stamped on the payload (random when omitted)
        #[arg(long)]
        user_id: Option<String>,
        /// Fixed payload time in epoch milliseconds
        #[arg(long)]
        timestamp_ms: Option<i64>,
        /// Pretty-print the payload
        #[arg(long)]
        pretty: bool,
    },

    /// Resolve a topic template for a snapshot file
    Topic {
        /// SimHub snapshot JSON
        #[arg(long)]
        snapshot: PathBuf,
        /// Template to resolve
        #[arg(long, conflicts_with = "settings")]
        template: Option<String>,
        /// Take the template from a settings file
        #[arg(long)]
        settings: Option<PathBuf>,
    },

    /// Settings presets, import and export
    #[command(subcommand)]
    Settings(SettingsCommands),

    /// Publish SimHub UDP data to the broker, or to the log
    Listen {
        /// UDP port SimHub sends to
        #[arg(short, long, default_value_t = SIMHUB_PORT)]
        port: u16,
        /// Publisher settings (defaults when omitted)
        #[arg(long)]
        settings: Option<PathBuf>,
        /// User settings holding the user id
        #[arg(long)]
        user_settings: Option<PathBuf>,
        /// Publish to the broker named in the settings instead of logging
        #[arg(long)]
        broker: bool,
        /// Log each payload's text (logging publisher only)
        #[arg(long, conflicts_with = "broker")]
        show_payload: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let default_filter = ["mqttctl", "mqtt_publisher_service", "mqtt_publisher_telemetry_simhub"]
        .map(|target| format!("{target}={log_level}"))
        .join(",");

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match execute_command(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                output::print_error_json(&e);
            } else {
                output::print_error_human(&e);
            }
            let code = e.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            ExitCode::from(code)
        }
    }
}

async fn execute_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Compose {
            snapshot,
            settings,
            user_id,
            timestamp_ms,
            pretty,
        } => commands::compose::execute(&ComposeArgs {
            snapshot,
            settings: settings.as_deref(),
            user_id: user_id.as_deref(),
            timestamp_ms: *timestamp_ms,
            pretty: *pretty,
        }),
        Commands::Topic {
            snapshot,
            template,
            settings,
        } => commands::topic::execute(
            snapshot,
            template.as_deref(),
            settings.as_deref(),
            cli.json,
        ),
        Commands::Settings(cmd) => commands::settings::execute(cmd, cli.json),
        Commands::Listen {
            port,
            settings,
            user_settings,
            broker,
            show_payload,
        } => {
            let args = ListenArgs {
                port: *port,
                settings: settings.as_deref(),
                user_settings: user_settings.as_deref(),
                broker: *broker,
                show_payload: *show_payload,
            };
            commands::listen::execute(&args, cli.json).await
        }
    }
}
