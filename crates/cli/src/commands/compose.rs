//! `mqttctl compose`: build one payload from a snapshot file.

use crate::commands::{load_settings, load_snapshot};
use crate::error::CliError;
use anyhow::Result;
use mqtt_publisher_telemetry_payload::PayloadDocument;
use std::path::Path;
use tracing::debug;
use uuid::Uuid;

pub struct ComposeArgs<'a> {
    pub snapshot: &'a Path,
    pub settings: Option<&'a Path>,
    pub user_id: Option<&'a str>,
    pub timestamp_ms: Option<i64>,
    pub pretty: bool,
}

pub fn execute(args: &ComposeArgs<'_>) -> Result<()> {
    let snapshot = load_snapshot(args.snapshot)?;
    let settings = load_settings(args.settings)?;
    let user_id = match args.user_id {
        Some(text) => Uuid::parse_str(text)
            .map_err(|e| CliError::InvalidArgument(format!("--user-id '{text}': {e}")))?,
        None => Uuid::new_v4(),
    };
    debug!(
        fields = snapshot.len(),
        enabled = settings.policy.enabled_count(),
        "composing payload"
    );

    let doc = match args.timestamp_ms {
        Some(ms) => PayloadDocument::compose_at(&snapshot, &user_id, &settings.policy, ms),
        None => PayloadDocument::compose(&snapshot, &user_id, &settings.policy),
    };
    let text = if args.pretty {
        doc.to_json_pretty()?
    } else {
        doc.to_json()?
    };
    println!("{text}");
    Ok(())
}
