//! `mqttctl topic`: resolve a topic template against a snapshot file.

use crate::commands::{load_settings, load_snapshot};
use anyhow::Result;
use mqtt_publisher_telemetry_topic::TopicTemplate;
use serde_json::json;
use std::path::Path;

pub fn execute(
    snapshot: &Path,
    template: Option<&str>,
    settings: Option<&Path>,
    json: bool,
) -> Result<()> {
    let snapshot = load_snapshot(snapshot)?;
    let template = match template {
        Some(t) => TopicTemplate::new(t),
        None => TopicTemplate::new(load_settings(settings)?.topic),
    };
    let topic = template.resolve(&snapshot);

    if json {
        let output = json!({
            "success": true,
            "template": template.as_str(),
            "topic": topic,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{topic}");
    }
    Ok(())
}
