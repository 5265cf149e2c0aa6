//! `mqttctl listen`: run the publish loop on SimHub's UDP stream.

use crate::commands::{load_settings, load_user};
use crate::output;
use anyhow::Result;
use mqtt_publisher_service::{MqttPublisher, Publisher, PublisherService, TracingPublisher};
use mqtt_publisher_telemetry_config::{PublisherSettings, UserSettings};
use mqtt_publisher_telemetry_simhub::SimHubListener;
use std::path::Path;
use tracing::info;

pub struct ListenArgs<'a> {
    pub port: u16,
    pub settings: Option<&'a Path>,
    pub user_settings: Option<&'a Path>,
    /// Publish to the configured broker instead of the log.
    pub broker: bool,
    pub show_payload: bool,
}

pub async fn execute(args: &ListenArgs<'_>, json: bool) -> Result<()> {
    let settings = load_settings(args.settings)?;
    let user = load_user(args.user_settings)?;
    let listener = SimHubListener::new().with_port(args.port);

    if args.broker {
        let client_id = format!("simhub-mqtt-{}", user.user_id.simple());
        serve(MqttPublisher::new(client_id), settings, user, &listener, json).await
    } else {
        let publisher = TracingPublisher::new().with_payload(args.show_payload);
        serve(publisher, settings, user, &listener, json).await
    }
}

async fn serve<P: Publisher>(
    publisher: P,
    settings: PublisherSettings,
    user: UserSettings,
    listener: &SimHubListener,
    json: bool,
) -> Result<()> {
    let service = PublisherService::new(publisher, settings, user);
    service.connect().await?;
    info!(addr = %listener.bind_addr(), user_id = %service.user_id(), "listening for SimHub data");

    let stats = tokio::select! {
        result = service.serve(listener) => result?,
        signal = tokio::signal::ctrl_c() => {
            signal?;
            info!("interrupted");
            service.stats()
        }
    };
    output::print_stats(&stats, json)
}
