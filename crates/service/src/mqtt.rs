//! Broker-backed [`Publisher`] on top of `rumqttc`.
//!
//! Each [`reconnect`](Publisher::reconnect) builds a fresh client and event
//! loop for the new [`BrokerTarget`] and retires the previous one. The event
//! loop runs on its own task and keeps retrying the broker after connection
//! errors; publishes made while it is down queue up to the request capacity
//! and are rejected after that, so a stalled broker never stalls the tick loop.

use crate::publisher::{BrokerTarget, PublishError, Publisher};
use async_trait::async_trait;
use parking_lot::Mutex;
use rumqttc::{AsyncClient, ConnectionError, Event, EventLoop, MqttOptions, Outgoing, Packet, QoS};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Port used when the server string carries none.
pub const DEFAULT_MQTT_PORT: u16 = 1883;

/// Requests buffered between the client handle and the event loop.
const REQUEST_CAPACITY: usize = 64;

const RETRY_DELAY: Duration = Duration::from_secs(1);

/// Split a `host[:port]` server string, accepting an optional `mqtt://` or
/// `tcp://` scheme.
pub fn parse_server(server: &str) -> (String, u16) {
    let trimmed = server.trim();
    let bare = ["mqtt://", "tcp://"]
        .iter()
        .find_map(|scheme| trimmed.strip_prefix(scheme))
        .unwrap_or(trimmed);
    let bare = bare.trim_end_matches('/');

    match bare.rsplit_once(':') {
        Some((host, port)) if !host.contains(':') => match port.parse::<u16>() {
            Ok(port) => (host.to_string(), port),
            Err(_) => (bare.to_string(), DEFAULT_MQTT_PORT),
        },
        _ => (bare.to_string(), DEFAULT_MQTT_PORT),
    }
}

struct Connection {
    client: AsyncClient,
    server: String,
    event_loop: JoinHandle<()>,
}

/// Publishes to an MQTT broker at QoS 0, like the SimHub plugin does.
pub struct MqttPublisher {
    client_id: String,
    qos: QoS,
    connection: Mutex<Option<Connection>>,
}

impl std::fmt::Debug for MqttPublisher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MqttPublisher")
            .field("client_id", &self.client_id)
            .field("qos", &self.qos)
            .field("server", &self.server())
            .finish()
    }
}

impl Default for MqttPublisher {
    fn default() -> Self {
        Self::new(format!("mqtt-publisher-{}", Uuid::new_v4().simple()))
    }
}

impl MqttPublisher {
    /// A disconnected publisher. `client_id` must be non-empty.
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            qos: QoS::AtMostOnce,
            connection: Mutex::new(None),
        }
    }

    pub fn with_qos(mut self, qos: QoS) -> Self {
        self.qos = qos;
        self
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Server of the current connection, if any.
    pub fn server(&self) -> Option<String> {
        self.connection.lock().as_ref().map(|c| c.server.clone())
    }

    fn options(&self, target: &BrokerTarget) -> MqttOptions {
        let (host, port) = parse_server(&target.server);
        let mut options = MqttOptions::new(self.client_id.clone(), host, port);
        if !target.login.is_empty() {
            options.set_credentials(target.login.clone(), target.password.clone());
        }
        options
    }

    fn retire(old: Connection) {
        if let Err(e) = old.client.try_disconnect() {
            debug!(server = %old.server, error = %e, "old connection already gone");
        }
        old.event_loop.abort();
    }
}

impl Drop for MqttPublisher {
    fn drop(&mut self) {
        if let Some(old) = self.connection.get_mut().take() {
            Self::retire(old);
        }
    }
}

async fn drive(mut event_loop: EventLoop, server: String) {
    loop {
        match event_loop.poll().await {
            Ok(Event::Incoming(Packet::ConnAck(ack))) => {
                info!(%server, code = ?ack.code, "broker connected");
            }
            Ok(Event::Outgoing(Outgoing::Disconnect)) => {
                debug!(%server, "disconnect sent");
                break;
            }
            Ok(event) => {
                debug!(%server, ?event, "mqtt event");
            }
            Err(ConnectionError::RequestsDone) => {
                debug!(%server, "client dropped, event loop finished");
                break;
            }
            Err(e) => {
                warn!(%server, error = %e, "broker connection error, retrying");
                tokio::time::sleep(RETRY_DELAY).await;
            }
        }
    }
}

#[async_trait]
impl Publisher for MqttPublisher {
    async fn publish(&self, topic: &str, payload: &[u8]) -> Result<(), PublishError> {
        let client = self
            .connection
            .lock()
            .as_ref()
            .map(|c| c.client.clone())
            .ok_or_else(|| PublishError::Connection("no broker connection".to_string()))?;
        client
            .try_publish(topic, self.qos, false, payload.to_vec())
            .map_err(|e| PublishError::Rejected {
                topic: topic.to_string(),
                reason: e.to_string(),
            })
    }

    async fn reconnect(&self, target: &BrokerTarget) -> Result<(), PublishError> {
        let (client, event_loop) = AsyncClient::new(self.options(target), REQUEST_CAPACITY);
        let task = tokio::spawn(drive(event_loop, target.server.clone()));
        let fresh = Connection {
            client,
            server: target.server.clone(),
            event_loop: task,
        };
        info!(
            server = %target.server,
            login = %target.login,
            client_id = %self.client_id,
            "connecting to broker"
        );

        let previous = self.connection.lock().replace(fresh);
        if let Some(old) = previous {
            Self::retire(old);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_without_port_uses_default() {
        assert_eq!(
            parse_server("localhost"),
            ("localhost".to_string(), DEFAULT_MQTT_PORT)
        );
    }

    #[test]
    fn server_with_port_and_scheme() {
        assert_eq!(
            parse_server("mqtt://broker.local:8883"),
            ("broker.local".to_string(), 8883)
        );
        assert_eq!(
            parse_server(" 10.0.0.5:1884 "),
            ("10.0.0.5".to_string(), 1884)
        );
    }

    #[test]
    fn unparsable_port_is_kept_in_host() {
        assert_eq!(
            parse_server("broker:abc"),
            ("broker:abc".to_string(), DEFAULT_MQTT_PORT)
        );
    }

    #[tokio::test]
    async fn publish_before_connect_is_a_connection_error() {
        let publisher = MqttPublisher::new("unit-test");
        assert_eq!(publisher.server(), None);
        assert!(matches!(
            publisher.publish("racing/x", b"{}").await,
            Err(PublishError::Connection(_))
        ));
    }
}
