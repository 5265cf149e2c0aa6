//! The outbound publish seam.
//!
//! [`Publisher`] is the only thing the service knows about the broker. The
//! wire client lives behind it; tests and the CLI use the in-process
//! implementations below.

use async_trait::async_trait;
use mqtt_publisher_telemetry_config::PublisherSettings;
use parking_lot::Mutex;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{debug, info};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PublishError {
    #[error("publisher is closed")]
    Closed,

    #[error("broker rejected publish to '{topic}': {reason}")]
    Rejected { topic: String, reason: String },

    #[error("broker connection failed: {0}")]
    Connection(String),
}

/// Broker endpoint and credentials taken from the settings.
#[derive(Clone, PartialEq, Eq)]
pub struct BrokerTarget {
    pub server: String,
    pub login: String,
    pub password: String,
}

impl BrokerTarget {
    pub fn from_settings(settings: &PublisherSettings) -> Self {
        Self {
            server: settings.server.clone(),
            login: settings.login.clone(),
            password: settings.password.clone(),
        }
    }
}

impl std::fmt::Debug for BrokerTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrokerTarget")
            .field("server", &self.server)
            .field("login", &self.login)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Delivers one serialised payload to one topic.
#[async_trait]
pub trait Publisher: Send + Sync {
    async fn publish(&self, topic: &str, payload: &[u8]) -> Result<(), PublishError>;

    /// Point the publisher at a new broker. Called when the connection
    /// settings change; the default keeps the current connection.
    async fn reconnect(&self, target: &BrokerTarget) -> Result<(), PublishError> {
        debug!(server = %target.server, "publisher has no connection to replace");
        Ok(())
    }
}

#[async_trait]
impl<P: Publisher + ?Sized> Publisher for Arc<P> {
    async fn publish(&self, topic: &str, payload: &[u8]) -> Result<(), PublishError> {
        (**self).publish(topic, payload).await
    }

    async fn reconnect(&self, target: &BrokerTarget) -> Result<(), PublishError> {
        (**self).reconnect(target).await
    }
}

// ─── Logging publisher ───────────────────────────────────────────────────────

/// Writes every publication to the log instead of a broker.
#[derive(Debug, Default)]
pub struct TracingPublisher {
    target: Mutex<Option<BrokerTarget>>,
    include_payload: bool,
}

impl TracingPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Log the payload text as well as its size.
    pub fn with_payload(mut self, include: bool) -> Self {
        self.include_payload = include;
        self
    }

    pub fn server(&self) -> Option<String> {
        self.target.lock().as_ref().map(|t| t.server.clone())
    }
}

#[async_trait]
impl Publisher for TracingPublisher {
    async fn publish(&self, topic: &str, payload: &[u8]) -> Result<(), PublishError> {
        let server = self.server().unwrap_or_default();
        if self.include_payload {
            info!(
                %server,
                topic,
                payload = %String::from_utf8_lossy(payload),
                "publish"
            );
        } else {
            info!(%server, topic, bytes = payload.len(), "publish");
        }
        Ok(())
    }

    async fn reconnect(&self, target: &BrokerTarget) -> Result<(), PublishError> {
        info!(server = %target.server, login = %target.login, "broker target set");
        *self.target.lock() = Some(target.clone());
        Ok(())
    }
}

// ─── Channel publisher ───────────────────────────────────────────────────────

/// One delivered message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Publication {
    pub topic: String,
    pub payload: Vec<u8>,
}

impl Publication {
    pub fn payload_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.payload).ok()
    }
}

/// Forwards publications over an unbounded channel.
///
/// Fails with [`PublishError::Closed`] once the receiver is dropped.
#[derive(Debug, Clone)]
pub struct ChannelPublisher {
    tx: mpsc::UnboundedSender<Publication>,
    reconnects: Arc<Mutex<Vec<BrokerTarget>>>,
}

impl ChannelPublisher {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Publication>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let publisher = Self {
            tx,
            reconnects: Arc::new(Mutex::new(Vec::new())),
        };
        (publisher, rx)
    }

    /// Broker targets passed to [`Publisher::reconnect`], oldest first.
    pub fn reconnects(&self) -> Vec<BrokerTarget> {
        self.reconnects.lock().clone()
    }
}

#[async_trait]
impl Publisher for ChannelPublisher {
    async fn publish(&self, topic: &str, payload: &[u8]) -> Result<(), PublishError> {
        self.tx
            .send(Publication {
                topic: topic.to_string(),
                payload: payload.to_vec(),
            })
            .map_err(|_closed| PublishError::Closed)
    }

    async fn reconnect(&self, target: &BrokerTarget) -> Result<(), PublishError> {
        self.reconnects.lock().push(target.clone());
        Ok(())
    }
}
