//! Per-tick compose, resolve and publish.

use crate::publisher::{BrokerTarget, PublishError, Publication, Publisher};
use mqtt_publisher_telemetry_config::{PublisherSettings, UserSettings};
use mqtt_publisher_telemetry_core::FieldSource;
use mqtt_publisher_telemetry_payload::{PayloadDocument, PayloadError};
use mqtt_publisher_telemetry_simhub::{SimHubListener, SnapshotFrame};
use mqtt_publisher_telemetry_topic::resolve_topic;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    Payload(#[from] PayloadError),

    #[error(transparent)]
    Publish(#[from] PublishError),

    #[error("failed to start SimHub listener: {0}")]
    Listener(#[from] std::io::Error),
}

/// What happened to one snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    Published { topic: String, bytes: usize },
    /// The producing game was not running.
    Skipped,
}

/// Counters since the service was created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServiceStats {
    pub received: u64,
    pub published: u64,
    pub skipped: u64,
    pub failed: u64,
}

#[derive(Debug, Default)]
struct Counters {
    received: AtomicU64,
    published: AtomicU64,
    skipped: AtomicU64,
    failed: AtomicU64,
}

impl Counters {
    fn bump(counter: &AtomicU64) {
        counter.fetch_add(1, Ordering::Relaxed);
    }

    fn snapshot(&self) -> ServiceStats {
        ServiceStats {
            received: self.received.load(Ordering::Relaxed),
            published: self.published.load(Ordering::Relaxed),
            skipped: self.skipped.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
        }
    }
}

/// Turns telemetry snapshots into publications.
///
/// Settings can be swapped between ticks with
/// [`update_settings`](Self::update_settings); each tick reads them once, so
/// a composition never sees a half-applied change.
pub struct PublisherService<P> {
    publisher: P,
    settings: RwLock<PublisherSettings>,
    user: UserSettings,
    counters: Counters,
}

impl<P: Publisher> PublisherService<P> {
    pub fn new(publisher: P, settings: PublisherSettings, user: UserSettings) -> Self {
        Self {
            publisher,
            settings: RwLock::new(settings),
            user,
            counters: Counters::default(),
        }
    }

    pub fn publisher(&self) -> &P {
        &self.publisher
    }

    pub fn settings(&self) -> PublisherSettings {
        self.settings.read().clone()
    }

    pub fn user_id(&self) -> Uuid {
        self.user.user_id
    }

    pub fn stats(&self) -> ServiceStats {
        self.counters.snapshot()
    }

    /// Connect the publisher to the configured broker.
    pub async fn connect(&self) -> Result<(), ServiceError> {
        let target = BrokerTarget::from_settings(&self.settings.read());
        info!(server = %target.server, "connecting publisher");
        self.publisher.reconnect(&target).await?;
        Ok(())
    }

    /// Replace the settings. The publisher is reconnected only when the
    /// broker endpoint or credentials changed.
    pub async fn update_settings(&self, settings: PublisherSettings) -> Result<(), ServiceError> {
        let target = BrokerTarget::from_settings(&settings);
        let reconnect = {
            let mut current = self.settings.write();
            let changed = BrokerTarget::from_settings(&current) != target;
            *current = settings;
            changed
        };
        debug!(reconnect, "settings updated");
        if reconnect {
            self.publisher.reconnect(&target).await?;
        }
        Ok(())
    }

    /// Compose the payload and resolve the topic for one snapshot, without
    /// publishing. `None` when the game is not running.
    pub fn prepare(&self, source: &dyn FieldSource) -> Result<Option<Publication>, ServiceError> {
        if !source.is_game_running() {
            return Ok(None);
        }
        let (policy, template) = {
            let settings = self.settings.read();
            (settings.policy, settings.topic.clone())
        };
        let payload = PayloadDocument::compose(source, &self.user.user_id, &policy).to_vec()?;
        let topic = resolve_topic(&template, source);
        Ok(Some(Publication { topic, payload }))
    }

    /// Prepare and publish one snapshot.
    pub async fn handle_snapshot<S>(&self, source: &S) -> Result<TickOutcome, ServiceError>
    where
        S: FieldSource + Sync,
    {
        Counters::bump(&self.counters.received);
        let prepared = self.prepare(source);
        let publication = match prepared {
            Ok(Some(publication)) => publication,
            Ok(None) => {
                Counters::bump(&self.counters.skipped);
                return Ok(TickOutcome::Skipped);
            }
            Err(e) => {
                Counters::bump(&self.counters.failed);
                return Err(e);
            }
        };

        match self
            .publisher
            .publish(&publication.topic, &publication.payload)
            .await
        {
            Ok(()) => {
                Counters::bump(&self.counters.published);
                Ok(TickOutcome::Published {
                    bytes: publication.payload.len(),
                    topic: publication.topic,
                })
            }
            Err(e) => {
                Counters::bump(&self.counters.failed);
                Err(e.into())
            }
        }
    }

    /// Publish every frame from `frames` until the channel closes or the
    /// publisher is closed.
    pub async fn run(&self, mut frames: mpsc::Receiver<SnapshotFrame>) -> ServiceStats {
        info!("publish loop started");
        while let Some(frame) = frames.recv().await {
            match self.handle_snapshot(&frame.snapshot).await {
                Ok(TickOutcome::Published { topic, bytes }) => {
                    debug!(sequence = frame.sequence, %topic, bytes, "frame published");
                }
                Ok(TickOutcome::Skipped) => {
                    debug!(sequence = frame.sequence, "game not running, frame skipped");
                }
                Err(ServiceError::Publish(PublishError::Closed)) => {
                    warn!("publisher closed, stopping publish loop");
                    break;
                }
                Err(e) => {
                    warn!(sequence = frame.sequence, error = %e, "frame not published");
                }
            }
        }
        let stats = self.stats();
        info!(
            received = stats.received,
            published = stats.published,
            skipped = stats.skipped,
            failed = stats.failed,
            "publish loop stopped"
        );
        stats
    }

    /// Start `listener` and run the publish loop on its frames.
    pub async fn serve(&self, listener: &SimHubListener) -> Result<ServiceStats, ServiceError> {
        let frames = listener.start().await?;
        Ok(self.run(frames).await)
    }
}
