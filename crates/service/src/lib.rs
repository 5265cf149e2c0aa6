//! MQTT publisher service.
//!
//! Wires the telemetry stack together: each SimHub snapshot is composed into
//! a payload under the current [`PublisherSettings`], its topic template is
//! resolved, and the result goes to a [`Publisher`].
//!
//! [`PublisherSettings`]: mqtt_publisher_telemetry_config::PublisherSettings

#![deny(static_mut_refs)]

pub mod mqtt;
pub mod publisher;
pub mod publisher_service;

pub use mqtt::{DEFAULT_MQTT_PORT, MqttPublisher, parse_server};
pub use publisher::{
    BrokerTarget, ChannelPublisher, PublishError, Publication, Publisher, TracingPublisher,
};
pub use publisher_service::{PublisherService, ServiceError, ServiceStats, TickOutcome};
