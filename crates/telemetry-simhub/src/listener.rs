//! UDP receiver for SimHub's JSON property stream (port 5555).

use crate::snapshot::{JsonSnapshot, SnapshotError};
use mqtt_publisher_telemetry_core::telemetry_now_ns;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

pub const SIMHUB_PORT: u16 = 5555;

/// SimHub property dumps are far larger than the fixed-layout game packets.
pub const MAX_PACKET_SIZE: usize = 65_507;

const FRAME_CHANNEL_CAPACITY: usize = 64;

/// A decoded snapshot with receive metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotFrame {
    pub snapshot: JsonSnapshot,
    /// Monotonic receive time, see [`telemetry_now_ns`].
    pub timestamp_ns: u64,
    pub sequence: u64,
    /// Datagram length in bytes.
    pub raw_size: usize,
}

impl SnapshotFrame {
    pub fn new(snapshot: JsonSnapshot, timestamp_ns: u64, sequence: u64, raw_size: usize) -> Self {
        Self {
            snapshot,
            timestamp_ns,
            sequence,
            raw_size,
        }
    }
}

/// Decode one datagram into a frame.
pub fn decode_datagram(data: &[u8], sequence: u64) -> Result<SnapshotFrame, SnapshotError> {
    let snapshot = JsonSnapshot::from_slice(data)?;
    Ok(SnapshotFrame::new(
        snapshot,
        telemetry_now_ns(),
        sequence,
        data.len(),
    ))
}

#[derive(Debug, Clone)]
pub struct SimHubListener {
    bind_addr: SocketAddr,
    update_rate: Duration,
}

impl SimHubListener {
    pub fn new() -> Self {
        Self {
            bind_addr: SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, SIMHUB_PORT)),
            update_rate: Duration::from_millis(16),
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.bind_addr.set_port(port);
        self
    }

    pub fn with_bind_addr(mut self, addr: SocketAddr) -> Self {
        self.bind_addr = addr;
        self
    }

    pub fn with_update_rate(mut self, rate: Duration) -> Self {
        self.update_rate = rate;
        self
    }

    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Bind the socket and start forwarding decoded frames.
    ///
    /// Undecodable datagrams are logged and dropped. The receive task ends
    /// when the returned receiver is dropped.
    pub async fn start(&self) -> std::io::Result<mpsc::Receiver<SnapshotFrame>> {
        let socket = UdpSocket::bind(self.bind_addr).await?;
        Ok(self.spawn_on(socket))
    }

    /// Forward frames from an already-bound socket.
    pub fn spawn_on(&self, socket: UdpSocket) -> mpsc::Receiver<SnapshotFrame> {
        let (tx, rx) = mpsc::channel(FRAME_CHANNEL_CAPACITY);
        let idle_timeout = self.update_rate.saturating_mul(10);

        tokio::spawn(async move {
            match socket.local_addr() {
                Ok(addr) => info!("SimHub listener receiving on UDP {addr}"),
                Err(e) => warn!("SimHub listener bound to unknown address: {e}"),
            }
            let mut buf = vec![0u8; MAX_PACKET_SIZE];
            let mut sequence = 0u64;

            loop {
                match tokio::time::timeout(idle_timeout, socket.recv(&mut buf)).await {
                    Ok(Ok(len)) => {
                        let Some(datagram) = buf.get(..len) else {
                            continue;
                        };
                        match decode_datagram(datagram, sequence) {
                            Ok(frame) => {
                                if tx.send(frame).await.is_err() {
                                    debug!("Receiver dropped, stopping SimHub listener");
                                    break;
                                }
                                sequence = sequence.saturating_add(1);
                            }
                            Err(e) => debug!("Dropping SimHub datagram: {e}"),
                        }
                    }
                    Ok(Err(e)) => warn!("SimHub UDP receive error: {e}"),
                    Err(_) => {
                        if tx.is_closed() {
                            break;
                        }
                        debug!("No SimHub data received (timeout)");
                    }
                }
            }
            info!("Stopped SimHub listener");
        });

        rx
    }
}

impl Default for SimHubListener {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mqtt_publisher_telemetry_core::FieldSource;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn test_defaults() {
        let listener = SimHubListener::default();
        assert_eq!(listener.bind_addr().port(), SIMHUB_PORT);
        assert_eq!(listener.with_port(6000).bind_addr().port(), 6000);
    }

    #[test]
    fn test_decode_datagram_records_size() -> TestResult {
        let data = br#"{"SpeedKmh":10}"#;
        let frame = decode_datagram(data, 7)?;
        assert_eq!(frame.sequence, 7);
        assert_eq!(frame.raw_size, data.len());
        assert_eq!(frame.snapshot.get_int("SpeedKmh"), Some(10));
        Ok(())
    }

    #[test]
    fn test_decode_datagram_rejects_garbage() {
        assert!(decode_datagram(b"nope", 0).is_err());
    }
}
