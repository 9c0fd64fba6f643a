//! Resend cooldown tick source port.

use async_trait::async_trait;
use tokio::sync::mpsc;

/// A 1 Hz tick stream driving the resend cooldown.
///
/// Exactly one stream exists per session. Ticks are delivered over the
/// returned channel; once the stream is stopped the sender is dropped and
/// the receiver ends, so no tick can arrive afterwards.
#[async_trait]
pub trait ResendTickerPort: Send + Sync {
    /// Begin a tick stream, replacing (and silencing) any previous one.
    async fn start(&self) -> anyhow::Result<mpsc::Receiver<()>>;

    /// Stop the stream. No further ticks are delivered.
    async fn stop(&self);
}
