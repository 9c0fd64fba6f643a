//! Interval tick source for the resend cooldown.

use async_trait::async_trait;
use tokio::sync::{mpsc, Mutex};
use tokio::task::AbortHandle;
use tokio::time::{interval_at, Duration, Instant};
use tracing::debug;

use fg_core::ports::ResendTickerPort;

const TICK_PERIOD: Duration = Duration::from_secs(1);

/// 1 Hz tick stream backed by a `tokio` interval task.
///
/// Starting replaces (aborts) any previous stream; aborting drops the
/// sender, so the old receiver ends and no stale tick can be delivered.
pub struct IntervalTicker {
    handle: Mutex<Option<AbortHandle>>,
}

impl IntervalTicker {
    pub fn new() -> Self {
        Self {
            handle: Mutex::new(None),
        }
    }
}

impl Default for IntervalTicker {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResendTickerPort for IntervalTicker {
    async fn start(&self) -> anyhow::Result<mpsc::Receiver<()>> {
        // capacity 1: a stalled consumer delays ticks instead of bursting them
        let (tx, rx) = mpsc::channel(1);

        let mut guard = self.handle.lock().await;
        if let Some(existing) = guard.take() {
            existing.abort();
        }

        let task = tokio::spawn(async move {
            let mut ticks = interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
            loop {
                ticks.tick().await;
                if tx.send(()).await.is_err() {
                    break;
                }
            }
        });
        *guard = Some(task.abort_handle());
        debug!("resend ticker started");
        Ok(rx)
    }

    async fn stop(&self) {
        if let Some(handle) = self.handle.lock().await.take() {
            handle.abort();
            debug!("resend ticker stopped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::error::TryRecvError;
    use tokio::time::advance;

    async fn settle() {
        for _ in 0..8 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn delivers_one_tick_per_second() -> anyhow::Result<()> {
        let ticker = IntervalTicker::new();
        let mut ticks = ticker.start().await?;
        // let the interval task anchor its start instant
        settle().await;

        advance(Duration::from_secs(1)).await;
        settle().await;
        assert_eq!(ticks.try_recv(), Ok(()));
        assert_eq!(ticks.try_recv(), Err(TryRecvError::Empty));

        advance(Duration::from_secs(1)).await;
        settle().await;
        assert_eq!(ticks.try_recv(), Ok(()));
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn no_tick_arrives_before_the_first_second() -> anyhow::Result<()> {
        let ticker = IntervalTicker::new();
        let mut ticks = ticker.start().await?;
        settle().await;

        advance(Duration::from_millis(999)).await;
        settle().await;
        assert_eq!(ticks.try_recv(), Err(TryRecvError::Empty));
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn stop_ends_the_stream() -> anyhow::Result<()> {
        let ticker = IntervalTicker::new();
        let mut ticks = ticker.start().await?;

        ticker.stop().await;
        advance(Duration::from_secs(5)).await;
        settle().await;

        assert_eq!(ticks.recv().await, None);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn start_replaces_the_previous_stream() -> anyhow::Result<()> {
        let ticker = IntervalTicker::new();
        let mut first = ticker.start().await?;
        let mut second = ticker.start().await?;
        settle().await;

        advance(Duration::from_secs(1)).await;
        settle().await;

        // the first stream is silenced, the second delivers
        assert_eq!(first.recv().await, None);
        assert_eq!(second.try_recv(), Ok(()));
        Ok(())
    }
}
