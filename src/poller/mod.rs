// Periodic re-extraction to detect lazily loaded comments

use crate::error::{Result, SentimentError};
use crate::extractor::Extractor;
use crate::page::PageSource;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// Background task that re-runs extraction on a fixed interval and reports growth.
///
/// Growth only: a smaller comment set is ignored and the high-water mark stays put.
/// The task never stops on its own; the owner ends it with `shutdown`.
pub struct Poller {
    handle: Option<JoinHandle<()>>,
    last_seen: Arc<AtomicUsize>,
    interval: Duration,
}

impl Poller {
    /// Start polling `source` every `interval`, calling `on_growth` with the new size
    /// whenever the extracted set is strictly larger than anything seen before.
    ///
    /// Must be called from within a tokio runtime. A zero interval is rejected
    /// before any task is spawned.
    pub fn start<F>(
        source: Arc<dyn PageSource>,
        extractor: Arc<Extractor>,
        interval: Duration,
        on_growth: F,
    ) -> Result<Self>
    where
        F: FnMut(usize) + Send + 'static,
    {
        if interval.is_zero() {
            return Err(SentimentError::InvalidConfigValue {
                path: "poller.interval".to_string(),
                message: "Interval must be greater than 0".to_string(),
            });
        }

        let last_seen = Arc::new(AtomicUsize::new(0));

        let handle = Some(tokio::spawn(poll_worker(
            source,
            extractor,
            interval,
            last_seen.clone(),
            on_growth,
        )));

        tracing::debug!("Poller started with {:?} interval", interval);

        Ok(Self {
            handle,
            last_seen,
            interval,
        })
    }

    /// Largest comment count observed so far
    pub fn last_seen_count(&self) -> usize {
        self.last_seen.load(Ordering::Acquire)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Stop the polling task
    pub async fn shutdown(mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            let _ = handle.await;
            tracing::debug!("Poller stopped at {} comments", self.last_seen_count());
        }
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

async fn poll_worker<F>(
    source: Arc<dyn PageSource>,
    extractor: Arc<Extractor>,
    period: Duration,
    last_seen: Arc<AtomicUsize>,
    mut on_growth: F,
) where
    F: FnMut(usize) + Send + 'static,
{
    // First check happens one period after start
    let mut timer = time::interval_at(Instant::now() + period, period);
    timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        timer.tick().await;

        let count = match extractor.extract_from(source.as_ref()) {
            Ok(comments) => comments.len(),
            Err(e) => {
                tracing::warn!("Poll of {} failed: {}", source.describe(), e);
                continue;
            }
        };

        if count > last_seen.load(Ordering::Acquire) {
            last_seen.store(count, Ordering::Release);
            tracing::info!("New comments detected: {}", count);
            on_growth(count);
        }
    }
}
