//! Cooperative settle wait issued before a pass.
//!
//! The rule engine never awaits. The orchestrator lets the provider settle
//! for a number of frames and only then invokes the runner.

use std::time::Duration;

use async_trait::async_trait;
use tokio::time::{Instant, Interval, MissedTickBehavior};
use tracing::debug;

/// A source of frame ticks.
#[async_trait]
pub trait FrameSource: Send {
    /// Resolve once the next frame has elapsed.
    async fn next_frame(&mut self);
}

/// Frames driven by a fixed-period `tokio` interval.
#[derive(Debug)]
pub struct IntervalFrameSource {
    interval: Interval,
}

impl IntervalFrameSource {
    /// The first frame completes one `period` after construction.
    pub fn new(period: Duration) -> Self {
        let mut interval = tokio::time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self { interval }
    }

    /// A source ticking at `hz` frames per second.
    pub fn with_rate(hz: u32) -> Self {
        Self::new(Duration::from_secs(1) / hz.max(1))
    }

    pub fn period(&self) -> Duration {
        self.interval.period()
    }
}

#[async_trait]
impl FrameSource for IntervalFrameSource {
    async fn next_frame(&mut self) {
        self.interval.tick().await;
    }
}

/// Wait `ticks` frames.
pub async fn settle<F>(source: &mut F, ticks: u32)
where
    F: FrameSource + ?Sized,
{
    if ticks == 0 {
        return;
    }
    debug!(ticks, "Waiting for provider to settle");
    for _ in 0..ticks {
        source.next_frame().await;
    }
    debug!(ticks, "Provider settled");
}
