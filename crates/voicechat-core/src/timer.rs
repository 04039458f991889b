//! Elapsed-seconds ticker for the recording readout.

use std::{
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
    time::Duration,
};

use tokio::{
    sync::watch,
    task::JoinHandle,
    time::{Instant, MissedTickBehavior},
};
use tracing::{debug, trace};

/// Period between ticks.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Repeating ticker that increments an elapsed-seconds counter while armed.
///
/// The counter is published through a `watch` channel so a readout can
/// follow it. Every arm/disarm bumps a generation number; the tick task only
/// writes while its generation is current, so no tick lands after
/// [`Timer::disarm`] returns even if the task has not observed its abort yet.
///
/// Must be armed from within a tokio runtime. Dropping the timer disarms it.
pub struct Timer {
    period: Duration,
    elapsed: Arc<watch::Sender<u64>>,
    generation: Arc<AtomicU64>,
    ticker: Option<JoinHandle<()>>,
}

impl Timer {
    /// Create an unarmed timer ticking every [`TICK_PERIOD`].
    pub fn new() -> Self {
        Self::with_period(TICK_PERIOD)
    }

    /// Create an unarmed timer with a custom tick period.
    ///
    /// A zero period is clamped to one millisecond.
    pub fn with_period(period: Duration) -> Self {
        let (elapsed, _) = watch::channel(0);
        Self {
            period: period.max(Duration::from_millis(1)),
            elapsed: Arc::new(elapsed),
            generation: Arc::new(AtomicU64::new(0)),
            ticker: None,
        }
    }

    /// Start ticking from zero. No-op while already armed.
    pub fn arm(&mut self) {
        if self.ticker.is_some() {
            return;
        }

        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        self.elapsed.send_replace(0);

        let elapsed = Arc::clone(&self.elapsed);
        let current = Arc::clone(&self.generation);
        let period = self.period;
        let first_tick = Instant::now() + period;

        self.ticker = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(first_tick, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                interval.tick().await;

                let live = elapsed.send_if_modified(|secs| {
                    if current.load(Ordering::Acquire) != generation {
                        return false;
                    }
                    *secs += 1;
                    true
                });

                if !live {
                    break;
                }
                trace!(elapsed_secs = *elapsed.borrow(), "Timer tick");
            }
        }));

        debug!(period_ms = self.period.as_millis(), "Timer armed");
    }

    /// Stop ticking and reset the counter to zero. Safe to call when unarmed.
    pub fn disarm(&mut self) {
        self.generation.fetch_add(1, Ordering::AcqRel);

        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
            debug!("Timer disarmed");
        }

        self.elapsed.send_replace(0);
    }

    /// Whether the ticker is running.
    pub fn is_armed(&self) -> bool {
        self.ticker.is_some()
    }

    /// Seconds counted since the last `arm`.
    pub fn elapsed_secs(&self) -> u64 {
        *self.elapsed.borrow()
    }

    /// Follow the counter as it changes.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.elapsed.subscribe()
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        self.disarm();
    }
}
