//! Auto-advance timer and the clock it reads.
//!
//! The timer is polled, never spawned: the host calls the controller's
//! `tick` from its frame loop and the timer reports whether its deadline
//! has passed. Holding the handle in an `Option` keeps at most one timer
//! alive per controller; re-arming always cancels the previous handle
//! first.

use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use tracing::trace;

/// Global counter for unique timer IDs
static NEXT_TIMER_ID: AtomicU64 = AtomicU64::new(1);

// ============================================================================
// Clocks
// ============================================================================

/// Source of monotonic time for a controller.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall clock backed by `Instant::now`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Manually advanced clock. Clones share the same time, so a test can keep
/// one handle while the controller owns another.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<Instant>>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Arc::new(Mutex::new(Instant::now())),
        }
    }

    /// Move time forward by `by`.
    pub fn advance(&self, by: Duration) {
        *self.now.lock() += by;
    }

    /// Move time forward by `ms` milliseconds.
    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock()
    }
}

// ============================================================================
// Timer handle
// ============================================================================

/// Identifier of one armed timer. A re-armed timer gets a new id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

impl TimerId {
    fn next() -> Self {
        Self(NEXT_TIMER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// A repeating deadline.
#[derive(Debug, Clone, Copy)]
pub struct TimerHandle {
    pub id: TimerId,
    pub interval: Duration,
    pub next_due: Instant,
}

/// Owner of the single auto-advance timer handle.
#[derive(Debug, Default)]
pub struct AutoAdvanceTimer {
    handle: Option<TimerHandle>,
}

impl AutoAdvanceTimer {
    pub fn new() -> Self {
        Self { handle: None }
    }

    /// Arm a repeating timer, cancelling any handle already armed.
    pub fn arm(&mut self, now: Instant, interval: Duration) -> TimerId {
        self.cancel();
        let handle = TimerHandle {
            id: TimerId::next(),
            interval,
            next_due: now + interval,
        };
        trace!(timer = handle.id.0, interval_ms = interval.as_millis() as u64, "timer armed");
        self.handle = Some(handle);
        handle.id
    }

    /// Cancel the armed timer, returning its id if there was one.
    pub fn cancel(&mut self) -> Option<TimerId> {
        let handle = self.handle.take()?;
        trace!(timer = handle.id.0, "timer cancelled");
        Some(handle.id)
    }

    /// Returns true if the timer fired at `now`. A due timer fires once and
    /// reschedules from `now`; missed intervals are not replayed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.handle.as_mut() {
            Some(handle) if now >= handle.next_due => {
                handle.next_due = now + handle.interval;
                true
            }
            _ => false,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.handle.is_some()
    }

    /// Number of live handles (0 or 1).
    pub fn active_handles(&self) -> usize {
        usize::from(self.handle.is_some())
    }

    pub fn handle(&self) -> Option<&TimerHandle> {
        self.handle.as_ref()
    }

    pub fn next_due(&self) -> Option<Instant> {
        self.handle.map(|h| h.next_due)
    }
}
