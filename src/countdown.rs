//! Countdown to the event date.
//!
//! The invitation shows days, hours, minutes and seconds until the party,
//! refreshed once per second. Once the event has started every unit reads
//! zero.

use crate::constants::COUNTDOWN_REFRESH_MS;
use crate::error::CountdownError;
use crate::timer::{AutoAdvanceTimer, Clock};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::time::{Duration, Instant};

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;

/// Remaining time broken into display units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TimeLeft {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl TimeLeft {
    /// Split a number of whole seconds. Negative input reads as zero.
    pub fn from_seconds(total: i64) -> Self {
        if total <= 0 {
            return Self::default();
        }
        Self {
            days: (total / SECONDS_PER_DAY) as u64,
            hours: ((total % SECONDS_PER_DAY) / SECONDS_PER_HOUR) as u64,
            minutes: ((total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE) as u64,
            seconds: (total % SECONDS_PER_MINUTE) as u64,
        }
    }

    /// Returns true once the event has started
    pub fn is_elapsed(&self) -> bool {
        *self == Self::default()
    }

    /// Labelled units in display order
    pub fn units(&self) -> [(&'static str, u64); 4] {
        [
            ("days", self.days),
            ("hours", self.hours),
            ("minutes", self.minutes),
            ("seconds", self.seconds),
        ]
    }
}

impl fmt::Display for TimeLeft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}:{:02}",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// Countdown to a fixed event instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    event: DateTime<Utc>,
}

impl Countdown {
    pub fn new(event: DateTime<Utc>) -> Self {
        Self { event }
    }

    /// Parse an RFC 3339 date such as `2026-09-26T19:00:00-06:00`.
    pub fn parse(event: &str) -> Result<Self, CountdownError> {
        let event = DateTime::parse_from_rfc3339(event)?.with_timezone(&Utc);
        Ok(Self::new(event))
    }

    pub fn event(&self) -> DateTime<Utc> {
        self.event
    }

    pub fn time_left_at(&self, now: DateTime<Utc>) -> TimeLeft {
        TimeLeft::from_seconds((self.event - now).num_seconds())
    }

    pub fn time_left(&self) -> TimeLeft {
        self.time_left_at(Utc::now())
    }
}

/// One-second refresh cadence for a countdown display, polled like the
/// carousel timer.
#[derive(Debug)]
pub struct CountdownTicker<C: Clock> {
    timer: AutoAdvanceTimer,
    clock: C,
    refreshed: bool,
}

impl<C: Clock> CountdownTicker<C> {
    pub fn new(clock: C) -> Self {
        let mut timer = AutoAdvanceTimer::new();
        timer.arm(clock.now(), Duration::from_millis(COUNTDOWN_REFRESH_MS));
        Self {
            timer,
            clock,
            refreshed: false,
        }
    }

    /// Returns true when the display should refresh: immediately on the
    /// first poll, then once per second.
    pub fn poll(&mut self) -> bool {
        let now = self.clock.now();
        self.poll_at(now)
    }

    pub fn poll_at(&mut self, now: Instant) -> bool {
        if !self.refreshed {
            self.refreshed = true;
            return true;
        }
        self.timer.poll(now)
    }

    /// Stop refreshing; later polls return false.
    pub fn stop(&mut self) {
        self.timer.cancel();
        self.refreshed = true;
    }
}
