//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `HarnessBuilder` - Builder pattern for a controller on a `ManualClock`
//! - `Harness` - the controller plus its clock and a log of index changes
//! - Assertion helpers like `assert_index()`

#![allow(dead_code)]

use carousel::{CarouselController, CarouselSettings, IndexChange, ManualClock, NavigationCause};
use std::cell::RefCell;
use std::rc::Rc;

// ============================================================================
// HarnessBuilder - Builder pattern for creating test carousels
// ============================================================================

/// Builder for a carousel under test.
///
/// # Example
/// ```ignore
/// let mut h = HarnessBuilder::new(3)
///     .with_initial_index(1)
///     .with_settings(CarouselSettings::pricing_plans())
///     .build();
/// h.advance_ms(6_000);
/// ```
pub struct HarnessBuilder {
    slides: usize,
    initial_index: usize,
    settings: CarouselSettings,
}

impl HarnessBuilder {
    /// Create a new builder with default settings (auto-advance every 5s).
    pub fn new(slides: usize) -> Self {
        Self {
            slides,
            initial_index: 0,
            settings: CarouselSettings::default(),
        }
    }

    pub fn with_initial_index(mut self, index: usize) -> Self {
        self.initial_index = index;
        self
    }

    pub fn with_settings(mut self, settings: CarouselSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Disable auto-advance at construction.
    pub fn without_auto_advance(mut self) -> Self {
        self.settings.auto_advance = false;
        self
    }

    /// Build the harness. Panics on invalid configuration.
    pub fn build(self) -> Harness {
        init_test_logging();
        let clock = ManualClock::new();
        let mut carousel = CarouselController::builder(self.slides)
            .initial_index(self.initial_index)
            .settings(self.settings)
            .clock(clock.clone())
            .build()
            .expect("valid carousel configuration");

        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        carousel.subscribe(move |change| sink.borrow_mut().push(*change));

        Harness {
            carousel,
            clock,
            events,
        }
    }
}

// ============================================================================
// Harness
// ============================================================================

pub struct Harness {
    pub carousel: CarouselController<ManualClock>,
    pub clock: ManualClock,
    events: Rc<RefCell<Vec<IndexChange>>>,
}

impl Harness {
    /// Advance time and tick once.
    pub fn advance_ms(&mut self, ms: u64) -> Option<usize> {
        self.clock.advance_ms(ms);
        self.carousel.tick()
    }

    /// Every recorded index change.
    pub fn changes(&self) -> Vec<IndexChange> {
        self.events.borrow().clone()
    }

    /// Indices visited, in order.
    pub fn visited(&self) -> Vec<usize> {
        self.events.borrow().iter().map(|c| c.current).collect()
    }

    /// Causes of recorded changes, in order.
    pub fn causes(&self) -> Vec<NavigationCause> {
        self.events.borrow().iter().map(|c| c.cause).collect()
    }

    pub fn clear_changes(&self) {
        self.events.borrow_mut().clear();
    }
}

/// Convenience: default-settings harness with `slides` slides.
pub fn harness(slides: usize) -> Harness {
    HarnessBuilder::new(slides).build()
}

/// Convenience: harness with auto-advance off.
pub fn manual_harness(slides: usize) -> Harness {
    HarnessBuilder::new(slides).without_auto_advance().build()
}

// ============================================================================
// Assertion helpers
// ============================================================================

/// Assert the carousel shows `expected`.
pub fn assert_index(h: &Harness, expected: usize) {
    assert_eq!(
        h.carousel.current_index(),
        expected,
        "expected slide {} but carousel shows {}",
        expected,
        h.carousel.current_index()
    );
}

/// Assert the index stays within bounds.
pub fn assert_in_range(h: &Harness) {
    let index = h.carousel.current_index();
    let count = h.carousel.slide_count();
    assert!(index < count, "index {} out of range for {} slides", index, count);
}

/// Install a debug-level subscriber once per test binary.
pub fn init_test_logging() {
    let _ = carousel::logging::init_with_filter("carousel=debug");
}
