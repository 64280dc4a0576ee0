//! Carousel controller - the single source of truth for "which slide is
//! showing".
//!
//! The controller owns the current index, the auto-advance timer and the
//! drag state. Rendering surfaces read `current_index()` / `drag_offset()`,
//! subscribe to index changes, and report gestures back; they never write
//! the index themselves.
//!
//! ## Auto-advance
//!
//! The host drives time by calling `tick()` from its frame loop. A due timer
//! always moves forward with wrap-around. Manual navigation (arrows, dots,
//! resolved swipes) restarts the cadence; only an active gesture suspends
//! it, and `stop_auto_advance()` turns it off until started again.

use crate::error::{CarouselError, CarouselResult};
use crate::gesture::{GestureOutcome, GestureState, SwipeResolution, SwipeThreshold, resolve_swipe};
use crate::observer::{IndexChange, NavigationCause, Observers, SubscriptionId};
use crate::profile_scope;
use crate::settings::CarouselSettings;
use crate::timer::{AutoAdvanceTimer, Clock, SystemClock};
use std::time::{Duration, Instant};
use tracing::{debug, trace};

// ============================================================================
// Builder
// ============================================================================

/// Builder for `CarouselController`.
///
/// # Example
/// ```ignore
/// let carousel = CarouselController::builder(3)
///     .initial_index(1)
///     .auto_advance_interval(Duration::from_secs(6))
///     .build()?;
/// ```
#[derive(Debug, Clone)]
pub struct CarouselBuilder<C = SystemClock> {
    slide_count: usize,
    initial_index: usize,
    settings: CarouselSettings,
    clock: C,
}

impl CarouselBuilder<SystemClock> {
    pub fn new(slide_count: usize) -> Self {
        Self {
            slide_count,
            initial_index: 0,
            settings: CarouselSettings::default(),
            clock: SystemClock,
        }
    }
}

impl<C: Clock> CarouselBuilder<C> {
    /// Slide shown first (default 0)
    pub fn initial_index(mut self, index: usize) -> Self {
        self.initial_index = index;
        self
    }

    /// Replace every setting at once
    pub fn settings(mut self, settings: CarouselSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn auto_advance(mut self, enabled: bool) -> Self {
        self.settings.auto_advance = enabled;
        self
    }

    pub fn auto_advance_interval(mut self, interval: Duration) -> Self {
        self.settings.auto_advance_interval_ms =
            u64::try_from(interval.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn swipe_threshold(mut self, threshold: SwipeThreshold) -> Self {
        self.settings.swipe_threshold = threshold;
        self
    }

    pub fn resume_after_scroll(mut self, resume: bool) -> Self {
        self.settings.resume_after_scroll = resume;
        self
    }

    /// Use a different time source
    pub fn clock<C2: Clock>(self, clock: C2) -> CarouselBuilder<C2> {
        CarouselBuilder {
            slide_count: self.slide_count,
            initial_index: self.initial_index,
            settings: self.settings,
            clock,
        }
    }

    pub fn build(self) -> CarouselResult<CarouselController<C>> {
        if self.slide_count == 0 {
            return Err(CarouselError::invalid("slide count must be at least 1"));
        }
        if self.initial_index >= self.slide_count {
            return Err(CarouselError::invalid(format!(
                "initial index {} outside 0..{}",
                self.initial_index, self.slide_count
            )));
        }
        self.settings.validate()?;

        let mut controller = CarouselController {
            slide_count: self.slide_count,
            current_index: self.initial_index,
            auto_advance_requested: false,
            settings: self.settings,
            timer: AutoAdvanceTimer::new(),
            gesture: GestureState::Idle,
            observers: Observers::new(),
            clock: self.clock,
            disposed: false,
        };
        if controller.settings.auto_advance {
            controller.start_auto_advance();
        }
        debug!(
            slides = controller.slide_count,
            index = controller.current_index,
            auto_advance = controller.settings.auto_advance,
            "carousel created"
        );
        Ok(controller)
    }
}

// ============================================================================
// Controller
// ============================================================================

/// Auto-advancing, swipe-dismissible carousel state.
#[derive(Debug)]
pub struct CarouselController<C: Clock = SystemClock> {
    slide_count: usize,
    current_index: usize,
    settings: CarouselSettings,
    /// Host wants auto-advance; the timer may still be suspended by a gesture
    auto_advance_requested: bool,
    timer: AutoAdvanceTimer,
    gesture: GestureState,
    observers: Observers,
    clock: C,
    disposed: bool,
}

impl CarouselController<SystemClock> {
    /// Controller with default settings, starting at slide 0.
    pub fn new(slide_count: usize) -> CarouselResult<Self> {
        CarouselBuilder::new(slide_count).build()
    }

    pub fn builder(slide_count: usize) -> CarouselBuilder<SystemClock> {
        CarouselBuilder::new(slide_count)
    }
}

impl<C: Clock> CarouselController<C> {
    // ------------------------------------------------------------------------
    // Observers' view
    // ------------------------------------------------------------------------

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Offset of an in-progress drag, for the surface's transform
    pub fn drag_offset(&self) -> Option<f32> {
        self.gesture.drag_offset()
    }

    pub fn gesture_state(&self) -> GestureState {
        self.gesture
    }

    /// Returns true if the auto-advance timer is scheduled
    pub fn is_auto_advancing(&self) -> bool {
        self.timer.is_armed()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Live timer handles; never more than one
    pub fn active_timer_count(&self) -> usize {
        self.timer.active_handles()
    }

    /// When the next automatic advance is due, for hosts that schedule
    /// wake-ups instead of ticking every frame
    pub fn next_auto_advance_at(&self) -> Option<Instant> {
        self.timer.next_due()
    }

    /// Number of registered index listeners.
    pub fn listener_count(&self) -> usize {
        self.observers.count()
    }

    pub fn settings(&self) -> &CarouselSettings {
        &self.settings
    }

    // ------------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------------

    /// Advance one slide, wrapping to the first after the last.
    pub fn next(&mut self) -> usize {
        if self.disposed {
            return self.current_index;
        }
        let index = self.step(1, NavigationCause::Next);
        self.rearm();
        index
    }

    /// Go back one slide, wrapping to the last before the first.
    pub fn previous(&mut self) -> usize {
        if self.disposed {
            return self.current_index;
        }
        let index = self.step(-1, NavigationCause::Previous);
        self.rearm();
        index
    }

    /// Jump straight to `index` (pagination dots).
    pub fn go_to(&mut self, index: usize) -> CarouselResult<usize> {
        if self.disposed {
            return Ok(self.current_index);
        }
        if index >= self.slide_count {
            return Err(CarouselError::IndexOutOfRange {
                index,
                slide_count: self.slide_count,
            });
        }
        self.set_index(index, NavigationCause::Jump);
        self.rearm();
        Ok(index)
    }

    /// Reconcile with a surface whose native scroll-snap settled on
    /// `index`. Out-of-range telemetry is clamped, never rejected.
    pub fn on_manual_scroll_settled(&mut self, index: isize) -> usize {
        if self.disposed {
            return self.current_index;
        }
        let last = (self.slide_count - 1) as isize;
        let clamped = index.clamp(0, last) as usize;
        if clamped as isize != index {
            trace!(reported = index, clamped, "scroll telemetry clamped");
        }
        if clamped != self.current_index {
            self.set_index(clamped, NavigationCause::ScrollSettled);
            if self.settings.resume_after_scroll {
                self.rearm();
            }
        }
        self.current_index
    }

    /// Change the number of slides, clamping the current index into range.
    pub fn set_slide_count(&mut self, slide_count: usize) -> CarouselResult<()> {
        if self.disposed {
            return Ok(());
        }
        if slide_count == 0 {
            return Err(CarouselError::invalid("slide count must be at least 1"));
        }
        self.slide_count = slide_count;
        if self.current_index >= slide_count {
            self.set_index(slide_count - 1, NavigationCause::SlideCountChanged);
        }
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Auto-advance
    // ------------------------------------------------------------------------

    /// Start advancing automatically. Restarts the cadence if already
    /// running; deferred until the current gesture ends if one is active.
    pub fn start_auto_advance(&mut self) {
        if self.disposed {
            return;
        }
        self.auto_advance_requested = true;
        if self.gesture.is_dragging() {
            trace!("auto-advance start deferred until gesture ends");
            return;
        }
        self.timer.arm(self.clock.now(), self.settings.interval());
    }

    /// Stop advancing automatically until `start_auto_advance` is called.
    pub fn stop_auto_advance(&mut self) {
        self.auto_advance_requested = false;
        self.timer.cancel();
    }

    /// Poll the auto-advance timer against the controller's clock.
    pub fn tick(&mut self) -> Option<usize> {
        let now = self.clock.now();
        self.tick_at(now)
    }

    /// Poll the auto-advance timer at `now`. Returns the new index if the
    /// timer fired.
    pub fn tick_at(&mut self, now: Instant) -> Option<usize> {
        profile_scope!("carousel_tick");

        if self.disposed || !self.timer.poll(now) {
            return None;
        }
        Some(self.step(1, NavigationCause::AutoAdvance))
    }

    // ------------------------------------------------------------------------
    // Gestures
    // ------------------------------------------------------------------------

    /// Pointer entered or touch began: suspend auto-advance.
    pub fn on_gesture_start(&mut self) {
        if self.disposed {
            return;
        }
        self.gesture.start();
        if self.timer.cancel().is_some() {
            trace!("auto-advance suspended by gesture");
        }
    }

    /// Record the drag displacement for visual feedback. Never navigates.
    pub fn on_gesture_move(&mut self, delta_px: f32) {
        if self.disposed || !delta_px.is_finite() {
            return;
        }
        if self.gesture.is_idle() {
            self.on_gesture_start();
        }
        self.gesture.set_offset(delta_px);
    }

    /// Resolve the drag: past the threshold to the right goes to the
    /// previous slide, to the left goes to the next, anything shorter snaps
    /// back. Clears the drag offset and resumes auto-advance.
    pub fn on_gesture_end(&mut self, delta_px: f32, viewport_width: f32) -> GestureOutcome {
        if self.disposed {
            return GestureOutcome {
                resolution: SwipeResolution::SnapBack,
                index: self.current_index,
            };
        }
        profile_scope!("carousel_gesture_end");

        let threshold = self.settings.swipe_threshold.to_pixels(viewport_width);
        let resolution = resolve_swipe(delta_px, threshold);
        match resolution {
            SwipeResolution::Previous => {
                self.step(-1, NavigationCause::Swipe);
            }
            SwipeResolution::Next => {
                self.step(1, NavigationCause::Swipe);
            }
            SwipeResolution::SnapBack => {}
        }
        debug!(delta_px, threshold, ?resolution, index = self.current_index, "gesture resolved");

        self.gesture.reset();
        self.rearm();

        GestureOutcome {
            resolution,
            index: self.current_index,
        }
    }

    // ------------------------------------------------------------------------
    // Subscriptions and lifecycle
    // ------------------------------------------------------------------------

    /// Register a listener for index changes. After `dispose` the listener
    /// is dropped immediately and the returned id is inert.
    pub fn subscribe(&mut self, listener: impl FnMut(&IndexChange) + 'static) -> SubscriptionId {
        if self.disposed {
            return self.observers.detached_id();
        }
        self.observers.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Cancel the timer, drop listeners and make every further call a
    /// no-op. Safe mid-gesture and safe to repeat.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.timer.cancel();
        self.gesture.reset();
        self.observers.clear();
        self.auto_advance_requested = false;
        self.disposed = true;
        debug!(index = self.current_index, "carousel disposed");
    }

    // ------------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------------

    fn step(&mut self, delta: isize, cause: NavigationCause) -> usize {
        let count = self.slide_count as isize;
        let index = (self.current_index as isize + delta).rem_euclid(count) as usize;
        self.set_index(index, cause);
        index
    }

    fn set_index(&mut self, index: usize, cause: NavigationCause) {
        if index == self.current_index {
            return;
        }
        let change = IndexChange {
            previous: self.current_index,
            current: index,
            cause,
        };
        self.current_index = index;
        debug!(from = change.previous, to = change.current, ?cause, "slide changed");
        self.observers.notify(&change);
    }

    /// Restart the cadence after manual navigation, unless auto-advance is
    /// off or a gesture holds it suspended.
    fn rearm(&mut self) {
        if self.auto_advance_requested && self.gesture.is_idle() {
            self.timer.arm(self.clock.now(), self.settings.interval());
        }
    }
}
