//! Carousel-wide constants.
//!
//! Centralizes timing and gesture values so presets, defaults and tests
//! agree on the same numbers.

// ============================================================================
// Auto-advance Timing
// ============================================================================

/// Default auto-advance interval in milliseconds (event-type showcase)
pub const DEFAULT_AUTO_ADVANCE_MS: u64 = 5_000;

/// Auto-advance interval used by the pricing plans carousel
pub const PRICING_AUTO_ADVANCE_MS: u64 = 6_000;

// ============================================================================
// Gestures
// ============================================================================

/// Horizontal drag distance (pixels) a swipe must exceed to navigate
pub const DEFAULT_SWIPE_THRESHOLD_PX: f32 = 80.0;

// ============================================================================
// Card Stack (photo gallery)
// ============================================================================

/// Rotation of the card directly behind the active one, in degrees
pub const STACK_NEAR_ROTATION_DEG: f32 = -2.0;

/// Rotation of every card further back, in degrees
pub const STACK_FAR_ROTATION_DEG: f32 = -4.0;

/// Per-depth horizontal shift of stacked cards, in pixels
pub const STACK_SHIFT_X: f32 = -2.0;

/// Per-depth vertical shift of stacked cards, in pixels
pub const STACK_SHIFT_Y: f32 = 4.0;

/// Per-depth scale reduction of stacked cards
pub const STACK_SCALE_STEP: f32 = 0.05;

/// Rotation applied to a card flying out after a resolved swipe, in degrees
pub const DISMISS_ROTATION_DEG: f32 = 20.0;

// ============================================================================
// Countdown
// ============================================================================

/// Countdown refresh cadence in milliseconds
pub const COUNTDOWN_REFRESH_MS: u64 = 1_000;

// ============================================================================
// Logging
// ============================================================================

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "carousel=info";
