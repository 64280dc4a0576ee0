//! Swipe resolution - decides at the end of a drag whether to navigate.

use crate::constants::DEFAULT_SWIPE_THRESHOLD_PX;
use serde::{Deserialize, Serialize};

/// How far a drag must travel before it navigates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "unit", content = "value", rename_all = "snake_case")]
pub enum SwipeThreshold {
    /// Absolute distance in pixels
    Pixels(f32),
    /// Fraction of the viewport width reported at gesture end
    ViewportFraction(f32),
}

impl Default for SwipeThreshold {
    fn default() -> Self {
        Self::Pixels(DEFAULT_SWIPE_THRESHOLD_PX)
    }
}

impl SwipeThreshold {
    /// Threshold in pixels for a viewport of `viewport_width`.
    ///
    /// A fraction against an unusable width falls back to the default
    /// pixel threshold.
    pub fn to_pixels(self, viewport_width: f32) -> f32 {
        match self {
            Self::Pixels(px) => px,
            Self::ViewportFraction(fraction) => {
                if viewport_width.is_finite() && viewport_width > 0.0 {
                    fraction * viewport_width
                } else {
                    DEFAULT_SWIPE_THRESHOLD_PX
                }
            }
        }
    }

    /// Returns true if the threshold is positive and finite
    pub fn is_valid(self) -> bool {
        let value = match self {
            Self::Pixels(v) | Self::ViewportFraction(v) => v,
        };
        value.is_finite() && value > 0.0
    }
}

/// Result of resolving a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwipeResolution {
    /// Dragged right past the threshold
    Previous,
    /// Dragged left past the threshold
    Next,
    /// Not far enough; the slide returns to rest
    SnapBack,
}

/// Resolve a final drag displacement against a pixel threshold.
///
/// Positive deltas reveal the previous slide. The threshold must be
/// exceeded, not merely reached.
pub fn resolve_swipe(delta: f32, threshold_px: f32) -> SwipeResolution {
    if !delta.is_finite() {
        return SwipeResolution::SnapBack;
    }
    if delta > threshold_px {
        SwipeResolution::Previous
    } else if delta < -threshold_px {
        SwipeResolution::Next
    } else {
        SwipeResolution::SnapBack
    }
}

/// What `on_gesture_end` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureOutcome {
    pub resolution: SwipeResolution,
    /// Index after resolution
    pub index: usize,
}

impl GestureOutcome {
    /// Returns true if the gesture changed slides
    pub fn navigated(&self) -> bool {
        self.resolution != SwipeResolution::SnapBack
    }
}
