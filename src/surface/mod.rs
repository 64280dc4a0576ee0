//! Geometry helpers for rendering surfaces.
//!
//! Surfaces come in two shapes on the site: horizontal scroll-snap strips
//! (pricing plans, event types) where every slide is one viewport wide, and
//! the photo gallery's stacked cards (`stack`). These helpers convert
//! between controller indices and what those surfaces measure, so the
//! surface itself stays free of index arithmetic.

pub mod stack;

pub use stack::{CardTransform, StackedCard, dismiss_transform, drag_transform, stack_layout};

/// Horizontal scroll position that shows slide `index` in a strip whose
/// slides are `viewport_width` wide.
pub fn scroll_offset_for(index: usize, viewport_width: f32) -> f32 {
    if !viewport_width.is_finite() || viewport_width <= 0.0 {
        return 0.0;
    }
    viewport_width * index as f32
}

/// Slide a strip settled on, from its scroll position.
///
/// Rounds to the nearest slide. The result may be negative or past the end
/// during overscroll; `on_manual_scroll_settled` clamps it.
pub fn settled_index(scroll_left: f32, client_width: f32) -> isize {
    if !scroll_left.is_finite() || !client_width.is_finite() || client_width <= 0.0 {
        return 0;
    }
    (scroll_left / client_width).round() as isize
}

/// One-based position label shown under the gallery, e.g. `"2 / 5"`.
pub fn position_label(index: usize, slide_count: usize) -> String {
    format!("{} / {}", index + 1, slide_count)
}
