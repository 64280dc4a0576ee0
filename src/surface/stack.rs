//! Card stack layout for the swipeable photo gallery.
//!
//! The active card sits on top, untransformed. Cards behind it are fanned
//! out by depth: the next card is tilted and nudged slightly, every card
//! further back is tilted twice as much. Only the active card is visible.

use crate::constants::{
    DISMISS_ROTATION_DEG, STACK_FAR_ROTATION_DEG, STACK_NEAR_ROTATION_DEG, STACK_SCALE_STEP,
    STACK_SHIFT_X, STACK_SHIFT_Y,
};
use crate::gesture::SwipeResolution;
use serde::Serialize;

/// Visual transform of one card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CardTransform {
    pub rotation_deg: f32,
    pub translate_x: f32,
    pub translate_y: f32,
    pub scale: f32,
    pub opacity: f32,
}

impl CardTransform {
    /// Resting position of the active card
    pub const IDENTITY: CardTransform = CardTransform {
        rotation_deg: 0.0,
        translate_x: 0.0,
        translate_y: 0.0,
        scale: 1.0,
        opacity: 1.0,
    };
}

impl Default for CardTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// A card's place in the stack.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StackedCard {
    /// Distance behind the active card (0 = active)
    pub depth: usize,
    pub transform: CardTransform,
    pub z_index: usize,
    /// Receives pointer events and is shown
    pub visible: bool,
}

/// Layout of every card for a gallery showing `current` out of `count`.
pub fn stack_layout(current: usize, count: usize) -> Vec<StackedCard> {
    if count == 0 {
        return Vec::new();
    }
    let current = current % count;
    (0..count)
        .map(|index| {
            let depth = (index + count - current) % count;
            StackedCard {
                depth,
                transform: transform_at_depth(depth),
                z_index: count - depth,
                visible: depth == 0,
            }
        })
        .collect()
}

fn transform_at_depth(depth: usize) -> CardTransform {
    if depth == 0 {
        return CardTransform::IDENTITY;
    }
    let steps = depth.min(2) as f32;
    let rotation_deg = if depth == 1 {
        STACK_NEAR_ROTATION_DEG
    } else {
        STACK_FAR_ROTATION_DEG
    };
    CardTransform {
        rotation_deg,
        translate_x: STACK_SHIFT_X * steps,
        translate_y: STACK_SHIFT_Y * steps,
        scale: 1.0 - STACK_SCALE_STEP * steps,
        opacity: 0.0,
    }
}

/// Where the active card animates to once a drag resolves: off the side it
/// was dragged toward, or back to rest.
pub fn dismiss_transform(resolution: SwipeResolution, viewport_width: f32) -> CardTransform {
    let width = if viewport_width.is_finite() { viewport_width.max(0.0) } else { 0.0 };
    match resolution {
        SwipeResolution::Previous => CardTransform {
            rotation_deg: DISMISS_ROTATION_DEG,
            translate_x: width,
            opacity: 0.0,
            ..CardTransform::IDENTITY
        },
        SwipeResolution::Next => CardTransform {
            rotation_deg: -DISMISS_ROTATION_DEG,
            translate_x: -width,
            opacity: 0.0,
            ..CardTransform::IDENTITY
        },
        SwipeResolution::SnapBack => CardTransform::IDENTITY,
    }
}

/// Active card following the pointer mid-drag.
pub fn drag_transform(offset: Option<f32>) -> CardTransform {
    CardTransform {
        translate_x: offset.filter(|o| o.is_finite()).unwrap_or(0.0),
        ..CardTransform::IDENTITY
    }
}
