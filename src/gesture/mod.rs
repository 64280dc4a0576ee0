//! Drag gesture handling for carousels.
//!
//! The gesture system uses an explicit state machine (`GestureState`) to
//! track whether a drag is in progress, and a pure resolution function that
//! turns the final displacement into a navigation or a snap-back.
//!
//! ## Sign convention
//!
//! A positive delta means the content was dragged to the right, revealing
//! the previous slide. A negative delta reveals the next slide. Every
//! carousel in the crate resolves drags this way.
//!
//! ## Modules
//!
//! - `state` - Gesture state machine enum and helper methods
//! - `resolve` - Threshold handling and swipe resolution

mod resolve;
mod state;

pub use resolve::{GestureOutcome, SwipeResolution, SwipeThreshold, resolve_swipe};
pub use state::GestureState;
