//! Gesture state machine - one explicit state instead of scattered
//! pointer-enter/leave flags.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Dragging     (gesture start, or first move while idle)
//! Dragging -> Dragging (move - records the latest offset)
//! Any -> Idle          (gesture end or dispose)
//! ```

/// Drag state of a carousel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    /// No pointer interaction in progress
    #[default]
    Idle,

    /// Pointer is on the carousel; `offset` is the horizontal displacement
    /// reported by the surface, `None` until the first move
    Dragging {
        offset: Option<f32>,
    },
}

impl GestureState {
    /// Returns true if a gesture is in progress
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Returns true if the state is Idle
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Current drag offset, if a move has been reported
    pub fn drag_offset(&self) -> Option<f32> {
        match self {
            Self::Dragging { offset } => *offset,
            Self::Idle => None,
        }
    }

    /// Begin a gesture. A gesture already in progress keeps its offset.
    pub fn start(&mut self) {
        if self.is_idle() {
            *self = Self::Dragging { offset: None };
        }
    }

    /// Record a move, starting the gesture if needed
    pub fn set_offset(&mut self, delta: f32) {
        *self = Self::Dragging { offset: Some(delta) };
    }

    /// Reset to Idle state
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
