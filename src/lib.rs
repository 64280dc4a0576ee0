//! Carousel - slide carousels and countdowns for animated invitation pages.
//!
//! The crate holds the only stateful logic behind the marketing site's
//! pricing carousel, event-type showcase and photo gallery: which slide is
//! showing, when it advances on its own, and how a drag resolves. Rendering
//! stays with the host; it reads the controller and reports gestures back.
//!
//! ## Modules
//!
//! - `controller` - `CarouselController`, the single owner of the current index
//! - `gesture` - drag state machine and swipe resolution
//! - `timer` - auto-advance timer handle and the `Clock` abstraction
//! - `observer` - index change notifications
//! - `surface` - geometry helpers for scroll-snap strips and the card stack
//! - `settings` - serde-backed carousel settings and presets
//! - `countdown` - time remaining until the event
//! - `logging` / `perf` - tracing setup and profiling scopes

pub mod constants;
pub mod controller;
pub mod countdown;
pub mod error;
pub mod gesture;
pub mod logging;
pub mod observer;
pub mod perf;
pub mod settings;
pub mod surface;
pub mod timer;

pub use controller::{CarouselBuilder, CarouselController};
pub use error::{CarouselError, CarouselResult, SettingsError};
pub use gesture::{GestureOutcome, GestureState, SwipeResolution, SwipeThreshold};
pub use observer::{IndexChange, NavigationCause, SubscriptionId};
pub use settings::CarouselSettings;
pub use timer::{Clock, ManualClock, SystemClock};
