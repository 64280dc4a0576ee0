//! Index change notifications.
//!
//! Rendering surfaces subscribe to learn when the controller moved to a
//! different slide. Listeners only ever see changes; a navigation that
//! lands on the same index (a single-slide carousel) is silent.

use serde::Serialize;
use std::fmt;

/// Why the current index changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationCause {
    /// `next()` from an arrow or host code
    Next,
    /// `previous()` from an arrow or host code
    Previous,
    /// `go_to()` from a pagination dot
    Jump,
    /// Auto-advance timer fired
    AutoAdvance,
    /// Drag resolved past the threshold
    Swipe,
    /// Surface reported a settled native scroll
    ScrollSettled,
    /// Slide list changed size and the index was clamped
    SlideCountChanged,
}

/// One index transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndexChange {
    pub previous: usize,
    pub current: usize,
    pub cause: NavigationCause,
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&IndexChange)>;

/// Registered listeners, notified in subscription order.
#[derive(Default)]
pub struct Observers {
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Observers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&IndexChange) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Hand out a fresh id without registering anything. Unsubscribing it
    /// returns false.
    pub fn detached_id(&mut self) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Remove a listener. Returns false if the id was unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    pub fn notify(&mut self, change: &IndexChange) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(change);
        }
    }

    pub fn count(&self) -> usize {
        self.listeners.len()
    }

    pub fn clear(&mut self) {
        self.listeners.clear();
    }
}
