//! Viewport density classification
//!
//! Maps a window width to [`ViewportClass`] and fans class changes out to
//! subscribers. Subscribers are only called when the class flips, so a burst
//! of resize events inside one class coalesces into nothing.

use crate::domain::models::ViewportClass;
use crate::shared::logging::log_viewport_change;

/// `Compact` iff `width < breakpoint_px`
pub fn classify(width: u32, breakpoint_px: u32) -> ViewportClass {
    if width < breakpoint_px {
        ViewportClass::Compact
    } else {
        ViewportClass::Regular
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(ViewportClass)>;

pub struct ViewportClassifier {
    breakpoint_px: u32,
    width: u32,
    current: ViewportClass,
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

impl ViewportClassifier {
    /// Sample `width` once; `current()` is valid immediately.
    pub fn new(width: u32, breakpoint_px: u32) -> Self {
        Self {
            breakpoint_px,
            width,
            current: classify(width, breakpoint_px),
            next_id: 0,
            listeners: Vec::new(),
        }
    }

    pub fn current(&self) -> ViewportClass {
        self.current
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    /// Register a change listener. The subscribe-time sample is `current()`.
    pub fn subscribe(&mut self, listener: impl FnMut(ViewportClass) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if `id` was not (or no longer) registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Feed a new window width. Returns the new class if it changed.
    pub fn on_resize(&mut self, width: u32) -> Option<ViewportClass> {
        self.width = width;
        let next = classify(width, self.breakpoint_px);
        if next == self.current {
            return None;
        }

        self.current = next;
        log_viewport_change(width, next);
        for (_, listener) in self.listeners.iter_mut() {
            listener(next);
        }
        Some(next)
    }
}

impl std::fmt::Debug for ViewportClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewportClassifier")
            .field("breakpoint_px", &self.breakpoint_px)
            .field("width", &self.width)
            .field("current", &self.current)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
