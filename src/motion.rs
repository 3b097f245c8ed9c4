//! Scroll- and timer-driven animation state shared by the page sections.
//!
//! Nothing here touches the DOM. Browser signals arrive through [`ViewportSource`] and timers
//! through [`Scheduler`], so every behaviour can be driven synthetically in tests.

mod dispose;
mod schedule;
mod scroll;
#[cfg(test)]
pub(crate) mod testing;
mod typing;
mod viewport;
mod visibility;

pub use dispose::Disposer;
pub use schedule::Scheduler;
pub use scroll::{ScrollProgressTracker, ScrolledPastTracker};
pub use typing::{CursorBlink, TypingEngine, TypingEvent, TypingState, TypingTiming};
pub use viewport::{IntersectionEntry, ScrollMetrics, ViewportSource};
pub use visibility::{
    normalize_threshold, reveal_class, reveal_classes, stagger_delay, stagger_style,
    VisibilityFlag, VisibilityObserver, VisibilityPolicy,
};
