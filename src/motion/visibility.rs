use std::{cell::Cell, rc::Rc, time::Duration};

use super::{Disposer, IntersectionEntry, ViewportSource};

/// How a section's visibility flag reacts once it has been seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisibilityPolicy {
    /// Mirrors the latest intersection report, so a section fades out again when scrolled away.
    #[default]
    Live,
    /// Flips to visible once and stays there.
    Latch,
}

/// Per-section "has this scrolled into view" flag. Starts hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisibilityFlag {
    policy: VisibilityPolicy,
    visible: bool,
}

impl VisibilityFlag {
    pub fn new(policy: VisibilityPolicy) -> Self {
        Self {
            policy,
            visible: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Applies an intersection report. Returns whether the flag changed.
    pub fn record(&mut self, is_intersecting: bool) -> bool {
        let next = match self.policy {
            VisibilityPolicy::Live => is_intersecting,
            VisibilityPolicy::Latch => self.visible || is_intersecting,
        };
        let changed = next != self.visible;
        self.visible = next;
        changed
    }
}

/// Fraction of an element that must be on screen, clamped to `[0, 1]`.
pub fn normalize_threshold(threshold: f64) -> f64 {
    if threshold.is_nan() {
        0.0
    } else {
        threshold.clamp(0.0, 1.0)
    }
}

/// Watches one element and keeps a [`VisibilityFlag`] in step with its intersection reports.
#[derive(Debug)]
pub struct VisibilityObserver {
    flag: Rc<Cell<VisibilityFlag>>,
    subscription: Disposer,
}

impl VisibilityObserver {
    /// Starts observing `target`. `on_change` only fires when the flag actually changes.
    pub fn attach<V: ViewportSource>(
        source: &V,
        target: V::Target,
        threshold: f64,
        policy: VisibilityPolicy,
        mut on_change: impl FnMut(bool) + 'static,
    ) -> Self {
        let flag = Rc::new(Cell::new(VisibilityFlag::new(policy)));
        let state = flag.clone();
        let subscription = source.observe_intersection(
            target,
            normalize_threshold(threshold),
            Box::new(move |entry: IntersectionEntry| {
                let mut current = state.get();
                if current.record(entry.is_intersecting) {
                    state.set(current);
                    on_change(current.is_visible());
                }
            }),
        );
        Self { flag, subscription }
    }

    pub fn is_visible(&self) -> bool {
        self.flag.get().is_visible()
    }

    pub fn detach(self) {
        self.subscription.dispose();
    }
}

const SHOWN: &str = "opacity-100 translate-y-0";
const HIDDEN: &str = "opacity-0 translate-y-10";

/// Utility classes toggled by a section's visibility flag.
pub fn reveal_classes(visible: bool) -> &'static str {
    if visible {
        SHOWN
    } else {
        HIDDEN
    }
}

/// `base` followed by the reveal classes for `visible`.
pub fn reveal_class(base: &str, visible: bool) -> String {
    format!("{base} {}", reveal_classes(visible))
}

/// Delay for the `index`th item of a staggered group.
pub fn stagger_delay(index: usize, step: Duration) -> Duration {
    step.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX))
}

/// Inline style setting `property` (e.g. `transition-delay`) for a staggered item.
pub fn stagger_style(property: &str, index: usize, step: Duration) -> String {
    format!("{property}: {}ms", stagger_delay(index, step).as_millis())
}
