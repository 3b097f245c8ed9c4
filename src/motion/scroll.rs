use std::{cell::Cell, rc::Rc};

use super::{Disposer, ScrollMetrics, ViewportSource};

impl ScrollMetrics {
    /// Distance the viewport can travel through the document.
    pub fn scrollable_range(&self) -> f64 {
        self.scroll_height - self.viewport_height
    }

    /// Percentage of the document scrolled, in `[0, 100]`.
    ///
    /// A document that fits in the viewport has nothing to scroll and reports `0`.
    pub fn progress(&self) -> f64 {
        let range = self.scrollable_range();
        if range <= 0.0 || !range.is_finite() {
            return 0.0;
        }
        let progress = self.offset_y / range * 100.0;
        if progress.is_nan() {
            return 0.0;
        }
        progress.clamp(0.0, 100.0)
    }

    pub fn is_past(&self, threshold_px: f64) -> bool {
        self.offset_y > threshold_px
    }
}

/// Recomputes scroll progress from scratch on every scroll event.
#[derive(Debug)]
pub struct ScrollProgressTracker {
    last: Rc<Cell<f64>>,
    subscription: Disposer,
}

impl ScrollProgressTracker {
    pub fn attach<V: ViewportSource>(
        source: &V,
        mut on_progress: impl FnMut(f64) + 'static,
    ) -> Self {
        let last = Rc::new(Cell::new(0.0));
        let seen = last.clone();
        let subscription = source.subscribe_scroll(Box::new(move |metrics| {
            let progress = metrics.progress();
            seen.set(progress);
            on_progress(progress);
        }));
        Self {
            last,
            subscription,
        }
    }

    pub fn progress(&self) -> f64 {
        self.last.get()
    }

    pub fn detach(self) {
        self.subscription.dispose();
    }
}

/// Tracks whether the page has scrolled beyond a fixed offset, notifying only on change.
#[derive(Debug)]
pub struct ScrolledPastTracker {
    past: Rc<Cell<bool>>,
    subscription: Disposer,
}

impl ScrolledPastTracker {
    pub fn attach<V: ViewportSource>(
        source: &V,
        threshold_px: f64,
        mut on_change: impl FnMut(bool) + 'static,
    ) -> Self {
        let past = Rc::new(Cell::new(false));
        let state = past.clone();
        let subscription = source.subscribe_scroll(Box::new(move |metrics| {
            let now_past = metrics.is_past(threshold_px);
            if state.replace(now_past) != now_past {
                on_change(now_past);
            }
        }));
        Self {
            past,
            subscription,
        }
    }

    pub fn is_past(&self) -> bool {
        self.past.get()
    }

    pub fn detach(self) {
        self.subscription.dispose();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::motion::testing::SyntheticViewport;

    fn metrics(offset_y: f64, scroll_height: f64, viewport_height: f64) -> ScrollMetrics {
        ScrollMetrics {
            offset_y,
            scroll_height,
            viewport_height,
        }
    }

    #[test]
    fn halfway_down() {
        assert_eq!(metrics(500.0, 2000.0, 1000.0).progress(), 50.0);
    }

    #[test]
    fn bottom_is_full() {
        assert_eq!(metrics(1000.0, 2000.0, 1000.0).progress(), 100.0);
        assert_eq!(metrics(0.0, 2000.0, 1000.0).progress(), 0.0);
    }

    #[test]
    fn unscrollable_document_is_zero() {
        for offset in [0.0, 10.0, 500.0] {
            let p = metrics(offset, 1000.0, 1000.0).progress();
            assert_eq!(p, 0.0);
            assert!(p.is_finite());
        }
        // content shorter than the viewport
        assert_eq!(metrics(25.0, 800.0, 1000.0).progress(), 0.0);
    }

    #[test]
    fn overscroll_is_clamped() {
        assert_eq!(metrics(-40.0, 2000.0, 1000.0).progress(), 0.0);
        assert_eq!(metrics(1060.0, 2000.0, 1000.0).progress(), 100.0);
    }

    #[test]
    fn monotonic_in_offset() {
        let mut prev = -1.0;
        for step in 0..=40 {
            let p = metrics(step as f64 * 37.5, 2500.0, 1000.0).progress();
            assert!(p >= prev, "{p} < {prev} at step {step}");
            prev = p;
        }
    }

    #[test]
    fn nan_offset_is_zero() {
        assert_eq!(metrics(f64::NAN, 2000.0, 1000.0).progress(), 0.0);
    }

    #[test]
    fn tracker_follows_scroll_events() {
        let viewport = SyntheticViewport::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = seen.clone();
        let tracker = ScrollProgressTracker::attach(&viewport, move |p| s.borrow_mut().push(p));
        assert_eq!(tracker.progress(), 0.0);

        viewport.scroll_to(250.0, 2000.0, 1000.0);
        viewport.scroll_to(500.0, 2000.0, 1000.0);
        viewport.scroll_to(500.0, 1000.0, 1000.0);
        assert_eq!(*seen.borrow(), vec![25.0, 50.0, 0.0]);
        assert_eq!(tracker.progress(), 0.0);

        tracker.detach();
        assert_eq!(viewport.live_subscriptions(), 0);
        viewport.scroll_to(750.0, 2000.0, 1000.0);
        assert_eq!(seen.borrow().len(), 3);
    }

    #[test]
    fn scrolled_past_notifies_on_change_only() {
        let viewport = SyntheticViewport::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = seen.clone();
        let tracker = ScrolledPastTracker::attach(&viewport, 50.0, move |b| s.borrow_mut().push(b));

        viewport.scroll_to(10.0, 3000.0, 800.0);
        viewport.scroll_to(50.0, 3000.0, 800.0);
        viewport.scroll_to(51.0, 3000.0, 800.0);
        viewport.scroll_to(400.0, 3000.0, 800.0);
        assert!(tracker.is_past());
        viewport.scroll_to(0.0, 3000.0, 800.0);
        assert_eq!(*seen.borrow(), vec![true, false]);
        assert!(!tracker.is_past());
    }

    #[test]
    fn dropping_tracker_unsubscribes() {
        let viewport = SyntheticViewport::new();
        {
            let _progress = ScrollProgressTracker::attach(&viewport, |_| {});
            let _nav = ScrolledPastTracker::attach(&viewport, 50.0, |_| {});
            assert_eq!(viewport.live_subscriptions(), 2);
        }
        assert_eq!(viewport.live_subscriptions(), 0);
    }
}
