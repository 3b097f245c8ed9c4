//! Binds the motion core to Leptos signals.
//!
//! Every binding is generic over its [`ViewportSource`] or [`Scheduler`] and holds its
//! subscription in the current reactive owner, so disposing the owner (unmounting the
//! component) detaches listeners and cancels timers.

use std::time::Duration;

use leptos::prelude::*;

use crate::motion::{
    ScrollProgressTracker, ScrolledPastTracker, Scheduler, TypingEngine, TypingEvent,
    TypingTiming, ViewportSource, VisibilityObserver, VisibilityPolicy,
};

/// Keeps `value` alive until the current owner is cleaned up, then drops it.
pub fn hold_until_cleanup<T: 'static>(value: T) -> StoredValue<T, LocalStorage> {
    let held = StoredValue::new_local(value);
    on_cleanup(move || held.dispose());
    held
}

/// Whether `target` is on screen by at least `threshold` of its area.
pub fn section_visibility<V: ViewportSource>(
    source: &V,
    target: V::Target,
    threshold: f64,
    policy: VisibilityPolicy,
) -> ReadSignal<bool> {
    let (visible, set_visible) = signal(false);
    hold_until_cleanup(VisibilityObserver::attach(
        source,
        target,
        threshold,
        policy,
        move |v| set_visible.set(v),
    ));
    visible
}

pub fn scroll_progress<V: ViewportSource>(source: &V) -> ReadSignal<f64> {
    let (progress, set_progress) = signal(0.0);
    hold_until_cleanup(ScrollProgressTracker::attach(source, move |p| {
        set_progress.set(p)
    }));
    progress
}

pub fn scrolled_past<V: ViewportSource>(source: &V, threshold_px: f64) -> ReadSignal<bool> {
    let (past, set_past) = signal(false);
    hold_until_cleanup(ScrolledPastTracker::attach(source, threshold_px, move |p| {
        set_past.set(p)
    }));
    past
}

/// Owner-scoped handle to a running typing animation.
pub struct TypingHandle<S: Scheduler + Clone + 'static> {
    engine: StoredValue<TypingEngine<S>, LocalStorage>,
}

impl<S: Scheduler + Clone + 'static> Clone for TypingHandle<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Scheduler + Clone + 'static> Copy for TypingHandle<S> {}

impl<S: Scheduler + Clone + 'static> TypingHandle<S> {
    /// Starts typing `text` from scratch. Does nothing once the owner is gone.
    pub fn restart(&self, text: impl Into<String>) {
        let text = text.into();
        if self.engine.try_update_value(|engine| engine.restart(text)).is_none() {
            log::debug!("typing restart after the animation was disposed");
        }
    }
}

/// Revealed prefix of `text`, the cursor's blink state and a handle for restarting.
pub fn typing<S: Scheduler + Clone + 'static>(
    scheduler: S,
    text: String,
    delay: Duration,
) -> (ReadSignal<String>, ReadSignal<bool>, TypingHandle<S>) {
    let (revealed, set_revealed) = signal(String::new());
    let (cursor, set_cursor) = signal(true);
    let engine = hold_until_cleanup(TypingEngine::start(
        scheduler,
        text,
        TypingTiming::with_delay(delay),
        move |event| match event {
            TypingEvent::Revealed(s) => set_revealed.set(s),
            TypingEvent::Cursor(on) => set_cursor.set(on),
        },
    ));
    (revealed, cursor, TypingHandle { engine })
}
