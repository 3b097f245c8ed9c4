//! Component-facing hooks over the browser's viewport and timers.
//!
//! On the server every hook renders its initial state (hidden, 0%, empty text); the browser
//! subscriptions only exist once hydrated, and are released with the owning component.

use std::time::Duration;

use leptos::{html, prelude::*};

#[cfg(feature = "hydrate")]
use super::browser::{BrowserScheduler, BrowserViewport};
#[cfg(feature = "hydrate")]
use crate::{config::SECTION_VISIBILITY, reactive};

/// Whether `target` is on screen by at least `threshold` of its area.
pub fn use_section_visibility(target: NodeRef<html::Section>, threshold: f64) -> ReadSignal<bool> {
    #[cfg(feature = "hydrate")]
    {
        reactive::section_visibility(&BrowserViewport, target, threshold, SECTION_VISIBILITY)
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (target, threshold);
        signal(false).0
    }
}

/// Hidden during server render, visible as soon as the component mounts in the browser.
pub fn use_mount_reveal() -> ReadSignal<bool> {
    let (visible, set_visible) = signal(false);
    Effect::new(move |_| set_visible.set(true));
    visible
}

pub fn use_scroll_progress() -> ReadSignal<f64> {
    #[cfg(feature = "hydrate")]
    {
        reactive::scroll_progress(&BrowserViewport)
    }

    #[cfg(not(feature = "hydrate"))]
    {
        signal(0.0).0
    }
}

pub fn use_scrolled_past(threshold_px: f64) -> ReadSignal<bool> {
    #[cfg(feature = "hydrate")]
    {
        reactive::scrolled_past(&BrowserViewport, threshold_px)
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = threshold_px;
        signal(false).0
    }
}

/// Revealed prefix of `text` and the cursor's blink state. Typing starts over whenever
/// `text` changes.
pub fn use_typing(text: Signal<String>, delay: Duration) -> (ReadSignal<String>, ReadSignal<bool>) {
    #[cfg(feature = "hydrate")]
    {
        let (revealed, cursor, handle) =
            reactive::typing(BrowserScheduler, text.get_untracked(), delay);
        Effect::watch(
            move || text.get(),
            move |next: &String, _, _| handle.restart(next.clone()),
            false,
        );
        (revealed, cursor)
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (text, delay);
        (signal(String::new()).0, signal(true).0)
    }
}
