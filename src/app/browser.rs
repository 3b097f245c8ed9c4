use std::{cell::RefCell, time::Duration};

use leptos::{ev, html, prelude::*};
use leptos_use::{
    use_event_listener, use_intersection_observer_with_options, use_window,
    UseIntersectionObserverOptions, UseIntersectionObserverReturn,
};

use crate::motion::{Disposer, IntersectionEntry, Scheduler, ScrollMetrics, ViewportSource};

/// Timers backed by the window's `setTimeout` / `setInterval`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn timeout(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Disposer {
        match set_timeout_with_handle(task, delay) {
            Ok(handle) => Disposer::new(move || handle.clear()),
            Err(e) => {
                log::warn!("couldn't schedule timeout: {e:?}");
                Disposer::noop()
            }
        }
    }

    fn interval(&self, period: Duration, task: Box<dyn FnMut()>) -> Disposer {
        let task = RefCell::new(task);
        match set_interval_with_handle(move || (task.borrow_mut())(), period) {
            Ok(handle) => Disposer::new(move || handle.clear()),
            Err(e) => {
                log::warn!("couldn't schedule interval: {e:?}");
                Disposer::noop()
            }
        }
    }
}

/// Window scroll events and element intersection, via leptos-use.
///
/// Must be used inside a reactive owner; the underlying listeners are also released when
/// that owner is cleaned up.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserViewport;

fn current_scroll_metrics() -> ScrollMetrics {
    let win = window();
    let offset_y = win.scroll_y().unwrap_or_default();
    let viewport_height = win
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or_default();
    let scroll_height = document()
        .document_element()
        .map(|el| f64::from(el.scroll_height()))
        .unwrap_or_default();
    ScrollMetrics {
        offset_y,
        scroll_height,
        viewport_height,
    }
}

impl ViewportSource for BrowserViewport {
    type Target = NodeRef<html::Section>;

    fn subscribe_scroll(&self, mut listener: Box<dyn FnMut(ScrollMetrics)>) -> Disposer {
        let stop = use_event_listener(use_window(), ev::scroll, move |_| {
            listener(current_scroll_metrics())
        });
        Disposer::new(move || stop())
    }

    fn observe_intersection(
        &self,
        target: Self::Target,
        threshold: f64,
        mut listener: Box<dyn FnMut(IntersectionEntry)>,
    ) -> Disposer {
        let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
            target,
            move |entries, _| {
                for entry in entries {
                    listener(IntersectionEntry {
                        is_intersecting: entry.is_intersecting(),
                    });
                }
            },
            UseIntersectionObserverOptions::default().thresholds(vec![threshold]),
        );
        Disposer::new(move || stop())
    }
}
