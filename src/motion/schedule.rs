use std::time::Duration;

use super::Disposer;

/// Source of timers for animation loops.
///
/// Tasks run on the caller's event loop; nothing here is `Send`. Every task is cancelled when
/// its returned [`Disposer`] is disposed or dropped.
pub trait Scheduler {
    /// Runs `task` once after `delay`.
    fn timeout(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Disposer;

    /// Runs `task` every `period`, first after one full period, until cancelled.
    fn interval(&self, period: Duration, task: Box<dyn FnMut()>) -> Disposer;
}
