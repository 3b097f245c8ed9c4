use std::fmt;

/// Handle to a live subscription or scheduled task.
///
/// Calling [`Disposer::dispose`] cancels it. Dropping a `Disposer` that was never disposed
/// cancels it too, so a view that owns its disposers cannot leak callbacks past teardown.
#[must_use = "dropping a Disposer cancels the subscription immediately"]
pub struct Disposer {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Disposer {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// A handle with nothing to cancel, used when registration itself failed.
    pub fn noop() -> Self {
        Self { cancel: None }
    }

    pub fn dispose(mut self) {
        self.cancel_now();
    }

    fn cancel_now(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Disposer {
    fn drop(&mut self) {
        self.cancel_now();
    }
}

impl fmt::Debug for Disposer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Disposer")
            .field("live", &self.cancel.is_some())
            .finish()
    }
}
