use super::Disposer;

/// Snapshot of the document's vertical scroll geometry, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub offset_y: f64,
    pub scroll_height: f64,
    pub viewport_height: f64,
}

/// One intersection change reported for an observed element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IntersectionEntry {
    pub is_intersecting: bool,
}

impl IntersectionEntry {
    pub fn entering() -> Self {
        Self {
            is_intersecting: true,
        }
    }

    pub fn leaving() -> Self {
        Self {
            is_intersecting: false,
        }
    }
}

/// Externally owned viewport signals: window scrolling and element intersection.
///
/// Implemented over the DOM in the browser and by a synthetic source in tests.
pub trait ViewportSource {
    /// Handle identifying an observable element.
    type Target;

    fn subscribe_scroll(&self, listener: Box<dyn FnMut(ScrollMetrics)>) -> Disposer;

    /// Watches `target`, reporting a change whenever its visible fraction crosses `threshold`.
    fn observe_intersection(
        &self,
        target: Self::Target,
        threshold: f64,
        listener: Box<dyn FnMut(IntersectionEntry)>,
    ) -> Disposer;
}
