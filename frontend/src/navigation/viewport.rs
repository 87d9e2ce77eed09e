use std::fmt;
use thiserror::Error;

pub type ScrollListener = Box<dyn FnMut(f64)>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewportError {
    #[error("no browser window available")]
    NoWindow,
    #[error("scroll listener rejected: {0}")]
    ListenerRejected(String),
}

/// Host capabilities the navigation core depends on: the scroll event stream,
/// anchor lookup and the smooth-scroll primitive.
pub trait Viewport {
    type Anchor;

    /// Current vertical offset, if the host can report one.
    fn scroll_offset(&self) -> Option<f64>;

    /// Registers `listener` for vertical offset changes. The listener stays
    /// registered until the returned subscription is released.
    fn subscribe_scroll(&self, listener: ScrollListener) -> Result<ScrollSubscription, ViewportError>;

    fn resolve_anchor(&self, id: &str) -> Option<Self::Anchor>;

    /// Asks the host to animate the viewport so the anchor's top meets the viewport's top.
    fn smooth_scroll_into_view(&self, anchor: &Self::Anchor);
}

/// Handle to a registered scroll listener. Released exactly once, either by
/// [`ScrollSubscription::unsubscribe`] or on drop.
pub struct ScrollSubscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl ScrollSubscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self { release: Some(Box::new(release)) }
    }

    pub fn unsubscribe(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl fmt::Debug for ScrollSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollSubscription")
            .field("live", &self.release.is_some())
            .finish()
    }
}
