//! In-memory viewport for exercising the navigation core without a browser.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use super::viewport::{ScrollListener, ScrollSubscription, Viewport, ViewportError};

#[derive(Default)]
struct Inner {
    offset: f64,
    next_listener: usize,
    listeners: Vec<(usize, ScrollListener)>,
    released: HashSet<usize>,
    anchors: HashSet<String>,
    scroll_requests: Vec<String>,
    unavailable: bool,
}

#[derive(Clone, Default)]
pub struct FakeViewport {
    inner: Rc<RefCell<Inner>>,
}

impl FakeViewport {
    pub fn with_anchors<'a>(ids: impl IntoIterator<Item = &'a str>) -> Self {
        let viewport = Self::default();
        for id in ids {
            viewport.mount(id);
        }
        viewport
    }

    /// A host that refuses scroll subscriptions.
    pub fn without_scroll_signal() -> Self {
        let viewport = Self::default();
        viewport.inner.borrow_mut().unavailable = true;
        viewport
    }

    pub fn mount(&self, id: &str) {
        self.inner.borrow_mut().anchors.insert(id.to_string());
    }

    pub fn set_offset(&self, offset: f64) {
        self.inner.borrow_mut().offset = offset;
    }

    /// Moves the viewport and delivers the event to every live listener.
    pub fn scroll_to(&self, offset: f64) {
        let mut listeners = {
            let mut inner = self.inner.borrow_mut();
            inner.offset = offset;
            std::mem::take(&mut inner.listeners)
        };
        for (_, listener) in listeners.iter_mut() {
            listener(offset);
        }
        let mut inner = self.inner.borrow_mut();
        // Listeners released while being dispatched must not come back.
        listeners.retain(|(id, _)| !inner.released.contains(id));
        listeners.append(&mut inner.listeners);
        inner.listeners = listeners;
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    pub fn scroll_requests(&self) -> Vec<String> {
        self.inner.borrow().scroll_requests.clone()
    }
}

impl Viewport for FakeViewport {
    type Anchor = String;

    fn scroll_offset(&self) -> Option<f64> {
        let inner = self.inner.borrow();
        (!inner.unavailable).then_some(inner.offset)
    }

    fn subscribe_scroll(&self, listener: ScrollListener) -> Result<ScrollSubscription, ViewportError> {
        let mut inner = self.inner.borrow_mut();
        if inner.unavailable {
            return Err(ViewportError::NoWindow);
        }
        let id = inner.next_listener;
        inner.next_listener += 1;
        inner.listeners.push((id, listener));

        let registry = Rc::downgrade(&self.inner);
        Ok(ScrollSubscription::new(move || {
            if let Some(registry) = registry.upgrade() {
                let mut registry = registry.borrow_mut();
                registry.released.insert(id);
                registry.listeners.retain(|(live, _)| *live != id);
            }
        }))
    }

    fn resolve_anchor(&self, id: &str) -> Option<String> {
        self.inner.borrow().anchors.get(id).cloned()
    }

    fn smooth_scroll_into_view(&self, anchor: &String) {
        self.inner.borrow_mut().scroll_requests.push(anchor.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn listener_released_during_dispatch_stays_released() {
        let viewport = FakeViewport::default();
        let slot: Rc<RefCell<Option<ScrollSubscription>>> = Rc::new(RefCell::new(None));
        let calls = Rc::new(Cell::new(0));

        let own_slot = slot.clone();
        let counter = calls.clone();
        let subscription = viewport
            .subscribe_scroll(Box::new(move |_| {
                counter.set(counter.get() + 1);
                drop(own_slot.borrow_mut().take());
            }))
            .expect("fake accepts subscriptions");
        *slot.borrow_mut() = Some(subscription);

        viewport.scroll_to(10.0);
        assert_eq!(viewport.listener_count(), 0);

        viewport.scroll_to(20.0);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn other_listeners_survive_a_release_during_dispatch() {
        let viewport = FakeViewport::default();
        let slot: Rc<RefCell<Option<ScrollSubscription>>> = Rc::new(RefCell::new(None));
        let own_slot = slot.clone();
        let subscription = viewport
            .subscribe_scroll(Box::new(move |_| drop(own_slot.borrow_mut().take())))
            .expect("fake accepts subscriptions");
        *slot.borrow_mut() = Some(subscription);
        let _kept = viewport
            .subscribe_scroll(Box::new(|_| {}))
            .expect("fake accepts subscriptions");

        viewport.scroll_to(10.0);
        assert_eq!(viewport.listener_count(), 1);
    }
}
