use log::{debug, warn};

use super::viewport::{ScrollSubscription, Viewport};
use crate::config::SCROLL_THRESHOLD;

pub fn is_past_threshold(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD
}

/// Forwards every scroll offset reported by a viewport to a handler for as
/// long as the tracker lives.
///
/// When the host provides no scroll signal the tracker is created detached
/// and the handler simply never fires.
#[derive(Debug)]
pub struct ScrollTracker {
    subscription: Option<ScrollSubscription>,
}

impl ScrollTracker {
    pub fn activate<V>(viewport: &V, mut on_offset: impl FnMut(f64) + 'static) -> Self
    where
        V: Viewport + ?Sized,
    {
        // A page restored mid-scroll must start in the right style.
        if let Some(offset) = viewport.scroll_offset() {
            on_offset(offset);
        }

        match viewport.subscribe_scroll(Box::new(on_offset)) {
            Ok(subscription) => {
                debug!("scroll tracking attached");
                Self { subscription: Some(subscription) }
            }
            Err(err) => {
                warn!("scroll tracking unavailable: {err}");
                Self { subscription: None }
            }
        }
    }

    pub fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn teardown(mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
            debug!("scroll tracking released");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::fake::FakeViewport;
    use crate::navigation::state::NavigationState;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn tracked(viewport: &FakeViewport) -> (Rc<RefCell<NavigationState>>, ScrollTracker) {
        let state = Rc::new(RefCell::new(NavigationState::default()));
        let sink = state.clone();
        let tracker = ScrollTracker::activate(viewport, move |offset| {
            sink.borrow_mut().on_scroll(offset);
        });
        (state, tracker)
    }

    #[test]
    fn threshold_is_strict() {
        assert!(!is_past_threshold(0.0));
        assert!(!is_past_threshold(50.0));
        assert!(is_past_threshold(50.5));
    }

    #[test]
    fn offset_sequence_toggles_scrolled_flag() {
        let viewport = FakeViewport::default();
        let (state, _tracker) = tracked(&viewport);

        let observed: Vec<bool> = [0.0, 10.0, 60.0, 40.0, 100.0]
            .into_iter()
            .map(|offset| {
                viewport.scroll_to(offset);
                state.borrow().is_scrolled()
            })
            .collect();

        assert_eq!(observed, [false, false, true, false, true]);
    }

    #[test]
    fn activation_samples_current_offset() {
        let viewport = FakeViewport::default();
        viewport.set_offset(300.0);
        let (state, _tracker) = tracked(&viewport);
        assert!(state.borrow().is_scrolled());
    }

    #[test]
    fn teardown_stops_updates() {
        let viewport = FakeViewport::default();
        let (state, tracker) = tracked(&viewport);
        viewport.scroll_to(80.0);
        assert!(tracker.is_attached());

        tracker.teardown();
        assert_eq!(viewport.listener_count(), 0);

        let before = state.borrow().clone();
        viewport.scroll_to(0.0);
        assert_eq!(*state.borrow(), before);
        assert!(state.borrow().is_scrolled());
    }

    #[test]
    fn dropping_tracker_releases_listener() {
        let viewport = FakeViewport::default();
        let (state, tracker) = tracked(&viewport);
        assert_eq!(viewport.listener_count(), 1);

        drop(tracker);
        assert_eq!(viewport.listener_count(), 0);

        viewport.scroll_to(500.0);
        assert!(!state.borrow().is_scrolled());
    }

    #[test]
    fn missing_scroll_signal_keeps_initial_style() {
        let viewport = FakeViewport::without_scroll_signal();
        let (state, tracker) = tracked(&viewport);
        assert!(!tracker.is_attached());

        viewport.scroll_to(500.0);
        assert!(!state.borrow().is_scrolled());
        tracker.teardown();
    }
}
