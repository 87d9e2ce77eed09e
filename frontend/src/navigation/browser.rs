use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use super::viewport::{ScrollListener, ScrollSubscription, Viewport, ViewportError};

/// The page's browser window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserViewport;

impl BrowserViewport {
    /// Height of the visible area in CSS px.
    pub fn height(&self) -> Option<f64> {
        window()?.inner_height().ok()?.as_f64()
    }
}

impl Viewport for BrowserViewport {
    type Anchor = Element;

    fn scroll_offset(&self) -> Option<f64> {
        window()?.scroll_y().ok().map(clamp_offset)
    }

    fn subscribe_scroll(&self, mut listener: ScrollListener) -> Result<ScrollSubscription, ViewportError> {
        let window = window().ok_or(ViewportError::NoWindow)?;
        let reader = window.clone();

        let scroll_callback = Closure::wrap(Box::new(move || {
            if let Ok(offset) = reader.scroll_y() {
                listener(clamp_offset(offset));
            }
        }) as Box<dyn FnMut()>);

        window
            .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
            .map_err(|err| ViewportError::ListenerRejected(format!("{err:?}")))?;

        Ok(ScrollSubscription::new(move || {
            if let Err(err) = window
                .remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
            {
                warn!("failed to remove scroll listener: {err:?}");
            }
        }))
    }

    fn resolve_anchor(&self, id: &str) -> Option<Element> {
        let document = window()?.document()?;
        document.get_element_by_id(id)
    }

    fn smooth_scroll_into_view(&self, anchor: &Element) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        debug!("scrolling #{} into view", anchor.id());
        anchor.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Overscroll bounce on some browsers reports negative offsets.
pub fn clamp_offset(raw: f64) -> f64 {
    raw.max(0.0)
}

/// Distance in CSS px from the viewport's top edge to the element's top edge.
pub fn element_top(element: &Element) -> f64 {
    element.get_bounding_client_rect().top()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::tracker::is_past_threshold;

    #[test]
    fn overscroll_reads_as_top_of_page() {
        assert_eq!(clamp_offset(-35.0), 0.0);
        assert_eq!(clamp_offset(0.0), 0.0);
        assert_eq!(clamp_offset(120.0), 120.0);
        assert!(!is_past_threshold(clamp_offset(-80.0)));
    }
}
