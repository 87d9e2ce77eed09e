use web_sys::Element;
use yew::prelude::*;

use crate::animation::{next_revealed, Entrance, Slide};
use crate::config::SECTION_ENTRANCE_MS;
use crate::navigation::browser::element_top;
use crate::navigation::{BrowserViewport, ScrollTracker};

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or(Slide::FromBelow(30))]
    pub slide: Slide,
    #[prop_or_default]
    pub children: Children,
}

/// Fades its children in the first time they scroll into view, and keeps them shown.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let revealed = use_state(|| false);
    let node = use_node_ref();

    {
        let node = node.clone();
        let reveal = revealed.setter();
        use_effect_with_deps(
            move |revealed| {
                // Once shown there is nothing left to watch.
                let destructor: Box<dyn FnOnce()> = if *revealed {
                    Box::new(|| ())
                } else {
                    let fallback = reveal.clone();
                    let mut shown = false;
                    let tracker = ScrollTracker::activate(&BrowserViewport, move |_offset| {
                        let Some(element) = node.cast::<Element>() else {
                            return;
                        };
                        let Some(height) = BrowserViewport.height() else {
                            return;
                        };
                        let next = next_revealed(shown, element_top(&element), height);
                        if next && !shown {
                            reveal.set(true);
                        }
                        shown = next;
                    });
                    // Without scroll events the content would stay hidden forever.
                    if !tracker.is_attached() {
                        fallback.set(true);
                    }
                    Box::new(move || tracker.teardown())
                };
                destructor
            },
            *revealed,
        );
    }

    let entrance = Entrance::new(props.slide, SECTION_ENTRANCE_MS);

    html! {
        <div
            ref={node}
            class={classes!("entrance", (*revealed).then(|| "entered"))}
            style={entrance.style()}
        >
            { for props.children.iter() }
        </div>
    }
}
