use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, info};
use yew::prelude::*;

use crate::animation::ENTRANCE_CSS;
use crate::components::conclusion::Conclusion;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::nav_bar::NavBar;
use crate::components::topic::{TopicSection, TOPIC_CSS};
use crate::content::topic_for;
use crate::navigation::sections::agenda;
use crate::navigation::{BrowserViewport, NavigationState, ScrollTracker, SECTIONS};

pub enum NavigationAction {
    Scrolled(f64),
    Navigate(&'static str),
}

impl Reducible for NavigationState {
    type Action = NavigationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let changed = match action {
            NavigationAction::Scrolled(offset) => next.on_scroll(offset),
            NavigationAction::Navigate(section_id) => next.navigate_to(&BrowserViewport, section_id),
        };
        if changed {
            Rc::new(next)
        } else {
            self
        }
    }
}

/// Page controller: owns the navigation state for the lifetime of the page.
#[function_component(App)]
pub fn app() -> Html {
    let navigation = use_reducer_eq(|| NavigationState::new(SECTIONS).unwrap_or_default());
    let entered = use_state(|| false);

    {
        let dispatcher = navigation.dispatcher();
        use_effect_with_deps(
            move |_| {
                info!("Meeting page mounted");
                let tracker = ScrollTracker::activate(&BrowserViewport, move |offset| {
                    dispatcher.dispatch(NavigationAction::Scrolled(offset));
                });
                move || tracker.teardown()
            },
            (),
        );
    }

    // Let the first paint happen before flipping the entrance transitions on.
    {
        let entered = entered.setter();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(0, move || entered.set(true));
                move || drop(timeout)
            },
            (),
        );
    }

    let on_navigate = {
        let dispatcher = navigation.dispatcher();
        Callback::from(move |section_id: &'static str| {
            debug!("navigation requested to #{section_id}");
            dispatcher.dispatch(NavigationAction::Navigate(section_id));
        })
    };

    let sections = navigation.catalog();
    let conclusion_id = sections.last().map(|section| section.id).unwrap_or("conclusion");

    html! {
        <div class="meeting-page">
            <NavBar
                sections={sections}
                active_section_id={navigation.active_section_id()}
                is_scrolled={navigation.is_scrolled()}
                entered={*entered}
                on_navigate={on_navigate.clone()}
            />
            <Hero sections={sections} entered={*entered} on_navigate={on_navigate} />
            {
                for agenda(sections)
                    .iter()
                    .filter_map(|section| topic_for(section.id))
                    .map(|topic| html! { <TopicSection key={topic.section_id} topic={topic} /> })
            }
            <Conclusion section_id={conclusion_id} />
            <Footer />
            <style>{ENTRANCE_CSS}</style>
            <style>{TOPIC_CSS}</style>
            <style>
                {r#"
                    html {
                        scroll-behavior: smooth;
                    }

                    body {
                        margin: 0;
                        font-family: 'Inter', system-ui, sans-serif;
                    }

                    .meeting-page {
                        min-height: 100vh;
                        background: linear-gradient(to bottom right, #ffffff, #f9fafb);
                    }

                    .container {
                        max-width: 1280px;
                        margin: 0 auto;
                    }

                    .nav-title {
                        font-size: 1.75rem;
                        font-weight: 700;
                        color: #1e3a8a;
                    }

                    .icon {
                        display: inline-block;
                        line-height: 1;
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_action_only_rebuilds_on_style_change() {
        let state = Rc::new(NavigationState::default());

        let unchanged = state.clone().reduce(NavigationAction::Scrolled(20.0));
        assert!(Rc::ptr_eq(&state, &unchanged));

        let scrolled = state.clone().reduce(NavigationAction::Scrolled(80.0));
        assert!(!Rc::ptr_eq(&state, &scrolled));
        assert!(scrolled.is_scrolled());
        assert_eq!(scrolled.active_section_id(), state.active_section_id());
    }
}
