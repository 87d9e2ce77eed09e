use yew::prelude::*;

use crate::animation::{Entrance, Slide};
use crate::components::icon::IconGlyph;
use crate::config::{NAV_ENTRANCE_MS, SITE_TITLE};
use crate::navigation::Section;

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub sections: &'static [Section],
    pub active_section_id: &'static str,
    pub is_scrolled: bool,
    pub entered: bool,
    pub on_navigate: Callback<&'static str>,
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let NavBarProps { sections, active_section_id, is_scrolled, entered, on_navigate } = props;
    let title_entrance = Entrance::new(Slide::FromLeft(20), NAV_ENTRANCE_MS);

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <h1
                    class={classes!("nav-title", "entrance", (*entered).then(|| "entered"))}
                    style={title_entrance.style()}
                >
                    {SITE_TITLE}
                </h1>
                <div class="nav-links">
                    {
                        for sections.iter().enumerate().map(|(index, section)| {
                            let onclick = {
                                let on_navigate = on_navigate.clone();
                                let section_id = section.id;
                                Callback::from(move |_: MouseEvent| on_navigate.emit(section_id))
                            };
                            let entrance = Entrance::new(Slide::FromAbove(20), NAV_ENTRANCE_MS)
                                .staggered(0, index);
                            let active = *active_section_id == section.id;

                            html! {
                                <button
                                    key={section.id}
                                    class={classes!(
                                        "nav-link",
                                        "entrance",
                                        (*entered).then(|| "entered"),
                                        active.then(|| "active"),
                                    )}
                                    style={entrance.style()}
                                    {onclick}
                                >
                                    <IconGlyph icon={section.icon} class={classes!("nav-icon")} />
                                    {section.title}
                                </button>
                            }
                        })
                    }
                </div>
            </div>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        width: 100%;
                        z-index: 50;
                        background: transparent;
                        transition: all 0.3s ease;
                    }

                    .top-nav.scrolled {
                        background: rgba(255, 255, 255, 0.95);
                        backdrop-filter: blur(4px);
                        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                    }

                    .nav-content {
                        max-width: 1280px;
                        margin: 0 auto;
                        padding: 1rem 1.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }

                    .nav-title {
                        margin: 0;
                    }

                    .nav-links {
                        display: flex;
                        gap: 1.5rem;
                    }

                    .nav-link {
                        border: none;
                        background: transparent;
                        color: #4b5563;
                        padding: 0.5rem 1rem;
                        border-radius: 0.5rem;
                        cursor: pointer;
                        font-size: 0.95rem;
                        transition: all 0.3s ease;
                    }

                    .nav-link:hover {
                        color: #3b82f6;
                        background: #eff6ff;
                    }

                    .nav-link.active {
                        background: #3b82f6;
                        color: #ffffff;
                    }

                    .nav-icon {
                        margin-right: 0.5rem;
                    }

                    @media (max-width: 768px) {
                        .nav-links {
                            display: none;
                        }
                    }
                "#}
            </style>
        </nav>
    }
}
