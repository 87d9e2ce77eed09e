use yew::prelude::*;

use crate::animation::{Entrance, Slide};
use crate::components::icon::IconGlyph;
use crate::config::{AGENDA_BASE_DELAY_MS, NAV_ENTRANCE_MS, SECTION_ENTRANCE_MS};
use crate::navigation::sections::agenda;
use crate::navigation::{Icon, Section};

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub sections: &'static [Section],
    pub entered: bool,
    pub on_navigate: Callback<&'static str>,
}

/// Opening section: meeting title, clickable agenda and the welcome image.
#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let HeroProps { sections, entered, on_navigate } = props;
    let entered_class = (*entered).then(|| "entered");
    let section_id = sections.first().map(|section| section.id).unwrap_or("intro");

    let headline = Entrance::new(Slide::FromBelow(30), SECTION_ENTRANCE_MS);
    let agenda_column = Entrance::new(Slide::FromLeft(50), SECTION_ENTRANCE_MS).delayed(300);
    let image_column = Entrance::new(Slide::FromRight(50), SECTION_ENTRANCE_MS).delayed(500);
    let chevron = Entrance::new(Slide::Fade, SECTION_ENTRANCE_MS).delayed(1000);

    html! {
        <section id={section_id} class="hero">
            <div class="container">
                <div class={classes!("hero-header", "entrance", entered_class)} style={headline.style()}>
                    <h1>{"Parents and Teachers Association Meeting"}</h1>
                    <p class="hero-subtitle">{"Working Together for Our Children's Well-being"}</p>
                    <p class="hero-tagline">
                        {"A scientifically-backed approach to child well-being and development"}
                    </p>
                </div>

                <div class="hero-grid">
                    <div class={classes!("entrance", entered_class)} style={agenda_column.style()}>
                        <h3 class="agenda-title">{"Meeting Agenda"}</h3>
                        <div class="agenda">
                            {
                                for agenda(*sections).iter().enumerate().map(|(index, section)| {
                                    let onclick = {
                                        let on_navigate = on_navigate.clone();
                                        let section_id = section.id;
                                        Callback::from(move |_: MouseEvent| on_navigate.emit(section_id))
                                    };
                                    let entrance = Entrance::new(Slide::FromLeft(30), NAV_ENTRANCE_MS)
                                        .staggered(AGENDA_BASE_DELAY_MS, index);
                                    html! {
                                        <div
                                            key={section.id}
                                            class={classes!("agenda-item", "entrance", entered_class)}
                                            style={entrance.style()}
                                            {onclick}
                                        >
                                            <IconGlyph icon={section.icon} class={classes!("agenda-icon")} />
                                            <span>{section.title}</span>
                                        </div>
                                    }
                                })
                            }
                        </div>
                    </div>

                    <div class={classes!("hero-image", "entrance", entered_class)} style={image_column.style()}>
                        <img src="/assets/parent_teacher.jpg" alt="Parent-teacher collaboration" />
                    </div>
                </div>

                <div class={classes!("hero-chevron", "entrance", entered_class)} style={chevron.style()}>
                    <IconGlyph icon={Icon::ChevronDown} class={classes!("bounce")} />
                </div>
            </div>
            <style>
                {r#"
                    .hero {
                        padding: 6rem 1.5rem 4rem;
                    }

                    .hero-header {
                        text-align: center;
                        margin-bottom: 3rem;
                    }

                    .hero-header h1 {
                        font-size: 3rem;
                        font-weight: 700;
                        color: #1e3a8a;
                        margin-bottom: 1rem;
                    }

                    .hero-subtitle {
                        font-size: 1.25rem;
                        color: #2563eb;
                        margin-bottom: 2rem;
                    }

                    .hero-tagline {
                        font-size: 1.125rem;
                        color: #4b5563;
                        font-style: italic;
                    }

                    .hero-grid {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 3rem;
                        align-items: center;
                    }

                    .agenda-title {
                        color: #1e3a8a;
                        margin-bottom: 1.5rem;
                    }

                    .agenda {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }

                    .agenda-item {
                        display: flex;
                        align-items: center;
                        padding: 1rem;
                        background: #ffffff;
                        border-radius: 0.5rem;
                        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                        cursor: pointer;
                    }

                    .agenda-item.entered:hover {
                        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                        transform: scale(1.02);
                    }

                    .agenda-icon {
                        margin-right: 1rem;
                        font-size: 1.5rem;
                    }

                    .hero-image {
                        display: flex;
                        justify-content: center;
                    }

                    .hero-image img {
                        width: 100%;
                        max-width: 28rem;
                        border-radius: 0.5rem;
                        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                    }

                    .hero-chevron {
                        text-align: center;
                        margin-top: 3rem;
                        font-size: 2rem;
                    }

                    .bounce {
                        display: inline-block;
                        animation: bounce 1s infinite;
                    }

                    @keyframes bounce {
                        0%, 100% { transform: translateY(-25%); }
                        50% { transform: none; }
                    }

                    @media (max-width: 768px) {
                        .hero-grid {
                            grid-template-columns: 1fr;
                        }

                        .hero-header h1 {
                            font-size: 2rem;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
