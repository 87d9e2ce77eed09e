use yew::prelude::*;

use crate::components::icon::IconGlyph;
use crate::components::reveal::Reveal;
use crate::content::{Highlight, Point, Topic};
use crate::navigation::Icon;

#[derive(Properties, PartialEq)]
pub struct TopicSectionProps {
    pub topic: &'static Topic,
}

#[function_component(TopicSection)]
pub fn topic_section(props: &TopicSectionProps) -> Html {
    let topic = props.topic;

    html! {
        <section id={topic.section_id} class={classes!("topic", topic.backdrop.class())}>
            <div class="container">
                <Reveal>
                    <h2 class="topic-heading">{topic.heading}</h2>
                    <div class="topic-grid">
                        <div class="topic-points">
                            { for topic.points.iter().map(point) }
                            { topic.highlight.as_ref().map(highlight).unwrap_or_default() }
                        </div>
                        <div class="topic-images">
                            {
                                for topic.images.iter().map(|image| html! {
                                    <img src={image.src} alt={image.alt} loading="lazy" class="topic-image" />
                                })
                            }
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

fn point(point: &Point) -> Html {
    html! {
        <div class="point">
            <IconGlyph icon={point.icon} class={classes!("point-icon")} />
            <div>
                <h4 class="point-heading">{point.heading}</h4>
                <p class="point-body">{point.body}</p>
            </div>
        </div>
    }
}

fn highlight(highlight: &Highlight) -> Html {
    match highlight {
        Highlight::Checklist { title, items } => html! {
            <div class="card">
                <h3 class="card-title">{*title}</h3>
                <ul class="checklist">
                    {
                        for items.iter().map(|item| html! {
                            <li>
                                <IconGlyph icon={Icon::CheckCircle} class={classes!("check")} />
                                <span>{*item}</span>
                            </li>
                        })
                    }
                </ul>
            </div>
        },
        Highlight::Stats(stats) => html! {
            <div class="stats">
                {
                    for stats.iter().map(|stat| html! {
                        <div class="card stat">
                            <div class="stat-value">{stat.value}</div>
                            <p class="stat-caption">{stat.caption}</p>
                        </div>
                    })
                }
            </div>
        },
    }
}

pub const TOPIC_CSS: &str = r#"
    .topic {
        padding: 4rem 1.5rem;
    }

    .backdrop-plain {
        background: #ffffff;
    }

    .backdrop-gradient {
        background: linear-gradient(135deg, #eff6ff 0%, #ffffff 100%);
    }

    .topic-heading {
        text-align: center;
        color: #1e3a8a;
        margin-bottom: 3rem;
    }

    .topic-grid {
        display: grid;
        grid-template-columns: repeat(2, 1fr);
        gap: 3rem;
        align-items: center;
    }

    .topic-points {
        display: flex;
        flex-direction: column;
        gap: 1.5rem;
    }

    .point {
        display: flex;
        align-items: flex-start;
    }

    .point-icon {
        font-size: 1.5rem;
        margin: 0.25rem 1rem 0 0;
    }

    .point-heading {
        color: #2563eb;
        margin: 0 0 0.5rem;
    }

    .point-body {
        color: #374151;
        margin: 0;
    }

    .card {
        background: #eff6ff;
        border: 1px solid #bfdbfe;
        border-radius: 0.75rem;
        padding: 1.5rem;
    }

    .card-title {
        color: #1e3a8a;
        margin-top: 0;
    }

    .checklist {
        list-style: none;
        padding: 0;
        margin: 0;
    }

    .checklist li {
        display: flex;
        align-items: center;
        font-size: 1.125rem;
        margin-bottom: 0.5rem;
    }

    .check {
        margin-right: 0.5rem;
    }

    .stats {
        display: grid;
        grid-template-columns: repeat(2, 1fr);
        gap: 1rem;
    }

    .stat {
        text-align: center;
    }

    .stat-value {
        font-size: 1.875rem;
        font-weight: 700;
        color: #2563eb;
        margin-bottom: 0.5rem;
    }

    .stat-caption {
        font-size: 0.875rem;
        margin: 0;
    }

    .topic-images {
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 1.5rem;
    }

    .topic-image {
        width: 100%;
        max-width: 28rem;
        border-radius: 0.5rem;
        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
        transition: transform 0.3s ease;
    }

    .topic-image:hover {
        transform: scale(1.05);
    }

    @media (max-width: 768px) {
        .topic-grid {
            grid-template-columns: 1fr;
        }
    }
"#;
