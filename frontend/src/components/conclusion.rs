use yew::prelude::*;

use crate::components::icon::IconGlyph;
use crate::components::reveal::Reveal;
use crate::content::{CONCLUSION_SUMMARY, RECOMMENDED_ACTIONS};
use crate::navigation::Icon;

#[derive(Properties, PartialEq)]
pub struct ConclusionProps {
    pub section_id: &'static str,
}

#[function_component(Conclusion)]
pub fn conclusion(props: &ConclusionProps) -> Html {
    html! {
        <section id={props.section_id} class="topic backdrop-plain">
            <div class="container">
                <Reveal>
                    <h2 class="topic-heading">{"Conclusion and Action Steps"}</h2>
                    <div class="topic-grid">
                        <div class="topic-points">
                            <div class="point">
                                <IconGlyph icon={Icon::Star} class={classes!("point-icon")} />
                                <p class="point-body">{CONCLUSION_SUMMARY}</p>
                            </div>

                            <h4 class="card-title">{"Recommended Actions"}</h4>
                            {
                                for RECOMMENDED_ACTIONS.iter().map(|action| html! {
                                    <div class="card action">
                                        <IconGlyph icon={action.icon} class={classes!("check")} />
                                        <span>{action.text}</span>
                                    </div>
                                })
                            }

                            <h3 class="thanks">{"Thank you for your participation!"}</h3>
                        </div>
                        <div class="topic-images">
                            <img
                                src="/assets/conclusion.png"
                                alt="Collaboration between parents and teachers"
                                loading="lazy"
                                class="topic-image"
                            />
                        </div>
                    </div>
                </Reveal>
            </div>
            <style>
                {r#"
                    .action {
                        display: flex;
                        align-items: center;
                        font-size: 1.125rem;
                        padding: 1rem 1.5rem;
                    }

                    .thanks {
                        text-align: center;
                        color: #2563eb;
                    }
                "#}
            </style>
        </section>
    }
}
