use yew::prelude::*;

use crate::config::FOOTER_TEXT;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="page-footer">
            <p>{FOOTER_TEXT}</p>
            <style>
                {r#"
                    .page-footer {
                        background: #1f2937;
                        color: #ffffff;
                        padding: 2rem 1.5rem;
                        text-align: center;
                        font-size: 1.125rem;
                    }
                "#}
            </style>
        </footer>
    }
}
