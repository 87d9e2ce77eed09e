use log::info;

mod animation;
mod app;
mod config;
mod content;
mod navigation;
mod components {
    pub mod conclusion;
    pub mod footer;
    pub mod hero;
    pub mod icon;
    pub mod nav_bar;
    pub mod reveal;
    pub mod topic;
}

use app::App;

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(err) = console_log::init_with_level(config::log_level()) {
        // Rendering still works without a logger.
        web_sys::console::error_1(&format!("error initializing log: {err}").into());
    }

    info!("Starting meeting page");
    yew::Renderer::<App>::new().render();
}
