//! Scroll tracking and section navigation for the meeting page.

pub mod browser;
pub mod sections;
pub mod state;
pub mod tracker;
pub mod viewport;

#[cfg(test)]
mod fake;

pub use browser::BrowserViewport;
pub use sections::{Icon, Section, SECTIONS};
pub use state::NavigationState;
pub use tracker::ScrollTracker;
