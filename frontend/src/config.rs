use log::Level;

/// Vertical offset (CSS px) past which the navigation bar switches to its solid style.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// A section is revealed once its top rises above this fraction of the viewport height.
pub const REVEAL_TRIGGER_RATIO: f64 = 0.9;

pub const NAV_ENTRANCE_MS: u32 = 500;
pub const SECTION_ENTRANCE_MS: u32 = 800;
pub const STAGGER_STEP_MS: u32 = 100;
pub const AGENDA_BASE_DELAY_MS: u32 = 500;

pub const SITE_TITLE: &str = "PTA Meeting";
pub const FOOTER_TEXT: &str =
    "© 2025 Parents and Teachers Association. Working together for our children's future.";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
