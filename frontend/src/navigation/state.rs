use log::debug;

use super::sections::{self, Section, SECTIONS};
use super::tracker::is_past_threshold;
use super::viewport::Viewport;

/// Page-session navigation state. `on_scroll` and `navigate_to` are the only
/// ways to change it.
#[derive(Clone, Debug, PartialEq)]
pub struct NavigationState {
    catalog: &'static [Section],
    active_section_id: &'static str,
    is_scrolled: bool,
}

impl NavigationState {
    /// Fresh state for `catalog`, with its first section active. `None` for an empty catalog.
    pub fn new(catalog: &'static [Section]) -> Option<Self> {
        let first = catalog.first()?;
        Some(Self {
            catalog,
            active_section_id: first.id,
            is_scrolled: false,
        })
    }

    pub fn catalog(&self) -> &'static [Section] {
        self.catalog
    }

    pub fn active_section_id(&self) -> &'static str {
        self.active_section_id
    }

    pub fn is_scrolled(&self) -> bool {
        self.is_scrolled
    }

    /// Recomputes the scrolled flag from `offset`. Returns whether it changed.
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        let scrolled = is_past_threshold(offset);
        let changed = scrolled != self.is_scrolled;
        self.is_scrolled = scrolled;
        changed
    }

    /// Scrolls the region for `section_id` into view and marks it active.
    ///
    /// Unknown ids and regions that are not on the page yet are ignored and
    /// leave the state untouched. Returns whether a scroll was requested.
    pub fn navigate_to<V>(&mut self, viewport: &V, section_id: &str) -> bool
    where
        V: Viewport + ?Sized,
    {
        let Some(section) = sections::find(self.catalog, section_id) else {
            debug!("ignoring navigation to unknown section {section_id:?}");
            return false;
        };
        let Some(anchor) = viewport.resolve_anchor(section.id) else {
            debug!("section #{} is not mounted, skipping navigation", section.id);
            return false;
        };

        viewport.smooth_scroll_into_view(&anchor);
        self.active_section_id = section.id;
        true
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            catalog: SECTIONS,
            active_section_id: SECTIONS[0].id,
            is_scrolled: false,
        }
    }
}
