use crate::config::{REVEAL_TRIGGER_RATIO, STAGGER_STEP_MS};

/// Where an element starts before easing into place.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slide {
    FromLeft(u32),
    FromRight(u32),
    FromAbove(u32),
    FromBelow(u32),
    Fade,
}

impl Slide {
    fn transform(self) -> String {
        match self {
            Slide::FromLeft(px) => format!("translateX(-{px}px)"),
            Slide::FromRight(px) => format!("translateX({px}px)"),
            Slide::FromAbove(px) => format!("translateY(-{px}px)"),
            Slide::FromBelow(px) => format!("translateY({px}px)"),
            Slide::Fade => "none".to_string(),
        }
    }
}

/// Fade-and-slide entrance, rendered through the `.entrance` CSS rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Entrance {
    pub slide: Slide,
    pub duration_ms: u32,
    pub delay_ms: u32,
}

impl Entrance {
    pub fn new(slide: Slide, duration_ms: u32) -> Self {
        Self { slide, duration_ms, delay_ms: 0 }
    }

    pub fn delayed(self, delay_ms: u32) -> Self {
        Self { delay_ms, ..self }
    }

    /// The `index`-th item of a list, each one starting a step after the previous.
    pub fn staggered(self, base_delay_ms: u32, index: usize) -> Self {
        let step = STAGGER_STEP_MS.saturating_mul(index as u32);
        self.delayed(base_delay_ms.saturating_add(step))
    }

    /// Inline custom properties consumed by `.entrance`.
    pub fn style(&self) -> String {
        format!(
            "--entrance-from: {}; --entrance-duration: {}ms; --entrance-delay: {}ms;",
            self.slide.transform(),
            self.duration_ms,
            self.delay_ms,
        )
    }
}

/// Whether an element whose top sits `element_top` px below the viewport's
/// top edge has scrolled far enough into a viewport `viewport_height` px tall.
pub fn should_reveal(element_top: f64, viewport_height: f64) -> bool {
    element_top < viewport_height * REVEAL_TRIGGER_RATIO
}

/// Reveal latch: once shown, an element stays shown whatever the scroll position.
pub fn next_revealed(revealed: bool, element_top: f64, viewport_height: f64) -> bool {
    revealed || should_reveal(element_top, viewport_height)
}

pub const ENTRANCE_CSS: &str = r#"
    .entrance {
        opacity: 0;
        transform: var(--entrance-from);
        transition:
            opacity var(--entrance-duration) ease-out var(--entrance-delay),
            transform var(--entrance-duration) ease-out var(--entrance-delay);
    }

    .entrance.entered {
        opacity: 1;
        transform: none;
    }

    @media (prefers-reduced-motion: reduce) {
        .entrance {
            transition: none;
        }
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staggered_delays_step_per_index() {
        let base = Entrance::new(Slide::FromAbove(20), 500);
        let delays: Vec<u32> = (0..4).map(|i| base.staggered(500, i).delay_ms).collect();
        assert_eq!(delays, [500, 600, 700, 800]);
    }

    #[test]
    fn style_carries_offset_and_timing() {
        let entrance = Entrance::new(Slide::FromLeft(30), 800).delayed(300);
        assert_eq!(
            entrance.style(),
            "--entrance-from: translateX(-30px); --entrance-duration: 800ms; --entrance-delay: 300ms;"
        );
        assert!(Entrance::new(Slide::Fade, 800).style().starts_with("--entrance-from: none;"));
    }

    #[test]
    fn reveal_once_top_enters_trigger_band() {
        assert!(!should_reveal(950.0, 1000.0));
        assert!(!should_reveal(900.0, 1000.0));
        assert!(should_reveal(899.0, 1000.0));
        // Already scrolled past.
        assert!(should_reveal(-400.0, 1000.0));
    }

    #[test]
    fn revealed_stays_revealed_when_scrolled_back() {
        let mut revealed = false;
        let observed: Vec<bool> = [950.0, 100.0, 950.0]
            .into_iter()
            .map(|top| {
                revealed = next_revealed(revealed, top, 1000.0);
                revealed
            })
            .collect();
        assert_eq!(observed, [false, true, true]);
    }
}
