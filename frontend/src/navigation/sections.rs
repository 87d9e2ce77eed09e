/// Symbolic glyph shown next to section titles, talking points and cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Users,
    Apple,
    Shirt,
    Scissors,
    Footprints,
    Home,
    Smartphone,
    Star,
    CheckCircle,
    ChevronDown,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Users => "👥",
            Icon::Apple => "🍎",
            Icon::Shirt => "👕",
            Icon::Scissors => "✂️",
            Icon::Footprints => "👣",
            Icon::Home => "🏠",
            Icon::Smartphone => "📱",
            Icon::Star => "⭐",
            Icon::CheckCircle => "✅",
            Icon::ChevronDown => "⌄",
        }
    }
}

/// One named content region of the page. Order in [`SECTIONS`] is display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub title: &'static str,
    pub icon: Icon,
}

pub static SECTIONS: &[Section] = &[
    Section { id: "intro", title: "Introduction", icon: Icon::Users },
    Section { id: "quality-food", title: "Quality Food", icon: Icon::Apple },
    Section { id: "neat-uniform", title: "Neat Uniform", icon: Icon::Shirt },
    Section { id: "good-hygiene", title: "Good Hygiene", icon: Icon::Scissors },
    Section { id: "proper-footwear", title: "Proper Footwear", icon: Icon::Footprints },
    Section { id: "parental-involvement", title: "Parental Involvement", icon: Icon::Home },
    Section { id: "no-mobiles", title: "No Mobile Phones", icon: Icon::Smartphone },
    Section { id: "conclusion", title: "Conclusion", icon: Icon::Star },
];

pub fn find(catalog: &'static [Section], id: &str) -> Option<&'static Section> {
    catalog.iter().find(|section| section.id == id)
}

/// Meeting agenda: every section except the opening introduction and the closing conclusion.
pub fn agenda(catalog: &'static [Section]) -> &'static [Section] {
    match catalog.len() {
        0..=2 => &[],
        len => &catalog[1..len - 1],
    }
}
