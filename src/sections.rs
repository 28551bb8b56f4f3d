// Page sections and navigation order
//
// The portfolio is a single page made of a fixed, ordered set of sections.
// Each section has an anchor identifier (used as the HTML fragment in the
// static export and as the nav target in the TUI) and a display label.

use serde::Serialize;

/// A named region of the single page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Home,
    About,
    Skills,
    Projects,
    Education,
    Experience,
    Contact,
}

impl SectionId {
    /// All sections in nav order
    pub const ALL: [SectionId; 7] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Education,
        SectionId::Experience,
        SectionId::Contact,
    ];

    /// Anchor identifier: fragment target in the export, nav key in the TUI
    pub fn anchor(&self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Education => "education",
            SectionId::Experience => "experience",
            SectionId::Contact => "contact",
        }
    }

    /// Display label for the nav bar
    pub fn label(&self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Skills => "Skills",
            SectionId::Projects => "Projects",
            SectionId::Education => "Education",
            SectionId::Experience => "Experience",
            SectionId::Contact => "Contact",
        }
    }

    /// Look up a section by its anchor identifier (case-sensitive)
    pub fn from_anchor(anchor: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.anchor() == anchor)
    }

    /// Position in nav order
    pub fn index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|s| s == self)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_round_trip() {
        for section in SectionId::ALL {
            assert_eq!(SectionId::from_anchor(section.anchor()), Some(section));
        }
        assert_eq!(SectionId::from_anchor("nope"), None);
        assert_eq!(SectionId::from_anchor("Home"), None);
    }

    #[test]
    fn nav_order_is_stable() {
        assert_eq!(SectionId::ALL[0], SectionId::Home);
        assert_eq!(SectionId::ALL[6], SectionId::Contact);
        assert_eq!(SectionId::Projects.index(), 3);
    }
}
