//! Accordion sections and the open/closed state machine behind them.
//!
//! At most one section is expanded at a time. Toggling the open section
//! collapses it; toggling or navigating to any other section expands that one
//! instead. The page starts with `Profile` expanded.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Profile,
    Certifications,
    Education,
    Experience,
    Skills,
    Contact,
}

impl SectionId {
    /// Page order.
    pub const ALL: [SectionId; 6] = [
        SectionId::Profile,
        SectionId::Certifications,
        SectionId::Education,
        SectionId::Experience,
        SectionId::Skills,
        SectionId::Contact,
    ];

    /// Anchor id used in the markup and in `?open=`.
    pub fn id(self) -> &'static str {
        match self {
            SectionId::Profile => "profile",
            SectionId::Certifications => "certifications",
            SectionId::Education => "education",
            SectionId::Experience => "experience",
            SectionId::Skills => "skills",
            SectionId::Contact => "contact",
        }
    }

    /// Short label for the navbar.
    pub fn label(self) -> &'static str {
        match self {
            SectionId::Profile => "Profile",
            SectionId::Certifications => "Certifications",
            SectionId::Education => "Education",
            SectionId::Experience => "Experience",
            SectionId::Skills => "Skills",
            SectionId::Contact => "Contact",
        }
    }

    /// Heading shown on the section card.
    pub fn title(self) -> &'static str {
        match self {
            SectionId::Experience => "Professional Experience",
            SectionId::Skills => "Technical Skills",
            other => other.label(),
        }
    }

    pub fn parse(raw: &str) -> Option<SectionId> {
        SectionId::ALL
            .into_iter()
            .find(|s| s.id().eq_ignore_ascii_case(raw.trim()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccordionState {
    open: Option<SectionId>,
}

impl Default for AccordionState {
    fn default() -> Self {
        Self {
            open: Some(SectionId::Profile),
        }
    }
}

impl AccordionState {
    pub fn with_open(open: Option<SectionId>) -> Self {
        Self { open }
    }

    pub fn open(&self) -> Option<SectionId> {
        self.open
    }

    pub fn is_open(&self, id: SectionId) -> bool {
        self.open == Some(id)
    }

    /// Header click on a section card.
    pub fn toggle(&mut self, id: SectionId) {
        self.open = if self.is_open(id) { None } else { Some(id) };
    }

    /// Navbar click: always leaves `id` expanded.
    pub fn navigate(&mut self, id: SectionId) {
        self.open = Some(id);
    }

    /// State after toggling `id`, without mutating `self`.
    pub fn toggled(self, id: SectionId) -> Self {
        let mut next = self;
        next.toggle(id);
        next
    }

    /// Parses the `?open=` query value. Absent means the initial state; an empty
    /// value or `none` means everything collapsed; unknown ids fall back to the
    /// initial state.
    pub fn from_query(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None => Self::default(),
            Some("") => Self::with_open(None),
            Some(v) if v.eq_ignore_ascii_case("none") => Self::with_open(None),
            Some(v) => {
                let mut state = Self::default();
                if let Some(id) = SectionId::parse(v) {
                    state.navigate(id);
                }
                state
            }
        }
    }

    /// Query value that reproduces this state.
    pub fn query_value(&self) -> &'static str {
        self.open.map_or("none", SectionId::id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_opens_profile() {
        let state = AccordionState::default();
        assert!(state.is_open(SectionId::Profile));
        assert!(!state.is_open(SectionId::Skills));
    }

    #[test]
    fn test_toggle_open_section_collapses_it() {
        let mut state = AccordionState::default();
        state.toggle(SectionId::Profile);
        assert_eq!(state.open(), None);
    }

    #[test]
    fn test_toggle_other_section_switches() {
        let mut state = AccordionState::default();
        state.toggle(SectionId::Education);
        assert_eq!(state.open(), Some(SectionId::Education));
        assert!(!state.is_open(SectionId::Profile));
    }

    #[test]
    fn test_toggle_from_all_collapsed_expands() {
        let mut state = AccordionState::with_open(None);
        state.toggle(SectionId::Contact);
        assert_eq!(state.open(), Some(SectionId::Contact));
    }

    #[test]
    fn test_navigate_never_collapses() {
        let mut state = AccordionState::default();
        state.navigate(SectionId::Profile);
        assert_eq!(state.open(), Some(SectionId::Profile));
        state.navigate(SectionId::Skills);
        assert_eq!(state.open(), Some(SectionId::Skills));
    }

    #[test]
    fn test_toggled_does_not_mutate() {
        let state = AccordionState::default();
        let next = state.toggled(SectionId::Profile);
        assert_eq!(state.open(), Some(SectionId::Profile));
        assert_eq!(next.open(), None);
    }

    #[test]
    fn test_from_query() {
        assert_eq!(AccordionState::from_query(None), AccordionState::default());
        assert_eq!(AccordionState::from_query(Some("")).open(), None);
        assert_eq!(AccordionState::from_query(Some("NONE")).open(), None);
        assert_eq!(
            AccordionState::from_query(Some("Skills")).open(),
            Some(SectionId::Skills)
        );
        assert_eq!(
            AccordionState::from_query(Some("hobbies")),
            AccordionState::default()
        );
    }

    #[test]
    fn test_query_value_round_trips_through_from_query() {
        for state in [
            AccordionState::with_open(None),
            AccordionState::with_open(Some(SectionId::Experience)),
        ] {
            assert_eq!(AccordionState::from_query(Some(state.query_value())), state);
        }
    }

    #[test]
    fn test_titles_differ_from_labels_where_expected() {
        assert_eq!(SectionId::Experience.title(), "Professional Experience");
        assert_eq!(SectionId::Skills.title(), "Technical Skills");
        assert_eq!(SectionId::Profile.title(), "Profile");
    }
}
