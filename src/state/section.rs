#[cfg(test)]
#[path = "section_test.rs"]
mod section_test;

/// Intersection ratio a section must hold to become the active one.
pub const ACTIVE_THRESHOLD: f64 = 0.4;

/// The fixed, ordered set of page sections. `as_str` doubles as the DOM
/// element id and the in-page anchor target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SectionId {
    #[default]
    Hero,
    About,
    Skills,
    Experience,
    Projects,
    Education,
    Contact,
    Resume,
}

impl SectionId {
    /// Document order, used to register the shared observer.
    pub const ALL: [Self; 8] = [
        Self::Hero,
        Self::About,
        Self::Skills,
        Self::Experience,
        Self::Projects,
        Self::Education,
        Self::Contact,
        Self::Resume,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::Education => "education",
            Self::Contact => "contact",
            Self::Resume => "resume",
        }
    }

    /// Resolve an element id reported by the observer back to a section.
    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == id)
    }

    /// Label shown in the header nav.
    pub fn title(self) -> &'static str {
        match self {
            Self::Hero => "Home",
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Experience => "Experience",
            Self::Projects => "Projects",
            Self::Education => "Education",
            Self::Contact => "Contact",
            Self::Resume => "Resume",
        }
    }
}

/// The section currently highlighted in the nav.
///
/// Continuously updated while sections cross the [`ACTIVE_THRESHOLD`];
/// exactly one section is active at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActiveSectionState {
    pub active: SectionId,
}

impl ActiveSectionState {
    /// Fold one observer callback batch into the active section.
    ///
    /// Every section in `hits` satisfied the threshold in this batch; when
    /// several did at once, the last one in delivery order wins. An empty
    /// batch (sections leaving the viewport) keeps the current value.
    pub fn apply_batch(&mut self, hits: impl IntoIterator<Item = SectionId>) {
        if let Some(last) = hits.into_iter().last() {
            self.active = last;
        }
    }
}
