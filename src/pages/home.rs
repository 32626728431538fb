//! The one page: composes all sections and owns the active-section
//! observer that drives nav highlighting.

use leptos::prelude::*;

use crate::components::about::AboutSection;
use crate::components::contact::ContactSection;
use crate::components::education::EducationSection;
use crate::components::experience::ExperienceSection;
use crate::components::hero::HeroSection;
use crate::components::projects::ProjectsSection;
use crate::components::resume::ResumeSection;
use crate::components::skills::SkillsSection;
#[cfg(feature = "csr")]
use crate::state::section::ACTIVE_THRESHOLD;
use crate::state::section::ActiveSectionState;
#[cfg(feature = "csr")]
use crate::state::section::SectionId;

/// Home page. Registers one shared observer over every section after
/// mount; the observer is cancelled at teardown. Highlighting is purely
/// presentational and never affects navigation.
#[component]
pub fn HomePage() -> impl IntoView {
    #[cfg(feature = "csr")]
    {
        let active = expect_context::<RwSignal<ActiveSectionState>>();
        Effect::new(move || {
            if !crate::util::observe::supported() {
                return;
            }
            let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let sections: Vec<(SectionId, web_sys::Element)> = SectionId::ALL
                .into_iter()
                .filter_map(|id| doc.get_element_by_id(id.as_str()).map(|el| (id, el)))
                .collect();

            let handle = crate::util::observe::observe_sections(
                &sections,
                ACTIVE_THRESHOLD,
                move |hits| active.update(|s| s.apply_batch(hits)),
            );
            if let Some(handle) = handle {
                on_cleanup(move || handle.cancel());
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = expect_context::<RwSignal<ActiveSectionState>>();
    }

    view! {
        <main class="page">
            <HeroSection/>
            <AboutSection/>
            <SkillsSection/>
            <ExperienceSection/>
            <ProjectsSection/>
            <EducationSection/>
            <ContactSection/>
            <ResumeSection/>
        </main>
    }
}
