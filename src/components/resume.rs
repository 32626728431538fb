//! Resume section: direct download links for the two fixed-path files.

use leptos::prelude::*;

use crate::components::reveal::Reveal;
use crate::state::section::SectionId;

#[component]
pub fn ResumeSection() -> impl IntoView {
    view! {
        <section id=SectionId::Resume.as_str() class="section section--centered">
            <Reveal>
                <h3 class="section__title section__title--large">"Resume"</h3>
                <p class="section__body">
                    "Download my latest resume to explore my experience and projects as a "
                    <span class="accent">"Full Stack Developer"</span>
                    "."
                </p>
                <div class="resume__actions">
                    // Relative paths so the site works when hosted under a subpath.
                    <a href="resume.pdf" download class="btn btn--primary">
                        "\u{1f4c4} Download PDF"
                    </a>
                    <a href="resume.docx" download class="btn btn--outline">
                        "\u{1f4dd} Download Word"
                    </a>
                </div>
            </Reveal>
        </section>
    }
}
