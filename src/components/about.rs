//! About section.

use leptos::prelude::*;

use crate::components::reveal::Reveal;
use crate::state::reveal::RevealDirection;
use crate::state::section::SectionId;

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id=SectionId::About.as_str() class="section">
            <Reveal direction=RevealDirection::Left>
                <h3 class="section__title">"About"</h3>
                <p class="section__body">
                    "Full Stack Developer with experience in building microservices, \
                     RESTful APIs, and responsive frontends. I've worked with Java, \
                     Spring Boot, React, Angular, AWS, Docker, and Kubernetes across \
                     enterprise environments."
                </p>
            </Reveal>
        </section>
    }
}
