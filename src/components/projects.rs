//! Projects section: two cards plus the GitHub pointer.

use leptos::prelude::*;

use crate::components::reveal::Reveal;
use crate::state::reveal::RevealDirection;
use crate::state::section::SectionId;

struct Project {
    name: &'static str,
    summary: &'static str,
    tech: &'static str,
}

const PROJECTS: [Project; 2] = [
    Project {
        name: "Portfolio Platform (This Site)",
        summary: "Personal portfolio with a light/dark theme, scroll-triggered reveals, \
                  and a contact form backed by a Spring Boot API hosted on Render.",
        tech: "Tech: Rust, Leptos, WebAssembly, Spring Boot, Render, GitHub Pages",
    },
    Project {
        name: "Microservices Backend",
        summary: "Designed and implemented RESTful microservices with Spring Boot and \
                  Docker, integrating AWS services and messaging for scalable enterprise \
                  workloads.",
        tech: "Tech: Java, Spring Boot, Docker, AWS, Kafka",
    },
];

#[component]
pub fn ProjectsSection() -> impl IntoView {
    view! {
        <section id=SectionId::Projects.as_str() class="section">
            <Reveal direction=RevealDirection::Left>
                <h3 class="section__title">"Projects"</h3>
                <p class="section__body">
                    "A selection of projects that showcase my experience with full stack \
                     development, cloud, and modern frontend frameworks."
                </p>
                <div class="card-grid card-grid--two">
                    {PROJECTS
                        .iter()
                        .map(|project| {
                            view! {
                                <article class="card">
                                    <h4 class="card__title">{project.name}</h4>
                                    <p class="card__body">{project.summary}</p>
                                    <p class="card__meta">{project.tech}</p>
                                </article>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <p class="section__footnote">
                    "More projects on "
                    <a href="https://github.com/harshitham9" target="_blank" rel="noreferrer">
                        "GitHub"
                    </a>
                    "."
                </p>
            </Reveal>
        </section>
    }
}
