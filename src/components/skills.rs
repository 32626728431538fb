//! Skills section: three grouped cards rendered from one list.

use leptos::prelude::*;

use crate::components::reveal::Reveal;
use crate::state::reveal::RevealDirection;
use crate::state::section::SectionId;

struct SkillGroup {
    title: &'static str,
    items: &'static str,
}

const GROUPS: [SkillGroup; 3] = [
    SkillGroup {
        title: "Languages",
        items: "Java, Python, JavaScript, SQL, C/C++, PHP",
    },
    SkillGroup {
        title: "Backend & Cloud",
        items: "Spring Boot, Spring MVC, Spring Security, Microservices, AWS, Docker, Kubernetes",
    },
    SkillGroup {
        title: "Frontend",
        items: "React, Angular, HTML5, CSS3, Tailwind, JavaScript",
    },
];

#[component]
pub fn SkillsSection() -> impl IntoView {
    view! {
        <section id=SectionId::Skills.as_str() class="section">
            <Reveal direction=RevealDirection::Right>
                <h3 class="section__title">"Skills"</h3>
                <div class="card-grid card-grid--three">
                    {GROUPS
                        .iter()
                        .map(|group| {
                            view! {
                                <div class="card">
                                    <h4 class="card__title">{group.title}</h4>
                                    <p class="card__body">{group.items}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </Reveal>
        </section>
    }
}
