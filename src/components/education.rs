//! Education section.

use leptos::prelude::*;

use crate::components::reveal::Reveal;
use crate::state::reveal::RevealDirection;
use crate::state::section::SectionId;

struct School {
    degree: &'static str,
    meta: &'static str,
}

const SCHOOLS: [School; 2] = [
    School {
        degree: "M.S. in Computer Science \u{b7} University of Central Missouri",
        meta: "Aug 2022 \u{2013} May 2024 \u{b7} Warrensburg, MO",
    },
    School {
        degree: "B.Tech in Computer Science \u{b7} JNTU Hyderabad",
        meta: "Jun 2016 \u{2013} May 2020 \u{b7} Hyderabad",
    },
];

#[component]
pub fn EducationSection() -> impl IntoView {
    view! {
        <section id=SectionId::Education.as_str() class="section">
            <Reveal direction=RevealDirection::Right>
                <h3 class="section__title">"Education"</h3>
                <div class="card-stack">
                    {SCHOOLS
                        .iter()
                        .map(|school| {
                            view! {
                                <article class="card">
                                    <h4 class="card__title">{school.degree}</h4>
                                    <p class="card__meta">{school.meta}</p>
                                </article>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </Reveal>
        </section>
    }
}
