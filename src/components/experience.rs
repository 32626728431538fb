//! Experience section: one card per role, rendered from a single list.

use leptos::prelude::*;

use crate::components::reveal::Reveal;
use crate::state::section::SectionId;

struct Role {
    title: &'static str,
    meta: &'static str,
    bullets: &'static [&'static str],
}

const ROLES: [Role; 4] = [
    Role {
        title: "Java Full Stack Developer \u{b7} Apple",
        meta: "May 2024 \u{2013} Present \u{b7} Austin, TX",
        bullets: &[
            "Build responsive single-page applications using React, Redux, HTML5, CSS3, and JavaScript.",
            "Develop RESTful APIs and microservices with Spring Boot and Spring MVC.",
            "Deploy microservices on AWS using Docker and CI/CD pipelines.",
        ],
    },
    Role {
        title: "Java Developer \u{b7} Meijer",
        meta: "Aug 2023 \u{2013} Apr 2024 \u{b7} Grand Rapids, MI",
        bullets: &[
            "Developed Spring Boot microservices, containerized with Docker, deployed to Kubernetes.",
            "Integrated Kafka messaging and AWS services such as DynamoDB and Lambda.",
            "Applied TDD/BDD with JUnit, Mockito, and Cucumber to improve code quality.",
        ],
    },
    Role {
        title: "Java Full Stack Developer \u{b7} DXC Technology",
        meta: "Jun 2021 \u{2013} Jul 2022 \u{b7} Hyderabad",
        bullets: &[
            "Built RESTful APIs and microservices with Spring Boot, integrating SQL and MongoDB.",
            "Implemented responsive UIs using Angular, HTML5, CSS3, and Bootstrap.",
            "Collaborated in Agile teams to deliver scalable and maintainable solutions.",
        ],
    },
    Role {
        title: "Software Engineer \u{b7} Paytm",
        meta: "Feb 2020 \u{2013} May 2021 \u{b7} India",
        bullets: &[
            "Developed scalable backend services in Java for high-traffic payment workflows.",
            "Implemented secure RESTful APIs and integrated with cloud storage and databases.",
            "Worked closely with cross-functional teams to improve performance and reliability.",
        ],
    },
];

#[component]
pub fn ExperienceSection() -> impl IntoView {
    view! {
        <section id=SectionId::Experience.as_str() class="section">
            <Reveal>
                <h3 class="section__title">"Experience"</h3>
                <div class="card-stack">
                    {ROLES
                        .iter()
                        .map(|role| {
                            view! {
                                <article class="card">
                                    <div class="card__header">
                                        <h4 class="card__title">{role.title}</h4>
                                        <p class="card__meta">{role.meta}</p>
                                    </div>
                                    <ul class="card__bullets">
                                        {role
                                            .bullets
                                            .iter()
                                            .map(|b| view! { <li>{*b}</li> })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                </article>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </Reveal>
        </section>
    }
}
