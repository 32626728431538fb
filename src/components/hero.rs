//! Hero section: role line, headline, intro, and the two jump links.

use leptos::prelude::*;

use crate::components::reveal::Reveal;
use crate::state::section::SectionId;

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section id=SectionId::Hero.as_str() class="section section--hero">
            <Reveal>
                <p class="hero__role">"Full Stack Developer"</p>
                <h2 class="hero__headline">
                    "Building scalable web applications with "
                    <span class="accent">"Java, Spring Boot, and React"</span>
                    "."
                </h2>
                <p class="hero__intro">
                    "I'm a full stack developer experienced in designing and maintaining \
                     web applications using Java, Spring Boot, React, and modern \
                     cloud-native architectures."
                </p>
                <div class="hero__actions">
                    <a href="#projects" class="btn btn--primary">
                        "View Projects"
                    </a>
                    <a href="#contact" class="btn btn--outline">
                        "Contact Me"
                    </a>
                </div>
            </Reveal>
        </section>
    }
}
