//! Sticky site header: name, anchor nav with active-section highlighting,
//! resume link, and the theme toggle.

use leptos::prelude::*;

use crate::state::section::{ActiveSectionState, SectionId};
use crate::state::theme::ThemeMode;

/// Sections that get a nav link. Hero is reachable via the name, resume
/// via the pill on the right.
const NAV_SECTIONS: [SectionId; 6] = [
    SectionId::About,
    SectionId::Skills,
    SectionId::Experience,
    SectionId::Projects,
    SectionId::Education,
    SectionId::Contact,
];

#[component]
pub fn Header() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeMode>>();
    let active = expect_context::<RwSignal<ActiveSectionState>>();

    let on_toggle = move |_| {
        let next = crate::util::theme_dom::toggle(theme.get_untracked());
        theme.set(next);
    };

    let toggle_label = move || {
        if theme.get().is_dark() {
            // Sun: clicking switches back to light.
            "\u{2600}\u{fe0f}"
        } else {
            "\u{1f319}"
        }
    };

    view! {
        <header class="site-header">
            <div class="site-header__inner">
                <a href="#hero" class="site-header__name">
                    "Harshitha " <span class="site-header__accent">"Mattaparthi"</span>
                </a>
                <nav class="site-header__nav">
                    {NAV_SECTIONS
                        .iter()
                        .map(|&id| {
                            let link_class = move || {
                                if active.get().active == id {
                                    "site-header__link site-header__link--active"
                                } else {
                                    "site-header__link"
                                }
                            };
                            view! {
                                <a href=format!("#{}", id.as_str()) class=link_class>
                                    {id.title()}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>
                <a href="#resume" class="site-header__resume">
                    "Resume"
                </a>
                <button class="site-header__theme" on:click=on_toggle title="Toggle theme">
                    {toggle_label}
                </button>
            </div>
        </header>
    }
}
