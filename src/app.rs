//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::pages::home::HomePage;
use crate::state::section::ActiveSectionState;

/// Root component.
///
/// Resolves the theme once, before the mounted tree first paints, and
/// provides the two shared signals (theme, active section) via context.
/// The theme signal is the single owned theme object; all mutation goes
/// through the header's toggle.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = RwSignal::new(crate::util::theme_dom::initialize());
    let active = RwSignal::new(ActiveSectionState::default());

    provide_context(theme);
    provide_context(active);

    view! {
        <Title text="Harshitha Mattaparthi | Full Stack Developer"/>

        <Header/>
        <HomePage/>
        <Footer/>
    }
}
