//! Site footer with the mailto link.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            "\u{a9} 2026 Harshitha Mattaparthi \u{b7} "
            <a href="mailto:harshithamattaparthi9@gmail.com">
                "harshithamattaparthi9@gmail.com"
            </a>
        </footer>
    }
}
