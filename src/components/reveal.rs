//! One-shot fade-in wrapper.
//!
//! Wraps a block and keeps it hidden (offset + transparent, per direction)
//! until it first enters the viewport, then flips it visible exactly once.
//! The flag never resets while the block is mounted, no matter how many
//! further intersection events the platform delivers.

use leptos::prelude::*;

use crate::state::reveal::{RevealDirection, RevealState};

/// Reveal-on-scroll wrapper.
///
/// Without `IntersectionObserver` support the content is shown
/// immediately; it is never left permanently hidden.
#[component]
pub fn Reveal(
    #[prop(optional)] direction: RevealDirection,
    children: Children,
) -> impl IntoView {
    let state = RwSignal::new(RevealState::default());
    let node = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "csr")]
    Effect::new(move || {
        let Some(el) = node.get() else {
            return;
        };
        if state.get_untracked().visible {
            return;
        }

        if !crate::util::observe::supported() {
            state.update(|s| {
                s.reveal();
            });
            return;
        }

        let handle = crate::util::observe::observe_once(
            &el,
            crate::state::reveal::REVEAL_THRESHOLD,
            move || {
                state.update(|s| {
                    s.reveal();
                });
            },
        );
        match handle {
            // The handle owns the JS callback; park it until unmount.
            Some(handle) => on_cleanup(move || handle.cancel()),
            None => state.update(|s| {
                s.reveal();
            }),
        }
    });

    let class = move || {
        if state.get().visible {
            "reveal reveal--visible".to_owned()
        } else {
            format!("reveal {}", direction.hidden_class())
        }
    };

    view! {
        <div class=class node_ref=node>
            {children()}
        </div>
    }
}
