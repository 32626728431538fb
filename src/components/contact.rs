//! Contact section: the 3-field form and its submission flow.
//!
//! One POST per user-initiated submit; the three outcomes (sent, rejected,
//! network failure) each surface as a blocking alert. Success clears the
//! fields, any failure preserves them so the user can retry. Validation is
//! left to the browser's native `required` enforcement.

use leptos::prelude::*;

use crate::components::reveal::Reveal;
use crate::state::contact::ContactFormState;
use crate::state::section::SectionId;

#[component]
pub fn ContactSection() -> impl IntoView {
    let form = RwSignal::new(ContactFormState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        // One request in flight at a time.
        if form.get_untracked().sending {
            return;
        }

        #[cfg(feature = "csr")]
        {
            let message = form.get_untracked().to_message();
            form.update(|f| f.sending = true);
            leptos::task::spawn_local(async move {
                let result = crate::net::api::submit_contact(&message).await;
                if let Err(e) = result {
                    leptos::logging::warn!("contact submit failed: {e}");
                }
                let outcome = crate::state::contact::SubmitOutcome::from_result(result);
                // If the section unmounted mid-request these signal writes
                // land in a disposed scope and are dropped; nothing crashes.
                form.update(|f| f.apply_outcome(outcome));
                notify(outcome.notice());
            });
        }
    };

    view! {
        <section id=SectionId::Contact.as_str() class="section">
            <Reveal>
                <h3 class="section__title">"Contact"</h3>
                <p class="section__body">
                    "Want to collaborate or have a role that fits my profile? Send me a message."
                </p>
                <form class="contact-form" on:submit=on_submit>
                    <input
                        class="contact-form__input"
                        type="text"
                        name="name"
                        placeholder="Your name"
                        required
                        prop:value=move || form.get().name
                        on:input=move |ev| {
                            form.update(|f| f.name = event_target_value(&ev));
                        }
                    />
                    <input
                        class="contact-form__input"
                        type="email"
                        name="email"
                        placeholder="Your email"
                        required
                        prop:value=move || form.get().email
                        on:input=move |ev| {
                            form.update(|f| f.email = event_target_value(&ev));
                        }
                    />
                    <textarea
                        class="contact-form__input"
                        name="message"
                        placeholder="Your message"
                        rows="4"
                        required
                        prop:value=move || form.get().message
                        on:input=move |ev| {
                            form.update(|f| f.message = event_target_value(&ev));
                        }
                    ></textarea>
                    <button
                        type="submit"
                        class="btn btn--primary"
                        disabled=move || form.get().sending
                    >
                        {move || if form.get().sending { "Sending..." } else { "Send Message" }}
                    </button>
                </form>
            </Reveal>
        </section>
    }
}

/// Blocking acknowledgment; all three submit outcomes go through here.
#[cfg(feature = "csr")]
fn notify(text: &str) {
    if let Some(w) = web_sys::window() {
        let _ = w.alert_with_message(text);
    }
}
