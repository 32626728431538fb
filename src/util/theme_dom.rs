//! Theme initialization and toggle side effects.
//!
//! Reads the persisted preference from `localStorage` and applies the
//! `.dark` class to the `<html>` element. Toggle writes back to
//! `localStorage` and updates the class. Storage failures degrade silently
//! to the system-preference default; nothing here is surfaced to the user.

use crate::state::theme::ThemeMode;

#[cfg(feature = "csr")]
const STORAGE_KEY: &str = "portfolio_theme";

/// Resolve the initial theme and apply it to the document.
///
/// Storage wins; with no (valid) stored value the platform dark-scheme
/// signal decides. Runs once per page load, during `App` setup, so the
/// class is in place before the mounted tree first paints.
pub fn initialize() -> ThemeMode {
    let mode = crate::state::theme::resolve_initial(stored().as_deref(), system_prefers_dark());
    apply(mode);
    mode
}

/// Toggle the theme, apply the class, and persist the new preference.
pub fn toggle(current: ThemeMode) -> ThemeMode {
    let next = current.toggled();
    apply(next);
    persist(next);
    next
}

/// Read the raw stored preference, if any.
fn stored() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(STORAGE_KEY).ok()?
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Whether the platform reports a dark color-scheme preference.
fn system_prefers_dark() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Apply or remove the `.dark` class on the `<html>` element.
fn apply(mode: ThemeMode) {
    #[cfg(feature = "csr")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let class_list = el.class_list();
                if mode.is_dark() {
                    let _ = class_list.add_1("dark");
                } else {
                    let _ = class_list.remove_1("dark");
                }
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = mode;
    }
}

/// Persist the preference; write failures are ignored.
fn persist(mode: ThemeMode) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, mode.as_str());
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = mode;
    }
}
