//! Viewport intersection plumbing.
//!
//! Wraps `IntersectionObserver` behind a small subscription surface that
//! returns an explicit cancellation handle. Two modes:
//!
//! - [`observe_once`]: one-shot. The first time an element intersects at
//!   or above the threshold, the callback fires and the element is
//!   unobserved. Used for fade-in reveals.
//! - [`observe_sections`]: continuous. Every batch reports the sections
//!   currently at or above the threshold, in delivery order. Used for nav
//!   highlighting.
//!
//! Where the platform has no `IntersectionObserver`, callers must fall
//! back to treating content as visible ([`supported`] probes for this);
//! content is never left permanently hidden.

#[cfg(test)]
#[path = "observe_test.rs"]
mod observe_test;

#[cfg(feature = "csr")]
use wasm_bindgen::JsCast;
#[cfg(feature = "csr")]
use wasm_bindgen::prelude::Closure;

#[cfg(feature = "csr")]
type EntryCallback = Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>;

/// Cancellation handle for an active observation.
///
/// Owns the JS callback, so it must be kept alive for as long as the
/// observation should run; components move it into `on_cleanup`.
/// `cancel` stops all observation with no state mutation.
pub struct ObserverHandle {
    #[cfg(feature = "csr")]
    observer: web_sys::IntersectionObserver,
    #[cfg(feature = "csr")]
    _callback: EntryCallback,
}

impl ObserverHandle {
    pub fn cancel(&self) {
        #[cfg(feature = "csr")]
        self.observer.disconnect();
        #[cfg(not(feature = "csr"))]
        let _ = self;
    }
}

/// Whether an observer entry satisfies the configured threshold.
///
/// `isIntersecting` alone is not enough: the platform delivers an initial
/// record for every observed target, and a record on every crossing in
/// either direction, where the flag is true for any geometric overlap.
/// The contract is "intersecting fraction at or above the threshold", so
/// the delivered ratio is checked as well.
pub fn meets_threshold(is_intersecting: bool, ratio: f64, threshold: f64) -> bool {
    is_intersecting && ratio >= threshold
}

/// Whether the platform supports viewport intersection observation.
pub fn supported() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window().is_some_and(|w| {
            js_sys::Reflect::has(&w, &wasm_bindgen::JsValue::from_str("IntersectionObserver"))
                .unwrap_or(false)
        })
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Observe `element` until it first intersects at or above `threshold`,
/// then fire `on_enter` and stop observing it.
///
/// Returns `None` if the observer could not be constructed; the caller
/// falls back to immediate visibility.
#[cfg(feature = "csr")]
pub fn observe_once(
    element: &web_sys::Element,
    threshold: f64,
    on_enter: impl FnOnce() + 'static,
) -> Option<ObserverHandle> {
    let mut on_enter = Some(on_enter);
    let callback: EntryCallback = Closure::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries
                .iter()
                .map(|e| e.unchecked_into::<web_sys::IntersectionObserverEntry>())
            {
                if meets_threshold(entry.is_intersecting(), entry.intersection_ratio(), threshold)
                {
                    // Unobserve before the callback so a slow handler
                    // cannot see a second delivery for the same element.
                    observer.unobserve(&entry.target());
                    if let Some(f) = on_enter.take() {
                        f();
                    }
                }
            }
        },
    );

    let observer = new_observer(&callback, threshold)?;
    observer.observe(element);

    Some(ObserverHandle { observer, _callback: callback })
}

/// Observe every `(id, element)` pair continuously; each callback batch
/// reports the intersecting sections' ids, in delivery order, to `on_batch`.
#[cfg(feature = "csr")]
pub fn observe_sections(
    sections: &[(crate::state::section::SectionId, web_sys::Element)],
    threshold: f64,
    on_batch: impl Fn(Vec<crate::state::section::SectionId>) + 'static,
) -> Option<ObserverHandle> {
    use crate::state::section::SectionId;

    let callback: EntryCallback = Closure::new(
        move |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
            let hits: Vec<SectionId> = entries
                .iter()
                .map(|e| e.unchecked_into::<web_sys::IntersectionObserverEntry>())
                .filter(|e| {
                    meets_threshold(e.is_intersecting(), e.intersection_ratio(), threshold)
                })
                .filter_map(|e| SectionId::parse(&e.target().id()))
                .collect();
            if !hits.is_empty() {
                on_batch(hits);
            }
        },
    );

    let observer = new_observer(&callback, threshold)?;
    for (_, element) in sections {
        observer.observe(element);
    }

    Some(ObserverHandle { observer, _callback: callback })
}

#[cfg(feature = "csr")]
fn new_observer(callback: &EntryCallback, threshold: f64) -> Option<web_sys::IntersectionObserver> {
    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&wasm_bindgen::JsValue::from_f64(threshold));
    web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
        .ok()
}
