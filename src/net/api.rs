//! Contact endpoint client.
//!
//! Client-side (csr): one real HTTP POST via `gloo-net`.
//! Host builds: a stub returning a network error, since the request is
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get a `Result` instead of panics; both failure shapes are
//! recoverable and leave the form intact for a user-initiated retry. No
//! automatic retry is attempted here.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::state::contact::{ContactMessage, SubmitError};

/// Fixed external endpoint; the API itself is out of repo.
pub const CONTACT_ENDPOINT: &str = "https://portfolio-api-c68z.onrender.com/api/contact";

/// Map a response status to the submission result. Any conventional "ok"
/// status counts as success; the body is never parsed.
pub fn submit_response_outcome(ok: bool, status: u16) -> Result<(), SubmitError> {
    if ok {
        Ok(())
    } else {
        Err(SubmitError::Rejected(status))
    }
}

/// POST the message as JSON to the contact endpoint.
///
/// # Errors
///
/// `SubmitError::Rejected` for a non-2xx response, `SubmitError::Network`
/// when no response could be obtained.
pub async fn submit_contact(message: &ContactMessage) -> Result<(), SubmitError> {
    #[cfg(feature = "csr")]
    {
        let request = gloo_net::http::Request::post(CONTACT_ENDPOINT)
            .json(message)
            .map_err(|_| SubmitError::Network)?;
        let resp = request.send().await.map_err(|e| {
            leptos::logging::warn!("contact submit transport error: {e}");
            SubmitError::Network
        })?;
        submit_response_outcome(resp.ok(), resp.status())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
        Err(SubmitError::Network)
    }
}
