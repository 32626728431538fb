#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use serde::Serialize;

/// Payload posted to the contact endpoint. Built at submit time from the
/// form fields and discarded once the request resolves.
#[derive(Clone, Debug, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Why a contact submission did not go through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The endpoint answered with a non-2xx status. Recoverable; the user
    /// may resubmit the same message.
    #[error("contact endpoint rejected the message (HTTP {0})")]
    Rejected(u16),
    /// No response could be obtained at all.
    #[error("network failure before a response was received")]
    Network,
}

/// User-facing result of one submission attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    Rejected(u16),
    NetworkError,
}

impl SubmitOutcome {
    pub fn from_result(result: Result<(), SubmitError>) -> Self {
        match result {
            Ok(()) => Self::Sent,
            Err(SubmitError::Rejected(status)) => Self::Rejected(status),
            Err(SubmitError::Network) => Self::NetworkError,
        }
    }

    /// Text for the blocking acknowledgment alert. The three outcomes
    /// produce three distinct notices.
    pub fn notice(self) -> &'static str {
        match self {
            Self::Sent => "Message sent successfully!",
            Self::Rejected(_) => "Something went wrong. Please try again.",
            Self::NetworkError => "Network error. Please try again.",
        }
    }
}

/// Contact form fields plus the in-flight flag that disables the submit
/// button while a request is outstanding.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub name: String,
    pub email: String,
    pub message: String,
    pub sending: bool,
}

impl ContactFormState {
    /// Snapshot the current fields into a request payload.
    pub fn to_message(&self) -> ContactMessage {
        ContactMessage {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        }
    }

    /// Fold a submission result back into the form: success clears the
    /// fields, any failure preserves them so the user can retry.
    pub fn apply_outcome(&mut self, outcome: SubmitOutcome) {
        self.sending = false;
        if outcome == SubmitOutcome::Sent {
            self.name.clear();
            self.email.clear();
            self.message.clear();
        }
    }
}
