use super::*;

fn filled_form() -> ContactFormState {
    ContactFormState {
        name: "Ann".to_owned(),
        email: "ann@x.com".to_owned(),
        message: "hi".to_owned(),
        sending: true,
    }
}

// =============================================================
// ContactMessage
// =============================================================

#[test]
fn message_serializes_to_the_wire_shape() {
    let msg = filled_form().to_message();
    let json = serde_json::to_value(&msg).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!({
            "name": "Ann",
            "email": "ann@x.com",
            "message": "hi"
        })
    );
}

// =============================================================
// SubmitOutcome
// =============================================================

#[test]
fn outcomes_map_from_results() {
    assert_eq!(SubmitOutcome::from_result(Ok(())), SubmitOutcome::Sent);
    assert_eq!(
        SubmitOutcome::from_result(Err(SubmitError::Rejected(500))),
        SubmitOutcome::Rejected(500)
    );
    assert_eq!(
        SubmitOutcome::from_result(Err(SubmitError::Network)),
        SubmitOutcome::NetworkError
    );
}

#[test]
fn the_three_outcomes_have_distinct_notices() {
    let notices = [
        SubmitOutcome::Sent.notice(),
        SubmitOutcome::Rejected(500).notice(),
        SubmitOutcome::NetworkError.notice(),
    ];
    for (i, a) in notices.iter().enumerate() {
        for b in &notices[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

// =============================================================
// ContactFormState
// =============================================================

#[test]
fn success_clears_the_fields() {
    let mut form = filled_form();
    form.apply_outcome(SubmitOutcome::Sent);
    assert!(form.name.is_empty());
    assert!(form.email.is_empty());
    assert!(form.message.is_empty());
    assert!(!form.sending);
}

#[test]
fn rejection_preserves_the_fields_for_retry() {
    let mut form = filled_form();
    form.apply_outcome(SubmitOutcome::Rejected(500));
    assert_eq!(form.name, "Ann");
    assert_eq!(form.email, "ann@x.com");
    assert_eq!(form.message, "hi");
    assert!(!form.sending);
}

#[test]
fn network_failure_preserves_the_fields_for_retry() {
    let mut form = filled_form();
    form.apply_outcome(SubmitOutcome::NetworkError);
    assert_eq!(form.name, "Ann");
    assert_eq!(form.email, "ann@x.com");
    assert_eq!(form.message, "hi");
    assert!(!form.sending);
}

#[test]
fn submit_error_displays_the_status() {
    assert_eq!(
        SubmitError::Rejected(502).to_string(),
        "contact endpoint rejected the message (HTTP 502)"
    );
}
