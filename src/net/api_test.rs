use super::*;

#[test]
fn ok_statuses_succeed() {
    assert_eq!(submit_response_outcome(true, 200), Ok(()));
    assert_eq!(submit_response_outcome(true, 204), Ok(()));
}

#[test]
fn non_ok_statuses_reject_with_the_status() {
    assert_eq!(submit_response_outcome(false, 500), Err(SubmitError::Rejected(500)));
    assert_eq!(submit_response_outcome(false, 404), Err(SubmitError::Rejected(404)));
}

#[test]
fn endpoint_is_absolute_https() {
    assert!(CONTACT_ENDPOINT.starts_with("https://"));
}
