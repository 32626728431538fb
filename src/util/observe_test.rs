use super::*;
use crate::state::reveal::REVEAL_THRESHOLD;
use crate::state::section::ACTIVE_THRESHOLD;

#[test]
fn initial_record_below_threshold_does_not_count() {
    // Observation start delivers a record for every target; a section only
    // 10% visible reports is_intersecting=true but must not become active.
    assert!(!meets_threshold(true, 0.1, ACTIVE_THRESHOLD));
}

#[test]
fn partial_overlap_below_reveal_threshold_stays_hidden() {
    assert!(!meets_threshold(true, 0.05, REVEAL_THRESHOLD));
}

#[test]
fn ratio_at_threshold_counts() {
    assert!(meets_threshold(true, REVEAL_THRESHOLD, REVEAL_THRESHOLD));
    assert!(meets_threshold(true, ACTIVE_THRESHOLD, ACTIVE_THRESHOLD));
}

#[test]
fn ratio_above_threshold_counts() {
    assert!(meets_threshold(true, 0.9, ACTIVE_THRESHOLD));
}

#[test]
fn downward_crossing_does_not_count() {
    // A 0.2 -> 0.1 crossing still reports is_intersecting=true; the ratio
    // check keeps it out.
    assert!(!meets_threshold(true, 0.1, REVEAL_THRESHOLD));
}

#[test]
fn non_intersecting_entry_never_counts() {
    assert!(!meets_threshold(false, 1.0, ACTIVE_THRESHOLD));
    assert!(!meets_threshold(false, 0.0, REVEAL_THRESHOLD));
}
