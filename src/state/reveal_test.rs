use super::*;

#[test]
fn block_starts_hidden() {
    let state = RevealState::default();
    assert!(!state.visible);
}

#[test]
fn first_reveal_transitions_and_reports_it() {
    let mut state = RevealState::default();
    assert!(state.reveal());
    assert!(state.visible);
}

#[test]
fn reveal_is_one_shot_under_repeated_events() {
    let mut state = RevealState::default();
    assert!(state.reveal());

    // Simulate an arbitrary stream of further intersection/non-intersection
    // callbacks; none may flip the flag back or report a transition.
    for _ in 0..10 {
        assert!(!state.reveal());
        assert!(state.visible);
    }
}

#[test]
fn directions_map_to_distinct_hidden_classes() {
    let all = [
        RevealDirection::Up,
        RevealDirection::Down,
        RevealDirection::Left,
        RevealDirection::Right,
    ];
    for (i, a) in all.iter().enumerate() {
        for (j, b) in all.iter().enumerate() {
            if i != j {
                assert_ne!(a.hidden_class(), b.hidden_class());
            }
        }
    }
}

#[test]
fn default_direction_is_up() {
    assert_eq!(RevealDirection::default(), RevealDirection::Up);
}
