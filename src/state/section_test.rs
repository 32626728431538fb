use super::*;

// =============================================================
// SectionId
// =============================================================

#[test]
fn all_lists_every_section_once_in_document_order() {
    assert_eq!(SectionId::ALL.len(), 8);
    assert_eq!(SectionId::ALL[0], SectionId::Hero);
    assert_eq!(SectionId::ALL[7], SectionId::Resume);
    for (i, a) in SectionId::ALL.iter().enumerate() {
        for b in &SectionId::ALL[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn as_str_round_trips_through_parse() {
    for id in SectionId::ALL {
        assert_eq!(SectionId::parse(id.as_str()), Some(id));
    }
}

#[test]
fn parse_rejects_unknown_ids() {
    assert_eq!(SectionId::parse("blog"), None);
    assert_eq!(SectionId::parse(""), None);
    assert_eq!(SectionId::parse("Hero"), None);
}

#[test]
fn default_section_is_hero() {
    assert_eq!(SectionId::default(), SectionId::Hero);
}

// =============================================================
// ActiveSectionState
// =============================================================

#[test]
fn single_hit_becomes_active() {
    let mut state = ActiveSectionState::default();
    state.apply_batch([SectionId::About]);
    assert_eq!(state.active, SectionId::About);
}

#[test]
fn last_hit_in_a_batch_wins() {
    let mut state = ActiveSectionState::default();
    state.apply_batch([SectionId::About, SectionId::Skills]);
    assert_eq!(state.active, SectionId::Skills);
}

#[test]
fn empty_batch_keeps_current_active() {
    let mut state = ActiveSectionState::default();
    state.apply_batch([SectionId::Projects]);
    state.apply_batch(std::iter::empty());
    assert_eq!(state.active, SectionId::Projects);
}

#[test]
fn later_batch_overrides_earlier_one() {
    // "about" crosses the threshold, then "hero" re-crosses while "about"
    // is still intersecting: the hero batch arrived later, so it wins.
    let mut state = ActiveSectionState::default();
    state.apply_batch([SectionId::About]);
    state.apply_batch([SectionId::Hero]);
    assert_eq!(state.active, SectionId::Hero);
}
