use super::*;

// =============================================================
// ThemeMode
// =============================================================

#[test]
fn default_mode_is_light() {
    assert_eq!(ThemeMode::default(), ThemeMode::Light);
}

#[test]
fn toggled_is_an_involution() {
    for mode in [ThemeMode::Light, ThemeMode::Dark] {
        assert_eq!(mode.toggled().toggled(), mode);
        assert_ne!(mode.toggled(), mode);
    }
}

#[test]
fn toggle_parity_over_a_sequence() {
    let mut mode = ThemeMode::Dark;
    for _ in 0..7 {
        mode = mode.toggled();
    }
    // Odd number of toggles starting from dark lands on light.
    assert_eq!(mode, ThemeMode::Light);

    for _ in 0..8 {
        mode = mode.toggled();
    }
    // A further even number of toggles is a no-op.
    assert_eq!(mode, ThemeMode::Light);
}

#[test]
fn as_str_round_trips_through_parse() {
    for mode in [ThemeMode::Light, ThemeMode::Dark] {
        assert_eq!(ThemeMode::parse(mode.as_str()), Some(mode));
    }
}

#[test]
fn parse_rejects_unknown_values() {
    assert_eq!(ThemeMode::parse(""), None);
    assert_eq!(ThemeMode::parse("Dark"), None);
    assert_eq!(ThemeMode::parse("true"), None);
}

// =============================================================
// resolve_initial
// =============================================================

#[test]
fn stored_preference_wins_over_system() {
    assert_eq!(resolve_initial(Some("light"), true), ThemeMode::Light);
    assert_eq!(resolve_initial(Some("dark"), false), ThemeMode::Dark);
}

#[test]
fn missing_store_falls_back_to_system_preference() {
    assert_eq!(resolve_initial(None, true), ThemeMode::Dark);
    assert_eq!(resolve_initial(None, false), ThemeMode::Light);
}

#[test]
fn invalid_store_falls_back_to_system_preference() {
    assert_eq!(resolve_initial(Some("solarized"), true), ThemeMode::Dark);
    assert_eq!(resolve_initial(Some(""), false), ThemeMode::Light);
}
