#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Light or dark color scheme.
///
/// The resolved mode is held in an `RwSignal<ThemeMode>` provided via
/// context from `App`; `util::theme_dom` owns the storage and class-list
/// side effects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// The string persisted to localStorage and round-tripped by
    /// [`ThemeMode::parse`].
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything other than the two known literals is
    /// treated as absent so a corrupted store falls back cleanly.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The opposite mode. Applying this twice returns the original.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// Resolve the initial theme from the stored preference, falling back to
/// the platform dark-scheme signal when nothing (valid) is stored.
pub fn resolve_initial(stored: Option<&str>, system_prefers_dark: bool) -> ThemeMode {
    stored
        .and_then(ThemeMode::parse)
        .unwrap_or(if system_prefers_dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        })
}
