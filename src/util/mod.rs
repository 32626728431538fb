//! Browser-facing utilities: theme side effects and viewport observation.

pub mod observe;
pub mod theme_dom;
