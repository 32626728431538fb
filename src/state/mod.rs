//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`theme`, `reveal`, `section`, `contact`) so
//! individual components can depend on small focused models. Everything
//! here is pure and host-testable; the DOM and network edges live in
//! `util` and `net`.

pub mod contact;
pub mod reveal;
pub mod section;
pub mod theme;
