//! Page-level components. A single page; navigation is in-page anchors.

pub mod home;
