//! Outbound network edge. The contact form POST is the only request this
//! page makes.

pub mod api;
