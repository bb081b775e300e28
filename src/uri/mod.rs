//! Path-and-query resolution for redirect handling.
//!
//! [`path_join`] resolves a relative reference against a normalized base per
//! the restricted relative-reference rules, and [`copy_url_component`] pulls
//! a single labeled component out of a [`ParsedUrl`] result.
//!
//! Full URI parsing (scheme, authority, fragment) lives outside this crate;
//! only the parse result is consumed here.
mod join;
mod component;

pub use join::{path_join, path_join_buf};
pub use component::{ParsedUrl, UrlField, copy_url_component};
