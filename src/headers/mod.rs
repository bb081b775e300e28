//! Header name classification and per-message indexing.
//!
//! [`lookup_token`] maps a lowercase header field name to its
//! [`HeaderToken`], [`HeaderIndex`] records where each recognized name last
//! appeared in a header list, and [`Field`] is the zero-copy view handed to
//! the wire-level header representation.
mod token;
mod index;
mod field;

pub use token::{HeaderToken, lookup_token};
pub use index::HeaderIndex;
pub use field::{Field, FieldFlags, make_field, make_field_static};

#[cfg(test)]
mod test;
