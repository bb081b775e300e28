//! HTTP/2 header classification and path resolution utilities.
//!
//! This crate carries the text-processing pieces of an HTTP/2 message
//! pipeline that are shared between request and response handling:
//!
//! - [`headers`], classifying header field names into a closed token set and
//!   indexing where each recognized name last appeared,
//! - [`uri`], resolving a relative path-and-query against a base when
//!   following or rewriting redirects,
//! - [`status`], reason-phrase lookup, status stringification and the
//!   response-body-presence rule.
//!
//! Everything here is synchronous and total: operations either always produce
//! a result, or rely on a documented precondition.
//!
//! # Buffers
//!
//! Operations that produce per-request views take a caller-supplied
//! [`BytesMut`][bytes::BytesMut] scratch buffer and return a
//! [`Bytes`][bytes::Bytes] view split off from it, so the hot path performs
//! no allocation of its own. The scratch buffer is single-writer; concurrent
//! callers each bring their own.
#![warn(missing_debug_implementations)]

mod log;
mod matches;

pub mod headers;
pub mod status;
pub mod uri;

pub use headers::{Field, FieldFlags, HeaderIndex, HeaderToken, lookup_token};
pub use status::{expect_response_body, expect_response_body_for, reason_phrase, stringify_status};
pub use uri::{ParsedUrl, UrlField, copy_url_component, path_join, path_join_buf};
