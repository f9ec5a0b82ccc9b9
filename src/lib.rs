#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]
//! Media type matching for HTTP content negotiation.
//!
//! This crate answers two questions request-handling code keeps asking: does
//! this message's declared `Content-Type` match one of the types I can
//! handle, and is there a body to handle at all? It is a pure predicate
//! library with no I/O, no state and nothing async; every function is a
//! plain function of the headers it is given.
//!
//! # Pattern forms
//!
//! Patterns may be spelled several ways:
//!
//! - a full media type: `application/json`, `text/html`;
//! - with `*` standing for the whole type or subtype: `image/*`, `*/png`, `*/*`;
//! - a structured-suffix shorthand: `+json` (any type carrying that suffix);
//! - a bare or dotted file extension: `json`, `.png`;
//! - an alias keyword: `urlencoded`, `multipart`.
//!
//! Matching is case-insensitive, ignores `Content-Type` parameters, and
//! tries patterns strictly in the order given; the first match wins.
//!
//! # Examples
//!
//! ```rust
//! use mime_kit::{header, request_type, HeaderMap, HeaderValue, TypeMatch};
//!
//! let mut headers = HeaderMap::new();
//! headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("text/html; charset=utf-8"));
//! headers.insert(header::TRANSFER_ENCODING, HeaderValue::from_static("chunked"));
//!
//! assert_eq!(request_type(&headers, ["html"]).matched(), Some("html"));
//! assert_eq!(request_type(&headers, ["text/*"]).matched(), Some("text/html"));
//! assert_eq!(request_type(&headers, ["json"]), TypeMatch::Unmatched);
//! ```
//!
//! Matching a type you already have in hand, without a message:
//!
//! ```rust
//! use mime_kit::is;
//!
//! assert_eq!(
//!     is("application/vnd.api+json", ["+json"]).as_deref(),
//!     Some("application/vnd.api+json")
//! );
//! assert_eq!(
//!     is("application/json; charset=utf-8", ["urlencoded", "json"]).as_deref(),
//!     Some("json")
//! );
//! ```
//!
//! # Optional Features
//!
//! - `mime` - Matches `mime::Mime` values directly as [`MediaTypeSource`]s (enabled by default)

mod body;
mod lookup;
mod matcher;
mod pattern;
mod resolve;

pub use body::has_body;
pub use matcher::{is, mime_match, request_type, TypeMatch};
pub use pattern::normalize;
pub use resolve::MediaTypeSource;

pub use http::{header, HeaderMap, HeaderValue};
