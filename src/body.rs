//! Body presence detection.
//!
//! A message only has a type worth matching when it carries a body in the
//! first place. [`has_body`] answers that from the framing headers alone;
//! nothing here ever reads a payload.

use http::{header, HeaderMap};

/// Reports whether the framing headers indicate the message carries a body.
///
/// A body is present when a `Transfer-Encoding` header exists (whatever its
/// value; chunked framing means a body of unknown length), or when
/// `Content-Length` holds a valid non-negative integer. `0` still counts:
/// a zero-length body is a body. Anything else, including a non-numeric
/// length, means no body.
///
/// # Examples
///
/// ```rust
/// use mime_kit::{has_body, header, HeaderMap, HeaderValue};
///
/// let mut headers = HeaderMap::new();
/// assert!(!has_body(&headers));
///
/// headers.insert(header::CONTENT_LENGTH, HeaderValue::from_static("0"));
/// assert!(has_body(&headers));
/// ```
pub fn has_body(headers: &HeaderMap) -> bool {
    if headers.contains_key(header::TRANSFER_ENCODING) {
        return true;
    }
    headers
        .get(header::CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.parse::<u64>().is_ok())
}
