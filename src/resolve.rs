//! Declared media type resolution.
//!
//! Extracts the media type an HTTP message declares in its `Content-Type`
//! header and normalizes it for matching: parameters are discarded,
//! surrounding whitespace is trimmed, and the remainder is lower-cased and
//! validated against the `type "/" subtype` token grammar.

use http::{header, HeaderMap, HeaderValue};

/// A source of a declared media type.
///
/// This is the seam between the matching pipeline and whatever holds the
/// HTTP message: the matching entry points accept anything that can surface
/// a raw `Content-Type` value. Implementations exist for plain strings, for
/// [`HeaderValue`], for a whole [`HeaderMap`] (consulting its `content-type`
/// entry) and, with the `mime` feature, for `mime::Mime`.
///
/// # Examples
///
/// ```rust
/// use mime_kit::{HeaderMap, MediaTypeSource};
///
/// assert_eq!("text/html; charset=utf-8".declared(), Some("text/html; charset=utf-8"));
/// assert_eq!(HeaderMap::new().declared(), None);
/// ```
pub trait MediaTypeSource {
    /// Returns the raw declared media type, if any.
    ///
    /// The value is returned as found, before any normalization. `None`
    /// means there is nothing to resolve: no `content-type` entry, or a
    /// header value that is not visible ASCII.
    fn declared(&self) -> Option<&str>;
}

impl MediaTypeSource for str {
    fn declared(&self) -> Option<&str> {
        Some(self)
    }
}

impl MediaTypeSource for HeaderValue {
    fn declared(&self) -> Option<&str> {
        self.to_str().ok()
    }
}

impl MediaTypeSource for HeaderMap {
    fn declared(&self) -> Option<&str> {
        self.get(header::CONTENT_TYPE)?.to_str().ok()
    }
}

#[cfg(feature = "mime")]
impl MediaTypeSource for mime::Mime {
    fn declared(&self) -> Option<&str> {
        Some(self.as_ref())
    }
}

/// Normalizes a raw `Content-Type` value into a bare media type.
///
/// Everything from the first `;` on is discarded, surrounding whitespace is
/// trimmed and the remainder is ASCII-lowercased. Returns `None` when what
/// is left is empty or does not satisfy the `token "/" token` grammar.
pub(crate) fn media_type(value: &str) -> Option<String> {
    let base = value.split_once(';').map_or(value, |(base, _)| base).trim();
    if base.is_empty() {
        return None;
    }
    let media_type = base.to_ascii_lowercase();
    is_media_type(&media_type).then_some(media_type)
}

/// One slash, both tokens non-empty.
fn is_media_type(value: &str) -> bool {
    match value.split_once('/') {
        Some((kind, subtype)) => is_token(kind) && is_token(subtype),
        None => false,
    }
}

fn is_token(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(is_token_byte)
}

/// Token bytes accepted in a declared type or subtype: a restricted subset
/// of RFC 7230 `tchar` without `*`, `%`, quoting or escape characters.
const fn is_token_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric()
        || matches!(byte, b'!' | b'#' | b'$' | b'&' | b'^' | b'_' | b'.' | b'+' | b'-')
}
