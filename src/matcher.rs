//! Media type matching.
//!
//! The matching pipeline: resolve the declared type, then compare it against
//! an ordered sequence of patterns, first match wins. [`request_type`] runs
//! the whole pipeline including the body-presence gate and yields the
//! three-valued [`TypeMatch`]; [`is`] matches any [`MediaTypeSource`] while
//! ignoring body presence; [`mime_match`] is the underlying single-pattern
//! predicate.

use http::HeaderMap;

use crate::{
    body::has_body,
    lookup,
    pattern::normalize,
    resolve::{self, MediaTypeSource},
};

/// The outcome of matching a message's declared media type.
///
/// Matching has three outcomes, not two: a pattern may match, every pattern
/// may be rejected, or the message may carry no body at all. In the last
/// case there was nothing to type-check and a rejection would be misleading.
/// Callers routing payloads must branch on all three.
///
/// # Examples
///
/// ```rust
/// use mime_kit::{header, request_type, HeaderMap, HeaderValue, TypeMatch};
///
/// let mut headers = HeaderMap::new();
/// headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
/// headers.insert(header::CONTENT_LENGTH, HeaderValue::from_static("18"));
///
/// match request_type(&headers, ["json", "urlencoded"]) {
///     TypeMatch::Matched(kind) => assert_eq!(kind, "json"),
///     TypeMatch::Unmatched => panic!("unsupported payload"),
///     TypeMatch::NoBody => panic!("nothing to parse"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeMatch {
    /// A pattern matched. Carries the matching pattern as the caller wrote
    /// it, or the resolved media type for wildcard and suffix shorthands and
    /// for an empty pattern sequence.
    Matched(String),
    /// A body is present but its declared type is missing, invalid, or
    /// matched no pattern.
    Unmatched,
    /// The framing headers indicate no body; the declared type, if any, was
    /// never inspected.
    NoBody,
}

impl TypeMatch {
    /// Returns the matched value, if any.
    pub fn matched(&self) -> Option<&str> {
        match self {
            TypeMatch::Matched(value) => Some(value),
            _ => None,
        }
    }

    /// Consumes the result, returning the matched value, if any.
    pub fn into_matched(self) -> Option<String> {
        match self {
            TypeMatch::Matched(value) => Some(value),
            _ => None,
        }
    }

    /// Returns `true` if a pattern matched.
    pub const fn is_matched(&self) -> bool {
        matches!(self, TypeMatch::Matched(_))
    }

    /// Returns `true` if the message carries no body.
    pub const fn is_no_body(&self) -> bool {
        matches!(self, TypeMatch::NoBody)
    }
}

/// Matches the media type a message declares against a sequence of patterns,
/// body presence permitting.
///
/// This is the full pipeline: if the framing headers say there is no body,
/// the result is [`TypeMatch::NoBody`] and the `Content-Type` header is
/// never read. Otherwise the declared type is resolved and matched in
/// pattern order; see [`is`] for the matching and echo rules and
/// [`has_body`] for the framing heuristic. An empty pattern sequence reports
/// the resolved type itself.
///
/// # Examples
///
/// ```rust
/// use mime_kit::{header, request_type, HeaderMap, HeaderValue, TypeMatch};
///
/// let mut headers = HeaderMap::new();
/// headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("image/png"));
/// headers.insert(header::CONTENT_LENGTH, HeaderValue::from_static("512"));
///
/// assert_eq!(request_type(&headers, ["png", "jpeg"]), TypeMatch::Matched("png".into()));
/// assert_eq!(request_type(&headers, ["jpeg"]), TypeMatch::Unmatched);
///
/// // A GET with no framing headers carries no body, whatever it declares.
/// let mut headers = HeaderMap::new();
/// headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("image/png"));
/// assert_eq!(request_type(&headers, ["png"]), TypeMatch::NoBody);
/// ```
pub fn request_type<I, S>(headers: &HeaderMap, patterns: I) -> TypeMatch
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if !has_body(headers) {
        return TypeMatch::NoBody;
    }
    match is(headers, patterns) {
        Some(matched) => TypeMatch::Matched(matched),
        None => TypeMatch::Unmatched,
    }
}

/// Matches a declared media type against a sequence of patterns, ignoring
/// body presence.
///
/// The source may be a raw `Content-Type` string, an `http::HeaderValue`, a
/// whole `http::HeaderMap`, or (with the `mime` feature) a parsed
/// `mime::Mime`; see [`MediaTypeSource`]. Parameters are stripped and casing
/// is ignored before matching.
///
/// Patterns are tried in order and the first match decides the result:
/// wildcard (`*`) and suffix (`+`) shorthands yield the resolved media type,
/// while any other pattern is echoed back exactly as supplied, so `png`,
/// `.png` and `urlencoded` stay recognizable to the caller. With no patterns
/// at all, the resolved type itself is returned. `None` means the declared
/// type is missing, invalid, or matched nothing.
///
/// # Examples
///
/// ```rust
/// use mime_kit::is;
///
/// assert_eq!(is("text/html; charset=utf-8", ["text/*"]).as_deref(), Some("text/html"));
/// assert_eq!(is("image/png", ["png"]).as_deref(), Some("png"));
/// assert_eq!(is("image/png", ["jpeg", "gif"]), None);
///
/// // No patterns: report the normalized type.
/// let none: [&str; 0] = [];
/// assert_eq!(is("Image/PNG; q=0.8", none).as_deref(), Some("image/png"));
/// ```
pub fn is<V, I, S>(value: &V, patterns: I) -> Option<String>
where
    V: MediaTypeSource + ?Sized,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let actual = resolve::media_type(value.declared()?)?;
    first_match(&actual, patterns)
}

/// Tests one pattern against an already-normalized media type.
///
/// `actual` must be a bare lower-case `type/subtype[+suffix]` value, as the
/// resolver produces. The pattern may use any of the shorthands
/// [`normalize`] accepts, plus the dotted-extension form:
///
/// - `*` stands for a whole type or subtype component (`text/*`, `*/png`);
/// - a pattern suffix must equal the actual suffix exactly, while a pattern
///   without a suffix places no requirement on it: `text/*` matches
///   `text/html+xml`, but `*/*+xml` does not match `text/html`;
/// - `.png` matches when the extension resolves to exactly the actual type;
/// - unresolvable or malformed patterns (second `/`, unknown extension)
///   match nothing.
///
/// # Examples
///
/// ```rust
/// use mime_kit::mime_match;
///
/// assert!(mime_match("*/*", "text/html"));
/// assert!(mime_match("*/*+xml", "text/html+xml"));
/// assert!(!mime_match("*/*+xml", "text/html"));
/// assert!(mime_match(".png", "image/png"));
/// assert!(!mime_match("text/html/", "text/html"));
/// ```
pub fn mime_match(pattern: &str, actual: &str) -> bool {
    match pattern.strip_prefix('.') {
        Some(extension) => {
            lookup::from_extension(extension).is_some_and(|media_type| media_type == actual)
        }
        None => normalize(pattern).is_some_and(|normalized| match_parts(&normalized, actual)),
    }
}

fn first_match<I, S>(actual: &str, patterns: I) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut patterns = patterns.into_iter().peekable();
    if patterns.peek().is_none() {
        return Some(actual.to_owned());
    }
    for pattern in patterns {
        let pattern = pattern.as_ref();
        if mime_match(pattern, actual) {
            // Wildcard and suffix shorthands echo the concrete type; every
            // other pattern is echoed as the caller wrote it.
            return Some(if pattern.starts_with('+') || pattern.contains('*') {
                actual.to_owned()
            } else {
                pattern.to_owned()
            });
        }
    }
    None
}

fn match_parts(pattern: &str, actual: &str) -> bool {
    let Some((pattern_type, pattern_subtype)) = split_type(pattern) else {
        return false;
    };
    let Some((actual_type, actual_subtype)) = split_type(actual) else {
        return false;
    };
    if pattern_type != "*" && pattern_type != actual_type {
        return false;
    }
    let (pattern_subtype, pattern_suffix) = split_suffix(pattern_subtype);
    let (actual_subtype, actual_suffix) = split_suffix(actual_subtype);
    if pattern_subtype != "*" && pattern_subtype != actual_subtype {
        return false;
    }
    pattern_suffix.is_empty() || pattern_suffix == actual_suffix
}

/// Splits `type/subtype`; a missing or second `/` makes a value unmatchable.
fn split_type(value: &str) -> Option<(&str, &str)> {
    let (kind, subtype) = value.split_once('/')?;
    (!subtype.contains('/')).then_some((kind, subtype))
}

/// Splits the suffix off a subtype at the last `+`; no `+` means no suffix.
fn split_suffix(subtype: &str) -> (&str, &str) {
    subtype.rsplit_once('+').unwrap_or((subtype, ""))
}
