//! Pattern normalization.
//!
//! Caller-facing patterns come in several shorthands. [`normalize`] expands
//! each into the canonical `type/subtype[+suffix]` comparison form the
//! matcher operates on, or reports that the pattern cannot be resolved.

use crate::lookup;

/// Expands a matching pattern into its canonical comparison form.
///
/// The accepted shorthands, in resolution order:
///
/// - a leading `+` marks a suffix shorthand: `+json` becomes `*/*+json`;
/// - the alias keywords `urlencoded` and `multipart` expand to
///   `application/x-www-form-urlencoded` and `multipart/*`;
/// - a pattern containing `/` is already qualified (wildcards allowed) and
///   is only lower-cased;
/// - anything else is treated as a bare file extension and resolved through
///   the MIME database.
///
/// Returns `None` for patterns that cannot be resolved, such as unknown
/// extensions. Dotted extension patterns (`.png`) are not normalized; the
/// matcher compares them against the extension table directly.
///
/// Normalization is idempotent: feeding a result back in returns it
/// unchanged.
///
/// # Examples
///
/// ```rust
/// use mime_kit::normalize;
///
/// assert_eq!(normalize("json").as_deref(), Some("application/json"));
/// assert_eq!(normalize("+json").as_deref(), Some("*/*+json"));
/// assert_eq!(normalize("urlencoded").as_deref(), Some("application/x-www-form-urlencoded"));
/// assert_eq!(normalize("multipart").as_deref(), Some("multipart/*"));
/// assert_eq!(normalize("TEXT/*").as_deref(), Some("text/*"));
/// assert_eq!(normalize("unknownext"), None);
/// ```
pub fn normalize(pattern: &str) -> Option<String> {
    if pattern.starts_with('+') {
        return Some(format!("*/*{}", pattern.to_ascii_lowercase()));
    }
    match pattern {
        "urlencoded" => Some("application/x-www-form-urlencoded".to_owned()),
        "multipart" => Some("multipart/*".to_owned()),
        _ if pattern.contains('/') => Some(pattern.to_ascii_lowercase()),
        _ => lookup::from_extension(pattern).map(str::to_owned),
    }
}
