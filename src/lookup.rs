//! Extension lookup backed by the shared MIME database.
//!
//! The table is the `mime_guess` static database: read-only, built into the
//! binary at compile time, and safe to consult concurrently from any number
//! of threads.

/// Resolves a bare file extension (no leading dot) to its canonical media
/// type. Lookup is case-insensitive; unknown extensions resolve to `None`.
pub(crate) fn from_extension(extension: &str) -> Option<&'static str> {
    mime_guess::from_ext(extension).first_raw()
}
