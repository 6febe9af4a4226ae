//! Path utilities for splitting raw patterns
//!
//! All functions are **pure**: given same input, always produce same output with no side effects.

pub mod split;
pub use split::SegmentSplit;

/// Splits a raw pattern on the first `?` into its path and query parts
///
/// **Pure function**: zero-copy, returns borrowed slices of the input.
///
/// # Examples
///
/// ```
/// use uri_pattern::path::split_query;
///
/// assert_eq!(split_query("/a/b"), ("/a/b", None));
/// assert_eq!(split_query("/a?x=1"), ("/a", Some("x=1")));
/// assert_eq!(split_query("/a?x=?"), ("/a", Some("x=?")));
/// ```
pub fn split_query(raw: &str) -> (&str, Option<&str>) {
    match raw.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (raw, None),
    }
}

/// Splits one `key[=value]` query piece on its first `=`
///
/// A piece without `=` has an empty value.
///
/// # Examples
///
/// ```
/// use uri_pattern::path::split_key_value;
///
/// assert_eq!(split_key_value("x=1"), ("x", "1"));
/// assert_eq!(split_key_value("flag"), ("flag", ""));
/// assert_eq!(split_key_value("a=b=c"), ("a", "b=c"));
/// ```
pub fn split_key_value(piece: &str) -> (&str, &str) {
    piece.split_once('=').unwrap_or((piece, ""))
}
