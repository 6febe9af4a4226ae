//! Grammar parser for URI patterns
//!
//! Transforms raw pattern text into validated segments and query literals.
//! All functions are **pure**: same input → same output (or the same error
//! kind), no side effects.
//!
//! Checks run in a fixed order and the first violation wins:
//!
//! 1. no trailing `?`
//! 2. leading `/`
//! 3. no `#`
//! 4. every path element parses as a segment (non-empty, valid label name,
//!    no stray braces in literals)
//! 5. label names unique, at most one greedy label, greedy label last
//! 6. query: no braces, unique keys

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use super::query::QueryLiterals;
use super::segment::{Segment, SegmentKind};
use crate::error::{PatternError, Result};
use crate::path::{split_key_value, SegmentSplit};

// Identifier-style label names: letters, digits, and '_', not led by a digit
static LABEL_NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

/// Checks a label name against the label-name grammar (pure function)
///
/// # Examples
///
/// ```
/// use uri_pattern::route::parser::is_valid_label_name;
///
/// assert!(is_valid_label_name("id"));
/// assert!(is_valid_label_name("user_id2"));
/// assert!(is_valid_label_name("_private"));
///
/// assert!(!is_valid_label_name(""));
/// assert!(!is_valid_label_name("1bad"));
/// assert!(!is_valid_label_name("a-b"));
/// ```
pub fn is_valid_label_name(name: &str) -> bool {
    LABEL_NAME_REGEX.is_match(name)
}

/// Validates the whole-string rules shared by every pattern
///
/// Leading separator first, then the fragment check.
pub(crate) fn check_path_preconditions(raw: &str) -> Result<()> {
    if !raw.starts_with('/') {
        return Err(PatternError::MissingLeadingSeparator {
            pattern: raw.to_string(),
        });
    }

    if raw.contains('#') {
        return Err(PatternError::FragmentNotAllowed {
            pattern: raw.to_string(),
        });
    }

    Ok(())
}

/// Validates the whole-string rules of a route pattern
///
/// A trailing `?` is checked before anything else.
pub(crate) fn check_route_preconditions(raw: &str) -> Result<()> {
    if raw.ends_with('?') {
        return Err(PatternError::TrailingQuerySeparator {
            pattern: raw.to_string(),
        });
    }

    check_path_preconditions(raw)
}

/// Classifies one path element into a typed segment (pure function)
///
/// # Parsing Rules (evaluated in order)
///
/// 1. **Empty**: rejected
/// 2. **Greedy label**: `{name+}`
/// 3. **Label**: `{name}`
/// 4. **Literal**: any other text without `{` or `}`
///
/// # Examples
///
/// ```
/// use uri_pattern::route::parser::classify_segment;
/// use uri_pattern::SegmentKind;
///
/// let seg = classify_segment("/{id}", "{id}", 1).unwrap();
/// assert_eq!(seg.kind(), &SegmentKind::Label("id".to_string()));
///
/// let seg = classify_segment("/{rest+}", "{rest+}", 1).unwrap();
/// assert_eq!(seg.kind(), &SegmentKind::GreedyLabel("rest".to_string()));
///
/// assert!(classify_segment("/{a-b}", "{a-b}", 1).is_err());
/// ```
pub fn classify_segment(pattern: &str, element: &str, offset: usize) -> Result<Segment> {
    if element.is_empty() {
        return Err(PatternError::EmptySegment {
            pattern: pattern.to_string(),
            offset,
        });
    }

    match element.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
        Some(inner) => {
            let (name, greedy) = match inner.strip_suffix('+') {
                Some(name) => (name, true),
                None => (inner, false),
            };

            if !is_valid_label_name(name) {
                return Err(PatternError::InvalidLabelName {
                    pattern: pattern.to_string(),
                    name: name.to_string(),
                    offset,
                });
            }

            let kind = if greedy {
                SegmentKind::GreedyLabel(name.to_string())
            } else {
                SegmentKind::Label(name.to_string())
            };
            Ok(Segment::new(kind, offset))
        }
        None if element.contains(['{', '}']) => Err(PatternError::InvalidLiteral {
            pattern: pattern.to_string(),
            content: element.to_string(),
            offset,
        }),
        None => Ok(Segment::new(SegmentKind::Literal(element.to_string()), offset)),
    }
}

/// Accumulator for fold-based segment parsing
///
/// Per-segment rules run while folding; cross-segment label rules run in
/// `finalize`, so a malformed element is always reported before a label clash.
#[derive(Default)]
struct ParseState {
    segments: Vec<Segment>,
}

impl ParseState {
    fn with_segment(mut self, segment: Segment) -> Self {
        self.segments.push(segment);
        self
    }

    fn finalize(self, pattern: &str) -> Result<Vec<Segment>> {
        check_labels(pattern, &self.segments)?;
        Ok(self.segments)
    }
}

/// Enforces label uniqueness and greedy-label placement
fn check_labels(pattern: &str, segments: &[Segment]) -> Result<()> {
    let mut seen = HashSet::new();
    for segment in segments {
        if let Some(name) = segment.label_name() {
            if !seen.insert(name) {
                return Err(PatternError::DuplicateLabelName {
                    pattern: pattern.to_string(),
                    name: name.to_string(),
                    offset: segment.offset(),
                });
            }
        }
    }

    let mut greedy = segments
        .iter()
        .enumerate()
        .filter(|(_, segment)| matches!(segment.kind(), SegmentKind::GreedyLabel(_)));

    if let Some((index, first)) = greedy.next() {
        if let Some((_, second)) = greedy.next() {
            return Err(PatternError::DuplicateGreedyLabel {
                pattern: pattern.to_string(),
                name: second.content().to_string(),
                offset: second.offset(),
            });
        }

        if index + 1 != segments.len() {
            return Err(PatternError::MisplacedGreedyLabel {
                pattern: pattern.to_string(),
                name: first.content().to_string(),
                offset: first.offset(),
            });
        }
    }

    Ok(())
}

/// Parses the path part of a pattern into validated segments (pure function)
///
/// `pattern` is the full raw text, used only for error reporting; `path` is
/// the part before any `?`. The root path `/` parses to no segments.
///
/// Uses functional composition:
/// - `SegmentSplit` - lazily split into `(offset, element)` pairs
/// - `try_fold` - classify each element, stopping at the first bad one
/// - `finalize` - cross-segment label checks
///
/// # Examples
///
/// ```
/// use uri_pattern::route::parser::parse_segments;
///
/// let segments = parse_segments("/a/{b}/{c+}", "/a/{b}/{c+}").unwrap();
/// let rendered: Vec<String> = segments.iter().map(|s| s.to_string()).collect();
/// assert_eq!(rendered, vec!["a", "{b}", "{c+}"]);
///
/// assert!(parse_segments("/{x}/{x}", "/{x}/{x}").is_err());
/// ```
pub fn parse_segments(pattern: &str, path: &str) -> Result<Vec<Segment>> {
    SegmentSplit::new(path)
        .try_fold(ParseState::default(), |state, (offset, element)| {
            classify_segment(pattern, element, offset).map(|segment| state.with_segment(segment))
        })?
        .finalize(pattern)
}

/// Parses a query string into literal key/value constraints (pure function)
///
/// The query is split on `&`, and each piece on its first `=`. A key without
/// `=` maps to the empty string. Trailing empty pieces (`x&`, `x&&`) are
/// dropped; an interior empty piece (`x&&y`) declares the empty key.
///
/// # Examples
///
/// ```
/// use uri_pattern::route::parser::parse_query_literals;
///
/// let literals = parse_query_literals("/a?x=1&flag", "x=1&flag").unwrap();
/// assert_eq!(literals.get("x"), Some("1"));
/// assert_eq!(literals.get("flag"), Some(""));
///
/// assert!(parse_query_literals("/a?k=1&k=2", "k=1&k=2").is_err());
/// ```
pub fn parse_query_literals(pattern: &str, query: &str) -> Result<QueryLiterals> {
    if query.contains(['{', '}']) {
        return Err(PatternError::LabelInQueryString {
            pattern: pattern.to_string(),
        });
    }

    let query = query.trim_end_matches('&');
    if query.is_empty() {
        return Ok(QueryLiterals::default());
    }

    query
        .split('&')
        .map(split_key_value)
        .try_fold(QueryLiterals::default(), |mut literals, (key, value)| {
            if literals.contains_key(key) {
                return Err(PatternError::DuplicateQueryLiteral {
                    pattern: pattern.to_string(),
                    key: key.to_string(),
                });
            }
            literals.insert(key, value);
            Ok(literals)
        })
}
