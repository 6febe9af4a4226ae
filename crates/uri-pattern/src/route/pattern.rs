//! Structural pattern values
//!
//! A [`Pattern`] is the validated, immutable segment sequence of a pattern
//! plus the text it was parsed from. It is only ever built by the parser.

use std::fmt;
use std::hash::{Hash, Hasher};

use tracing::{debug, trace};

use super::parser::{check_path_preconditions, parse_segments};
use super::segment::{Segment, SegmentKind};
use crate::error::Result;

/// Immutable, validated segment sequence
///
/// Equality and hashing are structural: two patterns are equal when their
/// segments have the same kinds and contents in the same order, whatever
/// their spelling (`/a/` equals `/a`) or segment offsets.
///
/// # Examples
///
/// ```
/// use uri_pattern::Pattern;
///
/// let pattern = Pattern::parse("/users/{id}/files/{path+}").unwrap();
/// assert_eq!(pattern.segments().len(), 4);
/// assert_eq!(pattern.label("id").unwrap().offset(), 7);
/// assert_eq!(pattern.greedy_label().unwrap().content(), "path");
/// assert_eq!(pattern.to_string(), "/users/{id}/files/{path+}");
/// ```
#[derive(Debug, Clone)]
pub struct Pattern {
    text: String,
    segments: Vec<Segment>,
}

impl Pattern {
    /// Parses a path-only pattern
    ///
    /// Applies the leading-separator, fragment, segment, and label rules.
    /// `?` has no special meaning here; use
    /// [`RoutePattern::parse`](crate::RoutePattern::parse) for patterns with
    /// a query string.
    pub fn parse(raw: &str) -> Result<Self> {
        let parsed = check_path_preconditions(raw)
            .and_then(|()| parse_segments(raw, raw))
            .map(|segments| Self::from_parts(raw, segments));

        match &parsed {
            Ok(pattern) => trace!(pattern = raw, segments = pattern.segments.len(), "parsed pattern"),
            Err(err) => debug!(pattern = raw, kind = ?err.kind(), "rejected pattern"),
        }

        parsed
    }

    pub(crate) fn from_parts(text: &str, segments: Vec<Segment>) -> Self {
        Self {
            text: text.to_string(),
            segments,
        }
    }

    /// Segments in routing order
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The original pattern text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Label and greedy-label segments, in order
    pub fn labels(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter().filter(|segment| segment.is_label())
    }

    /// Finds a label (greedy or not) by case-sensitive name
    pub fn label(&self, name: &str) -> Option<&Segment> {
        self.labels().find(|segment| segment.content() == name)
    }

    /// The greedy label, if any; it is always the last segment
    pub fn greedy_label(&self) -> Option<&Segment> {
        self.segments
            .last()
            .filter(|segment| matches!(segment.kind(), SegmentKind::GreedyLabel(_)))
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.segments == other.segments
    }
}

impl Eq for Pattern {}

impl Hash for Pattern {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.segments.hash(state);
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
