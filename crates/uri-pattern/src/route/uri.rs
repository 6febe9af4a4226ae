//! Route patterns and static conflict detection
//!
//! A [`RoutePattern`] is a [`Pattern`] plus the literal query constraints
//! declared after `?`. Two route patterns bound to the same HTTP method
//! conflict when they can match the same request.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::{debug, trace};

use super::parser::{check_route_preconditions, parse_query_literals, parse_segments};
use super::pattern::Pattern;
use super::query::QueryLiterals;
use super::segment::{Segment, SegmentKind};
use crate::error::{PatternError, Result};
use crate::path::split_query;

/// An HTTP route pattern: path segments plus literal query constraints
///
/// Built only by [`RoutePattern::parse`] and immutable afterwards.
///
/// # Examples
///
/// ```
/// use uri_pattern::RoutePattern;
///
/// let a = RoutePattern::parse("/users/{id}").unwrap();
/// let b = RoutePattern::parse("/users/{name}").unwrap();
/// let c = RoutePattern::parse("/users/current").unwrap();
///
/// // Label names never affect routing
/// assert!(a.conflicts_with(&b));
/// // A label and a literal occupy different slots
/// assert!(!a.conflicts_with(&c));
/// ```
#[derive(Debug, Clone)]
pub struct RoutePattern {
    text: String,
    pattern: Pattern,
    query: QueryLiterals,
}

impl RoutePattern {
    /// Parses a route pattern
    ///
    /// # Grammar
    ///
    /// ```text
    /// pattern      = "/" *( segment "/" ) [ segment ] [ "?" query ]
    /// segment      = literal | label | greedy-label
    /// label        = "{" label-name "}"
    /// greedy-label = "{" label-name "+" "}"
    /// query        = kvp *( "&" kvp )
    /// kvp          = key [ "=" value ]
    /// ```
    ///
    /// Label names must be unique, at most one greedy label may appear and
    /// only as the last segment, and query keys must be unique. The first
    /// violation aborts parsing.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_pattern::{PatternErrorKind, RoutePattern};
    ///
    /// let uri = RoutePattern::parse("/a/{b}?x=1").unwrap();
    /// assert_eq!(uri.query_literal_value("x"), Some("1"));
    ///
    /// let err = RoutePattern::parse("/a?{x}=1").unwrap_err();
    /// assert_eq!(err.kind(), PatternErrorKind::LabelInQueryString);
    /// ```
    pub fn parse(raw: &str) -> Result<Self> {
        let parsed = Self::parse_inner(raw);

        match &parsed {
            Ok(uri) => trace!(
                pattern = raw,
                segments = uri.segments().len(),
                query_literals = uri.query.len(),
                "parsed route pattern"
            ),
            Err(err) => debug!(pattern = raw, kind = ?err.kind(), "rejected route pattern"),
        }

        parsed
    }

    fn parse_inner(raw: &str) -> Result<Self> {
        check_route_preconditions(raw)?;

        let (path, query) = split_query(raw);
        let segments = parse_segments(raw, path)?;
        let query = match query {
            Some(query) => parse_query_literals(raw, query)?,
            None => QueryLiterals::default(),
        };

        Ok(Self {
            text: raw.to_string(),
            pattern: Pattern::from_parts(path, segments),
            query,
        })
    }

    /// The path part (everything before `?`) as a structural [`Pattern`]
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn segments(&self) -> &[Segment] {
        self.pattern.segments()
    }

    /// The original pattern text, query included
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn labels(&self) -> impl Iterator<Item = &Segment> {
        self.pattern.labels()
    }

    pub fn label(&self, name: &str) -> Option<&Segment> {
        self.pattern.label(name)
    }

    pub fn greedy_label(&self) -> Option<&Segment> {
        self.pattern.greedy_label()
    }

    /// Literal query constraints in declaration order
    pub fn query_literals(&self) -> &QueryLiterals {
        &self.query
    }

    /// Value of one literal query constraint; `None` if never declared
    pub fn query_literal_value(&self, key: &str) -> Option<&str> {
        self.query.get(key)
    }

    /// Determines whether two route patterns can match the same request
    ///
    /// # Algorithm
    ///
    /// 1. Different segment counts never conflict.
    /// 2. Segments are compared position by position. Two labels, two greedy
    ///    labels, or two identical literals are compatible; any other pair
    ///    ends the comparison with no conflict. Label names are ignored.
    /// 3. Equivalent paths conflict iff their query literals are equal as
    ///    unordered maps.
    ///
    /// Symmetric, and reflexive for identical structure.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_pattern::RoutePattern;
    ///
    /// let parse = |s: &str| RoutePattern::parse(s).unwrap();
    ///
    /// assert!(parse("/files/{p+}").conflicts_with(&parse("/files/{q+}")));
    /// assert!(!parse("/a/b").conflicts_with(&parse("/a/b/c")));
    /// assert!(!parse("/a?x=1").conflicts_with(&parse("/a?x=2")));
    /// assert!(!parse("/a").conflicts_with(&parse("/a?x=1")));
    /// ```
    pub fn conflicts_with(&self, other: &RoutePattern) -> bool {
        let segments = self.segments();
        let other_segments = other.segments();

        if segments.len() != other_segments.len() {
            return false;
        }

        let equivalent_paths = segments
            .iter()
            .zip(other_segments)
            .all(|(a, b)| segments_overlap(a, b));

        equivalent_paths && self.query == other.query
    }

    /// Aligns label segments across two patterns of the same length
    ///
    /// Returns the `(self, other)` segment pairs at every position where at
    /// least one side is a label or greedy label, in position order. Returns
    /// `None` when segment counts differ, since positions do not line up.
    /// The result is for reporting only and does not decide conflicts.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_pattern::RoutePattern;
    ///
    /// let a = RoutePattern::parse("/users/{id}/posts/{post}").unwrap();
    /// let b = RoutePattern::parse("/users/{name}/posts/latest").unwrap();
    ///
    /// let pairs: Vec<(String, String)> = a
    ///     .conflicting_label_segments(&b)
    ///     .unwrap()
    ///     .into_iter()
    ///     .map(|(x, y)| (x.to_string(), y.to_string()))
    ///     .collect();
    ///
    /// assert_eq!(
    ///     pairs,
    ///     vec![
    ///         ("{id}".to_string(), "{name}".to_string()),
    ///         ("{post}".to_string(), "latest".to_string()),
    ///     ]
    /// );
    /// ```
    pub fn conflicting_label_segments<'a>(
        &'a self,
        other: &'a RoutePattern,
    ) -> Option<Vec<(&'a Segment, &'a Segment)>> {
        let segments = self.segments();
        let other_segments = other.segments();

        if segments.len() != other_segments.len() {
            return None;
        }

        Some(
            segments
                .iter()
                .zip(other_segments)
                .filter(|(a, b)| a.is_label() || b.is_label())
                .collect(),
        )
    }
}

/// Whether two segments at the same position can match the same path segment
fn segments_overlap(a: &Segment, b: &Segment) -> bool {
    match (a.kind(), b.kind()) {
        (SegmentKind::GreedyLabel(_), SegmentKind::GreedyLabel(_)) => true,
        (SegmentKind::Label(_), SegmentKind::Label(_)) => true,
        (SegmentKind::Literal(x), SegmentKind::Literal(y)) => x == y,
        (SegmentKind::Literal(_), _)
        | (SegmentKind::Label(_), _)
        | (SegmentKind::GreedyLabel(_), _) => false,
    }
}

impl PartialEq for RoutePattern {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern && self.query == other.query
    }
}

impl Eq for RoutePattern {}

impl Hash for RoutePattern {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pattern.hash(state);
        self.query.hash(state);
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoutePattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for RoutePattern {
    type Error = PatternError;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

/// Serializes as the original pattern text
impl Serialize for RoutePattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Deserializes by parsing; invalid patterns are deserialization errors
impl<'de> Deserialize<'de> for RoutePattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
