//! Typed path segments
//!
//! A pattern is an ordered list of segments. Each segment is one of three
//! kinds, and consumers match on [`SegmentKind`] exhaustively.

use std::fmt;
use std::hash::{Hash, Hasher};

/// The three kinds of path segment
///
/// # Examples
///
/// ```
/// use uri_pattern::{RoutePattern, SegmentKind};
///
/// let uri = RoutePattern::parse("/files/{id}/{path+}").unwrap();
/// let kinds: Vec<&SegmentKind> = uri.segments().iter().map(|s| s.kind()).collect();
/// assert_eq!(
///     kinds,
///     vec![
///         &SegmentKind::Literal("files".to_string()),
///         &SegmentKind::Label("id".to_string()),
///         &SegmentKind::GreedyLabel("path".to_string()),
///     ]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// Fixed text that must match byte-for-byte
    Literal(String),
    /// `{name}`: matches exactly one path segment
    Label(String),
    /// `{name+}`: matches one or more trailing path segments
    GreedyLabel(String),
}

/// One parsed segment plus its character offset in the source pattern
///
/// The offset is metadata for diagnostics only: two segments of the same
/// kind and content are equal wherever they appear.
#[derive(Debug, Clone)]
pub struct Segment {
    kind: SegmentKind,
    offset: usize,
}

impl Segment {
    pub(crate) fn new(kind: SegmentKind, offset: usize) -> Self {
        Self { kind, offset }
    }

    pub fn kind(&self) -> &SegmentKind {
        &self.kind
    }

    /// Character offset of the first character of this segment
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Literal text, or the label name for either label kind
    pub fn content(&self) -> &str {
        match &self.kind {
            SegmentKind::Literal(content) => content,
            SegmentKind::Label(name) | SegmentKind::GreedyLabel(name) => name,
        }
    }

    /// Label name, `None` for literals
    pub fn label_name(&self) -> Option<&str> {
        match &self.kind {
            SegmentKind::Literal(_) => None,
            SegmentKind::Label(name) | SegmentKind::GreedyLabel(name) => Some(name),
        }
    }

    /// True for both `{name}` and `{name+}`
    pub fn is_label(&self) -> bool {
        self.label_name().is_some()
    }
}

impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl Eq for Segment {}

impl Hash for Segment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
    }
}

/// Renders the segment back in pattern syntax
impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            SegmentKind::Literal(content) => f.write_str(content),
            SegmentKind::Label(name) => write!(f, "{{{}}}", name),
            SegmentKind::GreedyLabel(name) => write!(f, "{{{}+}}", name),
        }
    }
}
