//! Error types for pattern parsing
//!
//! A single violation aborts parsing. Every variant carries the full pattern
//! text, and variants that point at one segment also carry its character
//! offset so downstream tooling can place a caret under it.

use thiserror::Error;

/// Result alias used throughout the grammar parser
pub type Result<T> = std::result::Result<T, PatternError>;

/// Discriminant of a [`PatternError`], useful for matching without fields
///
/// # Examples
///
/// ```
/// use uri_pattern::{PatternErrorKind, RoutePattern};
///
/// let err = RoutePattern::parse("/a//b").unwrap_err();
/// assert_eq!(err.kind(), PatternErrorKind::EmptySegment);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternErrorKind {
    TrailingQuerySeparator,
    MissingLeadingSeparator,
    FragmentNotAllowed,
    EmptySegment,
    InvalidLabelName,
    InvalidLiteral,
    DuplicateLabelName,
    MisplacedGreedyLabel,
    DuplicateGreedyLabel,
    LabelInQueryString,
    DuplicateQueryLiteral,
}

/// A grammar or semantic violation found while parsing a pattern
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("URI patterns must not end with '?'. Found `{pattern}`")]
    TrailingQuerySeparator { pattern: String },

    #[error("Patterns must start with '/'. Found `{pattern}`")]
    MissingLeadingSeparator { pattern: String },

    #[error("Patterns must not contain a fragment ('#'). Found `{pattern}`")]
    FragmentNotAllowed { pattern: String },

    #[error("Segments must not be empty. Found `{pattern}` at offset {offset}")]
    EmptySegment { pattern: String, offset: usize },

    #[error(
        "Invalid label name `{name}` in `{pattern}`: label names must be made of letters, digits, and '_' and must not start with a digit"
    )]
    InvalidLabelName {
        pattern: String,
        name: String,
        offset: usize,
    },

    #[error("Literal segment `{content}` in `{pattern}` must not contain '{{' or '}}'")]
    InvalidLiteral {
        pattern: String,
        content: String,
        offset: usize,
    },

    #[error("Label `{name}` is defined more than once in `{pattern}`")]
    DuplicateLabelName {
        pattern: String,
        name: String,
        offset: usize,
    },

    #[error("Greedy label `{name}` must be the last segment of `{pattern}`")]
    MisplacedGreedyLabel {
        pattern: String,
        name: String,
        offset: usize,
    },

    #[error("At most one greedy label may exist in a pattern; found a second one, `{name}`, in `{pattern}`")]
    DuplicateGreedyLabel {
        pattern: String,
        name: String,
        offset: usize,
    },

    #[error("Labels must not appear in the query string. Found `{pattern}`")]
    LabelInQueryString { pattern: String },

    #[error("Literal query parameters must not be repeated: `{key}` in `{pattern}`")]
    DuplicateQueryLiteral { pattern: String, key: String },
}

impl PatternError {
    /// Returns the fieldless discriminant of this error
    pub fn kind(&self) -> PatternErrorKind {
        match self {
            Self::TrailingQuerySeparator { .. } => PatternErrorKind::TrailingQuerySeparator,
            Self::MissingLeadingSeparator { .. } => PatternErrorKind::MissingLeadingSeparator,
            Self::FragmentNotAllowed { .. } => PatternErrorKind::FragmentNotAllowed,
            Self::EmptySegment { .. } => PatternErrorKind::EmptySegment,
            Self::InvalidLabelName { .. } => PatternErrorKind::InvalidLabelName,
            Self::InvalidLiteral { .. } => PatternErrorKind::InvalidLiteral,
            Self::DuplicateLabelName { .. } => PatternErrorKind::DuplicateLabelName,
            Self::MisplacedGreedyLabel { .. } => PatternErrorKind::MisplacedGreedyLabel,
            Self::DuplicateGreedyLabel { .. } => PatternErrorKind::DuplicateGreedyLabel,
            Self::LabelInQueryString { .. } => PatternErrorKind::LabelInQueryString,
            Self::DuplicateQueryLiteral { .. } => PatternErrorKind::DuplicateQueryLiteral,
        }
    }

    /// The full pattern text that failed to parse
    pub fn pattern(&self) -> &str {
        match self {
            Self::TrailingQuerySeparator { pattern }
            | Self::MissingLeadingSeparator { pattern }
            | Self::FragmentNotAllowed { pattern }
            | Self::EmptySegment { pattern, .. }
            | Self::InvalidLabelName { pattern, .. }
            | Self::InvalidLiteral { pattern, .. }
            | Self::DuplicateLabelName { pattern, .. }
            | Self::MisplacedGreedyLabel { pattern, .. }
            | Self::DuplicateGreedyLabel { pattern, .. }
            | Self::LabelInQueryString { pattern }
            | Self::DuplicateQueryLiteral { pattern, .. } => pattern,
        }
    }

    /// Character offset of the offending segment, when the error is tied to one
    pub fn offset(&self) -> Option<usize> {
        match self {
            Self::EmptySegment { offset, .. }
            | Self::InvalidLabelName { offset, .. }
            | Self::InvalidLiteral { offset, .. }
            | Self::DuplicateLabelName { offset, .. }
            | Self::MisplacedGreedyLabel { offset, .. }
            | Self::DuplicateGreedyLabel { offset, .. } => Some(*offset),
            Self::TrailingQuerySeparator { .. }
            | Self::MissingLeadingSeparator { .. }
            | Self::FragmentNotAllowed { .. }
            | Self::LabelInQueryString { .. }
            | Self::DuplicateQueryLiteral { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_and_offset() {
        let err = PatternError::DuplicateLabelName {
            pattern: "/{x}/{x}".to_string(),
            name: "x".to_string(),
            offset: 5,
        };
        assert_eq!(err.kind(), PatternErrorKind::DuplicateLabelName);
        assert_eq!(err.offset(), Some(5));
        assert_eq!(err.pattern(), "/{x}/{x}");
    }

    #[test]
    fn test_whole_string_errors_have_no_offset() {
        let err = PatternError::FragmentNotAllowed {
            pattern: "/a#b".to_string(),
        };
        assert_eq!(err.offset(), None);
    }

    #[test]
    fn test_messages_escape_braces() {
        let err = PatternError::InvalidLiteral {
            pattern: "/a{b".to_string(),
            content: "a{b".to_string(),
            offset: 1,
        };
        assert_eq!(
            err.to_string(),
            "Literal segment `a{b` in `/a{b` must not contain '{' or '}'"
        );
    }

    #[test]
    fn test_duplicate_label_message() {
        let err = PatternError::DuplicateLabelName {
            pattern: "/{x}/{x}".to_string(),
            name: "x".to_string(),
            offset: 5,
        };
        assert_eq!(
            err.to_string(),
            "Label `x` is defined more than once in `/{x}/{x}`"
        );
    }
}
