//! Integration tests for pattern parsing
//!
//! Covers:
//! - Segment structure and offsets
//! - Every rejection kind and the order the checks run in
//! - Query literal accessors
//! - Structural equality and hashing
//! - serde round trip through the pattern text

use pretty_assertions::assert_eq;
use rstest::rstest;
use std::collections::HashSet;
use uri_pattern::{Pattern, PatternErrorKind, RoutePattern, SegmentKind};

fn kinds(uri: &RoutePattern) -> Vec<SegmentKind> {
    uri.segments().iter().map(|s| s.kind().clone()).collect()
}

#[test]
fn test_parse_literal_label_greedy() {
    let uri = RoutePattern::parse("/a/{b}/{c+}").unwrap();
    assert_eq!(
        kinds(&uri),
        vec![
            SegmentKind::Literal("a".to_string()),
            SegmentKind::Label("b".to_string()),
            SegmentKind::GreedyLabel("c".to_string()),
        ]
    );
    assert!(uri.query_literals().is_empty());
}

#[test]
fn test_parse_root() {
    let uri = RoutePattern::parse("/").unwrap();
    assert!(uri.segments().is_empty());
}

#[test]
fn test_parse_root_with_query() {
    let uri = RoutePattern::parse("/?list").unwrap();
    assert!(uri.segments().is_empty());
    assert_eq!(uri.query_literal_value("list"), Some(""));
}

#[test]
fn test_segment_offsets() {
    let uri = RoutePattern::parse("/users/{id}/files/{path+}?x=1").unwrap();
    let offsets: Vec<usize> = uri.segments().iter().map(|s| s.offset()).collect();
    assert_eq!(offsets, vec![1, 7, 12, 18]);
}

#[test]
fn test_literals_keep_non_brace_punctuation() {
    let uri = RoutePattern::parse("/v1.0/foo-bar/~x/a:b/%20").unwrap();
    let contents: Vec<&str> = uri.segments().iter().map(|s| s.content()).collect();
    assert_eq!(contents, vec!["v1.0", "foo-bar", "~x", "a:b", "%20"]);
}

#[test]
fn test_label_lookup() {
    let uri = RoutePattern::parse("/users/{id}/{rest+}").unwrap();
    assert_eq!(uri.label("id").map(|s| s.offset()), Some(7));
    assert_eq!(uri.label("rest").map(|s| s.kind().clone()), Some(SegmentKind::GreedyLabel("rest".to_string())));
    assert!(uri.label("users").is_none());
    assert_eq!(uri.greedy_label().map(|s| s.content()), Some("rest"));
}

#[test]
fn test_no_greedy_label() {
    let uri = RoutePattern::parse("/users/{id}").unwrap();
    assert!(uri.greedy_label().is_none());
}

#[rstest]
#[case("/a?", PatternErrorKind::TrailingQuerySeparator)]
#[case("a/b", PatternErrorKind::MissingLeadingSeparator)]
#[case("", PatternErrorKind::MissingLeadingSeparator)]
#[case("/a#b", PatternErrorKind::FragmentNotAllowed)]
#[case("/a?x=#", PatternErrorKind::FragmentNotAllowed)]
#[case("/a//b", PatternErrorKind::EmptySegment)]
#[case("//", PatternErrorKind::EmptySegment)]
#[case("/a//", PatternErrorKind::EmptySegment)]
#[case("/{1bad}", PatternErrorKind::InvalidLabelName)]
#[case("/{a-b}", PatternErrorKind::InvalidLabelName)]
#[case("/{}", PatternErrorKind::InvalidLabelName)]
#[case("/{a+b}", PatternErrorKind::InvalidLabelName)]
#[case("/a{b}", PatternErrorKind::InvalidLiteral)]
#[case("/{x}/{x}", PatternErrorKind::DuplicateLabelName)]
#[case("/{x}/{x+}", PatternErrorKind::DuplicateLabelName)]
#[case("/{x+}/y", PatternErrorKind::MisplacedGreedyLabel)]
#[case("/{x+}/{y}", PatternErrorKind::MisplacedGreedyLabel)]
#[case("/{x+}/{y+}", PatternErrorKind::DuplicateGreedyLabel)]
#[case("/a?{x}=1", PatternErrorKind::LabelInQueryString)]
#[case("/a?x={y}", PatternErrorKind::LabelInQueryString)]
#[case("/a?k=1&k=2", PatternErrorKind::DuplicateQueryLiteral)]
#[case("/a?k&k", PatternErrorKind::DuplicateQueryLiteral)]
#[case("/a?x&&y&&z", PatternErrorKind::DuplicateQueryLiteral)]
fn test_rejections(#[case] raw: &str, #[case] expected: PatternErrorKind) {
    let err = RoutePattern::parse(raw).unwrap_err();
    assert_eq!(err.kind(), expected);
    assert_eq!(err.pattern(), raw);
}

#[rstest]
// trailing `?` is checked before the leading separator
#[case("a?", PatternErrorKind::TrailingQuerySeparator)]
// leading separator before fragment
#[case("a#b", PatternErrorKind::MissingLeadingSeparator)]
// fragment before any segment rule
#[case("/a//b#c", PatternErrorKind::FragmentNotAllowed)]
// segment rules before label rules
#[case("/{x}/{x}/{1}", PatternErrorKind::InvalidLabelName)]
// path rules before query rules
#[case("/{x+}/y?{z}", PatternErrorKind::MisplacedGreedyLabel)]
fn test_first_violation_wins(#[case] raw: &str, #[case] expected: PatternErrorKind) {
    assert_eq!(RoutePattern::parse(raw).unwrap_err().kind(), expected);
}

#[test]
fn test_error_offsets_point_at_segments() {
    let err = RoutePattern::parse("/a/b//c").unwrap_err();
    assert_eq!(err.offset(), Some(5));

    let err = RoutePattern::parse("/users/{x}/{x}").unwrap_err();
    assert_eq!(err.offset(), Some(11));

    let err = RoutePattern::parse("/a#").unwrap_err();
    assert_eq!(err.offset(), None);
}

#[test]
fn test_error_messages_name_the_pattern() {
    let err = RoutePattern::parse("/a?k=1&k=2").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Literal query parameters must not be repeated: `k` in `/a?k=1&k=2`"
    );
}

#[test]
fn test_query_literals_in_declaration_order() {
    let uri = RoutePattern::parse("/a?z=1&a=2&flag").unwrap();
    let pairs: Vec<(&str, &str)> = uri.query_literals().iter().collect();
    assert_eq!(pairs, vec![("z", "1"), ("a", "2"), ("flag", "")]);
}

#[test]
fn test_query_literal_value() {
    let uri = RoutePattern::parse("/a?x=1&empty=&bare").unwrap();
    assert_eq!(uri.query_literal_value("x"), Some("1"));
    assert_eq!(uri.query_literal_value("empty"), Some(""));
    assert_eq!(uri.query_literal_value("bare"), Some(""));
    assert_eq!(uri.query_literal_value("X"), None);
}

#[test]
fn test_query_empty_pieces() {
    let uri = RoutePattern::parse("/a?x&&y&").unwrap();
    let keys: Vec<&str> = uri.query_literals().keys().collect();
    assert_eq!(keys, vec!["x", "", "y"]);
    assert_eq!(uri.query_literal_value(""), Some(""));

    let trailing = RoutePattern::parse("/a?x&&").unwrap();
    assert_eq!(trailing.query_literals().len(), 1);
}

#[test]
fn test_query_value_splits_on_first_equals() {
    let uri = RoutePattern::parse("/a?expr=a=b").unwrap();
    assert_eq!(uri.query_literal_value("expr"), Some("a=b"));
}

#[test]
fn test_parse_is_deterministic() {
    let first = RoutePattern::parse("/a/{b}?c=d").unwrap();
    let second = RoutePattern::parse("/a/{b}?c=d").unwrap();
    assert_eq!(first, second);
    assert!(first.conflicts_with(&second));
}

#[test]
fn test_structural_equality() {
    let parse = |s: &str| RoutePattern::parse(s).unwrap();

    assert_eq!(parse("/a/{b}"), parse("/a/{b}/"));
    assert_eq!(parse("/a?x=1&y=2"), parse("/a?y=2&x=1"));
    assert_ne!(parse("/a/{b}"), parse("/a/{c}"));
    assert_ne!(parse("/a/{b}"), parse("/a/{b+}"));
    assert_ne!(parse("/a?x=1"), parse("/a?x=2"));
}

#[test]
fn test_equal_patterns_hash_alike() {
    let set: HashSet<RoutePattern> = ["/a?x=1&y=2", "/a/?y=2&x=1", "/a?x=1"]
        .iter()
        .map(|s| RoutePattern::parse(s).unwrap())
        .collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn test_from_str_and_try_from() {
    let parsed: RoutePattern = "/a/{b}".parse().unwrap();
    let converted = RoutePattern::try_from("/a/{b}").unwrap();
    assert_eq!(parsed, converted);
    assert!("/a//b".parse::<RoutePattern>().is_err());
}

#[test]
fn test_route_pattern_exposes_path_pattern() {
    let uri = RoutePattern::parse("/a/{b}?c").unwrap();
    assert_eq!(uri.as_str(), "/a/{b}?c");
    assert_eq!(uri.pattern().as_str(), "/a/{b}");
    assert_eq!(uri.pattern(), &Pattern::parse("/a/{b}").unwrap());
}

#[test]
fn test_serde_uses_pattern_text() {
    let uri = RoutePattern::parse("/users/{id}?v=2").unwrap();
    let json = serde_json::to_string(&uri).unwrap();
    assert_eq!(json, "\"/users/{id}?v=2\"");

    let back: RoutePattern = serde_json::from_str(&json).unwrap();
    assert_eq!(back, uri);
}

#[test]
fn test_serde_rejects_invalid_pattern() {
    let result: Result<RoutePattern, _> = serde_json::from_str("\"/a//b\"");
    let err = result.unwrap_err();
    assert!(err.to_string().contains("Segments must not be empty"));
}
