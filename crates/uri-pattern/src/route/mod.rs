//! Route module for URI pattern parsing and conflict detection
//!
//! Contains pure functional components for pattern parsing and comparison.
//! All modules follow functional programming principles:
//! - Pure functions (same input → same output)
//! - Immutable data structures
//! - Pattern matching for control flow

pub mod parser;
pub mod pattern;
pub mod query;
pub mod segment;
pub mod uri;

// Re-export commonly used types
pub use parser::{classify_segment, is_valid_label_name};
pub use pattern::Pattern;
pub use query::QueryLiterals;
pub use segment::{Segment, SegmentKind};
pub use uri::RoutePattern;
