//! # URI Pattern
//!
//! Route pattern grammar and static conflict detection for API models.
//!
//! Operations in an API model are bound to an HTTP method and a route
//! pattern such as `/users/{id}/files/{path+}?format=json`. This crate
//! parses those patterns into typed, immutable values and decides whether
//! two of them can ever match the same request.
//!
//! ## Features
//!
//! - **Literal segments** - `/users`, `/v1`
//! - **Labels** - `/users/{id}` matches exactly one path segment
//! - **Greedy labels** - `/files/{path+}` matches the rest of the path
//! - **Query literals** - `/things?type=book` adds fixed query constraints
//! - **Strict grammar** - one typed error per violation, first one wins
//! - **Conflict detection** - structural, label names never matter
//! - **Conflict validation** - pairwise sweep over operations per method
//!
//! ## Quick Start
//!
//! ```rust
//! use uri_pattern::RoutePattern;
//!
//! let by_id = RoutePattern::parse("/users/{id}").unwrap();
//! let by_name = RoutePattern::parse("/users/{name}").unwrap();
//! let current = RoutePattern::parse("/users/current").unwrap();
//!
//! assert!(by_id.conflicts_with(&by_name));
//! assert!(!by_id.conflicts_with(&current));
//! ```
//!
//! ## Pattern Syntax
//!
//! | Pattern | Segments | Notes |
//! |---------|----------|-------|
//! | `/` | none | Root |
//! | `/users` | `users` | Literal |
//! | `/users/{id}` | `users`, `{id}` | Label |
//! | `/files/{path+}` | `files`, `{path+}` | Greedy label, must be last |
//! | `/things?type=book` | `things` | Query literal `type=book` |
//! | `/things?flag` | `things` | Query literal `flag=""` |
//!
//! Label names are made of ASCII letters, digits, and `_`, and do not start
//! with a digit, so `{1bad}` is rejected with `InvalidLabelName` while
//! `{_id}` and `{v2}` are accepted.
//!
//! ## Conflict Rules
//!
//! Two route patterns conflict when:
//!
//! 1. they have the same number of segments,
//! 2. at each position both are labels, both are greedy labels, or both are
//!    the same literal, and
//! 3. their query literals are equal as maps.
//!
//! ## Errors
//!
//! ```rust
//! use uri_pattern::{PatternErrorKind, RoutePattern};
//!
//! let err = RoutePattern::parse("/{x+}/y").unwrap_err();
//! assert_eq!(err.kind(), PatternErrorKind::MisplacedGreedyLabel);
//! assert_eq!(err.offset(), Some(1));
//! ```

pub mod config;
pub mod error;
pub mod path;
pub mod route;
pub mod validate;

pub use config::ValidatorConfig;
pub use error::{PatternError, PatternErrorKind, Result};
pub use route::{Pattern, QueryLiterals, RoutePattern, Segment, SegmentKind};
pub use validate::{HttpBinding, RouteConflictValidator, Severity, ValidationEvent};
