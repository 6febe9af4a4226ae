//! Route conflict validation across operations
//!
//! Runs [`RoutePattern::conflicts_with`] over every pair of HTTP bindings
//! that share a method and turns each conflict into a non-fatal
//! [`ValidationEvent`].

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ValidatorConfig;
use crate::route::RoutePattern;

/// Severity of a validation event, lowest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Note,
    Warning,
    Danger,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Note => "NOTE",
            Severity::Warning => "WARNING",
            Severity::Danger => "DANGER",
            Severity::Error => "ERROR",
        };
        f.write_str(label)
    }
}

/// An operation bound to an HTTP method and route pattern
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpBinding {
    pub operation: String,
    pub method: String,
    pub uri: RoutePattern,
}

impl HttpBinding {
    pub fn new(operation: impl Into<String>, method: impl Into<String>, uri: RoutePattern) -> Self {
        Self {
            operation: operation.into(),
            method: method.into(),
            uri,
        }
    }
}

/// A non-fatal finding attached to one operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationEvent {
    pub id: String,
    pub severity: Severity,
    pub operation: String,
    pub message: String,
}

impl fmt::Display for ValidationEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} ({}) | {}",
            self.severity, self.operation, self.id, self.message
        )
    }
}

/// Detects operations whose route patterns collide under the same method
///
/// # Examples
///
/// ```
/// use uri_pattern::{HttpBinding, RoutePattern, RouteConflictValidator};
///
/// let bindings = vec![
///     HttpBinding::new("GetUser", "GET", RoutePattern::parse("/users/{id}").unwrap()),
///     HttpBinding::new("GetUserByName", "GET", RoutePattern::parse("/users/{name}").unwrap()),
///     HttpBinding::new("DeleteUser", "DELETE", RoutePattern::parse("/users/{id}").unwrap()),
/// ];
///
/// let events = RouteConflictValidator::default().validate(&bindings);
/// assert_eq!(events.len(), 1);
/// assert_eq!(events[0].operation, "GetUserByName");
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteConflictValidator {
    config: ValidatorConfig,
}

impl RouteConflictValidator {
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Compares every pair of bindings that share a method
    ///
    /// Each conflicting pair yields one event on the later binding, naming
    /// the earlier one. Events are ordered by the later binding, then the
    /// earlier one, in declaration order.
    pub fn validate(&self, bindings: &[HttpBinding]) -> Vec<ValidationEvent> {
        let methods: Vec<String> = bindings
            .iter()
            .map(|binding| self.method_key(&binding.method))
            .collect();

        let mut events = Vec::new();
        for (later_index, later) in bindings.iter().enumerate() {
            for (earlier_index, earlier) in bindings[..later_index].iter().enumerate() {
                if methods[earlier_index] != methods[later_index] {
                    continue;
                }

                if later.uri.conflicts_with(&earlier.uri) {
                    debug!(
                        method = %later.method,
                        operation = %later.operation,
                        conflicts_with = %earlier.operation,
                        uri = %later.uri,
                        "route conflict"
                    );
                    events.push(self.conflict_event(later, earlier));
                }
            }
        }

        debug!(
            bindings = bindings.len(),
            conflicts = events.len(),
            "route conflict validation finished"
        );
        events
    }

    fn method_key(&self, method: &str) -> String {
        if self.config.normalize_methods {
            method.to_ascii_uppercase()
        } else {
            method.to_string()
        }
    }

    fn conflict_event(&self, later: &HttpBinding, earlier: &HttpBinding) -> ValidationEvent {
        let mut message = format!(
            "Operation URI, `{}`, conflicts with the URI of `{}`, `{}`",
            later.uri, earlier.operation, earlier.uri
        );

        let aligned: Vec<String> = later
            .uri
            .conflicting_label_segments(&earlier.uri)
            .unwrap_or_default()
            .into_iter()
            .map(|(ours, theirs)| format!("{} ~ {}", ours, theirs))
            .collect();

        if !aligned.is_empty() {
            message.push_str(&format!(" (labels: {})", aligned.join(", ")));
        }

        ValidationEvent {
            id: self.config.event_id.clone(),
            severity: self.config.severity,
            operation: later.operation.clone(),
            message,
        }
    }
}
