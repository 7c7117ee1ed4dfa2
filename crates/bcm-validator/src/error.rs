//! Validator error types

use thiserror::Error;

use crate::validator::Violation;

/// A syntactically valid record that breaks one or more rules
///
/// Carries every violation found in a single pass.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{} validation error(s):{}", .violations.len(), format_list(.violations))]
pub struct ValidationError {
    violations: Vec<Violation>,
}

fn format_list(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| format!("\n  - {}", v))
        .collect()
}

impl ValidationError {
    /// Build an error from the collected violations
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    /// All violations, in the order they were found
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Whether any violation is reported for the given field path
    pub fn has_violation_at(&self, path: &str) -> bool {
        self.violations.iter().any(|v| v.path == path)
    }
}
