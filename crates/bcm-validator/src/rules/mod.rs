//! Per-sub-model validation rules
//!
//! Each sub-model implements [`Validate`] and pushes its findings into a
//! shared [`Findings`] collector under a dotted field path.

mod immersed_boundary;
mod inflow;
mod monin_obukhov;
mod sponge;

use std::collections::HashSet;

use crate::validator::{Violation, Warning};

/// Collector for violations and warnings found in one validation pass
#[derive(Debug, Default)]
pub struct Findings {
    violations: Vec<Violation>,
    warnings: Vec<Warning>,
}

impl Findings {
    /// Record a rule violation
    pub fn violation(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.violations.push(Violation::new(path, message));
    }

    /// Record a non-fatal warning
    pub fn warning(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(Warning::new(path, message));
    }

    /// Number of violations recorded so far
    pub fn violation_count(&self) -> usize {
        self.violations.len()
    }

    /// Split into violations and warnings
    pub fn into_parts(self) -> (Vec<Violation>, Vec<Warning>) {
        (self.violations, self.warnings)
    }
}

/// Rules owned by a sub-model
pub trait Validate {
    /// Check the value, reporting problems under `path`
    fn validate(&self, path: &str, findings: &mut Findings);
}

/// Value must be finite
pub(crate) fn check_finite(findings: &mut Findings, path: &str, value: f64) {
    if !value.is_finite() {
        findings.violation(path, format!("must be finite, got {}", value));
    }
}

/// Value must be finite and strictly positive
pub(crate) fn check_positive(findings: &mut Findings, path: &str, value: f64) {
    if !value.is_finite() || value <= 0.0 {
        findings.violation(path, format!("must be > 0, got {}", value));
    }
}

/// Value must lie in `(low, high]`
pub(crate) fn check_half_open(findings: &mut Findings, path: &str, value: f64, low: f64, high: f64) {
    if !(value > low && value <= high) {
        findings.violation(path, format!("must be in ({}, {}], got {}", low, high, value));
    }
}

/// Value must lie in `[low, high]`
pub(crate) fn check_closed(findings: &mut Findings, path: &str, value: f64, low: f64, high: f64) {
    if !(value >= low && value <= high) {
        findings.violation(path, format!("must be in [{}, {}], got {}", low, high, value));
    }
}

/// A list must not be empty
pub(crate) fn check_non_empty<T>(findings: &mut Findings, path: &str, items: &[T], what: &str) {
    if items.is_empty() {
        findings.violation(path, format!("at least one {} is required", what));
    }
}

/// Names must be non-empty and distinct
///
/// `path_of` maps a list position to the path reported for that entry.
pub(crate) fn check_names<'a, I, F>(findings: &mut Findings, names: I, path_of: F)
where
    I: IntoIterator<Item = &'a str>,
    F: Fn(usize) -> String,
{
    let mut seen = HashSet::new();
    for (i, name) in names.into_iter().enumerate() {
        if name.trim().is_empty() {
            findings.violation(path_of(i), "name must not be empty");
        } else if !seen.insert(name) {
            findings.violation(path_of(i), format!("duplicate name '{}'", name));
        }
    }
}
