//! Validation errors for monster input

use thiserror::Error;

use crate::types::StatKind;

/// A single stat outside its allowed range
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} must be between 0 and {max} (got {value})")]
pub struct StatViolation {
    pub kind: StatKind,
    pub value: i64,
    pub max: u32,
}

/// Every stat violation found while validating one monster.
///
/// Never empty when returned as an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid monster stats: {}", join(.violations))]
pub struct ValidationErrors {
    violations: Vec<StatViolation>,
}

impl ValidationErrors {
    /// `Ok(())` when nothing was collected, otherwise the collected violations
    pub fn check(violations: Vec<StatViolation>) -> Result<(), Self> {
        if violations.is_empty() {
            Ok(())
        } else {
            Err(Self { violations })
        }
    }

    pub fn violations(&self) -> &[StatViolation] {
        &self.violations
    }

    /// Check whether a given stat was rejected
    pub fn contains(&self, kind: StatKind) -> bool {
        self.violations.iter().any(|v| v.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }
}

fn join(violations: &[StatViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
