//! Inclusive stat bounds

use crate::error::{StatViolation, ValidationErrors};

use super::stats::{StatKind, Stats};

/// Default upper bound for every stat
pub const STAT_MAX: u32 = 1000;

/// Upper bounds for each stat. The lower bound is always 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatLimits {
    pub max_attack: u32,
    pub max_defense: u32,
    pub max_speed: u32,
    pub max_hp: u32,
}

impl Default for StatLimits {
    fn default() -> Self {
        Self::uniform(STAT_MAX)
    }
}

impl StatLimits {
    /// Same bound for all four stats
    pub fn uniform(max: u32) -> Self {
        Self {
            max_attack: max,
            max_defense: max,
            max_speed: max,
            max_hp: max,
        }
    }

    /// Get the bound for a stat
    pub fn max(&self, kind: StatKind) -> u32 {
        match kind {
            StatKind::Attack => self.max_attack,
            StatKind::Defense => self.max_defense,
            StatKind::Speed => self.max_speed,
            StatKind::Hp => self.max_hp,
        }
    }

    /// Check a raw input value, returning it narrowed on success
    pub fn check(&self, kind: StatKind, value: i64) -> Result<u32, StatViolation> {
        let max = self.max(kind);
        match u32::try_from(value) {
            Ok(narrowed) if narrowed <= max => Ok(narrowed),
            _ => Err(StatViolation { kind, value, max }),
        }
    }

    /// Check an already-built stat block against these bounds
    pub fn validate(&self, stats: &Stats) -> Result<(), ValidationErrors> {
        let violations = StatKind::ALL
            .iter()
            .filter_map(|&kind| self.check(kind, i64::from(stats.get(kind))).err())
            .collect();
        ValidationErrors::check(violations)
    }
}
