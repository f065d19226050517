//! Roster configuration

use std::path::Path;

use anyhow::{Context, Result};
use menagerie_battle::StatLimits;
use serde::{Deserialize, Serialize};

/// Settings for an [`Arena`](crate::Arena).
///
/// Every field has a default, so `{}` is a valid config document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    /// Bounds applied when monsters are created, updated, or sent to battle
    pub limits: StatLimits,
}

impl RosterConfig {
    pub fn with_limits(limits: StatLimits) -> Self {
        Self { limits }
    }

    /// Parse from a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse roster config")
    }

    /// Read and parse a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read roster config {}", path.display()))?;
        Self::from_json_str(&json)
            .with_context(|| format!("Invalid roster config {}", path.display()))
    }
}
