//! Rarity tiers

use std::str::FromStr;

use thiserror::Error;

/// Display rarity, ordered from most to least common
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Mythical,
    Legendary,
}

impl Rarity {
    /// All tiers in ascending order
    pub const ALL: [Rarity; 6] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Mythical,
        Rarity::Legendary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Mythical => "mythical",
            Rarity::Legendary => "legendary",
        }
    }

    /// Star rating shown on cards (0-5)
    pub fn stars(&self) -> u8 {
        match self {
            Rarity::Legendary => 5,
            Rarity::Mythical => 4,
            Rarity::Epic => 3,
            Rarity::Rare => 2,
            Rarity::Uncommon => 1,
            Rarity::Common => 0,
        }
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown rarity: {0}")]
pub struct ParseRarityError(pub String);

impl FromStr for Rarity {
    type Err = ParseRarityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Rarity::ALL
            .iter()
            .copied()
            .find(|r| r.as_str() == lower)
            .ok_or_else(|| ParseRarityError(s.to_string()))
    }
}
