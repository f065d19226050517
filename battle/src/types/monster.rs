//! Monster records and validated input

use chrono::{DateTime, Utc};

use crate::error::ValidationErrors;
use crate::query;

use super::limits::StatLimits;
use super::rarity::Rarity;
use super::stats::{StatKind, Stats};

/// Opaque monster identifier, assigned at creation and never changed
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MonsterId(pub String);

impl MonsterId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MonsterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MonsterId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for MonsterId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A stored monster
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Monster {
    pub id: MonsterId,

    /// Display label, no effect on combat
    pub name: String,

    pub stats: Stats,

    pub image_url: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Monster {
    /// Build a monster from validated input
    pub fn from_new(id: MonsterId, new: NewMonster, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: new.name,
            stats: new.stats,
            image_url: new.image_url,
            created_at: now,
            updated_at: now,
        }
    }

    /// Weighted power score (see [`query::power`])
    pub fn power(&self) -> u64 {
        query::power(&self.stats)
    }

    /// Rarity tier derived from power
    pub fn rarity(&self) -> Rarity {
        query::rarity(&self.stats)
    }
}

/// Raw, unvalidated monster input as a user would submit it
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterDraft {
    pub name: String,
    pub attack: i64,
    pub defense: i64,
    pub speed: i64,
    pub hp: i64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub image_url: Option<String>,
}

impl MonsterDraft {
    pub fn new(name: impl Into<String>, attack: i64, defense: i64, speed: i64, hp: i64) -> Self {
        Self {
            name: name.into(),
            attack,
            defense,
            speed,
            hp,
            image_url: None,
        }
    }

    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    fn raw(&self, kind: StatKind) -> i64 {
        match kind {
            StatKind::Attack => self.attack,
            StatKind::Defense => self.defense,
            StatKind::Speed => self.speed,
            StatKind::Hp => self.hp,
        }
    }

    /// Check every stat against `limits`, reporting all violations at once
    pub fn validate(self, limits: &StatLimits) -> Result<NewMonster, ValidationErrors> {
        let mut stats = Stats::default();
        let mut violations = Vec::new();

        for kind in StatKind::ALL {
            match limits.check(kind, self.raw(kind)) {
                Ok(value) => stats.set(kind, value),
                Err(v) => violations.push(v),
            }
        }
        ValidationErrors::check(violations)?;

        Ok(NewMonster {
            name: self.name,
            stats,
            image_url: self.image_url,
        })
    }
}

/// Validated monster input, ready to be stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMonster {
    pub name: String,
    pub stats: Stats,
    pub image_url: Option<String>,
}

/// Partial update of a stored monster. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MonsterPatch {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub name: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub attack: Option<i64>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub defense: Option<i64>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub speed: Option<i64>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub hp: Option<i64>,
    /// `Some(None)` clears the image. Over JSON, `null` clears and a missing
    /// field leaves it untouched.
    #[cfg_attr(
        feature = "serde",
        serde(
            deserialize_with = "present_option",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub image_url: Option<Option<String>>,
}

/// Deserialize a present field, `null` included, as `Some`
#[cfg(feature = "serde")]
fn present_option<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;

    Option::<String>::deserialize(deserializer).map(Some)
}

impl MonsterPatch {
    fn raw(&self, kind: StatKind) -> Option<i64> {
        match kind {
            StatKind::Attack => self.attack,
            StatKind::Defense => self.defense,
            StatKind::Speed => self.speed,
            StatKind::Hp => self.hp,
        }
    }

    /// Check whether the patch changes anything at all
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && StatKind::ALL.iter().all(|&k| self.raw(k).is_none())
            && self.image_url.is_none()
    }

    /// Merge onto `monster`, validating every supplied stat.
    ///
    /// Identity and timestamps are carried over unchanged.
    pub fn apply(
        &self,
        monster: &Monster,
        limits: &StatLimits,
    ) -> Result<Monster, ValidationErrors> {
        let mut stats = monster.stats;
        let mut violations = Vec::new();

        for kind in StatKind::ALL {
            let Some(raw) = self.raw(kind) else { continue };
            match limits.check(kind, raw) {
                Ok(value) => stats.set(kind, value),
                Err(v) => violations.push(v),
            }
        }
        ValidationErrors::check(violations)?;

        let mut updated = monster.clone();
        updated.stats = stats;
        if let Some(ref name) = self.name {
            updated.name = name.clone();
        }
        if let Some(ref image_url) = self.image_url {
            updated.image_url = image_url.clone();
        }
        Ok(updated)
    }
}
