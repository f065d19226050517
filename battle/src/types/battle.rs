//! Battle outcome records

use chrono::{DateTime, Utc};

use super::monster::MonsterId;

/// Battle identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct BattleId(pub String);

impl BattleId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BattleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BattleId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for BattleId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// One attack within a battle
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BattleRound {
    pub attacker: MonsterId,
    pub defender: MonsterId,

    /// Damage applied, always at least 1
    pub damage: u32,

    /// Defender's hp after this attack, floored at 0
    pub remaining_hp: u32,
}

/// Outcome of one battle
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct MonsterBattle {
    pub id: BattleId,

    /// First combatant as passed by the caller, not necessarily the first to strike
    pub monster1_id: MonsterId,
    pub monster2_id: MonsterId,

    /// Exchange cycles, including a final cycle cut short by a knockout
    pub turns: u32,

    pub winner_id: MonsterId,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MonsterBattle {
    /// Check if a monster took part in this battle
    pub fn involves(&self, monster: &MonsterId) -> bool {
        self.monster1_id == *monster || self.monster2_id == *monster
    }

    /// The combatant that did not win
    pub fn loser_id(&self) -> &MonsterId {
        if self.winner_id == self.monster1_id {
            &self.monster2_id
        } else {
            &self.monster1_id
        }
    }
}

/// A battle together with its round log, in chronological order
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleResult {
    pub battle: MonsterBattle,
    pub rounds: Vec<BattleRound>,
}

impl BattleResult {
    /// The monster that struck first, if any attack happened
    pub fn first_attacker(&self) -> Option<&MonsterId> {
        self.rounds.first().map(|r| &r.attacker)
    }

    /// Rounds in which `monster` was the defender
    pub fn rounds_against<'a>(
        &'a self,
        monster: &'a MonsterId,
    ) -> impl Iterator<Item = &'a BattleRound> + 'a {
        self.rounds.iter().filter(move |r| r.defender == *monster)
    }

    /// Total damage dealt to `monster` over the battle
    pub fn damage_taken(&self, monster: &MonsterId) -> u64 {
        self.rounds_against(monster).map(|r| u64::from(r.damage)).sum()
    }
}
