//! Domain types shared by scoring and simulation

mod battle;
mod limits;
mod monster;
mod rarity;
mod stats;

pub use battle::{BattleId, BattleResult, BattleRound, MonsterBattle};
pub use limits::{STAT_MAX, StatLimits};
pub use monster::{Monster, MonsterDraft, MonsterId, MonsterPatch, NewMonster};
pub use rarity::{ParseRarityError, Rarity};
pub use stats::{StatKind, Stats};
