//! Monster roster storage and battle workflows.
//!
//! `menagerie-roster` is the layer that surrounds `menagerie-battle`: it
//! validates input, looks monsters up, hands them to the engine, and keeps
//! the results.
//!
//! ```text
//! Arena (workflows, validation)
//!   ├─> MonsterStore / BattleStore (async storage seams)
//!   └─> menagerie_battle::BattleEngine (pure resolution)
//! ```
//!
//! # Example
//!
//! ```
//! use menagerie_roster::{Arena, MonsterDraft, RosterConfig};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), menagerie_roster::RosterError> {
//! let arena = Arena::in_memory(RosterConfig::default());
//!
//! let pebblet = arena.create_monster(MonsterDraft::new("Pebblet", 50, 20, 30, 100)).await?;
//! let cinder = arena.create_monster(MonsterDraft::new("Cinderpup", 50, 20, 30, 100)).await?;
//!
//! let result = arena.start_battle(&pebblet.id, &cinder.id).await?;
//! assert_eq!(result.battle.winner_id, pebblet.id);
//! assert_eq!(arena.battles_for(&cinder.id).await?.len(), 1);
//! # Ok(())
//! # }
//! ```

mod arena;
mod config;
mod error;
pub mod store;

pub use arena::Arena;
pub use config::RosterConfig;
pub use error::{Result, RosterError};
pub use store::{BattleStore, InMemoryBattleStore, InMemoryMonsterStore, MonsterStore};

pub use menagerie_battle::{
    BattleId, BattleResult, BattleRound, Monster, MonsterBattle, MonsterDraft, MonsterId,
    MonsterPatch, Rarity, StatLimits, Stats,
};
