//! Storage seams for monsters and battles
//!
//! Workflows only talk to these traits, so tests and alternative backends can
//! swap in their own implementation.

mod memory;

use async_trait::async_trait;
use menagerie_battle::{BattleId, Monster, MonsterBattle, MonsterId, NewMonster};

use crate::error::Result;

pub use memory::{InMemoryBattleStore, InMemoryMonsterStore};

/// Monster persistence
#[async_trait]
pub trait MonsterStore: Send + Sync {
    /// All monsters, in insertion order
    async fn find_all(&self) -> Result<Vec<Monster>>;

    async fn find_by_id(&self, id: &MonsterId) -> Result<Option<Monster>>;

    /// Store a new monster. The store assigns the id and both timestamps.
    async fn create(&self, monster: NewMonster) -> Result<Monster>;

    /// Replace the monster with the same id, refreshing `updated_at`.
    ///
    /// `created_at` is kept from the stored record.
    async fn update(&self, monster: Monster) -> Result<Monster>;

    async fn delete(&self, id: &MonsterId) -> Result<()>;

    /// Remove every monster
    async fn clear(&self) -> Result<()>;
}

/// Battle persistence
#[async_trait]
pub trait BattleStore: Send + Sync {
    /// Store a resolved battle and return the stored copy.
    ///
    /// Implementations may assign their own id and timestamps.
    async fn create(&self, battle: MonsterBattle) -> Result<MonsterBattle>;

    async fn find_by_id(&self, id: &BattleId) -> Result<Option<MonsterBattle>>;

    /// All battles, in insertion order
    async fn find_all(&self) -> Result<Vec<MonsterBattle>>;

    /// Battles where `monster` fought on either side
    async fn find_by_monster_id(&self, monster: &MonsterId) -> Result<Vec<MonsterBattle>>;

    async fn delete(&self, id: &BattleId) -> Result<()>;
}
