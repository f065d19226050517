//! In-memory stores

use async_trait::async_trait;
use menagerie_battle::{
    BattleId, Monster, MonsterBattle, MonsterId, NewMonster, Stamper, SystemStamper,
};
use tokio::sync::RwLock;

use super::{BattleStore, MonsterStore};
use crate::error::{Result, RosterError};

/// Monsters held in a `Vec` behind an async lock
#[derive(Debug, Default)]
pub struct InMemoryMonsterStore<S = SystemStamper> {
    records: RwLock<Vec<Monster>>,
    stamper: S,
}

impl InMemoryMonsterStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: Stamper> InMemoryMonsterStore<S> {
    pub fn with_stamper(stamper: S) -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            stamper,
        }
    }

    /// Insert a fully formed monster, keeping its id and timestamps
    pub async fn insert(&self, monster: Monster) -> Result<Monster> {
        let mut records = self.records.write().await;
        if records.iter().any(|m| m.id == monster.id) {
            return Err(RosterError::DuplicateId(monster.id.0));
        }
        records.push(monster.clone());
        Ok(monster)
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl<S: Stamper> MonsterStore for InMemoryMonsterStore<S> {
    async fn find_all(&self) -> Result<Vec<Monster>> {
        Ok(self.records.read().await.clone())
    }

    async fn find_by_id(&self, id: &MonsterId) -> Result<Option<Monster>> {
        let records = self.records.read().await;
        Ok(records.iter().find(|m| m.id == *id).cloned())
    }

    async fn create(&self, monster: NewMonster) -> Result<Monster> {
        let mut records = self.records.write().await;
        let id = MonsterId(self.stamper.next_id());
        if records.iter().any(|m| m.id == id) {
            return Err(RosterError::DuplicateId(id.0));
        }

        let monster = Monster::from_new(id, monster, self.stamper.now());
        records.push(monster.clone());
        Ok(monster)
    }

    async fn update(&self, monster: Monster) -> Result<Monster> {
        let mut records = self.records.write().await;
        let stored = records
            .iter_mut()
            .find(|m| m.id == monster.id)
            .ok_or_else(|| RosterError::MonsterNotFound(monster.id.clone()))?;

        let created_at = stored.created_at;
        *stored = monster;
        stored.created_at = created_at;
        stored.updated_at = self.stamper.now();
        Ok(stored.clone())
    }

    async fn delete(&self, id: &MonsterId) -> Result<()> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|m| m.id != *id);
        if records.len() == before {
            return Err(RosterError::MonsterNotFound(id.clone()));
        }
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        self.records.write().await.clear();
        Ok(())
    }
}

/// Battles held in a `Vec` behind an async lock.
///
/// By default `create` discards the incoming id and timestamps and stamps its
/// own; [`keep_ids`](Self::keep_ids) keeps the caller's instead.
#[derive(Debug, Default)]
pub struct InMemoryBattleStore<S = SystemStamper> {
    records: RwLock<Vec<MonsterBattle>>,
    stamper: S,
    keep_ids: bool,
}

impl InMemoryBattleStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: Stamper> InMemoryBattleStore<S> {
    pub fn with_stamper(stamper: S) -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            stamper,
            keep_ids: false,
        }
    }

    /// Store battles under the id and timestamps they arrive with
    pub fn keep_ids(mut self) -> Self {
        self.keep_ids = true;
        self
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl<S: Stamper> BattleStore for InMemoryBattleStore<S> {
    async fn create(&self, mut battle: MonsterBattle) -> Result<MonsterBattle> {
        let mut records = self.records.write().await;

        if !self.keep_ids {
            let now = self.stamper.now();
            battle.id = BattleId(self.stamper.next_id());
            battle.created_at = now;
            battle.updated_at = now;
        }
        if records.iter().any(|b| b.id == battle.id) {
            return Err(RosterError::DuplicateId(battle.id.0));
        }

        records.push(battle.clone());
        Ok(battle)
    }

    async fn find_by_id(&self, id: &BattleId) -> Result<Option<MonsterBattle>> {
        let records = self.records.read().await;
        Ok(records.iter().find(|b| b.id == *id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<MonsterBattle>> {
        Ok(self.records.read().await.clone())
    }

    async fn find_by_monster_id(&self, monster: &MonsterId) -> Result<Vec<MonsterBattle>> {
        let records = self.records.read().await;
        Ok(records.iter().filter(|b| b.involves(monster)).cloned().collect())
    }

    async fn delete(&self, id: &BattleId) -> Result<()> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|b| b.id != *id);
        if records.len() == before {
            return Err(RosterError::BattleNotFound(id.clone()));
        }
        Ok(())
    }
}
