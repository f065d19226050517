//! Monster management and battle workflows

use menagerie_battle::{
    BattleEngine, BattleId, BattleResult, Monster, MonsterBattle, MonsterDraft, MonsterId,
    MonsterPatch, Stamper, SystemStamper,
};

use crate::config::RosterConfig;
use crate::error::{Result, RosterError};
use crate::store::{BattleStore, InMemoryBattleStore, InMemoryMonsterStore, MonsterStore};

/// Ties the stores to a [`BattleEngine`].
///
/// Every input is validated against [`RosterConfig::limits`] before it reaches
/// a store or the engine, and unknown ids short-circuit with
/// [`RosterError::MonsterNotFound`].
pub struct Arena<M, B, S = SystemStamper> {
    monsters: M,
    battles: B,
    engine: BattleEngine<S>,
    config: RosterConfig,
}

impl Arena<InMemoryMonsterStore, InMemoryBattleStore> {
    /// Arena over fresh in-memory stores
    pub fn in_memory(config: RosterConfig) -> Self {
        Self::new(InMemoryMonsterStore::new(), InMemoryBattleStore::new(), config)
    }
}

impl<M: MonsterStore, B: BattleStore> Arena<M, B> {
    pub fn new(monsters: M, battles: B, config: RosterConfig) -> Self {
        Self::with_engine(monsters, battles, BattleEngine::new(), config)
    }
}

impl<M: MonsterStore, B: BattleStore, S: Stamper> Arena<M, B, S> {
    pub fn with_engine(
        monsters: M,
        battles: B,
        engine: BattleEngine<S>,
        config: RosterConfig,
    ) -> Self {
        Self {
            monsters,
            battles,
            engine,
            config,
        }
    }

    pub fn config(&self) -> &RosterConfig {
        &self.config
    }

    pub fn monster_store(&self) -> &M {
        &self.monsters
    }

    pub fn battle_store(&self) -> &B {
        &self.battles
    }

    // === Monsters ===

    /// Validate and store a new monster
    pub async fn create_monster(&self, draft: MonsterDraft) -> Result<Monster> {
        let name = draft.name.clone();
        let new = draft.validate(&self.config.limits).inspect_err(|e| {
            tracing::warn!(name = %name, error = %e, "Rejected new monster");
        })?;

        let monster = self.monsters.create(new).await?;
        tracing::info!(monster = %monster.id, name = %monster.name, "Monster created");
        Ok(monster)
    }

    /// Apply a partial update to a stored monster.
    ///
    /// An empty patch returns the stored monster without writing, so
    /// `updated_at` is left alone.
    pub async fn update_monster(&self, id: &MonsterId, patch: MonsterPatch) -> Result<Monster> {
        let current = self.require_monster(id).await?;
        if patch.is_empty() {
            return Ok(current);
        }
        let merged = patch.apply(&current, &self.config.limits).inspect_err(|e| {
            tracing::warn!(monster = %id, error = %e, "Rejected monster update");
        })?;

        let monster = self.monsters.update(merged).await?;
        tracing::info!(monster = %monster.id, "Monster updated");
        Ok(monster)
    }

    pub async fn delete_monster(&self, id: &MonsterId) -> Result<()> {
        self.monsters.delete(id).await?;
        tracing::info!(monster = %id, "Monster deleted");
        Ok(())
    }

    pub async fn monster(&self, id: &MonsterId) -> Result<Option<Monster>> {
        self.monsters.find_by_id(id).await
    }

    pub async fn monsters(&self) -> Result<Vec<Monster>> {
        self.monsters.find_all().await
    }

    /// Remove every monster. Battle history is left alone.
    pub async fn reset(&self) -> Result<()> {
        self.monsters.clear().await?;
        tracing::info!("Roster cleared");
        Ok(())
    }

    // === Battles ===

    /// Resolve a battle without storing it
    pub async fn preview_battle(
        &self,
        monster1: &MonsterId,
        monster2: &MonsterId,
    ) -> Result<BattleResult> {
        let (m1, m2) = self.combatants(monster1, monster2).await?;
        Ok(self.engine.execute(&m1, &m2))
    }

    /// Resolve a battle and store it.
    ///
    /// The returned battle is the stored copy, so its id and timestamps are
    /// whatever the battle store assigned.
    pub async fn start_battle(
        &self,
        monster1: &MonsterId,
        monster2: &MonsterId,
    ) -> Result<BattleResult> {
        let (m1, m2) = self.combatants(monster1, monster2).await?;
        let BattleResult { battle, rounds } = self.engine.execute(&m1, &m2);

        let engine_id = battle.id.clone();
        let battle = self.battles.create(battle).await?;
        tracing::info!(
            battle = %battle.id,
            engine_id = %engine_id,
            winner = %battle.winner_id,
            turns = battle.turns,
            "Battle stored"
        );

        Ok(BattleResult { battle, rounds })
    }

    pub async fn battle(&self, id: &BattleId) -> Result<Option<MonsterBattle>> {
        self.battles.find_by_id(id).await
    }

    pub async fn battles(&self) -> Result<Vec<MonsterBattle>> {
        self.battles.find_all().await
    }

    /// Battle history of one monster
    pub async fn battles_for(&self, monster: &MonsterId) -> Result<Vec<MonsterBattle>> {
        self.require_monster(monster).await?;
        self.battles.find_by_monster_id(monster).await
    }

    pub async fn delete_battle(&self, id: &BattleId) -> Result<()> {
        self.battles.delete(id).await?;
        tracing::info!(battle = %id, "Battle deleted");
        Ok(())
    }

    // === Helpers ===

    async fn require_monster(&self, id: &MonsterId) -> Result<Monster> {
        self.monsters
            .find_by_id(id)
            .await?
            .ok_or_else(|| RosterError::MonsterNotFound(id.clone()))
    }

    /// Look up and check both combatants before the engine sees them
    async fn combatants(
        &self,
        monster1: &MonsterId,
        monster2: &MonsterId,
    ) -> Result<(Monster, Monster)> {
        let m1 = self.combatant(monster1).await?;
        let m2 = self.combatant(monster2).await?;
        Ok((m1, m2))
    }

    async fn combatant(&self, id: &MonsterId) -> Result<Monster> {
        let monster = self.require_monster(id).await.inspect_err(|_| {
            tracing::warn!(monster = %id, "Battle requested with unknown monster");
        })?;

        self.config.limits.validate(&monster.stats)?;
        if monster.stats.hp == 0 {
            return Err(RosterError::Exhausted(monster.id));
        }
        Ok(monster)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{DateTime, Duration, Utc};
    use menagerie_battle::{
        NewMonster, Rarity, STAT_MAX, SequenceStamper, StatKind, StatLimits, Stats,
    };

    use super::*;

    type TestArena = Arena<
        InMemoryMonsterStore<Arc<SequenceStamper>>,
        InMemoryBattleStore<Arc<SequenceStamper>>,
        SequenceStamper,
    >;

    fn arena_with(config: RosterConfig) -> TestArena {
        let stored_at = DateTime::<Utc>::UNIX_EPOCH + Duration::days(1);
        let stamper = Arc::new(SequenceStamper::new("rec", stored_at));
        Arena::with_engine(
            InMemoryMonsterStore::with_stamper(stamper.clone()),
            InMemoryBattleStore::with_stamper(stamper),
            BattleEngine::with_stamper(SequenceStamper::new(
                "engine",
                DateTime::<Utc>::UNIX_EPOCH,
            )),
            config,
        )
    }

    fn arena() -> TestArena {
        arena_with(RosterConfig::default())
    }

    #[tokio::test]
    async fn test_create_monster() {
        let arena = arena();
        let monster = arena
            .create_monster(MonsterDraft::new("Pebblet", 50, 20, 30, 100))
            .await
            .unwrap();

        assert_eq!(monster.id.as_str(), "rec-1");
        assert_eq!(monster.stats, Stats::new(50, 20, 30, 100));
        assert_eq!(monster.rarity(), Rarity::Uncommon);
        assert_eq!(arena.monsters().await.unwrap(), vec![monster]);
    }

    #[tokio::test]
    async fn test_create_monster_reports_all_violations() {
        let arena = arena();
        let err = arena
            .create_monster(MonsterDraft::new("Broken", -1, -1, 1001, 1001))
            .await
            .unwrap_err();

        let RosterError::Invalid(errors) = &err else {
            panic!("expected validation error, got {:?}", err);
        };
        assert_eq!(errors.len(), 4);
        for kind in StatKind::ALL {
            assert!(errors.contains(kind));
        }
        assert!(arena.monsters().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_config_limits_apply() {
        let arena = arena_with(RosterConfig::with_limits(StatLimits::uniform(100)));
        let err = arena
            .create_monster(MonsterDraft::new("Big", 101, 0, 0, 1))
            .await
            .unwrap_err();
        assert!(matches!(err, RosterError::Invalid(ref e) if e.contains(StatKind::Attack)));
    }

    #[tokio::test]
    async fn test_update_monster() {
        let arena = arena();
        let monster = arena
            .create_monster(MonsterDraft::new("Pebblet", 50, 20, 30, 100))
            .await
            .unwrap();

        let patch = MonsterPatch {
            hp: Some(i64::from(STAT_MAX)),
            ..MonsterPatch::default()
        };
        let updated = arena.update_monster(&monster.id, patch).await.unwrap();
        assert_eq!(updated.stats.hp, 1000);
        assert_eq!(updated.name, "Pebblet");

        let bad = MonsterPatch {
            defense: Some(-20),
            ..MonsterPatch::default()
        };
        assert!(matches!(
            arena.update_monster(&monster.id, bad).await,
            Err(RosterError::Invalid(_))
        ));
        assert_eq!(arena.monster(&monster.id).await.unwrap().unwrap().stats.defense, 20);
    }

    #[tokio::test]
    async fn test_empty_patch_skips_write() {
        let arena = arena();
        let store = arena.monster_store();
        let at = DateTime::<Utc>::UNIX_EPOCH;
        let draft = MonsterDraft::new("Pebblet", 50, 20, 30, 100);
        let new = draft.validate(&StatLimits::default()).unwrap();
        let monster = store
            .insert(Monster::from_new(MonsterId::from("old"), new, at))
            .await
            .unwrap();

        let same = arena.update_monster(&monster.id, MonsterPatch::default()).await.unwrap();
        assert_eq!(same, monster);
        assert_eq!(arena.monster(&monster.id).await.unwrap().unwrap().updated_at, at);

        let patch = MonsterPatch {
            speed: Some(31),
            ..MonsterPatch::default()
        };
        let updated = arena.update_monster(&monster.id, patch).await.unwrap();
        assert_eq!(updated.created_at, at);
        assert_eq!(updated.updated_at, at + Duration::days(1));
    }

    #[tokio::test]
    async fn test_update_unknown_monster() {
        let arena = arena();
        let missing = MonsterId::from("missing");
        assert_eq!(
            arena.update_monster(&missing, MonsterPatch::default()).await,
            Err(RosterError::MonsterNotFound(missing))
        );
    }

    #[tokio::test]
    async fn test_delete_and_reset() {
        let arena = arena();
        let a = arena.create_monster(MonsterDraft::new("A", 1, 1, 1, 1)).await.unwrap();
        arena.create_monster(MonsterDraft::new("B", 1, 1, 1, 1)).await.unwrap();

        arena.delete_monster(&a.id).await.unwrap();
        assert_eq!(arena.monster(&a.id).await.unwrap(), None);
        assert!(matches!(
            arena.delete_monster(&a.id).await,
            Err(RosterError::MonsterNotFound(_))
        ));

        arena.reset().await.unwrap();
        assert!(arena.monsters().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_start_battle_stores_restamped_copy() {
        let arena = arena();
        let m1 = arena.create_monster(MonsterDraft::new("M1", 50, 20, 30, 100)).await.unwrap();
        let m2 = arena.create_monster(MonsterDraft::new("M2", 50, 20, 30, 100)).await.unwrap();

        let result = arena.start_battle(&m1.id, &m2.id).await.unwrap();
        assert_eq!(result.battle.turns, 4);
        assert_eq!(result.rounds.len(), 7);
        assert_eq!(result.battle.winner_id, m1.id);
        assert_eq!(result.battle.monster1_id, m1.id);

        // rec-1 and rec-2 went to the monsters
        assert_eq!(result.battle.id.as_str(), "rec-3");
        assert_eq!(result.battle.created_at, DateTime::<Utc>::UNIX_EPOCH + Duration::days(1));

        let stored = arena.battle(&result.battle.id).await.unwrap();
        assert_eq!(stored, Some(result.battle.clone()));
        assert!(arena.battle(&BattleId::from("engine-1")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_preview_battle_stores_nothing() {
        let arena = arena();
        let m1 = arena.create_monster(MonsterDraft::new("M1", 10, 100, 5, 50)).await.unwrap();
        let m2 = arena.create_monster(MonsterDraft::new("M2", 10, 100, 1, 50)).await.unwrap();

        let result = arena.preview_battle(&m1.id, &m2.id).await.unwrap();
        assert_eq!(result.battle.turns, 50);
        assert_eq!(result.battle.id.as_str(), "engine-1");
        assert!(arena.battles().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_battle_with_unknown_monster() {
        let arena = arena();
        let m1 = arena.create_monster(MonsterDraft::new("M1", 1, 1, 1, 1)).await.unwrap();
        let ghost = MonsterId::from("ghost");

        assert_eq!(
            arena.start_battle(&m1.id, &ghost).await,
            Err(RosterError::MonsterNotFound(ghost.clone()))
        );
        assert_eq!(
            arena.start_battle(&ghost, &m1.id).await,
            Err(RosterError::MonsterNotFound(ghost))
        );
        assert!(arena.battles().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_battle_with_zero_hp_monster() {
        let arena = arena();
        let m1 = arena.create_monster(MonsterDraft::new("M1", 1, 1, 1, 1)).await.unwrap();
        let down = arena.create_monster(MonsterDraft::new("Down", 1, 1, 1, 0)).await.unwrap();

        assert_eq!(
            arena.start_battle(&m1.id, &down.id).await,
            Err(RosterError::Exhausted(down.id))
        );
    }

    #[tokio::test]
    async fn test_battle_revalidates_stored_stats() {
        let arena = arena_with(RosterConfig::with_limits(StatLimits::uniform(100)));
        let store = arena.monster_store();
        let at = DateTime::<Utc>::UNIX_EPOCH;
        let oversized = NewMonster {
            name: "Legacy".to_string(),
            stats: Stats::new(500, 0, 0, 10),
            image_url: None,
        };
        let legacy = store
            .insert(Monster::from_new(MonsterId::from("legacy"), oversized, at))
            .await
            .unwrap();
        let m1 = arena.create_monster(MonsterDraft::new("M1", 1, 1, 1, 1)).await.unwrap();

        let err = arena.start_battle(&m1.id, &legacy.id).await.unwrap_err();
        assert!(matches!(err, RosterError::Invalid(ref e) if e.contains(StatKind::Attack)));
    }

    #[tokio::test]
    async fn test_battles_for_monster() {
        let arena = arena();
        let a = arena.create_monster(MonsterDraft::new("A", 30, 0, 3, 30)).await.unwrap();
        let b = arena.create_monster(MonsterDraft::new("B", 20, 0, 2, 30)).await.unwrap();
        let c = arena.create_monster(MonsterDraft::new("C", 10, 0, 1, 30)).await.unwrap();

        arena.start_battle(&a.id, &b.id).await.unwrap();
        arena.start_battle(&b.id, &c.id).await.unwrap();
        arena.start_battle(&c.id, &a.id).await.unwrap();

        assert_eq!(arena.battles().await.unwrap().len(), 3);
        let for_a = arena.battles_for(&a.id).await.unwrap();
        assert_eq!(for_a.len(), 2);
        assert!(for_a.iter().all(|battle| battle.involves(&a.id)));

        assert!(matches!(
            arena.battles_for(&MonsterId::from("nobody")).await,
            Err(RosterError::MonsterNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_history_outlives_monster() {
        let arena = arena();
        let a = arena.create_monster(MonsterDraft::new("A", 30, 0, 3, 30)).await.unwrap();
        let b = arena.create_monster(MonsterDraft::new("B", 20, 0, 2, 30)).await.unwrap();
        let result = arena.start_battle(&a.id, &b.id).await.unwrap();

        arena.delete_monster(&a.id).await.unwrap();
        assert!(arena.battle(&result.battle.id).await.unwrap().is_some());

        arena.delete_battle(&result.battle.id).await.unwrap();
        assert!(arena.battles().await.unwrap().is_empty());
        assert!(matches!(
            arena.delete_battle(&result.battle.id).await,
            Err(RosterError::BattleNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_concurrent_battles() {
        use rand::rngs::StdRng;
        use rand::{Rng, SeedableRng};

        let arena = Arc::new(arena());
        let mut rng = StdRng::seed_from_u64(7);
        let mut ids = Vec::new();
        for i in 0..8 {
            let draft = MonsterDraft::new(
                format!("M{}", i),
                rng.gen_range(0..=1000),
                rng.gen_range(0..=1000),
                rng.gen_range(0..=1000),
                rng.gen_range(1..=1000),
            );
            ids.push(arena.create_monster(draft).await.unwrap().id);
        }

        let mut handles = Vec::new();
        for (i, a) in ids.iter().enumerate() {
            for b in &ids[i + 1..] {
                let arena = Arc::clone(&arena);
                let (a, b) = (a.clone(), b.clone());
                handles.push(tokio::spawn(async move {
                    let preview = arena.preview_battle(&a, &b).await.unwrap();
                    let stored = arena.start_battle(&a, &b).await.unwrap();
                    assert_eq!(preview.rounds, stored.rounds);
                    assert_eq!(preview.battle.winner_id, stored.battle.winner_id);
                    stored.battle.id
                }));
            }
        }

        let mut battle_ids = Vec::new();
        for handle in handles {
            battle_ids.push(handle.await.unwrap());
        }
        battle_ids.sort();
        battle_ids.dedup();
        assert_eq!(battle_ids.len(), 28);
        assert_eq!(arena.battles().await.unwrap().len(), 28);
    }

    #[tokio::test]
    async fn test_in_memory_arena() {
        let arena = Arena::in_memory(RosterConfig::default());
        let a = arena.create_monster(MonsterDraft::new("A", 5, 1, 5, 5)).await.unwrap();
        let b = arena.create_monster(MonsterDraft::new("B", 5, 1, 5, 5)).await.unwrap();

        let result = arena.start_battle(&a.id, &b.id).await.unwrap();
        assert_eq!(result.battle.winner_id, a.id);
        assert_ne!(a.id, b.id);
    }
}
