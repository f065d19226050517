//! Monster battle resolution and rarity scoring.
//!
//! # Overview
//!
//! `menagerie-battle` is the pure core that roster and presentation code call
//! into:
//!
//! ```text
//! menagerie-roster (stores + workflows)
//!        │
//!        ▼
//! menagerie-battle ← THIS CRATE
//!        ├─> query       power score, rarity tier, stars (display only)
//!        └─> simulation  turn order, damage, exchange loop
//! ```
//!
//! # Main Types
//!
//! - [`Monster`], [`Stats`] - a stored monster and its four base stats
//! - [`MonsterDraft`], [`MonsterPatch`] - raw input, validated against [`StatLimits`]
//! - [`Rarity`] - six display tiers derived from [`power`]
//! - [`BattleEngine`] - resolves a battle into a [`BattleResult`]
//!
//! # Example Usage
//!
//! ```
//! use chrono::Utc;
//! use menagerie_battle::{BattleEngine, Monster, MonsterDraft, MonsterId, StatLimits};
//!
//! let limits = StatLimits::default();
//! let draft = |name: &str| MonsterDraft::new(name, 50, 20, 30, 100).validate(&limits);
//!
//! let m1 = Monster::from_new(MonsterId::from("m1"), draft("Pebblet")?, Utc::now());
//! let m2 = Monster::from_new(MonsterId::from("m2"), draft("Cinderpup")?, Utc::now());
//!
//! let result = BattleEngine::new().execute(&m1, &m2);
//! assert_eq!(result.battle.turns, 4);
//! assert_eq!(result.battle.winner_id, m1.id);
//! # Ok::<(), menagerie_battle::ValidationErrors>(())
//! ```

pub mod error;
pub mod query;
pub mod simulation;
pub mod types;

pub use error::{StatViolation, ValidationErrors};
pub use query::{RARITY_THRESHOLDS, power, rarity, rarity_for_power, stars};
pub use simulation::{
    BattleEngine, SequenceStamper, Stamper, Striker, SystemStamper, damage, first_striker,
};
pub use types::{
    BattleId, BattleResult, BattleRound, Monster, MonsterBattle, MonsterDraft, MonsterId,
    MonsterPatch, NewMonster, ParseRarityError, Rarity, STAT_MAX, StatKind, StatLimits, Stats,
};
