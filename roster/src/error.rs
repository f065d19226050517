use menagerie_battle::{BattleId, MonsterId, ValidationErrors};
use thiserror::Error;

/// Failures surfaced by stores and arena workflows
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("Monster not found: {0}")]
    MonsterNotFound(MonsterId),

    #[error("Battle not found: {0}")]
    BattleNotFound(BattleId),

    #[error(transparent)]
    Invalid(#[from] ValidationErrors),

    #[error("Monster {0} has no hp left to battle with")]
    Exhausted(MonsterId),

    #[error("Duplicate id: {0}")]
    DuplicateId(String),
}

pub type Result<T> = std::result::Result<T, RosterError>;
