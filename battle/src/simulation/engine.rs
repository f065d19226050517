//! The exchange loop

use crate::types::{BattleId, BattleResult, BattleRound, Monster, MonsterBattle};

use super::damage::damage;
use super::order::{Striker, first_striker};
use super::stamp::{Stamper, SystemStamper};

/// Resolves two-monster battles.
///
/// Each call to [`execute`](Self::execute) is independent; the engine holds no
/// battle state, only the [`Stamper`] used to label results.
#[derive(Debug, Clone, Default)]
pub struct BattleEngine<S = SystemStamper> {
    stamper: S,
}

impl BattleEngine {
    /// Engine with random ids and the system clock
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: Stamper> BattleEngine<S> {
    pub fn with_stamper(stamper: S) -> Self {
        Self { stamper }
    }

    pub fn stamper(&self) -> &S {
        &self.stamper
    }

    /// Fight `monster1` against `monster2` until one of them is at 0 hp.
    ///
    /// Attack order is decided once by [`first_striker`]. Every exchange the
    /// leader strikes, then the follower strikes back if still standing; a
    /// knockout ends the battle immediately and the cut-short exchange still
    /// counts as a turn. Both combatants are expected to enter with hp > 0.
    /// If one does not, no exchange happens and the other wins (`monster2`
    /// when both are down).
    pub fn execute(&self, monster1: &Monster, monster2: &Monster) -> BattleResult {
        let striker = first_striker(monster1, monster2);
        let (lead, follow) = match striker {
            Striker::First => (monster1, monster2),
            Striker::Second => (monster2, monster1),
        };

        let mut lead_hp = lead.stats.hp;
        let mut follow_hp = follow.stats.hp;
        let mut rounds = Vec::new();
        let mut turns: u32 = 0;

        while lead_hp > 0 && follow_hp > 0 {
            turns += 1;

            follow_hp = strike(lead, follow, follow_hp, &mut rounds);
            if follow_hp == 0 {
                break;
            }

            lead_hp = strike(follow, lead, lead_hp, &mut rounds);
        }

        let monster1_hp = match striker {
            Striker::First => lead_hp,
            Striker::Second => follow_hp,
        };
        let winner = if monster1_hp > 0 { monster1 } else { monster2 };

        let now = self.stamper.now();
        let battle = MonsterBattle {
            id: BattleId(self.stamper.next_id()),
            monster1_id: monster1.id.clone(),
            monster2_id: monster2.id.clone(),
            turns,
            winner_id: winner.id.clone(),
            created_at: now,
            updated_at: now,
        };

        tracing::debug!(
            battle = %battle.id,
            monster1 = %battle.monster1_id,
            monster2 = %battle.monster2_id,
            leader = %lead.id,
            turns,
            rounds = rounds.len(),
            winner = %battle.winner_id,
            "battle resolved"
        );

        BattleResult { battle, rounds }
    }
}

/// Apply one attack and log it, returning the defender's new hp
fn strike(
    attacker: &Monster,
    defender: &Monster,
    defender_hp: u32,
    rounds: &mut Vec<BattleRound>,
) -> u32 {
    let dealt = damage(&attacker.stats, &defender.stats);
    let remaining_hp = defender_hp.saturating_sub(dealt);

    tracing::trace!(
        attacker = %attacker.id,
        defender = %defender.id,
        damage = dealt,
        remaining_hp,
        "round"
    );

    rounds.push(BattleRound {
        attacker: attacker.id.clone(),
        defender: defender.id.clone(),
        damage: dealt,
        remaining_hp,
    });
    remaining_hp
}
