use crate::types::Stats;

/// `max(1, attack - defense)`
pub fn damage(attacker: &Stats, defender: &Stats) -> u32 {
    attacker.attack.saturating_sub(defender.defense).max(1)
}
