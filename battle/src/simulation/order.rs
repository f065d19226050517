use crate::types::Monster;

/// Which of the two combatants, as passed in, opens every exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Striker {
    /// `monster1` leads
    First,
    /// `monster2` leads
    Second,
}

/// Decide the fixed attack order for a battle.
///
/// Higher speed leads. On equal speed, `monster1` leads unless `monster2`
/// has strictly more attack.
pub fn first_striker(monster1: &Monster, monster2: &Monster) -> Striker {
    let (a, b) = (&monster1.stats, &monster2.stats);
    if a.speed > b.speed || (a.speed == b.speed && a.attack >= b.attack) {
        Striker::First
    } else {
        Striker::Second
    }
}
