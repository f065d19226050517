//! Weighted power score and rarity tier table

use crate::types::{Rarity, Stats};

/// Lower bound (inclusive) of each tier, highest first
pub const RARITY_THRESHOLDS: [(u64, Rarity); 6] = [
    (950, Rarity::Legendary),
    (750, Rarity::Mythical),
    (550, Rarity::Epic),
    (250, Rarity::Rare),
    (50, Rarity::Uncommon),
    (0, Rarity::Common),
];

/// `floor(0.5*attack + 0.5*defense + 0.9*speed + 1.0*hp)`
///
/// Computed in tenths so the floor is exact. No clamping is applied.
pub fn power(stats: &Stats) -> u64 {
    let tenths = 5 * u64::from(stats.attack)
        + 5 * u64::from(stats.defense)
        + 9 * u64::from(stats.speed)
        + 10 * u64::from(stats.hp);
    tenths / 10
}

/// Tier for a power score
pub fn rarity_for_power(power: u64) -> Rarity {
    RARITY_THRESHOLDS
        .iter()
        .find(|(floor, _)| power >= *floor)
        .map(|&(_, rarity)| rarity)
        .unwrap_or(Rarity::Common)
}

/// Tier for a stat block
pub fn rarity(stats: &Stats) -> Rarity {
    rarity_for_power(power(stats))
}

/// Star rating for a tier
pub fn stars(rarity: Rarity) -> u8 {
    rarity.stars()
}
