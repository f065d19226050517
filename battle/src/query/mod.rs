//! Power scoring and rarity classification
//!
//! These helpers are for display only: nothing here feeds into battle
//! resolution.

mod power;

pub use power::{RARITY_THRESHOLDS, power, rarity, rarity_for_power, stars};
