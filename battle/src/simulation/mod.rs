//! Battle resolution
//!
//! [`BattleEngine`] runs a fixed-order exchange loop between two monsters.
//! Order and damage are pure functions of the stats; the only side effect is
//! id and timestamp generation, which goes through a [`Stamper`].

mod damage;
mod engine;
mod order;
mod stamp;

pub use damage::damage;
pub use engine::BattleEngine;
pub use order::{Striker, first_striker};
pub use stamp::{SequenceStamper, Stamper, SystemStamper};
