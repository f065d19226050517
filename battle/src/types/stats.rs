//! Base stats and stat identifiers

/// One of the four base stats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum StatKind {
    Attack,
    Defense,
    Speed,
    Hp,
}

impl StatKind {
    /// All stats, in the order they are validated and reported
    pub const ALL: [StatKind; 4] = [
        StatKind::Attack,
        StatKind::Defense,
        StatKind::Speed,
        StatKind::Hp,
    ];

    /// Lower-case field name ("attack", "defense", "speed", "hp")
    pub fn as_str(&self) -> &'static str {
        match self {
            StatKind::Attack => "attack",
            StatKind::Defense => "defense",
            StatKind::Speed => "speed",
            StatKind::Hp => "hp",
        }
    }
}

impl std::fmt::Display for StatKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A monster's four base stats.
///
/// `hp` is both the starting and the maximum health of a combatant.
/// Construction is unchecked: range enforcement lives in
/// [`StatLimits`](super::StatLimits) and [`MonsterDraft`](super::MonsterDraft).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stats {
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
    pub hp: u32,
}

impl Stats {
    /// Create a stat block without range checks
    pub fn new(attack: u32, defense: u32, speed: u32, hp: u32) -> Self {
        Self {
            attack,
            defense,
            speed,
            hp,
        }
    }

    /// Get a single stat
    pub fn get(&self, kind: StatKind) -> u32 {
        match kind {
            StatKind::Attack => self.attack,
            StatKind::Defense => self.defense,
            StatKind::Speed => self.speed,
            StatKind::Hp => self.hp,
        }
    }

    /// Set a single stat
    pub fn set(&mut self, kind: StatKind, value: u32) {
        match kind {
            StatKind::Attack => self.attack = value,
            StatKind::Defense => self.defense = value,
            StatKind::Speed => self.speed = value,
            StatKind::Hp => self.hp = value,
        }
    }
}
