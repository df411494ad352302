//! Effort Value sets and the six stat axes they are spread across.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign};

use serde::{Deserialize, Serialize};

/// Highest value a single stat may hold.
pub const MAX_STAT: u32 = 255;

/// Highest total a creature may hold across all stats.
pub const MAX_EV: u32 = 510;

/// One of the six stat axes, in game order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stat {
    Hp,
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
}

impl Stat {
    /// All axes in the fixed order used by storage and display.
    pub const ALL: [Stat; 6] = [
        Stat::Hp,
        Stat::Attack,
        Stat::Defense,
        Stat::SpecialAttack,
        Stat::SpecialDefense,
        Stat::Speed,
    ];

    /// Human readable label.
    pub fn label(self) -> &'static str {
        match self {
            Stat::Hp => "HP",
            Stat::Attack => "Attack",
            Stat::Defense => "Defense",
            Stat::SpecialAttack => "Special Attack",
            Stat::SpecialDefense => "Special Defense",
            Stat::Speed => "Speed",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn is_zero(value: &u32) -> bool {
    *value == 0
}

/// Effort Values spread over the six stat axes.
///
/// Used both for the per-defeat yield of a species and for the progress a
/// tracked creature has accumulated. Serialized as a map keyed by snake_case
/// stat name with zero-valued axes left out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvSet {
    #[serde(default, skip_serializing_if = "is_zero")]
    pub hp: u32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub attack: u32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub defense: u32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub special_attack: u32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub special_defense: u32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub speed: u32,
}

impl EvSet {
    /// Build a set from values in `Stat::ALL` order.
    pub fn from_array(values: [u32; 6]) -> Self {
        let [hp, attack, defense, special_attack, special_defense, speed] = values;
        Self {
            hp,
            attack,
            defense,
            special_attack,
            special_defense,
            speed,
        }
    }

    /// A set with `value` on a single axis.
    pub fn single(stat: Stat, value: u32) -> Self {
        let mut evs = Self::default();
        evs.set(stat, value);
        evs
    }

    pub fn to_array(&self) -> [u32; 6] {
        [
            self.hp,
            self.attack,
            self.defense,
            self.special_attack,
            self.special_defense,
            self.speed,
        ]
    }

    pub fn get(&self, stat: Stat) -> u32 {
        self.to_array()[stat.index()]
    }

    pub fn set(&mut self, stat: Stat, value: u32) {
        let mut values = self.to_array();
        values[stat.index()] = value;
        *self = Self::from_array(values);
    }

    pub fn total(&self) -> u32 {
        self.to_array().iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Non-zero axes in game order.
    pub fn iter_nonzero(&self) -> impl Iterator<Item = (Stat, u32)> + '_ {
        Stat::ALL
            .into_iter()
            .map(|stat| (stat, self.get(stat)))
            .filter(|(_, value)| *value > 0)
    }

    /// The part of `gain` that still fits on top of `self`.
    ///
    /// Each axis may rise to at most [`MAX_STAT`]. Axes are filled in game
    /// order until the total reaches [`MAX_EV`]. Existing values are never
    /// reduced.
    pub fn room_for(&self, gain: EvSet) -> Self {
        let mut remaining = MAX_EV.saturating_sub(self.total());
        let mut values = gain.to_array();
        for (value, current) in values.iter_mut().zip(self.to_array()) {
            *value = (*value).min(MAX_STAT.saturating_sub(current)).min(remaining);
            remaining -= *value;
        }
        Self::from_array(values)
    }

    /// One `Label: N` line per non-zero axis, or `No EVs`.
    pub fn verbose(&self) -> String {
        let lines: Vec<String> = self
            .iter_nonzero()
            .map(|(stat, value)| format!("{}: {}", stat.label(), value))
            .collect();
        if lines.is_empty() {
            "No EVs".to_string()
        } else {
            lines.join("\n")
        }
    }
}

impl fmt::Display for EvSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter_nonzero()
            .map(|(stat, value)| format!("+{} {}", value, stat.label()))
            .collect();
        f.write_str(&parts.join(", "))
    }
}

impl AddAssign for EvSet {
    fn add_assign(&mut self, other: Self) {
        let mut values = self.to_array();
        for (value, extra) in values.iter_mut().zip(other.to_array()) {
            *value = value.saturating_add(extra);
        }
        *self = Self::from_array(values);
    }
}

impl Add for EvSet {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        self += other;
        self
    }
}

impl MulAssign<u32> for EvSet {
    fn mul_assign(&mut self, factor: u32) {
        let values = self.to_array().map(|value| value.saturating_mul(factor));
        *self = Self::from_array(values);
    }
}

impl Mul<u32> for EvSet {
    type Output = Self;

    fn mul(mut self, factor: u32) -> Self {
        self *= factor;
        self
    }
}
