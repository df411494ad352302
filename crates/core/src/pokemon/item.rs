//! Held items that alter Effort Value gain.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::evs::{EvSet, Stat};
use super::PokemonError;

/// Bonus granted by each power item, on top of the species yield.
const POWER_ITEM_BONUS: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeldItem {
    #[serde(rename = "Macho Brace")]
    MachoBrace,
    #[serde(rename = "Power Weight")]
    PowerWeight,
    #[serde(rename = "Power Bracer")]
    PowerBracer,
    #[serde(rename = "Power Belt")]
    PowerBelt,
    #[serde(rename = "Power Lens")]
    PowerLens,
    #[serde(rename = "Power Band")]
    PowerBand,
    #[serde(rename = "Power Anklet")]
    PowerAnklet,
}

impl HeldItem {
    pub const ALL: [HeldItem; 7] = [
        HeldItem::MachoBrace,
        HeldItem::PowerWeight,
        HeldItem::PowerBracer,
        HeldItem::PowerBelt,
        HeldItem::PowerLens,
        HeldItem::PowerBand,
        HeldItem::PowerAnklet,
    ];

    pub fn name(self) -> &'static str {
        match self {
            HeldItem::MachoBrace => "Macho Brace",
            HeldItem::PowerWeight => "Power Weight",
            HeldItem::PowerBracer => "Power Bracer",
            HeldItem::PowerBelt => "Power Belt",
            HeldItem::PowerLens => "Power Lens",
            HeldItem::PowerBand => "Power Band",
            HeldItem::PowerAnklet => "Power Anklet",
        }
    }

    /// Stat boosted by a power item; `None` for the Macho Brace.
    fn power_stat(self) -> Option<Stat> {
        match self {
            HeldItem::MachoBrace => None,
            HeldItem::PowerWeight => Some(Stat::Hp),
            HeldItem::PowerBracer => Some(Stat::Attack),
            HeldItem::PowerBelt => Some(Stat::Defense),
            HeldItem::PowerLens => Some(Stat::SpecialAttack),
            HeldItem::PowerBand => Some(Stat::SpecialDefense),
            HeldItem::PowerAnklet => Some(Stat::Speed),
        }
    }

    /// Apply this item's effect to a single battle's gain.
    pub fn apply(self, evs: EvSet) -> EvSet {
        match self.power_stat() {
            Some(stat) => evs + EvSet::single(stat, POWER_ITEM_BONUS),
            None => evs * 2,
        }
    }
}

impl fmt::Display for HeldItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HeldItem {
    type Err = PokemonError;

    /// Case-insensitive match on the item's display name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        HeldItem::ALL
            .into_iter()
            .find(|item| item.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| PokemonError::InvalidItem(s.to_string()))
    }
}
