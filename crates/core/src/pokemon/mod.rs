//! Tracked creatures and the Effort Value rules applied to them.

mod evs;
mod item;

pub use evs::{EvSet, Stat, MAX_EV, MAX_STAT};
pub use item::HeldItem;

use std::fmt;

use thiserror::Error;

use crate::pokedex::Species;

#[derive(Debug, Error)]
pub enum PokemonError {
    #[error("Invalid item '{0}'")]
    InvalidItem(String),
}

/// A creature being trained by the player.
#[derive(Debug, Clone, PartialEq)]
pub struct Pokemon {
    pub id: u32,
    pub species: Species,
    nickname: Option<String>,
    pub item: Option<HeldItem>,
    pub pokerus: bool,
    pub evs: EvSet,
}

impl Pokemon {
    pub fn new(id: u32, species: Species) -> Self {
        Self {
            id,
            species,
            nickname: None,
            item: None,
            pokerus: false,
            evs: EvSet::default(),
        }
    }

    pub fn with_nickname(mut self, nickname: Option<&str>) -> Self {
        self.set_nickname(nickname);
        self
    }

    pub fn with_item(mut self, item: Option<HeldItem>) -> Self {
        self.item = item;
        self
    }

    pub fn with_pokerus(mut self, pokerus: bool) -> Self {
        self.pokerus = pokerus;
        self
    }

    pub fn with_evs(mut self, evs: EvSet) -> Self {
        self.evs = evs;
        self
    }

    pub fn nickname(&self) -> Option<&str> {
        self.nickname.as_deref()
    }

    /// Blank nicknames are ignored so the species name keeps showing.
    pub fn set_nickname(&mut self, nickname: Option<&str>) {
        if let Some(name) = nickname.map(str::trim).filter(|name| !name.is_empty()) {
            self.nickname = Some(name.to_string());
        }
    }

    /// Nickname if one was given, otherwise the species name.
    pub fn name(&self) -> &str {
        self.nickname.as_deref().unwrap_or(&self.species.name)
    }

    /// Name without the tracker id, with the species when nicknamed.
    pub fn label(&self) -> String {
        match &self.nickname {
            Some(nickname) => format!("{} ({})", nickname, self.species.name),
            None => self.species.name.clone(),
        }
    }

    /// EVs a single defeat of `species` would award, before capping.
    pub fn gain_against(&self, species: &Species) -> EvSet {
        let mut evs = species.evs;
        if let Some(item) = self.item {
            evs = item.apply(evs);
        }
        if self.pokerus {
            evs *= 2;
        }
        evs
    }

    /// Record `count` defeats of `species`.
    ///
    /// Returns the EVs actually added once the game's caps are applied.
    pub fn battle(&mut self, species: &Species, count: u32) -> EvSet {
        let applied = self.evs.room_for(self.gain_against(species) * count);
        self.evs += applied;
        applied
    }

    /// Multi-line summary used by the `status` command.
    pub fn status(&self) -> String {
        let mut lines = vec![self.to_string()];
        if self.pokerus {
            lines.push("Pokerus".to_string());
        }
        if let Some(item) = self.item {
            lines.push(item.to_string());
        }
        lines.push(self.evs.verbose());
        lines.join("\n")
    }

    /// Roster line, starred when this is the active creature.
    pub fn listing(&self, active: Option<u32>) -> String {
        let marker = if active == Some(self.id) { "* " } else { "  " };
        format!("{}{}", marker, self)
    }
}

impl fmt::Display for Pokemon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.id, self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pikachu() -> Species {
        Species::new(25, "Pikachu", EvSet::single(Stat::Speed, 2))
    }

    #[test]
    fn test_display_without_nickname() {
        let pokemon = Pokemon::new(1, pikachu());
        assert_eq!(pokemon.to_string(), "1 Pikachu");
        assert_eq!(pokemon.name(), "Pikachu");
    }

    #[test]
    fn test_display_with_nickname() {
        let pokemon = Pokemon::new(3, pikachu()).with_nickname(Some("  Sparky "));
        assert_eq!(pokemon.to_string(), "3 Sparky (Pikachu)");
        assert_eq!(pokemon.label(), "Sparky (Pikachu)");
        assert_eq!(pokemon.name(), "Sparky");
    }

    #[test]
    fn test_blank_nickname_ignored() {
        let pokemon = Pokemon::new(1, pikachu()).with_nickname(Some("   "));
        assert_eq!(pokemon.nickname(), None);
    }

    #[test]
    fn test_battle_plain() {
        let mut pokemon = Pokemon::new(1, pikachu());
        let applied = pokemon.battle(&pikachu(), 3);
        assert_eq!(applied.speed, 6);
        assert_eq!(pokemon.evs.speed, 6);
    }

    #[test]
    fn test_battle_item_then_pokerus() {
        let mut pokemon = Pokemon::new(1, pikachu())
            .with_item(Some(HeldItem::PowerAnklet))
            .with_pokerus(true);
        pokemon.battle(&pikachu(), 1);
        // (2 + 4) * 2
        assert_eq!(pokemon.evs.speed, 12);
    }

    #[test]
    fn test_battle_respects_caps() {
        let mut pokemon =
            Pokemon::new(1, pikachu()).with_evs(EvSet::from_array([0, 0, 0, 0, 0, 250]));
        let applied = pokemon.battle(&pikachu(), 10);
        assert_eq!(pokemon.evs.speed, MAX_STAT);
        assert_eq!(applied.speed, 5);
    }

    #[test]
    fn test_battle_at_total_cap_keeps_earned_evs() {
        let hp_species = Species::new(16, "Pidgey", EvSet::single(Stat::Hp, 1));
        let earned = EvSet::from_array([0, 0, 255, 0, 0, 255]);
        let mut pokemon = Pokemon::new(1, pikachu()).with_evs(earned);

        let applied = pokemon.battle(&hp_species, 1);
        assert!(applied.is_empty());
        assert_eq!(pokemon.evs, earned);
    }

    #[test]
    fn test_battle_fills_only_remaining_total() {
        let hp_species = Species::new(16, "Pidgey", EvSet::single(Stat::Hp, 1));
        let mut pokemon =
            Pokemon::new(1, pikachu()).with_evs(EvSet::from_array([0, 0, 255, 0, 0, 250]));

        let applied = pokemon.battle(&hp_species, 20);
        assert_eq!(applied, EvSet::single(Stat::Hp, 5));
        assert_eq!(pokemon.evs.to_array(), [5, 0, 255, 0, 0, 250]);
    }

    #[test]
    fn test_status() {
        let mut pokemon = Pokemon::new(2, pikachu())
            .with_item(Some(HeldItem::MachoBrace))
            .with_pokerus(true);
        assert_eq!(pokemon.status(), "2 Pikachu\nPokerus\nMacho Brace\nNo EVs");

        pokemon.battle(&pikachu(), 1);
        assert!(pokemon.status().ends_with("Speed: 8"));
    }

    #[test]
    fn test_listing_marks_active() {
        let pokemon = Pokemon::new(4, pikachu());
        assert_eq!(pokemon.listing(Some(4)), "* 4 Pikachu");
        assert_eq!(pokemon.listing(Some(1)), "  4 Pikachu");
        assert_eq!(pokemon.listing(None), "  4 Pikachu");
    }
}
