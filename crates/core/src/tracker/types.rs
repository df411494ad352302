//! On-disk shape of the tracker file and tracker errors.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pokedex::PokedexError;
use crate::pokemon::{EvSet, HeldItem, Pokemon};

/// A tracked creature as stored in the tracker file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedRecord {
    /// Dex number of the species.
    pub species: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<HeldItem>,
    #[serde(default)]
    pub pokerus: bool,
    #[serde(default)]
    pub evs: EvSet,
}

impl From<&Pokemon> for TrackedRecord {
    fn from(pokemon: &Pokemon) -> Self {
        Self {
            species: pokemon.species.id,
            name: pokemon.nickname().map(str::to_string),
            item: pokemon.item,
            pokerus: pokemon.pokerus,
            evs: pokemon.evs,
        }
    }
}

/// The whole tracker file. Map keys are serialized as decimal strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackerDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<u32>,
    #[serde(default)]
    pub pokemon: BTreeMap<u32, TrackedRecord>,
}

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("No tracked Pokemon is marked as active")]
    NoActivePokemon,

    #[error("No tracked Pokemon with id '{id}' was found")]
    NoTrackedPokemon { id: u32 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid tracker file: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Pokedex(#[from] PokedexError),
}
