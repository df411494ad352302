//! Roster of tracked creatures, persisted as a JSON file.
//!
//! Before every overwrite the previous file is copied to a `.bak` sibling.
//! The write itself is not atomic.

mod types;

pub use types::*;

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::pokedex::Pokedex;
use crate::pokemon::Pokemon;

/// Path of the backup written next to `path`.
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".bak");
    PathBuf::from(name)
}

#[derive(Debug)]
pub struct Tracker {
    path: PathBuf,
    active: Option<u32>,
    pokemon: BTreeMap<u32, Pokemon>,
}

impl Tracker {
    /// An empty tracker that will be saved to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            active: None,
            pokemon: BTreeMap::new(),
        }
    }

    /// Load the tracker file, resolving each species through `pokedex`.
    ///
    /// A missing file yields an empty tracker.
    pub fn load(path: impl Into<PathBuf>, pokedex: &mut Pokedex) -> Result<Self, TrackerError> {
        let mut tracker = Self::new(path);

        let contents = match fs::read_to_string(&tracker.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %tracker.path.display(), "No tracker file, starting empty");
                return Ok(tracker);
            }
            Err(e) => return Err(e.into()),
        };

        let document: TrackerDocument = serde_json::from_str(&contents)?;
        for (id, record) in document.pokemon {
            let species = pokedex.fetch_by_id(record.species)?;
            let pokemon = Pokemon::new(id, species)
                .with_nickname(record.name.as_deref())
                .with_item(record.item)
                .with_pokerus(record.pokerus)
                .with_evs(record.evs);
            tracker.track(pokemon);
        }

        if let Some(active) = document.active {
            if tracker.pokemon.contains_key(&active) {
                tracker.active = Some(active);
            } else {
                warn!(active, "Active id does not match a tracked Pokemon, ignoring");
            }
        }

        debug!(
            path = %tracker.path.display(),
            count = tracker.pokemon.len(),
            "Loaded tracker"
        );
        Ok(tracker)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn to_document(&self) -> TrackerDocument {
        TrackerDocument {
            active: self.active,
            pokemon: self
                .pokemon
                .iter()
                .map(|(id, pokemon)| (*id, TrackedRecord::from(pokemon)))
                .collect(),
        }
    }

    /// Write the tracker file, backing up the previous version first.
    pub fn save(&self) -> Result<(), TrackerError> {
        if self.path.exists() {
            let backup = backup_path(&self.path);
            fs::copy(&self.path, &backup)?;
            debug!(backup = %backup.display(), "Backed up tracker file");
        }

        let json = serde_json::to_string_pretty(&self.to_document())?;
        fs::write(&self.path, json)?;
        info!(path = %self.path.display(), "Saved tracker");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.pokemon.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pokemon.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pokemon> {
        self.pokemon.values()
    }

    /// Smallest positive id not already in use.
    pub fn unique_id(&self) -> u32 {
        (1..)
            .find(|id| !self.pokemon.contains_key(id))
            .unwrap_or(u32::MAX)
    }

    /// Start tracking `pokemon`, replacing any creature with the same id.
    pub fn track(&mut self, pokemon: Pokemon) {
        self.pokemon.insert(pokemon.id, pokemon);
    }

    /// Stop tracking the creature with `id`, clearing it as active.
    pub fn untrack(&mut self, id: u32) -> Result<Pokemon, TrackerError> {
        let pokemon = self
            .pokemon
            .remove(&id)
            .ok_or(TrackerError::NoTrackedPokemon { id })?;
        if self.active == Some(id) {
            self.active = None;
        }
        Ok(pokemon)
    }

    pub fn get(&self, id: u32) -> Result<&Pokemon, TrackerError> {
        self.pokemon
            .get(&id)
            .ok_or(TrackerError::NoTrackedPokemon { id })
    }

    pub fn get_mut(&mut self, id: u32) -> Result<&mut Pokemon, TrackerError> {
        self.pokemon
            .get_mut(&id)
            .ok_or(TrackerError::NoTrackedPokemon { id })
    }

    pub fn active_id(&self) -> Option<u32> {
        self.active
    }

    pub fn has_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn active(&self) -> Result<&Pokemon, TrackerError> {
        let id = self.active.ok_or(TrackerError::NoActivePokemon)?;
        self.get(id)
    }

    pub fn active_mut(&mut self) -> Result<&mut Pokemon, TrackerError> {
        let id = self.active.ok_or(TrackerError::NoActivePokemon)?;
        self.get_mut(id)
    }

    /// Mark the creature with `id` as active.
    pub fn set_active(&mut self, id: u32) -> Result<&Pokemon, TrackerError> {
        let pokemon = self
            .pokemon
            .get(&id)
            .ok_or(TrackerError::NoTrackedPokemon { id })?;
        self.active = Some(id);
        Ok(pokemon)
    }

    /// The creature with `id`, or the active one when `id` is `None`.
    pub fn resolve(&self, id: Option<u32>) -> Result<&Pokemon, TrackerError> {
        match id {
            Some(id) => self.get(id),
            None => self.active(),
        }
    }

    pub fn resolve_mut(&mut self, id: Option<u32>) -> Result<&mut Pokemon, TrackerError> {
        match id {
            Some(id) => self.get_mut(id),
            None => self.active_mut(),
        }
    }
}

impl fmt::Display for Tracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.pokemon.is_empty() {
            return f.write_str("No tracked Pokemon");
        }
        let lines: Vec<String> = self
            .pokemon
            .values()
            .map(|pokemon| pokemon.listing(self.active))
            .collect();
        f.write_str(&lines.join("\n"))
    }
}
