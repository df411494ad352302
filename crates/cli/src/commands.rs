//! Command handlers.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use evtracker_core::{import_csv, Config, HeldItem, Pokedex, Pokemon, SqliteSpeciesStore, Tracker};

use crate::cli::Command;

pub struct App {
    config: Config,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn execute(&self, command: Command) -> Result<()> {
        match command {
            Command::Import { csv } => self.import(&csv),
            Command::Ev { species } => {
                let mut pokedex = self.open_pokedex()?;
                println!("{}", pokedex.search(&species)?);
                Ok(())
            }
            Command::List => {
                let (_, tracker) = self.open_tracker()?;
                println!("{}", tracker);
                Ok(())
            }
            Command::Track {
                species,
                name,
                item,
                pokerus,
            } => self.track(&species, name.as_deref(), item, pokerus),
            Command::Active { switch } => self.active(switch),
            Command::Status { id } => {
                let (_, tracker) = self.open_tracker()?;
                println!("{}", tracker.resolve(id)?.status());
                Ok(())
            }
            Command::Battle { species, id, count } => self.battle(&species, id, count),
            Command::Update {
                id,
                name,
                item,
                no_item,
                pokerus,
                no_pokerus,
            } => {
                let item = if no_item { Some(None) } else { item.map(Some) };
                let pokerus = if pokerus {
                    Some(true)
                } else if no_pokerus {
                    Some(false)
                } else {
                    None
                };
                self.update(id, name.as_deref(), item, pokerus)
            }
            Command::Release { id } => {
                let (_, mut tracker) = self.open_tracker()?;
                let pokemon = tracker.untrack(id)?;
                println!("No longer tracking {}", pokemon);
                tracker.save()?;
                Ok(())
            }
        }
    }

    fn open_pokedex(&self) -> Result<Pokedex> {
        let config = &self.config.pokedex;
        let store =
            SqliteSpeciesStore::new(&config.path).context("Failed to open species database")?;
        if store.count()? == 0 {
            warn!(
                "Species database {:?} is empty; load it with `ev import <csv>`",
                config.path
            );
        }
        Ok(Pokedex::new(Box::new(store)).with_matching(config.match_cutoff, config.max_matches))
    }

    fn open_tracker(&self) -> Result<(Pokedex, Tracker)> {
        let mut pokedex = self.open_pokedex()?;
        let tracker = Tracker::load(&self.config.tracker.path, &mut pokedex)?;
        Ok((pokedex, tracker))
    }

    fn import(&self, csv: &Path) -> Result<()> {
        let mut store = SqliteSpeciesStore::new(&self.config.pokedex.path)
            .context("Failed to open species database")?;
        let file = File::open(csv)
            .with_context(|| format!("Failed to open {:?}", csv))?;
        let summary = import_csv(&mut store, file)?;
        println!(
            "Imported {} species ({} alternate forms)",
            summary.species, summary.alternate_forms
        );
        Ok(())
    }

    fn track(
        &self,
        species: &str,
        name: Option<&str>,
        item: Option<HeldItem>,
        pokerus: bool,
    ) -> Result<()> {
        let (mut pokedex, mut tracker) = self.open_tracker()?;
        let species = pokedex.search(species)?;
        let pokemon = Pokemon::new(tracker.unique_id(), species)
            .with_nickname(name)
            .with_item(item)
            .with_pokerus(pokerus);
        println!("{}", pokemon);
        info!(id = pokemon.id, "Tracking new Pokemon");
        tracker.track(pokemon);
        tracker.save()?;
        Ok(())
    }

    fn active(&self, switch: Option<u32>) -> Result<()> {
        let (_, mut tracker) = self.open_tracker()?;
        if let Some(id) = switch {
            tracker.set_active(id)?;
            tracker.save()?;
        }
        println!("{}", tracker.active()?);
        Ok(())
    }

    fn battle(&self, species: &str, id: Option<u32>, count: u32) -> Result<()> {
        let (mut pokedex, mut tracker) = self.open_tracker()?;
        let species = pokedex.search(species)?;
        let pokemon = tracker.resolve_mut(id)?;
        let gained = pokemon.battle(&species, count);
        if gained.is_empty() {
            println!("No EVs gained");
        } else {
            println!("{}", gained);
        }
        println!("{}", pokemon);
        tracker.save()?;
        Ok(())
    }

    /// `item` and `pokerus` are left unchanged when `None`.
    fn update(
        &self,
        id: Option<u32>,
        name: Option<&str>,
        item: Option<Option<HeldItem>>,
        pokerus: Option<bool>,
    ) -> Result<()> {
        let (_, mut tracker) = self.open_tracker()?;
        let pokemon = tracker.resolve_mut(id)?;
        pokemon.set_nickname(name);
        if let Some(item) = item {
            pokemon.item = item;
        }
        if let Some(pokerus) = pokerus {
            pokemon.pokerus = pokerus;
        }
        println!("{}", pokemon.status());
        tracker.save()?;
        Ok(())
    }
}
