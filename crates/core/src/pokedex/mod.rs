//! Species catalog - lookup of species by dex number or (approximate) name.
//!
//! The catalog reads through an in-memory cache to a backing store. Records
//! are fetched on demand and never change for the life of the process.

mod cache;
mod fuzzy;
mod import;
mod sqlite;
mod types;

pub use cache::{LookupCache, LookupKey};
pub use fuzzy::{close_matches, similarity, DEFAULT_CUTOFF, DEFAULT_MAX_MATCHES};
pub use import::{import_csv, ImportError, ImportSummary};
pub use sqlite::SqliteSpeciesStore;
pub use types::*;

use tracing::{debug, warn};

/// Read-only storage the catalog loads species from.
pub trait SpeciesStore {
    /// Fetch the species whose dex number is `id`.
    fn find_by_id(&self, id: u32) -> Result<Option<Species>, PokedexError>;

    /// Fetch the species whose name equals `name` ignoring case.
    fn find_by_name(&self, name: &str) -> Result<Option<Species>, PokedexError>;

    /// Every species name, as stored, in dex order.
    fn names(&self) -> Result<Vec<String>, PokedexError>;
}

/// True if `identifier` should be treated as a dex number.
fn is_numeric(identifier: &str) -> bool {
    !identifier.is_empty() && identifier.chars().all(|c| c.is_ascii_digit())
}

/// The species catalog.
pub struct Pokedex {
    store: Box<dyn SpeciesStore>,
    cache: LookupCache,
    names: Option<Vec<String>>,
    cutoff: f64,
    max_matches: usize,
}

impl Pokedex {
    pub fn new(store: Box<dyn SpeciesStore>) -> Self {
        Self {
            store,
            cache: LookupCache::new(),
            names: None,
            cutoff: DEFAULT_CUTOFF,
            max_matches: DEFAULT_MAX_MATCHES,
        }
    }

    /// Override the similarity cutoff and number of suggestions.
    pub fn with_matching(mut self, cutoff: f64, max_matches: usize) -> Self {
        self.cutoff = cutoff;
        self.max_matches = max_matches;
        self
    }

    pub fn cache(&self) -> &LookupCache {
        &self.cache
    }

    pub fn fetch_by_id(&mut self, id: u32) -> Result<Species, PokedexError> {
        if let Some(species) = self.cache.get(LookupKey::Id(id)) {
            debug!(id, "Species cache hit");
            return Ok(species.clone());
        }

        let species = self
            .store
            .find_by_id(id)?
            .ok_or_else(|| PokedexError::NoSuchSpecies {
                identifier: id.to_string(),
            })?;
        self.cache.put(species.clone());
        Ok(species)
    }

    pub fn fetch_by_name(&mut self, name: &str) -> Result<Species, PokedexError> {
        if let Some(species) = self.cache.get(LookupKey::Name(name)) {
            debug!(name, "Species cache hit");
            return Ok(species.clone());
        }

        let species = self
            .store
            .find_by_name(&fold_name(name))?
            .ok_or_else(|| PokedexError::NoSuchSpecies {
                identifier: name.to_string(),
            })?;
        self.cache.put(species.clone());
        Ok(species)
    }

    /// All species names, loaded from the store on first use.
    fn name_universe(&mut self) -> Result<&[String], PokedexError> {
        if self.names.is_none() {
            let names = self.store.names()?;
            debug!(count = names.len(), "Loaded species names");
            self.names = Some(names);
        }
        Ok(self.names.as_deref().unwrap_or_default())
    }

    /// Resolve a free-form identifier.
    ///
    /// Digit-only input is a dex number and never falls back to name
    /// matching. Anything else is tried as an exact name, then matched
    /// approximately against every stored name. Only store failures are
    /// returned as errors.
    pub fn resolve(&mut self, identifier: &str) -> Result<SearchOutcome, PokedexError> {
        if is_numeric(identifier) {
            let Ok(id) = identifier.parse::<u32>() else {
                return Ok(SearchOutcome::NotFound {
                    identifier: identifier.to_string(),
                });
            };
            return match self.fetch_by_id(id) {
                Ok(species) => Ok(SearchOutcome::Found(species)),
                Err(PokedexError::NoSuchSpecies { .. }) => Ok(SearchOutcome::NotFound {
                    identifier: identifier.to_string(),
                }),
                Err(e) => Err(e),
            };
        }

        match self.fetch_by_name(identifier) {
            Ok(species) => return Ok(SearchOutcome::Found(species)),
            Err(PokedexError::NoSuchSpecies { .. }) => {}
            Err(e) => return Err(e),
        }

        let (cutoff, max_matches) = (self.cutoff, self.max_matches);
        let matches = close_matches(identifier, self.name_universe()?, max_matches, cutoff);
        debug!(identifier, ?matches, "Close matches");
        if matches.is_empty() {
            return Ok(SearchOutcome::NotFound {
                identifier: identifier.to_string(),
            });
        }

        let mut candidates = Vec::with_capacity(matches.len());
        for name in &matches {
            match self.fetch_by_name(name) {
                Ok(species) => candidates.push(species),
                Err(PokedexError::NoSuchSpecies { .. }) => {
                    warn!(identifier, name = %name, "Suggested name has no species record");
                }
                Err(e) => return Err(e),
            }
        }
        if candidates.is_empty() {
            return Ok(SearchOutcome::NotFound {
                identifier: identifier.to_string(),
            });
        }

        Ok(SearchOutcome::Ambiguous {
            identifier: identifier.to_string(),
            candidates,
        })
    }

    /// Resolve a free-form identifier to exactly one species.
    ///
    /// Fails with [`PokedexError::NoSuchSpecies`] when nothing is close, or
    /// [`PokedexError::AmbiguousSpecies`] listing the closest names.
    pub fn search(&mut self, identifier: &str) -> Result<Species, PokedexError> {
        match self.resolve(identifier)? {
            SearchOutcome::Found(species) => Ok(species),
            SearchOutcome::NotFound { identifier } => {
                Err(PokedexError::NoSuchSpecies { identifier })
            }
            SearchOutcome::Ambiguous {
                identifier,
                candidates,
            } => Err(PokedexError::AmbiguousSpecies {
                identifier,
                matches: candidates,
            }),
        }
    }
}
