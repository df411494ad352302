//! Mock species store for testing.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::pokedex::{fold_name, PokedexError, Species, SpeciesStore};

#[derive(Debug, Default)]
struct MockState {
    species: Vec<Species>,
    orphan_names: Vec<String>,
    id_queries: usize,
    name_queries: usize,
    names_queries: usize,
    failure: Option<String>,
}

/// In-memory implementation of the SpeciesStore trait.
///
/// Clones share state, so a test can keep one handle for assertions while
/// the pokedex owns another:
/// - Count queries per kind to observe caching
/// - Simulate store failures
///
/// # Example
///
/// ```rust,ignore
/// use evtracker_core::testing::fixtures;
///
/// let store = fixtures::starter_store();
/// let mut pokedex = Pokedex::new(Box::new(store.clone()));
///
/// pokedex.fetch_by_id(1)?;
/// pokedex.fetch_by_id(1)?;
/// assert_eq!(store.id_queries(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockSpeciesStore {
    state: Arc<Mutex<MockState>>,
}

impl MockSpeciesStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `species`, in dex order as given.
    pub fn with_species(species: Vec<Species>) -> Self {
        let store = Self::new();
        store.lock().species = species;
        store
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        // A panicking test may poison the lock; the counters are still usable.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn add_species(&self, species: Species) {
        self.lock().species.push(species);
    }

    /// List `name` in `names()` without any species record behind it.
    pub fn add_orphan_name(&self, name: &str) {
        self.lock().orphan_names.push(name.to_string());
    }

    /// Number of `find_by_id` calls made.
    pub fn id_queries(&self) -> usize {
        self.lock().id_queries
    }

    /// Number of `find_by_name` calls made.
    pub fn name_queries(&self) -> usize {
        self.lock().name_queries
    }

    /// Number of `names` calls made.
    pub fn names_queries(&self) -> usize {
        self.lock().names_queries
    }

    /// Make every subsequent query fail with a database error.
    pub fn fail_with(&self, message: &str) {
        self.lock().failure = Some(message.to_string());
    }

    fn check_failure(state: &MockState) -> Result<(), PokedexError> {
        match &state.failure {
            Some(message) => Err(PokedexError::Database(message.clone())),
            None => Ok(()),
        }
    }
}

impl SpeciesStore for MockSpeciesStore {
    fn find_by_id(&self, id: u32) -> Result<Option<Species>, PokedexError> {
        let mut state = self.lock();
        state.id_queries += 1;
        Self::check_failure(&state)?;
        Ok(state.species.iter().find(|s| s.id == id).cloned())
    }

    fn find_by_name(&self, name: &str) -> Result<Option<Species>, PokedexError> {
        let mut state = self.lock();
        state.name_queries += 1;
        Self::check_failure(&state)?;
        let key = fold_name(name);
        Ok(state
            .species
            .iter()
            .find(|s| fold_name(&s.name) == key)
            .cloned())
    }

    fn names(&self) -> Result<Vec<String>, PokedexError> {
        let mut state = self.lock();
        state.names_queries += 1;
        Self::check_failure(&state)?;
        Ok(state
            .species
            .iter()
            .map(|s| s.name.clone())
            .chain(state.orphan_names.iter().cloned())
            .collect())
    }
}
