//! Testing utilities and mock implementations.
//!
//! This module provides an in-memory species store and fixtures, allowing
//! the catalog and tracker to be exercised without a database file.
//!
//! # Example
//!
//! ```rust,ignore
//! use evtracker_core::testing::{fixtures, MockSpeciesStore};
//!
//! let store = fixtures::starter_store();
//! let mut pokedex = fixtures::pokedex(&store);
//!
//! let bulbasaur = pokedex.search("1")?;
//! ```

mod mock_species_store;

pub use mock_species_store::MockSpeciesStore;

/// Test fixtures and helper functions.
pub mod fixtures {
    use super::MockSpeciesStore;
    use crate::pokedex::{Pokedex, Species};
    use crate::pokemon::EvSet;

    pub fn bulbasaur() -> Species {
        Species::new(1, "Bulbasaur", EvSet::from_array([0, 0, 0, 1, 0, 0]))
    }

    pub fn charmander() -> Species {
        Species::new(4, "Charmander", EvSet::from_array([0, 0, 0, 0, 0, 1]))
    }

    pub fn pikachu() -> Species {
        Species::new(25, "Pikachu", EvSet::from_array([0, 0, 0, 0, 0, 2]))
    }

    /// Store holding Bulbasaur, Charmander and Pikachu.
    pub fn starter_store() -> MockSpeciesStore {
        MockSpeciesStore::with_species(vec![bulbasaur(), charmander(), pikachu()])
    }

    /// Pokedex reading from a clone of `store`.
    pub fn pokedex(store: &MockSpeciesStore) -> Pokedex {
        Pokedex::new(Box::new(store.clone()))
    }
}
