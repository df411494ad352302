//! Types for the species catalog.

use std::fmt;

use thiserror::Error;

use crate::pokemon::EvSet;

/// A single species entry and the Effort Values one defeat of it awards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Species {
    /// National dex number.
    pub id: u32,
    /// Name as stored (unique after case-folding).
    pub name: String,
    /// Per-defeat Effort Value yield.
    pub evs: EvSet,
}

impl Species {
    pub fn new(id: u32, name: impl Into<String>, evs: EvSet) -> Self {
        Self {
            id,
            name: name.into(),
            evs,
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:03} {:<10} {}", self.id, self.name, self.evs)
    }
}

/// Case-folded form of a species name, used as the name index key and as
/// the parameter of name queries.
pub fn fold_name(name: &str) -> String {
    name.to_lowercase()
}

/// Result of resolving a free-form identifier against the catalog.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Exactly one species matched.
    Found(Species),
    /// Nothing matched and no name was close enough.
    NotFound { identifier: String },
    /// No exact match, but one or more names were close. Best match first.
    Ambiguous {
        identifier: String,
        candidates: Vec<Species>,
    },
}

/// Errors for catalog operations.
#[derive(Debug, Error)]
pub enum PokedexError {
    #[error("No match found for '{identifier}'")]
    NoSuchSpecies { identifier: String },

    #[error("No exact match found for '{identifier}'")]
    AmbiguousSpecies {
        identifier: String,
        matches: Vec<Species>,
    },

    #[error("Database error: {0}")]
    Database(String),
}

impl PokedexError {
    /// True for both lookup failures; an ambiguous result is a more specific
    /// kind of missing species.
    pub fn is_no_such_species(&self) -> bool {
        matches!(
            self,
            PokedexError::NoSuchSpecies { .. } | PokedexError::AmbiguousSpecies { .. }
        )
    }

    /// The user-supplied identifier for lookup failures.
    pub fn identifier(&self) -> Option<&str> {
        match self {
            PokedexError::NoSuchSpecies { identifier }
            | PokedexError::AmbiguousSpecies { identifier, .. } => Some(identifier),
            PokedexError::Database(_) => None,
        }
    }

    /// Candidate species of an ambiguous lookup, best match first.
    pub fn matches(&self) -> &[Species] {
        match self {
            PokedexError::AmbiguousSpecies { matches, .. } => matches,
            _ => &[],
        }
    }
}

impl From<rusqlite::Error> for PokedexError {
    fn from(e: rusqlite::Error) -> Self {
        PokedexError::Database(e.to_string())
    }
}
