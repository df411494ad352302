pub mod config;
pub mod pokedex;
pub mod pokemon;
pub mod testing;
pub mod tracker;

pub use config::{
    load_config, load_config_from_str, load_config_or_default, validate_config, Config,
    ConfigError, PokedexConfig, TrackerConfig,
};
pub use pokedex::{
    import_csv, ImportError, ImportSummary, LookupCache, LookupKey, Pokedex, PokedexError,
    SearchOutcome, Species, SpeciesStore, SqliteSpeciesStore,
};
pub use pokemon::{EvSet, HeldItem, Pokemon, PokemonError, Stat, MAX_EV, MAX_STAT};
pub use tracker::{Tracker, TrackerError};
