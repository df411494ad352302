use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::pokedex::{DEFAULT_CUTOFF, DEFAULT_MAX_MATCHES};

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub tracker: TrackerConfig,
    #[serde(default)]
    pub pokedex: PokedexConfig,
}

/// Directory default files are placed in.
fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Tracker file configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrackerConfig {
    #[serde(default = "default_tracker_path")]
    pub path: PathBuf,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            path: default_tracker_path(),
        }
    }
}

fn default_tracker_path() -> PathBuf {
    home_dir().join(".ev-tracker")
}

/// Species database and lookup configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PokedexConfig {
    #[serde(default = "default_pokedex_path")]
    pub path: PathBuf,
    /// Minimum similarity for a name to be suggested (0.0-1.0).
    #[serde(default = "default_match_cutoff")]
    pub match_cutoff: f64,
    /// Maximum number of suggestions for a misspelled name.
    #[serde(default = "default_max_matches")]
    pub max_matches: usize,
}

impl Default for PokedexConfig {
    fn default() -> Self {
        Self {
            path: default_pokedex_path(),
            match_cutoff: default_match_cutoff(),
            max_matches: default_max_matches(),
        }
    }
}

fn default_pokedex_path() -> PathBuf {
    home_dir().join(".ev-tracker.db")
}

fn default_match_cutoff() -> f64 {
    DEFAULT_CUTOFF
}

fn default_max_matches() -> usize {
    DEFAULT_MAX_MATCHES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_empty_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.tracker.path.ends_with(".ev-tracker"));
        assert!(config.pokedex.path.ends_with(".ev-tracker.db"));
        assert_eq!(config.pokedex.match_cutoff, 0.6);
        assert_eq!(config.pokedex.max_matches, 3);
    }

    #[test]
    fn test_deserialize_custom_values() {
        let toml = r#"
[tracker]
path = "/data/tracker.json"

[pokedex]
path = "/data/pokedex.db"
match_cutoff = 0.75
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.tracker.path.to_str().unwrap(), "/data/tracker.json");
        assert_eq!(config.pokedex.path.to_str().unwrap(), "/data/pokedex.db");
        assert_eq!(config.pokedex.match_cutoff, 0.75);
        assert_eq!(config.pokedex.max_matches, 3); // default
    }

    #[test]
    fn test_deserialize_wrong_type_fails() {
        let toml = r#"
[pokedex]
max_matches = "three"
"#;
        let result: Result<Config, _> = toml::from_str(toml);
        assert!(result.is_err());
    }
}
