use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use std::path::Path;

use super::{types::Config, ConfigError};

/// Environment variable prefix for overrides, e.g.
/// `EV_TRACKER_POKEDEX__MATCH_CUTOFF=0.7`.
pub const ENV_PREFIX: &str = "EV_TRACKER_";

fn figment() -> Figment {
    Figment::from(Serialized::defaults(Config::default()))
}

fn extract(figment: Figment) -> Result<Config, ConfigError> {
    figment
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Load configuration from file with environment variable overrides
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    extract(figment().merge(Toml::file(path)))
}

/// Load configuration from `path` if it exists, otherwise from defaults,
/// with environment variable overrides either way
pub fn load_config_or_default(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(path) if path.exists() => load_config(path),
        _ => extract(figment()),
    }
}

/// Load configuration from TOML string (useful for testing)
pub fn load_config_from_str(toml_str: &str) -> Result<Config, ConfigError> {
    toml::from_str(toml_str).map_err(|e| ConfigError::ParseError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_from_str_valid() {
        let toml = r#"
[pokedex]
max_matches = 5
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.pokedex.max_matches, 5);
    }

    #[test]
    fn test_load_config_from_str_invalid() {
        let result = load_config_from_str("[pokedex\nmax_matches = 5");
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config(Path::new("/nonexistent/config.toml"));
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn test_load_config_or_default_missing_file() {
        let config = load_config_or_default(Some(Path::new("/nonexistent/config.toml"))).unwrap();
        assert!(config.tracker.path.ends_with(".ev-tracker"));
    }

    #[test]
    fn test_load_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            r#"
[tracker]
path = "/tmp/tracker.json"

[pokedex]
match_cutoff = 0.8
"#
        )
        .unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.tracker.path.to_str().unwrap(), "/tmp/tracker.json");
        assert_eq!(config.pokedex.match_cutoff, 0.8);
        assert_eq!(config.pokedex.max_matches, 3);
    }
}
