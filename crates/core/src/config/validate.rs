use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Tracker and pokedex paths are not empty
/// - Match cutoff lies within 0.0..=1.0
/// - At least one suggestion is allowed
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.tracker.path.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "tracker.path cannot be empty".to_string(),
        ));
    }

    if config.pokedex.path.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "pokedex.path cannot be empty".to_string(),
        ));
    }

    if !(0.0..=1.0).contains(&config.pokedex.match_cutoff) {
        return Err(ConfigError::ValidationError(format!(
            "pokedex.match_cutoff must be between 0.0 and 1.0, got {}",
            config.pokedex.match_cutoff
        )));
    }

    if config.pokedex.max_matches == 0 {
        return Err(ConfigError::ValidationError(
            "pokedex.max_matches cannot be 0".to_string(),
        ));
    }

    Ok(())
}
