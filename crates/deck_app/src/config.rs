use std::fs;
use std::path::Path;

use deck_logging::deck_warn;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the listing service.
    pub listing_url: String,
    /// Cards the surface consumes per batch signal.
    pub batch_size: usize,
    /// Sliding-window pool bound.
    pub max_pool_size: usize,
    /// Settle delay after a batch commit, in milliseconds.
    pub settle_ms: u64,
    /// Page size requested from the listing endpoint.
    pub page_size: usize,
    /// How many batches the demo run consumes before exiting.
    pub batches: usize,
    /// Fixed shuffle seed; omit for a different deck order every run.
    pub seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listing_url: "http://localhost:4000".to_string(),
            batch_size: deck_core::DEFAULT_BATCH_SIZE,
            max_pool_size: deck_core::DEFAULT_MAX_POOL_SIZE,
            settle_ms: 250,
            page_size: 25,
            batches: 5,
            seed: None,
        }
    }
}

/// Loads the RON config, falling back to defaults when the file is missing
/// or unreadable.
pub(crate) fn load_config(path: &Path) -> AppConfig {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return AppConfig::default();
        }
        Err(err) => {
            deck_warn!("Failed to read config from {:?}: {}", path, err);
            return AppConfig::default();
        }
    };

    match ron::from_str(&content) {
        Ok(config) => config,
        Err(err) => {
            deck_warn!("Failed to parse config from {:?}: {}", path, err);
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&dir.path().join("deck.ron"));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn partial_config_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.ron");
        fs::write(
            &path,
            r#"(listing_url: "https://spots.example.com", batch_size: 4, seed: Some(9))"#,
        )
        .unwrap();

        let config = load_config(&path);
        assert_eq!(config.listing_url, "https://spots.example.com");
        assert_eq!(config.batch_size, 4);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.max_pool_size, AppConfig::default().max_pool_size);
        assert_eq!(config.settle_ms, AppConfig::default().settle_ms);
    }

    #[test]
    fn garbage_config_yields_defaults() {
        deck_logging::initialize_for_tests();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.ron");
        fs::write(&path, "][ not ron").unwrap();

        let config = load_config(&path);
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn round_trips_through_ron() {
        let config = AppConfig {
            listing_url: "https://spots.example.com".to_string(),
            batch_size: 6,
            max_pool_size: 40,
            settle_ms: 100,
            page_size: 12,
            batches: 2,
            seed: Some(42),
        };

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.ron");
        let text = ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new()).unwrap();
        fs::write(&path, text).unwrap();

        assert_eq!(load_config(&path), config);
    }
}
