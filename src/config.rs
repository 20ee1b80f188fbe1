//! Dataset location for the shared botany database.
//!
//! `MYCELIA_BOTANY_CSV` overrides the bundled `data/plants_massif.csv`.

use std::path::PathBuf;

/// Environment variable that points at an alternative dataset.
pub const DATASET_ENV_VAR: &str = "MYCELIA_BOTANY_CSV";

/// Bundled dataset, relative to the crate root.
const DEFAULT_DATASET: &str = "data/plants_massif.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotanyConfig {
    /// CSV file the default database is built from.
    pub dataset_path: PathBuf,
}

impl Default for BotanyConfig {
    fn default() -> Self {
        Self {
            dataset_path: default_dataset_path(),
        }
    }
}

impl BotanyConfig {
    /// Resolve the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_override(std::env::var(DATASET_ENV_VAR).ok())
    }

    fn from_override(value: Option<String>) -> Self {
        match value.map(|v| v.trim().to_string()) {
            Some(path) if !path.is_empty() => Self {
                dataset_path: PathBuf::from(path),
            },
            _ => Self::default(),
        }
    }
}

/// Path of the dataset shipped with the crate.
pub fn default_dataset_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_DATASET)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_bundled_dataset() {
        let config = BotanyConfig::default();
        assert!(config.dataset_path.ends_with("data/plants_massif.csv"));
    }

    #[test]
    fn override_wins_when_non_empty() {
        let config = BotanyConfig::from_override(Some("/srv/plants.csv".into()));
        assert_eq!(config.dataset_path, PathBuf::from("/srv/plants.csv"));
    }

    #[test]
    fn blank_override_falls_back_to_default() {
        assert_eq!(BotanyConfig::from_override(Some("  ".into())), BotanyConfig::default());
        assert_eq!(BotanyConfig::from_override(None), BotanyConfig::default());
    }
}
