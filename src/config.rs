use anyhow::{Context, Result};
use std::{env, path::PathBuf};

use crate::{event::Event, storage::InMemoryStorage};

/// Default port for the server
const DEFAULT_PORT: u16 = 3000;

const PORT_VAR: &str = "CALENDAR_EVENTS_PORT";
const SEED_VAR: &str = "CALENDAR_EVENTS_SEED";

/// Runtime settings read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub port: u16,
    /// JSON file with an array of events to start from.
    pub seed_file: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(
            env::var(PORT_VAR).ok(),
            env::var_os(SEED_VAR).map(PathBuf::from),
        )
    }

    fn from_vars(port: Option<String>, seed_file: Option<PathBuf>) -> Result<Self> {
        let port = match port {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("{PORT_VAR} must be a port number, got '{raw}'"))?,
            None => DEFAULT_PORT,
        };
        Ok(Self { port, seed_file })
    }

    /// Builds the store, seeded from `seed_file` when one is configured.
    pub async fn load_storage(&self) -> Result<InMemoryStorage> {
        let Some(path) = &self.seed_file else {
            return Ok(InMemoryStorage::new());
        };
        let raw = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read seed file {}", path.display()))?;
        let seed: Vec<Event> = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse seed file {}", path.display()))?;
        InMemoryStorage::with_events(seed)
            .with_context(|| format!("Invalid seed file {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::fixtures::sample_events;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = Config::from_vars(None, None).unwrap();
        assert_eq!(
            config,
            Config {
                port: DEFAULT_PORT,
                seed_file: None
            }
        );
    }

    #[test]
    fn test_port_override() {
        let config = Config::from_vars(Some(" 8080 ".to_string()), None).unwrap();
        assert_eq!(config.port, 8080);
        assert!(Config::from_vars(Some("eighty".to_string()), None).is_err());
        assert!(Config::from_vars(Some("70000".to_string()), None).is_err());
    }

    fn seed_file(seed: &[Event]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        serde_json::to_writer(file.as_file_mut(), seed).unwrap();
        file
    }

    #[tokio::test]
    async fn test_load_storage_from_seed_file() {
        let file = seed_file(&sample_events());

        let config = Config::from_vars(None, Some(file.path().to_path_buf())).unwrap();
        let store = config.load_storage().await.unwrap();

        assert_eq!(store.len().await, sample_events().len());
    }

    #[tokio::test]
    async fn test_load_storage_rejects_bad_seed() {
        let mut seed = sample_events();
        seed.push(seed[0].clone());
        let file = seed_file(&seed);

        let config = Config::from_vars(None, Some(file.path().to_path_buf())).unwrap();
        assert!(config.load_storage().await.is_err());

        let dir = tempfile::tempdir().unwrap();
        let missing = Config::from_vars(None, Some(dir.path().join("missing.json"))).unwrap();
        assert!(missing.load_storage().await.is_err());
    }

    #[tokio::test]
    async fn test_load_storage_without_seed() {
        let config = Config::from_vars(None, None).unwrap();
        let store = config.load_storage().await.unwrap();
        assert!(store.is_empty().await);
    }
}
