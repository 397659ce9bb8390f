use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use url::Url;

use crate::registry::{ConnectedRegistries, ParsedUri, UriParser};

const DEFAULT_REGISTRY_PROMPT: &str = "Registry URL";
const DEFAULT_REGISTRY_PLACEHOLDER: &str =
    "Enter the URL of the registry (e.g. https://myregistry.example.com)";

#[derive(Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Normalized URLs of connected registries, in the order they were connected
    #[serde(default)]
    pub connected_registries: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registry_prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registry_prompt_placeholder: Option<String>,
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Failed to get home directory")?;

        Ok(home
            .join(".config")
            .join("registry-connect")
            .join("config.json"))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, or defaults if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let config: Config = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir).context("Failed to create config directory")?;
            }
        }

        let json = serde_json::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, json)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;

        Ok(())
    }

    /// Get the registry prompt (with default fallback)
    pub fn get_registry_prompt(&self) -> &str {
        self.registry_prompt
            .as_deref()
            .unwrap_or(DEFAULT_REGISTRY_PROMPT)
    }

    /// Get the registry prompt placeholder (with default fallback)
    pub fn get_registry_prompt_placeholder(&self) -> &str {
        self.registry_prompt_placeholder
            .as_deref()
            .unwrap_or(DEFAULT_REGISTRY_PLACEHOLDER)
    }

    /// Connected registries, normalized through `parser`
    pub fn connected(&self, parser: &dyn UriParser) -> ConnectedRegistries {
        ConnectedRegistries::from_strings(parser, &self.connected_registries)
    }

    /// Record a newly connected registry. Returns false if it was already present.
    pub fn add_registry(&mut self, parser: &dyn UriParser, url: &Url) -> bool {
        let mut registries = self.connected(parser);
        let added = registries.add(&ParsedUri::Absolute(url.clone()));
        self.connected_registries = registries.into_vec();
        added
    }

    /// Forget a registry. Returns false if it was not connected.
    pub fn remove_registry(&mut self, parser: &dyn UriParser, uri: &ParsedUri) -> bool {
        let mut registries = self.connected(parser);
        let removed = registries.remove(uri);
        self.connected_registries = registries.into_vec();
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::StandardUriParser;

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.get_registry_prompt(), "Registry URL");
        assert!(config
            .get_registry_prompt_placeholder()
            .contains("https://myregistry.example.com"));
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut config = Config {
            registry_prompt: Some("Where is your registry?".to_string()),
            ..Default::default()
        };
        let url = Url::parse("https://Registry.example.com").unwrap();
        assert!(config.add_registry(&StandardUriParser, &url));
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.get_registry_prompt(), "Where is your registry?");
        assert_eq!(
            loaded.connected_registries,
            vec!["https://registry.example.com/".to_string()]
        );
    }

    #[test]
    fn test_add_registry_skips_duplicates() {
        let mut config = Config {
            connected_registries: vec!["HTTPS://A.COM/".to_string()],
            ..Default::default()
        };
        let url = Url::parse("https://a.com").unwrap();

        assert!(!config.add_registry(&StandardUriParser, &url));
        assert_eq!(config.connected_registries, vec!["https://a.com/".to_string()]);
    }

    #[test]
    fn test_add_registry_keeps_existing_order() {
        let mut config = Config {
            connected_registries: vec!["https://z.com/".to_string(), "https://a.com/".to_string()],
            ..Default::default()
        };
        let url = Url::parse("https://m.com").unwrap();

        assert!(config.add_registry(&StandardUriParser, &url));
        assert_eq!(
            config.connected_registries,
            vec![
                "https://z.com/".to_string(),
                "https://a.com/".to_string(),
                "https://m.com/".to_string(),
            ]
        );
    }

    #[test]
    fn test_remove_registry() {
        let mut config = Config {
            connected_registries: vec!["https://a.com/".to_string(), "https://b.com/".to_string()],
            ..Default::default()
        };
        let uri = StandardUriParser.parse("https://A.com").unwrap();

        assert!(config.remove_registry(&StandardUriParser, &uri));
        assert!(!config.remove_registry(&StandardUriParser, &uri));
        assert_eq!(config.connected_registries, vec!["https://b.com/".to_string()]);
    }

    #[test]
    fn test_load_rejects_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
