//! CLI configuration

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default config file location
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("synnet")
        .join("config.toml")
}

fn default_format() -> String {
    "text".to_string()
}

fn default_prompt() -> String {
    "synnet> ".to_string()
}

/// Configuration for the CLI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Synset file loaded at startup (together with `hypernyms`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synsets: Option<PathBuf>,

    /// Hypernym file loaded at startup (together with `synsets`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hypernyms: Option<PathBuf>,

    /// Response format: text or json
    #[serde(default = "default_format")]
    pub format: String,

    /// Interactive prompt
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            synsets: None,
            hypernyms: None,
            format: default_format(),
            prompt: default_prompt(),
        }
    }
}

impl Config {
    /// Load config from `path`, falling back to defaults when the file is
    /// missing or unreadable
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("Ignoring malformed config {:?}: {}", path, e);
                    Self::default()
                }
            },
            Err(_) => {
                tracing::debug!("No config at {:?}, using defaults", path);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        &["synsets", "hypernyms", "format", "prompt"]
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "synsets" => Some(display_path(&self.synsets)),
            "hypernyms" => Some(display_path(&self.hypernyms)),
            "format" => Some(self.format.clone()),
            "prompt" => Some(self.prompt.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        match key {
            "synsets" => self.synsets = optional_path(value),
            "hypernyms" => self.hypernyms = optional_path(value),
            "format" => match value {
                "text" | "json" => self.format = value.to_string(),
                _ => anyhow::bail!("Invalid format '{}': expected text or json", value),
            },
            "prompt" => self.prompt = value.to_string(),
            _ => anyhow::bail!(
                "Unknown config key: {} (available: {})",
                key,
                Self::keys().join(", ")
            ),
        }
        Ok(())
    }

    /// Files to load at startup, when both are configured
    pub fn preload(&self) -> Option<(&Path, &Path)> {
        match (&self.synsets, &self.hypernyms) {
            (Some(s), Some(h)) => Some((s.as_path(), h.as_path())),
            _ => None,
        }
    }
}

fn display_path(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not set)".to_string())
}

fn optional_path(value: &str) -> Option<PathBuf> {
    if value.is_empty() {
        None
    } else {
        Some(PathBuf::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("config.toml"));
        assert_eq!(config, Config::default());
        assert!(config.preload().is_none());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.set("synsets", "/data/synsets.txt").unwrap();
        config.set("hypernyms", "/data/hypernyms.txt").unwrap();
        config.set("format", "json").unwrap();
        config.save(&path).unwrap();

        let loaded = Config::load(&path);
        assert_eq!(loaded, config);
        assert_eq!(
            loaded.preload(),
            Some((Path::new("/data/synsets.txt"), Path::new("/data/hypernyms.txt")))
        );
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "format = \"json\"\n").unwrap();

        let config = Config::load(&path);
        assert_eq!(config.format, "json");
        assert_eq!(config.prompt, "synnet> ");
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = Config::default();
        assert!(config.set("format", "yaml").is_err());
        assert!(config.set("colour", "red").is_err());
        assert_eq!(config.format, "text");
    }

    #[test]
    fn test_empty_value_unsets_path() {
        let mut config = Config::default();
        config.set("synsets", "a.txt").unwrap();
        config.set("synsets", "").unwrap();
        assert_eq!(config.get("synsets").unwrap(), "(not set)");
    }
}
