//! Search configuration
//!
//! ## Configuration Sources (in precedence order)
//!
//! 1. Environment variables (`TFREG_*`), which is how launcher workflow
//!    variables reach the script
//! 2. `config.yaml` at `$TFREG_CONFIG`, or in the platform config directory
//! 3. Built-in defaults
//!
//! ```yaml
//! registry_url: https://registry.terraform.io
//! timeout_seconds: 30
//! variant: rich
//! verified_badge: "✔ "
//! modifier: alt
//! icon_dir: images
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use crate::alfred::{ModifierKey, TransformOptions, Variant};
use crate::error::SearchError;
use crate::registry::DEFAULT_REGISTRY_URL;

/// Overrides the config file location
pub const CONFIG_PATH_ENV: &str = "TFREG_CONFIG";
pub const REGISTRY_URL_ENV: &str = "TFREG_REGISTRY_URL";
pub const VARIANT_ENV: &str = "TFREG_VARIANT";
pub const TIMEOUT_ENV: &str = "TFREG_TIMEOUT_SECONDS";
pub const VERIFIED_BADGE_ENV: &str = "TFREG_VERIFIED_BADGE";
pub const MODIFIER_ENV: &str = "TFREG_MODIFIER";
pub const ICON_DIR_ENV: &str = "TFREG_ICON_DIR";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Registry base URL (scheme and host)
    #[serde(default = "default_registry_url")]
    pub registry_url: String,

    /// Request timeout in seconds; 0 disables the timeout
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Output preset
    #[serde(default)]
    pub variant: Variant,

    /// Replaces the preset's verified badge when set
    #[serde(default)]
    pub verified_badge: Option<String>,

    /// Modifier key for the source action (rich preset only)
    #[serde(default)]
    pub modifier: ModifierKey,

    /// Directory holding provider icons, relative to the workflow
    #[serde(default = "default_icon_dir")]
    pub icon_dir: String,
}

fn default_registry_url() -> String {
    DEFAULT_REGISTRY_URL.to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_icon_dir() -> String {
    "images".to_string()
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            registry_url: default_registry_url(),
            timeout_seconds: default_timeout(),
            variant: Variant::default(),
            verified_badge: None,
            modifier: ModifierKey::default(),
            icon_dir: default_icon_dir(),
        }
    }
}

impl SearchConfig {
    /// Load from the default location and apply environment overrides
    pub fn load() -> Result<Self> {
        let path = match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => PathBuf::from(path),
            None => Self::default_config_path()?,
        };

        let mut config = Self::load_from_path(&path)?;
        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a specific path; a missing file yields defaults
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        // An empty file deserializes to unit, not a map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config = serde_yaml_ng::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;

        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = directories::ProjectDirs::from("io", "tfreg", "tfreg")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .or_else(|| dirs::config_dir().map(|d| d.join("tfreg")))
            .context("Could not determine config directory")?;

        Ok(config_dir.join("config.yaml"))
    }

    /// Apply `TFREG_*` overrides read through `lookup`
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(REGISTRY_URL_ENV) {
            self.registry_url = url;
        }

        if let Some(variant) = lookup(VARIANT_ENV) {
            self.variant = variant
                .parse()
                .map_err(SearchError::Config)
                .with_context(|| format!("Invalid {VARIANT_ENV}"))?;
        }

        if let Some(timeout) = lookup(TIMEOUT_ENV) {
            self.timeout_seconds = timeout
                .trim()
                .parse()
                .with_context(|| format!("Invalid {TIMEOUT_ENV}: {timeout}"))?;
        }

        if let Some(badge) = lookup(VERIFIED_BADGE_ENV) {
            self.verified_badge = Some(badge);
        }

        if let Some(modifier) = lookup(MODIFIER_ENV) {
            self.modifier = modifier
                .parse()
                .map_err(SearchError::Config)
                .with_context(|| format!("Invalid {MODIFIER_ENV}"))?;
        }

        if let Some(dir) = lookup(ICON_DIR_ENV) {
            self.icon_dir = dir;
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if !self.registry_url.starts_with("http://") && !self.registry_url.starts_with("https://")
        {
            return Err(SearchError::Config(format!(
                "Registry URL must start with http:// or https://, got '{}'",
                self.registry_url
            ))
            .into());
        }

        if self.icon_dir.is_empty() {
            return Err(SearchError::Config("icon_dir must not be empty".to_string()).into());
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Transformer options for the configured preset
    pub fn transform_options(&self) -> TransformOptions {
        let mut options = self.variant.options(&self.registry_url);

        if let Some(badge) = &self.verified_badge {
            options.verified_badge = badge.clone();
        }
        if options.secondary_action.is_some() {
            options.secondary_action = Some(self.modifier);
        }
        options.icon_dir = self.icon_dir.clone();

        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alfred::PrimaryAction;
    use serial_test::serial;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.registry_url, "https://registry.terraform.io");
        assert_eq!(config.timeout_seconds, 30);
        assert_eq!(config.variant, Variant::Simple);
        assert_eq!(config.modifier, ModifierKey::Cmd);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = SearchConfig::load_from_path(&temp_dir.path().join("config.yaml")).unwrap();
        assert_eq!(config, SearchConfig::default());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        std::fs::write(&path, "\n").unwrap();

        let config = SearchConfig::load_from_path(&path).unwrap();
        assert_eq!(config, SearchConfig::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        std::fs::write(&path, "variant: rich\nmodifier: alt\n").unwrap();

        let config = SearchConfig::load_from_path(&path).unwrap();
        assert_eq!(config.variant, Variant::Rich);
        assert_eq!(config.modifier, ModifierKey::Alt);
        assert_eq!(config.registry_url, DEFAULT_REGISTRY_URL);
        assert_eq!(config.icon_dir, "images");
    }

    #[test]
    fn test_invalid_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        std::fs::write(&path, "variant: fancy\n").unwrap();

        let err = SearchConfig::load_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = SearchConfig::default();
        config
            .apply_env(lookup_from(&[
                (REGISTRY_URL_ENV, "http://localhost:9000"),
                (VARIANT_ENV, "Rich"),
                (TIMEOUT_ENV, "0"),
                (VERIFIED_BADGE_ENV, "✔ "),
                (ICON_DIR_ENV, "icons"),
            ]))
            .unwrap();

        assert_eq!(config.registry_url, "http://localhost:9000");
        assert_eq!(config.variant, Variant::Rich);
        assert!(config.timeout().is_zero());
        assert_eq!(config.verified_badge.as_deref(), Some("✔ "));
        assert_eq!(config.icon_dir, "icons");
    }

    #[test]
    fn test_bad_env_values_are_errors() {
        let mut config = SearchConfig::default();
        assert!(config
            .apply_env(lookup_from(&[(VARIANT_ENV, "fancy")]))
            .is_err());
        assert!(config
            .apply_env(lookup_from(&[(TIMEOUT_ENV, "soon")]))
            .is_err());
        assert!(config
            .apply_env(lookup_from(&[(MODIFIER_ENV, "shift")]))
            .is_err());
    }

    #[test]
    fn test_validate_rejects_schemeless_url() {
        let config = SearchConfig {
            registry_url: "registry.terraform.io".to_string(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("http:// or https://"));
    }

    #[test]
    fn test_transform_options_from_config() {
        let config = SearchConfig {
            variant: Variant::Rich,
            verified_badge: Some("* ".to_string()),
            modifier: ModifierKey::Alt,
            icon_dir: "icons".to_string(),
            ..Default::default()
        };

        let options = config.transform_options();
        assert_eq!(options.primary_action, PrimaryAction::RegistryPage);
        assert_eq!(options.secondary_action, Some(ModifierKey::Alt));
        assert_eq!(options.verified_badge, "* ");
        assert_eq!(options.icon_dir, "icons");
    }

    #[test]
    fn test_simple_variant_ignores_modifier() {
        let config = SearchConfig {
            modifier: ModifierKey::Alt,
            ..Default::default()
        };
        assert_eq!(config.transform_options().secondary_action, None);
    }

    #[test]
    #[serial]
    fn test_load_honours_config_env() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("custom.yaml");
        std::fs::write(&path, "registry_url: https://registry.example.com\n").unwrap();

        // Overrides from the surrounding shell would mask the file
        for var in [
            REGISTRY_URL_ENV,
            VARIANT_ENV,
            TIMEOUT_ENV,
            VERIFIED_BADGE_ENV,
            MODIFIER_ENV,
            ICON_DIR_ENV,
        ] {
            std::env::remove_var(var);
        }

        std::env::set_var(CONFIG_PATH_ENV, &path);
        let result = SearchConfig::load();
        std::env::remove_var(CONFIG_PATH_ENV);

        let config = result.unwrap();
        assert_eq!(config.registry_url, "https://registry.example.com");
        assert_eq!(config.variant, Variant::default());
    }
}
