use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

pub const API_KEY_ENV: &str = "EXCHANGE_RATE_API_KEY";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ExchangeRateApiConfig {
    pub base_url: String,
}

impl Default for ExchangeRateApiConfig {
    fn default() -> Self {
        ExchangeRateApiConfig {
            base_url: "https://v6.exchangerate-api.com".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ProvidersConfig {
    #[serde(default)]
    pub exchange_rate_api: ExchangeRateApiConfig,
}

fn default_from() -> String {
    "USD".to_string()
}

fn default_to() -> String {
    "EUR".to_string()
}

#[derive(Deserialize, Serialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_from")]
    pub default_from: String,
    #[serde(default = "default_to")]
    pub default_to: String,
    #[serde(default)]
    pub providers: ProvidersConfig,
}

// Keeps the key out of `debug!("{config:#?}")` output.
impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("default_from", &self.default_from)
            .field("default_to", &self.default_to)
            .field("providers", &self.providers)
            .finish()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            api_key: None,
            default_from: default_from(),
            default_to: default_to(),
            providers: ProvidersConfig::default(),
        }
    }
}

impl AppConfig {
    /// Loads the configuration file once at startup.
    ///
    /// An explicit `config_path` must exist. Without one, the default file is
    /// used when present and built-in defaults otherwise. The environment is
    /// not consulted here; see [`AppConfig::with_env_overrides`].
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let config = match config_path {
            Some(path) => Self::load_from_path(path)?,
            None => {
                let path = Self::default_config_path()?;
                if path.exists() {
                    Self::load_from_path(&path)?
                } else {
                    debug!("No config file at {}, using defaults", path.display());
                    Self::default()
                }
            }
        };
        Ok(config)
    }

    /// Applies `EXCHANGE_RATE_API_KEY` from the environment (or `.env`),
    /// which takes precedence over the file's `api_key`.
    pub fn with_env_overrides(mut self) -> Self {
        if dotenvy::dotenv().is_ok() {
            debug!("Loaded environment from .env");
        }
        self.apply_api_key_override(std::env::var(API_KEY_ENV).ok());
        self
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("dev", "fxc", "fxc")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    fn apply_api_key_override(&mut self, env_key: Option<String>) {
        if let Some(key) = env_key.filter(|k| !k.trim().is_empty()) {
            debug!("Using API key from {API_KEY_ENV}");
            self.api_key = Some(key.trim().to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
api_key: "file-key"
default_from: "GBP"
default_to: "INR"
providers:
  exchange_rate_api:
    base_url: "http://example.com/rates"
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(config.api_key.as_deref(), Some("file-key"));
        assert_eq!(config.default_from, "GBP");
        assert_eq!(config.default_to, "INR");
        assert_eq!(
            config.providers.exchange_rate_api.base_url,
            "http://example.com/rates"
        );
    }

    #[test]
    fn test_config_defaults() {
        let config: AppConfig = serde_yaml::from_str("{}").expect("Failed to deserialize");
        assert!(config.api_key.is_none());
        assert_eq!(config.default_from, "USD");
        assert_eq!(config.default_to, "EUR");
        assert_eq!(
            config.providers.exchange_rate_api.base_url,
            "https://v6.exchangerate-api.com"
        );
    }

    #[test]
    fn test_env_api_key_overrides_file() {
        let mut config = AppConfig {
            api_key: Some("file-key".to_string()),
            ..AppConfig::default()
        };
        config.apply_api_key_override(Some(" env-key ".to_string()));
        assert_eq!(config.api_key.as_deref(), Some("env-key"));

        config.apply_api_key_override(Some("".to_string()));
        assert_eq!(config.api_key.as_deref(), Some("env-key"));

        config.apply_api_key_override(None);
        assert_eq!(config.api_key.as_deref(), Some("env-key"));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = AppConfig {
            api_key: Some("super-secret".to_string()),
            ..AppConfig::default()
        };
        let printed = format!("{config:?}");
        assert!(!printed.contains("super-secret"));
        assert!(printed.contains("<redacted>"));
    }

    #[test]
    fn test_load_keeps_file_api_key() -> Result<()> {
        let config_file = tempfile::NamedTempFile::new()?;
        fs::write(config_file.path(), "api_key: \"file-key\"\n")?;

        let config = AppConfig::load(config_file.path().to_str())?;
        assert_eq!(config.api_key.as_deref(), Some("file-key"));
        Ok(())
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let result = AppConfig::load(Some("/nonexistent/fxc/config.yaml"));
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to read config file")
        );
    }
}
