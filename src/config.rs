use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub model: ModelConfig,
    pub credentials: CredentialsConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface the API server binds to.
    pub host: String,
    /// Port the API server listens on.
    pub port: u16,
}

/// Generative model configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Gemini model name used for all features.
    pub name: String,
}

/// Upstream service credentials. Environment variables take precedence
/// over file values: `GEMINI_API_KEY`, `UNSPLASH_ACCESS_KEY`,
/// `PEXELS_API_KEY`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CredentialsConfig {
    pub gemini_api_key: String,
    pub unsplash_access_key: String,
    pub pexels_api_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            model: ModelConfig::default(),
            credentials: CredentialsConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8787,
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: "gemini-2.0-flash-lite".to_string(),
        }
    }
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: String::new(),
            unsplash_access_key: String::new(),
            pexels_api_key: String::new(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `~/.config/quotesmith/config.toml`.
    /// Returns `Default` if the file is missing or unparseable, then applies
    /// environment overrides either way.
    pub fn load() -> Self {
        let config_path = Self::config_path();
        let mut config = match std::fs::read_to_string(&config_path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => {
                    log::info!("Loaded config from {}", config_path.display());
                    config
                }
                Err(e) => {
                    log::warn!(
                        "Failed to parse config at {}: {e} — using defaults",
                        config_path.display()
                    );
                    Self::default()
                }
            },
            Err(_) => {
                log::debug!(
                    "No config file at {} — using defaults",
                    config_path.display()
                );
                Self::default()
            }
        };
        config.apply_env();
        config
    }

    /// Socket address string the server binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    fn apply_env(&mut self) {
        if let Ok(key) = std::env::var("GEMINI_API_KEY") {
            if !key.trim().is_empty() {
                self.credentials.gemini_api_key = key;
            }
        }
        if let Ok(key) = std::env::var("UNSPLASH_ACCESS_KEY") {
            if !key.trim().is_empty() {
                self.credentials.unsplash_access_key = key;
            }
        }
        if let Ok(key) = std::env::var("PEXELS_API_KEY") {
            if !key.trim().is_empty() {
                self.credentials.pexels_api_key = key;
            }
        }
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("quotesmith").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}
