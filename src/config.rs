use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct NeuroDockConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub ranking: RankingConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    pub db_path: String,
}

/// Scoring coefficients for the context engine.
///
/// Kept external to the scoring function body so test suites can fix them and
/// assert exact orderings.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct RankingConfig {
    /// Weight of the query-term overlap component.
    pub lexical_weight: f64,
    /// Weight of the creation-rank recency component.
    pub recency_weight: f64,
    /// Added when a memory's content contains the editor's file path verbatim.
    pub editor_file_boost: f64,
    /// Scales the overlap between file-name tokens and memory content.
    pub editor_topic_boost: f64,
    /// Result bound used when a context request omits `max_memories`.
    pub default_max_memories: i64,
    pub type_weights: TypeWeights,
}

/// Additive score contribution per memory type.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct TypeWeights {
    pub normal: f64,
    pub reference: f64,
    pub insight: f64,
    pub decision: f64,
}

impl Default for NeuroDockConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            storage: StorageConfig::default(),
            ranking: RankingConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 3311,
            log_level: "info".into(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        let db_path = default_neurodock_dir()
            .join("neurodock.db")
            .to_string_lossy()
            .into_owned();
        Self { db_path }
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            lexical_weight: 1.0,
            recency_weight: 0.3,
            editor_file_boost: 0.5,
            editor_topic_boost: 0.2,
            default_max_memories: 5,
            type_weights: TypeWeights::default(),
        }
    }
}

impl Default for TypeWeights {
    fn default() -> Self {
        Self {
            normal: 0.0,
            reference: 0.05,
            insight: 0.10,
            decision: 0.15,
        }
    }
}

/// Returns `~/.neurodock/`
pub fn default_neurodock_dir() -> PathBuf {
    dirs::home_dir()
        .expect("home directory must exist")
        .join(".neurodock")
}

/// Returns the default config file path: `~/.neurodock/config.toml`
pub fn default_config_path() -> PathBuf {
    default_neurodock_dir().join("config.toml")
}

impl NeuroDockConfig {
    /// Load config from TOML file (if it exists) then apply env var overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load from a specific path, then apply env var overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents =
                std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str(&contents).context("failed to parse config TOML")?
        } else {
            info!("no config file at {}, using defaults", path.display());
            NeuroDockConfig::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides (NEURODOCK_DB, NEURODOCK_PORT, NEURODOCK_LOG_LEVEL).
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("NEURODOCK_DB") {
            self.storage.db_path = val;
        }
        if let Ok(val) = std::env::var("NEURODOCK_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("NEURODOCK_LOG_LEVEL") {
            self.server.log_level = val;
        }
    }

    /// Resolve the database path, expanding `~` if needed.
    pub fn resolved_db_path(&self) -> PathBuf {
        expand_tilde(&self.storage.db_path)
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        dirs::home_dir()
            .expect("home directory must exist")
            .join(rest)
    } else {
        PathBuf::from(path)
    }
}
