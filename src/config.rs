use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use crate::models::ImportanceWeights;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub default_weights: WeightsConfig,
}

/// Importance weights used when the ranking user states none
#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_hobbies_weight")]
    pub hobbies: f64,
    #[serde(default = "default_passions_weight")]
    pub passions: f64,
    #[serde(default = "default_languages_weight")]
    pub languages: f64,
    #[serde(default = "default_personality_weight")]
    pub personality: f64,
    #[serde(default = "default_lifestyle_weight")]
    pub lifestyle: f64,
    #[serde(default = "default_dietary_weight")]
    pub dietary: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            hobbies: default_hobbies_weight(),
            passions: default_passions_weight(),
            languages: default_languages_weight(),
            personality: default_personality_weight(),
            lifestyle: default_lifestyle_weight(),
            dietary: default_dietary_weight(),
        }
    }
}

impl From<&WeightsConfig> for ImportanceWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            hobbies: config.hobbies,
            passions: config.passions,
            languages: config.languages,
            personality: config.personality,
            lifestyle: config.lifestyle,
            dietary: config.dietary,
        }
    }
}

fn default_hobbies_weight() -> f64 { 0.2 }
fn default_passions_weight() -> f64 { 0.25 }
fn default_languages_weight() -> f64 { 0.1 }
fn default_personality_weight() -> f64 { 0.2 }
fn default_lifestyle_weight() -> f64 { 0.15 }
fn default_dietary_weight() -> f64 { 0.1 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchingSettings {
    pub max_candidates: Option<usize>,
    pub default_limit: Option<usize>,
    pub max_limit: Option<usize>,
}

impl MatchingSettings {
    /// Largest candidate list accepted by the rank endpoint
    pub fn max_candidates(&self) -> usize {
        self.max_candidates.unwrap_or(500)
    }

    pub fn default_limit(&self) -> usize {
        self.default_limit.unwrap_or(20)
    }

    pub fn max_limit(&self) -> usize {
        self.max_limit.unwrap_or(100)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with TRIBES_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., TRIBES__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("TRIBES")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("TRIBES")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Parse settings from a TOML document, without environment overrides
    pub fn from_toml_str(document: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(document)
    }

    pub fn default_weights(&self) -> ImportanceWeights {
        ImportanceWeights::from(&self.scoring.default_weights)
    }
}
