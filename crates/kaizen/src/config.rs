//! Analysis configuration.
//!
//! TOML-based configuration with:
//! - Bundled defaults (include_str! from kaizen.toml)
//! - User overrides (./kaizen.toml or ~/.config/kaizen/kaizen.toml)
//! - Automatic merging with user values taking precedence

use config::{Config, File, FileFormat};
use kaizen_core::Language;
use kaizen_models::gemini::{DEFAULT_MODEL, DEFAULT_TEMPERATURE};
use kaizen_error::{ConfigError, KaizenResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Per-run analysis settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AnalysisSettings {
    /// Model identifier submitted with each request
    pub model: String,
    /// Report language
    #[serde(default)]
    pub language: Language,
    /// Sampling temperature
    pub temperature: f32,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            language: Language::default(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

/// One entry in the known-model catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ModelEntry {
    /// Model identifier as the API expects it
    pub id: String,
    /// Human-readable label for selection UIs
    pub label: String,
}

/// Full configuration for the analysis library.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct KaizenConfig {
    /// Analysis settings
    #[serde(default)]
    pub analysis: AnalysisSettings,
    /// Known model catalog
    #[serde(default)]
    pub models: Vec<ModelEntry>,
}

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../../../kaizen.toml");

impl KaizenConfig {
    /// Load configuration with precedence: current dir > home dir > bundled
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a discovered file cannot be parsed.
    #[instrument]
    pub fn load() -> KaizenResult<Self> {
        debug!("loading configuration: current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/kaizen/kaizen.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("kaizen").required(false));

        builder
            .build()
            .map_err(|e| ConfigError::new(format!("failed to build configuration: {e}")))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("failed to parse configuration: {e}")).into())
    }
}
