use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Settings for the structured conversion step
#[derive(Debug, Deserialize, Clone)]
pub struct RecipeConfig {
    /// Hosted model identifier
    #[serde(default = "default_model")]
    pub model: String,
    /// Base URL of the model-serving API
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// API key for authentication (can also be set via OPENAI_API_KEY)
    #[serde(default)]
    pub api_key: Option<String>,
    /// Request timeout in seconds, fractions allowed; the HTTP client default applies when unset
    #[serde(default)]
    pub timeout: Option<f64>,
    /// Language the recipe is written in, used as a prompt hint
    #[serde(default)]
    pub language: Option<String>,
}

impl Default for RecipeConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_base_url(),
            api_key: None,
            timeout: None,
            language: None,
        }
    }
}

fn default_model() -> String {
    "gpt-4o-mini-2024-07-18".to_string()
}

fn default_base_url() -> String {
    "https://api.openai.com".to_string()
}

impl RecipeConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE__API_KEY, RECIPE__MODEL
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            .add_source(
                Environment::with_prefix("RECIPE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
