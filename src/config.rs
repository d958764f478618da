use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::RecipeError;
use crate::suggest::DEFAULT_SUGGESTIONS;

/// Desktop browser user agent sent with every fetch
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3";

/// Application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// User agent header sent with the page request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Request timeout in seconds; no timeout when absent
    #[serde(default)]
    pub timeout: Option<u64>,
    /// Directory saved recipe files are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// URLs offered by the suggestion menu
    #[serde(default = "default_suggestions")]
    pub suggestions: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout: None,
            output_dir: default_output_dir(),
            suggestions: default_suggestions(),
        }
    }
}

// Default value functions
fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_suggestions() -> Vec<String> {
    DEFAULT_SUGGESTIONS.iter().map(|s| s.to_string()).collect()
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_ASSISTANT__ prefix
    /// 2. recipe-assistant.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_ASSISTANT__TIMEOUT
    pub fn load() -> Result<Self, RecipeError> {
        Ok(load_config()?)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }
}

/// Load configuration from file and environment variables
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("recipe-assistant").required(false))
        // Use double underscore as separator: RECIPE_ASSISTANT__OUTPUT_DIR
        .add_source(
            Environment::with_prefix("RECIPE_ASSISTANT")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true)
                // RECIPE_ASSISTANT__SUGGESTIONS=url1,url2
                .list_separator(",")
                .with_list_parse_key("suggestions"),
        )
        .build()?;

    settings.try_deserialize()
}
