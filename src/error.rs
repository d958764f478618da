use thiserror::Error;

/// Errors that can occur while fetching or saving a recipe
#[derive(Error, Debug)]
pub enum RecipeError {
    /// Failed to fetch the recipe page, including non-2xx responses
    #[error("Failed to fetch URL: {0}")]
    FetchError(#[from] reqwest::Error),

    /// Error parsing HTTP headers
    #[error("Header parse error: {0}")]
    HeaderError(#[from] reqwest::header::InvalidHeaderValue),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// Failed to write the recipe file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
