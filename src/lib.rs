pub mod config;
pub mod error;
pub mod extractors;
pub mod fetcher;
pub mod model;
pub mod navigator;
pub mod output;
pub mod search;
pub mod session;
pub mod suggest;

use log::debug;
use scraper::Html;

pub use config::AppConfig;
pub use error::RecipeError;
pub use model::Recipe;
pub use session::Session;

use crate::fetcher::RequestFetcher;

/// Fetches `url` and extracts a recipe from the returned page.
///
/// Fetch failures, including non-2xx statuses, are errors and produce no
/// record. Once a page is retrieved, each field is extracted independently
/// and left empty when the page does not contain it.
pub fn fetch_recipe(url: &str, config: &AppConfig) -> Result<Recipe, RecipeError> {
    let fetcher = RequestFetcher::from_config(config)?;
    let body = fetcher.fetch(url)?;

    let document = Html::parse_document(&body);
    let recipe = extractors::extract_recipe(&document);
    debug!(
        "Extracted \"{}\": {} ingredients, {} steps",
        recipe.title,
        recipe.ingredients.len(),
        recipe.steps.len()
    );
    Ok(recipe)
}
