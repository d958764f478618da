use crate::model::Recipe;
use log::debug;
use scraper::Html;

mod html_class;

pub use self::html_class::{
    extract_categories, extract_ingredients, extract_steps, extract_tags, extract_title,
};

/// Builds a recipe from a parsed page.
///
/// Every field is best-effort: a field that cannot be located is left empty.
pub fn extract_recipe(document: &Html) -> Recipe {
    let recipe = Recipe {
        title: extract_title(document),
        ingredients: extract_ingredients(document),
        steps: extract_steps(document),
        categories: extract_categories(document),
        tags: extract_tags(document),
    };

    debug!("{:#?}", recipe);
    recipe
}
