use log::info;
use std::fmt::Write as _;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::RecipeError;
use crate::model::Recipe;

const FILE_EXTENSION: &str = ".txt";
const RESERVED_CHARS: [char; 9] = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Builds a file name from a recipe title by replacing characters that are
/// not allowed in file names with `_` and appending `.txt`.
pub fn sanitize_filename(title: &str) -> String {
    let mut name: String = title
        .chars()
        .map(|c| if RESERVED_CHARS.contains(&c) { '_' } else { c })
        .collect();
    name.push_str(FILE_EXTENSION);
    name
}

fn push_bullets(out: &mut String, items: &[String]) {
    for item in items {
        let _ = writeln!(out, "- {item}");
    }
}

fn push_numbered_steps(out: &mut String, steps: &[String]) {
    for (i, step) in steps.iter().enumerate() {
        let _ = writeln!(out, "Step {}: {}", i + 1, step);
    }
}

/// Flat text layout written by [`save_recipe`]
pub fn render_recipe(recipe: &Recipe) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Title: {}\n", recipe.title);
    out.push_str("Ingredients:\n");
    push_bullets(&mut out, &recipe.ingredients);
    out.push_str("\nPreparation Steps:\n");
    push_numbered_steps(&mut out, &recipe.steps);

    if !recipe.categories.is_empty() {
        out.push_str("\nCategories:\n");
        push_bullets(&mut out, &recipe.categories);
    }
    if !recipe.tags.is_empty() {
        out.push_str("\nTags:\n");
        push_bullets(&mut out, &recipe.tags);
    }

    out
}

/// Listing shown by the "Display Ingredients" menu entry
pub fn render_ingredients(recipe: &Recipe) -> String {
    let mut out = String::from("Ingredients List:\n");
    push_bullets(&mut out, &recipe.ingredients);
    out
}

/// Listing shown by the "Show All Steps" menu entry
pub fn render_all_steps(recipe: &Recipe) -> String {
    let mut out = String::from("Complete Preparation Steps:\n");
    push_numbered_steps(&mut out, &recipe.steps);
    out
}

/// Writes the recipe into `dir`, overwriting any file with the same name.
pub fn save_recipe(recipe: &Recipe, dir: &Path) -> Result<PathBuf, RecipeError> {
    let path = dir.join(sanitize_filename(&recipe.title));

    let mut file = File::create(&path)?;
    file.write_all(render_recipe(recipe).as_bytes())?;

    info!("Saved recipe to {}", path.display());
    Ok(path)
}
