use log::{error, info};
use rand::Rng;
use std::io::{self, BufRead, Write};

use crate::config::AppConfig;
use crate::error::RecipeError;
use crate::fetch_recipe;
use crate::model::Recipe;
use crate::navigator::{NavAction, StepNavigator};
use crate::output::{render_all_steps, render_ingredients, sanitize_filename, save_recipe};
use crate::search::SearchLinks;
use crate::suggest::suggest_recipe;

/// One interactive run: the configuration, the recipe fetched for this run
/// and the random source used for suggestions.
pub struct Session<R: Rng> {
    config: AppConfig,
    rng: R,
    recipe: Option<Recipe>,
}

/// Writes `message`, then reads one trimmed line. `None` at end of input.
fn prompt<I: BufRead, O: Write>(
    input: &mut I,
    out: &mut O,
    message: &str,
) -> io::Result<Option<String>> {
    write!(out, "{message}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

impl<R: Rng> Session<R> {
    pub fn new(config: AppConfig, rng: R) -> Self {
        Self {
            config,
            rng,
            recipe: None,
        }
    }

    pub fn recipe(&self) -> Option<&Recipe> {
        self.recipe.as_ref()
    }

    /// Fetches and extracts the recipe at `url`. On failure no record is kept.
    pub fn load(&mut self, url: &str) -> Result<&Recipe, RecipeError> {
        self.recipe = None;
        let recipe = fetch_recipe(url, &self.config)?;
        Ok(self.recipe.insert(recipe))
    }

    /// Random URL from the configured suggestion list
    pub fn suggest(&mut self) -> Option<String> {
        suggest_recipe(&self.config.suggestions, &mut self.rng).map(str::to_string)
    }

    /// Drives the start menu, the fetch and then the action menu until the
    /// user exits or input ends.
    pub fn run<I: BufRead, O: Write>(&mut self, input: &mut I, out: &mut O) -> io::Result<()> {
        writeln!(out, "Welcome to the Recipe Assistant!")?;
        writeln!(out, "1. Enter Recipe URL")?;
        writeln!(out, "2. Suggest a Recipe")?;

        let Some(choice) = prompt(input, out, "Choose an option: ")? else {
            return Ok(());
        };

        let url = match choice.as_str() {
            "1" => match prompt(input, out, "Enter the recipe URL: ")? {
                Some(url) => url,
                None => return Ok(()),
            },
            "2" => {
                let Some(suggested) = self.suggest() else {
                    writeln!(out, "No suggestions available. Exiting.")?;
                    return Ok(());
                };
                writeln!(out, "Suggested Recipe URL: {suggested}")?;
                let answer = prompt(input, out, "Would you like to use this URL? (yes/no): ")?;
                if !answer.is_some_and(|a| a.eq_ignore_ascii_case("yes")) {
                    writeln!(out, "No URL selected. Exiting.")?;
                    return Ok(());
                }
                suggested
            }
            _ => {
                writeln!(out, "Invalid choice. Exiting.")?;
                return Ok(());
            }
        };

        if let Err(e) = self.load(&url) {
            error!("Failed to load recipe from {}: {}", url, e);
            writeln!(out, "Error fetching recipe: {e}")?;
        }

        match &self.recipe {
            Some(recipe) => self.action_menu(recipe, input, out),
            None => {
                writeln!(out, "Failed to retrieve recipe.")?;
                Ok(())
            }
        }
    }

    fn action_menu<I: BufRead, O: Write>(
        &self,
        recipe: &Recipe,
        input: &mut I,
        out: &mut O,
    ) -> io::Result<()> {
        loop {
            writeln!(out, "\nWhat would you like to do?")?;
            writeln!(out, "1. Display Ingredients")?;
            writeln!(out, "2. Show Preparation Steps")?;
            writeln!(out, "3. Show All Steps")?;
            writeln!(out, "4. Search Online")?;
            writeln!(out, "5. Save Full Recipe (Text File)")?;
            writeln!(out, "6. Exit")?;

            let Some(choice) = prompt(input, out, "Enter your choice: ")? else {
                return Ok(());
            };

            match choice.as_str() {
                "1" => write!(out, "{}", render_ingredients(recipe))?,
                "2" => navigate_steps(recipe, input, out)?,
                "3" => write!(out, "{}", render_all_steps(recipe))?,
                "4" => {
                    let Some(query) = prompt(input, out, "Enter search query: ")? else {
                        return Ok(());
                    };
                    writeln!(out, "{}", SearchLinks::new(&query))?;
                }
                "5" => match save_recipe(recipe, &self.config.output_dir) {
                    Ok(_) => {
                        writeln!(out, "Recipe saved to {}.", sanitize_filename(&recipe.title))?
                    }
                    Err(e) => {
                        error!("Failed to save recipe: {}", e);
                        writeln!(out, "Failed to save recipe: {e}")?;
                    }
                },
                "6" => {
                    info!("Session finished");
                    writeln!(out, "Goodbye!")?;
                    return Ok(());
                }
                _ => writeln!(out, "Invalid choice.")?,
            }
        }
    }
}

fn navigate_steps<I: BufRead, O: Write>(
    recipe: &Recipe,
    input: &mut I,
    out: &mut O,
) -> io::Result<()> {
    let mut navigator = StepNavigator::new(&recipe.steps);

    while !navigator.is_finished() {
        writeln!(out, "{}", navigator.render_current())?;

        let Some(choice) = prompt(input, out, "1. Next\n2. Previous\n3. Exit\nChoose an option: ")?
        else {
            break;
        };

        match NavAction::from_choice(&choice) {
            Some(action) => {
                if let Some(notice) = navigator.apply(action).notice() {
                    writeln!(out, "{notice}")?;
                }
            }
            None => writeln!(out, "Invalid option. Try again.")?,
        }
    }

    Ok(())
}
