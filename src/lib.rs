pub mod builder;
pub mod config;
pub mod converter;
pub mod error;
pub mod file_to_text;
pub mod model;
pub mod providers;
pub mod table;

pub use builder::{InputSource, RecipeImporter, RecipeImporterBuilder};
pub use config::RecipeConfig;
pub use converter::RecipeConverter;
pub use error::ImportError;
pub use model::{Ingredient, Recipe};
pub use table::{ingredients_table, render_recipe};

use log::info;
use std::path::Path;

/// Convert a plain-text or PDF recipe file into a structured recipe
///
/// The credential is resolved before the file is read, and the file is read
/// before any request is made.
pub async fn convert_file(
    path: impl AsRef<Path>,
    config: &RecipeConfig,
) -> Result<Recipe, ImportError> {
    let path = path.as_ref();
    let converter = RecipeConverter::from_config(config)?;

    info!("Reading recipe from {}", path.display());
    let text = file_to_text::extract(path)?;

    converter.convert(&text).await
}

/// Convert recipe text into a structured recipe
pub async fn convert_text(text: &str, config: &RecipeConfig) -> Result<Recipe, ImportError> {
    RecipeConverter::from_config(config)?.convert(text).await
}
