use std::path::PathBuf;
use std::time::Duration;

use crate::{convert_file, convert_text, ImportError, Recipe, RecipeConfig};

/// Represents the input source for a recipe
#[derive(Debug, Clone)]
pub enum InputSource {
    /// Plain-text or PDF file, chosen by extension
    File(PathBuf),
    /// Recipe text already in memory
    Text(String),
}

/// Builder for configuring and executing a recipe conversion
#[derive(Debug, Default)]
pub struct RecipeImporterBuilder {
    source: Option<InputSource>,
    config: Option<RecipeConfig>,
    timeout: Option<Duration>,
    api_key: Option<String>,
    model: Option<String>,
    base_url: Option<String>,
    language: Option<String>,
}

impl RecipeImporterBuilder {
    /// Set the input source to a file
    ///
    /// # Example
    /// ```
    /// use recipe_extract::RecipeImporter;
    ///
    /// let builder = RecipeImporter::builder()
    ///     .path("recipe_ingredients/mac_and_cheese_recipe.txt");
    /// ```
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = Some(InputSource::File(path.into()));
        self
    }

    /// Set the input source to plain text
    ///
    /// # Example
    /// ```
    /// use recipe_extract::RecipeImporter;
    ///
    /// let builder = RecipeImporter::builder()
    ///     .text("2 cups flour\n1 tsp salt\nMix and bake.");
    /// ```
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.source = Some(InputSource::Text(text.into()));
        self
    }

    /// Start from an explicit configuration instead of the default one
    ///
    /// Values set with the other builder methods override it.
    pub fn config(mut self, config: RecipeConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set a timeout for the model request
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Set the API key for the model endpoint
    ///
    /// This allows passing the API key directly instead of relying on
    /// environment variables or config files.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the hosted model identifier
    ///
    /// # Example
    /// ```
    /// use recipe_extract::RecipeImporter;
    ///
    /// let builder = RecipeImporter::builder()
    ///     .text("1 egg")
    ///     .model("gpt-4o");
    /// ```
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Point the client at a different API host (proxies, test servers)
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Hint the language the recipe is written in
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    fn resolved_config(&mut self) -> RecipeConfig {
        let mut config = self.config.take().unwrap_or_default();
        if let Some(key) = self.api_key.take() {
            config.api_key = Some(key);
        }
        if let Some(model) = self.model.take() {
            config.model = model;
        }
        if let Some(url) = self.base_url.take() {
            config.base_url = url;
        }
        if let Some(timeout) = self.timeout {
            config.timeout = Some(timeout.as_secs_f64());
        }
        if let Some(language) = self.language.take() {
            config.language = Some(language);
        }
        config
    }

    /// Build and execute the conversion
    ///
    /// # Errors
    /// Returns `ImportError` if:
    /// - No input source was specified, or the text is blank
    /// - The input file cannot be read or decoded
    /// - The model request fails or its answer does not fit the schema
    ///
    /// # Example
    /// ```no_run
    /// # use recipe_extract::RecipeImporter;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let recipe = RecipeImporter::builder()
    ///     .path("recipe.pdf")
    ///     .build()
    ///     .await?;
    /// println!("{}", recipe.title);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn build(mut self) -> Result<Recipe, ImportError> {
        let source = self.source.take().ok_or_else(|| {
            ImportError::BuilderError(
                "No input source specified. Use .path() or .text()".to_string(),
            )
        })?;
        let config = self.resolved_config();

        match source {
            InputSource::File(path) => convert_file(&path, &config).await,
            InputSource::Text(text) => {
                if text.trim().is_empty() {
                    return Err(ImportError::BuilderError(
                        "Recipe text cannot be empty".to_string(),
                    ));
                }
                convert_text(&text, &config).await
            }
        }
    }
}

/// Main entry point for the builder API
pub struct RecipeImporter;

impl RecipeImporter {
    /// Creates a new builder for converting recipes
    pub fn builder() -> RecipeImporterBuilder {
        RecipeImporterBuilder::default()
    }
}
