use crate::config::RecipeConfig;
use crate::model::{recipe_schema, Recipe};
use crate::providers::{build_conversion_prompt, LlmProvider, OpenAIProvider};
use crate::ImportError;
use log::{debug, info};

/// Turns raw recipe text into a validated [`Recipe`] through an LLM provider
pub struct RecipeConverter {
    provider: Box<dyn LlmProvider>,
    language: Option<String>,
}

impl RecipeConverter {
    /// Create a converter backed by the OpenAI provider described by `config`
    pub fn from_config(config: &RecipeConfig) -> Result<Self, ImportError> {
        let provider = OpenAIProvider::new(config)?;
        Ok(RecipeConverter {
            provider: Box::new(provider),
            language: config.language.clone(),
        })
    }

    /// Create a converter around any provider
    pub fn with_provider(provider: Box<dyn LlmProvider>) -> Self {
        RecipeConverter {
            provider,
            language: None,
        }
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Convert recipe text into a structured recipe
    ///
    /// The provider's answer is decoded into [`Recipe`] and validated locally;
    /// anything that does not fit is reported as
    /// [`ImportError::SchemaValidationError`].
    pub async fn convert(&self, recipe_text: &str) -> Result<Recipe, ImportError> {
        let prompt = build_conversion_prompt(recipe_text, self.language.as_deref());
        debug!(
            "Converting {} characters with {}",
            recipe_text.len(),
            self.provider.provider_name()
        );

        let value = self.provider.parse(&prompt, &recipe_schema()).await?;

        let recipe: Recipe = serde_json::from_value(value)
            .map_err(|e| ImportError::SchemaValidationError(e.to_string()))?;
        recipe.validate()?;

        info!(
            "Converted '{}' ({} ingredients, {} steps)",
            recipe.title,
            recipe.ingredients.len(),
            recipe.instructions.len()
        );
        Ok(recipe)
    }
}
