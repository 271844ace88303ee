mod open_ai;
mod prompt;

pub use open_ai::OpenAIProvider;
pub use prompt::{build_conversion_prompt, RECIPE_CONVERTER_PROMPT};

use crate::ImportError;
use async_trait::async_trait;
use serde_json::Value;

/// A hosted model that turns a prompt into a value shaped by a JSON schema
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Get the provider name (e.g., "openai")
    fn provider_name(&self) -> &str;

    /// Ask the model to answer `prompt` with a value conforming to `schema`
    async fn parse(&self, prompt: &str, schema: &Value) -> Result<Value, ImportError>;
}
