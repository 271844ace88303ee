use crate::config::RecipeConfig;
use crate::providers::LlmProvider;
use crate::ImportError;
use async_trait::async_trait;
use log::{debug, info};
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use std::time::Duration;

/// Structured-output client for the OpenAI Responses API
pub struct OpenAIProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAIProvider {
    /// Create a new OpenAI provider from configuration
    ///
    /// Fails with [`ImportError::AuthenticationError`] when neither the
    /// configuration nor `OPENAI_API_KEY` holds a key.
    pub fn new(config: &RecipeConfig) -> Result<Self, ImportError> {
        // Try config first, then fall back to environment variable
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| {
                std::env::var("OPENAI_API_KEY")
                    .ok()
                    .filter(|key| !key.trim().is_empty())
            })
            .ok_or_else(|| {
                ImportError::AuthenticationError(
                    "OPENAI_API_KEY not found in config or environment".to_string(),
                )
            })?;

        let mut builder = Client::builder();
        if let Some(seconds) = config.timeout {
            let timeout = Duration::try_from_secs_f64(seconds).map_err(|e| {
                ImportError::ConfigError(::config::ConfigError::Message(format!(
                    "invalid timeout {}: {}",
                    seconds, e
                )))
            })?;
            builder = builder.timeout(timeout);
        }

        Ok(OpenAIProvider {
            client: builder.build()?,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String, model: String) -> Self {
        OpenAIProvider {
            client: Client::new(),
            api_key,
            base_url,
            model,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl LlmProvider for OpenAIProvider {
    fn provider_name(&self) -> &str {
        "openai"
    }

    async fn parse(&self, prompt: &str, schema: &Value) -> Result<Value, ImportError> {
        info!("Requesting structured recipe from {}", self.model);

        let response = self
            .client
            .post(format!("{}/v1/responses", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&json!({
                "model": self.model,
                "input": [
                    {"role": "user", "content": prompt}
                ],
                "text": {
                    "format": {
                        "type": "json_schema",
                        "name": "Recipe",
                        "schema": schema,
                        "strict": true
                    }
                }
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = error_message(&response.text().await?);
            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    ImportError::AuthenticationError(message)
                }
                _ => ImportError::ApiError {
                    status: status.as_u16(),
                    message,
                },
            });
        }

        let response_body: Value = response.json().await?;
        debug!("{:?}", response_body);

        let text = output_text(&response_body)?;
        serde_json::from_str(text).map_err(|e| {
            ImportError::SchemaValidationError(format!("model output is not valid JSON: {}", e))
        })
    }
}

/// Pull the human-readable message out of an API error body
fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| value["error"]["message"].as_str().map(String::from))
        .unwrap_or_else(|| body.trim().to_string())
}

/// Find the first output text of the first assistant message
fn output_text(body: &Value) -> Result<&str, ImportError> {
    if body["status"] == "incomplete" {
        let reason = body["incomplete_details"]["reason"]
            .as_str()
            .unwrap_or("unknown reason");
        return Err(ImportError::SchemaValidationError(format!(
            "response is incomplete: {}",
            reason
        )));
    }

    let items = body["output"].as_array().ok_or_else(|| {
        ImportError::SchemaValidationError("response has no output".to_string())
    })?;

    for item in items.iter().filter(|item| item["type"] == "message") {
        for content in item["content"].as_array().into_iter().flatten() {
            match content["type"].as_str() {
                Some("output_text") => {
                    return content["text"].as_str().ok_or_else(|| {
                        ImportError::SchemaValidationError(
                            "output text item has no text".to_string(),
                        )
                    });
                }
                Some("refusal") => {
                    let reason = content["refusal"].as_str().unwrap_or("no reason given");
                    return Err(ImportError::SchemaValidationError(format!(
                        "model refused to answer: {}",
                        reason
                    )));
                }
                _ => {}
            }
        }
    }

    Err(ImportError::SchemaValidationError(
        "response contains no output text".to_string(),
    ))
}
