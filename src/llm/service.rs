use crate::llm::config::LlmConfig;
use async_openai::{
    config::OpenAIConfig,
    types::{ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs},
    Client,
};
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when talking to the completion endpoint
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Request timeout")]
    Timeout,
}

/// One prompt in, one text response out. The seam that lets the classifier
/// run against a scripted double in tests.
#[async_trait]
pub trait Completion: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;
}

/// Completion service backed by an OpenAI-compatible endpoint (Groq).
pub struct LlmService {
    client: Client<OpenAIConfig>,
    config: LlmConfig,
}

impl LlmService {
    /// Create a new LLM service from configuration
    pub fn new(config: LlmConfig) -> Result<Self, LlmError> {
        config.validate().map_err(LlmError::ConfigError)?;

        let openai_config = OpenAIConfig::new()
            .with_api_key(&config.api_key)
            .with_api_base(&config.api_base);

        let client = Client::with_config(openai_config);

        Ok(Self { client, config })
    }

    /// Create a service from environment variables
    pub fn from_env() -> Result<Self, LlmError> {
        let config = LlmConfig::from_env().map_err(LlmError::ConfigError)?;
        Self::new(config)
    }
}

#[async_trait]
impl Completion for LlmService {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let message = ChatCompletionRequestUserMessageArgs::default()
            .content(prompt)
            .build()
            .map(ChatCompletionRequestMessage::User)
            .map_err(|e| LlmError::ApiError(e.to_string()))?;

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.config.model)
            .messages(vec![message])
            .temperature(self.config.temperature)
            .max_completion_tokens(self.config.max_tokens)
            .build()
            .map_err(|e| LlmError::ApiError(e.to_string()))?;

        tracing::debug!(
            "Sending classification request: model={}, prompt_len={}",
            self.config.model,
            prompt.len()
        );

        let response = tokio::time::timeout(
            Duration::from_secs(self.config.timeout_secs),
            self.client.chat().create(request),
        )
        .await
        .map_err(|_| LlmError::Timeout)?
        .map_err(|e| LlmError::ApiError(e.to_string()))?;

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.as_ref())
            .ok_or_else(|| LlmError::ParseError("No response content".to_string()))?
            .to_string();

        tracing::debug!("Received response: {} chars", content.len());

        Ok(content)
    }
}
