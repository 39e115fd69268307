use serde::{Deserialize, Serialize};
use std::env;

/// Default hosted model; the Groq free tier serves it through an
/// OpenAI-compatible endpoint.
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";
pub const DEFAULT_API_BASE: &str = "https://api.groq.com/openai/v1";

/// Configuration for the LLM classification service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Groq API key
    pub api_key: String,

    /// Model identifier
    pub model: String,

    /// API base URL (OpenAI-compatible endpoint)
    pub api_base: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Maximum tokens for a classification response
    pub max_tokens: u32,

    /// Sampling temperature. Kept at 0.0 so repeated classifications of the
    /// same paper are deterministic.
    pub temperature: f32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            timeout_secs: 60,
            max_tokens: 50,
            temperature: 0.0,
        }
    }
}

impl LlmConfig {
    /// Load configuration from environment variables, reading a local `.env`
    /// file first if present.
    pub fn from_env() -> Result<Self, String> {
        Self::from_env_internal(true)
    }

    #[cfg(test)]
    fn from_env_no_dotenv() -> Result<Self, String> {
        Self::from_env_internal(false)
    }

    fn from_env_internal(load_dotenv: bool) -> Result<Self, String> {
        if load_dotenv {
            let _ = dotenv::dotenv();
        }

        let api_key = env::var("GROQ_API_KEY").map_err(|_| {
            "GROQ_API_KEY not found in environment. Please set it in .env file or environment variables."
        })?;

        if api_key.is_empty() {
            return Err("GROQ_API_KEY is empty".to_string());
        }

        let mut config = Self {
            api_key,
            ..Default::default()
        };

        if let Ok(model) = env::var("LLM_MODEL") {
            config.model = model;
        }

        if let Ok(api_base) = env::var("LLM_API_BASE") {
            config.api_base = api_base;
        }

        if let Ok(timeout) = env::var("LLM_REQUEST_TIMEOUT") {
            if let Ok(timeout_secs) = timeout.parse::<u64>() {
                config.timeout_secs = timeout_secs;
            }
        }

        if let Ok(max_tokens) = env::var("LLM_MAX_TOKENS") {
            if let Ok(tokens) = max_tokens.parse::<u32>() {
                config.max_tokens = tokens;
            }
        }

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.api_key.is_empty() {
            return Err("API key is empty".to_string());
        }

        if self.max_tokens == 0 {
            return Err("Max tokens must be greater than 0".to_string());
        }

        if !(0.0..=1.0).contains(&self.temperature) {
            return Err(format!(
                "Temperature must be between 0.0 and 1.0, got {}",
                self.temperature
            ));
        }

        Ok(())
    }
}
