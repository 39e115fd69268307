pub mod classifier;
pub mod config;
pub mod prompts;
pub mod service;

pub use classifier::{Classifier, HealthcareDecision};
pub use config::LlmConfig;
pub use service::{Completion, LlmError, LlmService};
