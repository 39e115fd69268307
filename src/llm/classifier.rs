use crate::llm::prompts;
use crate::llm::service::{Completion, LlmError};
use crate::paper::{Paper, Specialty};

const DEFAULT_YES_REASON: &str = "healthcare related";
const DEFAULT_NO_REASON: &str = "not healthcare related";

/// Outcome of the binary healthcare check.
#[derive(Debug, Clone, PartialEq)]
pub struct HealthcareDecision {
    pub healthcare: bool,
    pub reason: String,
}

/// Classifies papers with two round-trips to the completion backend: one
/// binary healthcare decision, one closed-set specialty label.
///
/// Endpoint failures are not handled here; they propagate to the caller and
/// abort the run.
pub struct Classifier {
    backend: Box<dyn Completion>,
}

impl Classifier {
    pub fn new(backend: Box<dyn Completion>) -> Self {
        Self { backend }
    }

    /// Decide whether a paper is healthcare-related, with a one-sentence
    /// reason extracted from the model response.
    pub async fn is_healthcare(&self, paper: &Paper) -> Result<HealthcareDecision, LlmError> {
        let response = self.backend.complete(&prompts::healthcare_prompt(paper)).await?;
        Ok(parse_healthcare_response(&response))
    }

    /// Classify a confirmed healthcare paper into a medical specialty.
    pub async fn classify_specialty(&self, paper: &Paper) -> Result<Specialty, LlmError> {
        let response = self.backend.complete(&prompts::specialty_prompt(paper)).await?;
        Ok(Specialty::detect(&response))
    }
}

/// Parse a `yes/no, reason` response. The reason is whatever follows the
/// first comma, trimmed; an empty remainder falls back to a stock reason.
/// Any response not starting with `yes` counts as a no.
pub fn parse_healthcare_response(response: &str) -> HealthcareDecision {
    let normalized = response.trim().to_lowercase();
    let healthcare = normalized.starts_with("yes");

    let remainder = normalized
        .split_once(',')
        .map(|(_, rest)| rest.trim())
        .unwrap_or("");

    let reason = if remainder.is_empty() {
        if healthcare {
            DEFAULT_YES_REASON
        } else {
            DEFAULT_NO_REASON
        }
    } else {
        remainder
    };

    HealthcareDecision {
        healthcare,
        reason: reason.to_string(),
    }
}
