use crate::paper::{truncate_chars, Paper};

/// Abstracts are clipped to this many characters before being embedded in a
/// prompt, keeping requests within the small token budget.
pub const ABSTRACT_PREVIEW_CHARS: usize = 300;

/// Prompt for the binary healthcare/not-healthcare decision. The model is
/// instructed to answer `yes` or `no`, a comma, then a one-sentence reason.
pub fn healthcare_prompt(paper: &Paper) -> String {
    format!(
        "Is this academic paper related to healthcare, medicine, or clinical science?\n\
         Title: {}\n\
         Abstract: {}\n\n\
         Reply with ONLY: yes or no, then a comma, then a one-sentence reason.\n\
         Example: yes, this paper discusses cardiac surgery techniques.",
        paper.title,
        truncate_chars(&paper.summary, ABSTRACT_PREVIEW_CHARS)
    )
}

/// Prompt for the closed-set specialty decision.
pub fn specialty_prompt(paper: &Paper) -> String {
    format!(
        "Classify this medical paper into ONE specialty:\n\
         - cardiology (heart, cardiovascular)\n\
         - dermatology (skin, dermal)\n\
         - anesthesiology (anesthesia, pain management, sedation)\n\
         - other (anything else)\n\n\
         Title: {}\n\
         Abstract: {}\n\n\
         Reply with ONLY one word: cardiology, dermatology, anesthesiology, or other",
        paper.title,
        truncate_chars(&paper.summary, ABSTRACT_PREVIEW_CHARS)
    )
}
