use serde::{Deserialize, Serialize};

/// A single paper record as fetched from the arXiv API.
///
/// All fields are source-provided; missing feed fields default to empty
/// values rather than failing the parse. The `id` is the stable dedup key
/// and the basis for the storage filename.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paper {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub authors: Vec<String>,
    pub published: String,
    pub link: String,
}

/// Closed set of medical specialties a healthcare paper is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Specialty {
    #[serde(rename = "cardiology")]
    Cardiology,
    #[serde(rename = "dermatology")]
    Dermatology,
    #[serde(rename = "anesthesiology")]
    Anesthesiology,
    #[serde(rename = "other")]
    Other,
}

impl Specialty {
    /// Match priority when scanning a model response. `Other` is last so it
    /// only wins when no concrete specialty term is present.
    pub const ALL: [Specialty; 4] = [
        Specialty::Cardiology,
        Specialty::Dermatology,
        Specialty::Anesthesiology,
        Specialty::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Specialty::Cardiology => "cardiology",
            Specialty::Dermatology => "dermatology",
            Specialty::Anesthesiology => "anesthesiology",
            Specialty::Other => "other",
        }
    }

    /// Find the first known specialty term contained anywhere in a model
    /// response. Containment rather than exact match: extra words around the
    /// label still classify. Falls back to `Other` when nothing matches.
    pub fn detect(response: &str) -> Self {
        let normalized = response.trim().to_lowercase();
        for specialty in Specialty::ALL {
            if normalized.contains(specialty.as_str()) {
                return specialty;
            }
        }
        Specialty::Other
    }
}

impl Paper {
    /// Title clipped for progress and audit lines.
    pub fn title_preview(&self, max_chars: usize) -> &str {
        truncate_chars(&self.title, max_chars)
    }
}

/// Truncate to at most `max` characters on a char boundary.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

impl std::fmt::Display for Specialty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
