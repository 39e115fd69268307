pub mod audit;

pub use audit::AuditLog;

use crate::paper::{Paper, Specialty};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

/// Directory name for papers judged not healthcare-related.
pub const DISCARDED_DIR: &str = "discarded";

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors that can occur while persisting a record
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct ClassifiedRecord<'a> {
    #[serde(flatten)]
    paper: &'a Paper,
    specialty: Specialty,
    classified_at: DateTime<Utc>,
}

#[derive(Serialize)]
struct DiscardedRecord<'a> {
    #[serde(flatten)]
    paper: &'a Paper,
    discard_reason: &'a str,
    discarded_at: DateTime<Utc>,
}

/// Writes classified and discarded papers as per-item JSON files under a
/// specialty- or discard-named directory, with an audit line per decision.
///
/// Re-saving the same id overwrites the prior file: last run wins, no
/// versioning.
pub struct PaperStore {
    data_dir: PathBuf,
    audit: Arc<AuditLog>,
}

impl PaperStore {
    pub fn new(data_dir: impl Into<PathBuf>, audit: Arc<AuditLog>) -> Self {
        Self {
            data_dir: data_dir.into(),
            audit,
        }
    }

    /// Save a classified paper to its specialty folder.
    pub fn save_healthcare(&self, paper: &Paper, specialty: Specialty) -> StorageResult<PathBuf> {
        let record = ClassifiedRecord {
            paper,
            specialty,
            classified_at: Utc::now(),
        };
        let path = self.write_record(specialty.as_str(), &paper.id, &record)?;

        self.audit.info(&format!(
            "SAVED | specialty={} | id={} | title={}",
            specialty,
            paper.id,
            paper.title_preview(60)
        ));

        Ok(path)
    }

    /// Save a discarded (non-healthcare) paper with its discard reason.
    pub fn save_discarded(&self, paper: &Paper, reason: &str) -> StorageResult<PathBuf> {
        let record = DiscardedRecord {
            paper,
            discard_reason: reason,
            discarded_at: Utc::now(),
        };
        let path = self.write_record(DISCARDED_DIR, &paper.id, &record)?;

        self.audit.info(&format!(
            "DISCARDED | id={} | reason={} | title={}",
            paper.id,
            reason,
            paper.title_preview(60)
        ));

        Ok(path)
    }

    fn write_record<T: Serialize>(
        &self,
        folder: &str,
        id: &str,
        record: &T,
    ) -> StorageResult<PathBuf> {
        let dir = self.data_dir.join(folder);
        fs::create_dir_all(&dir)?;

        let path = dir.join(format!("{}.json", safe_file_stem(id)));
        let json = serde_json::to_string_pretty(record)?;
        fs::write(&path, json)?;

        Ok(path)
    }
}

/// Derive a filename stem from a paper id: the segment after the last `/`,
/// with any remaining separators replaced by underscores. arXiv ids are URLs
/// like `http://arxiv.org/abs/2401.01234v1`.
pub fn safe_file_stem(id: &str) -> String {
    id.rsplit('/')
        .next()
        .unwrap_or(id)
        .replace(['/', '\\'], "_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn store_in(dir: &Path) -> PaperStore {
        let audit = Arc::new(AuditLog::open(&dir.join("logs")).unwrap());
        PaperStore::new(dir.join("data"), audit)
    }

    fn sample_paper() -> Paper {
        Paper {
            id: "http://arxiv.org/abs/1234.5678".to_string(),
            title: "A Study of Cardiac MRI Segmentation".to_string(),
            summary: "We segment hearts.".to_string(),
            authors: vec!["Alice Example".to_string()],
            published: "2024-01-14T12:00:00Z".to_string(),
            link: "http://arxiv.org/abs/1234.5678".to_string(),
        }
    }

    #[test]
    fn test_safe_file_stem() {
        assert_eq!(safe_file_stem("http://arxiv.org/abs/1234.5678"), "1234.5678");
        assert_eq!(safe_file_stem("2401.01234v1"), "2401.01234v1");
        assert_eq!(safe_file_stem(""), "");
    }

    #[test]
    fn test_save_healthcare_writes_specialty_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        let path = store
            .save_healthcare(&sample_paper(), Specialty::Cardiology)
            .unwrap();

        assert_eq!(path, dir.path().join("data/cardiology/1234.5678.json"));

        let record: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(record["specialty"], "cardiology");
        assert_eq!(record["id"], "http://arxiv.org/abs/1234.5678");
        assert_eq!(record["title"], "A Study of Cardiac MRI Segmentation");
        assert!(record["classified_at"].is_string());
        assert!(record.get("discard_reason").is_none());
    }

    #[test]
    fn test_save_discarded_writes_reason_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        let path = store
            .save_discarded(&sample_paper(), "this is about astrophysics")
            .unwrap();

        assert_eq!(path, dir.path().join("data/discarded/1234.5678.json"));

        let record: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(record["discard_reason"], "this is about astrophysics");
        assert!(record["discarded_at"].is_string());
        assert!(record.get("specialty").is_none());
    }

    #[test]
    fn test_resave_overwrites_prior_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        let paper = sample_paper();

        let first = store
            .save_healthcare(&paper, Specialty::Cardiology)
            .unwrap();
        let second = store
            .save_healthcare(&paper, Specialty::Cardiology)
            .unwrap();
        assert_eq!(first, second);

        let dir_entries = fs::read_dir(dir.path().join("data/cardiology"))
            .unwrap()
            .count();
        assert_eq!(dir_entries, 1);
    }

    #[test]
    fn test_decisions_land_in_audit_log() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        store
            .save_healthcare(&sample_paper(), Specialty::Dermatology)
            .unwrap();
        store
            .save_discarded(&sample_paper(), "not healthcare related")
            .unwrap();

        let log = fs::read_to_string(dir.path().join("logs/audit.log")).unwrap();
        assert!(log.contains("SAVED | specialty=dermatology | id=http://arxiv.org/abs/1234.5678"));
        assert!(log.contains("DISCARDED | id=http://arxiv.org/abs/1234.5678 | reason=not healthcare related"));
    }

    #[test]
    fn test_non_ascii_survives_serialization() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        let mut paper = sample_paper();
        paper.title = "Étude cardiaque".to_string();

        let path = store
            .save_healthcare(&paper, Specialty::Cardiology)
            .unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("Étude cardiaque"));
    }
}
