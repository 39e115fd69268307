use crate::fetch::ArxivFetcher;
use crate::llm::Classifier;
use crate::storage::{AuditLog, PaperStore};
use anyhow::Result;
use colored::Colorize;
use std::collections::BTreeMap;
use std::sync::Arc;

/// In-memory tally for a single run. Reflects only this run, never
/// cumulative history across runs.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RunStats {
    pub total: usize,
    pub healthcare: usize,
    pub discarded: usize,
    pub specialties: BTreeMap<String, usize>,
}

/// Drives one run: fetch everything once, then classify and persist each
/// paper in fetched order.
///
/// Fetch failures are contained per query inside the fetcher; a classifier
/// or storage error for any single paper aborts the whole run.
pub struct Pipeline {
    fetcher: ArxivFetcher,
    classifier: Classifier,
    store: PaperStore,
    audit: Arc<AuditLog>,
}

impl Pipeline {
    pub fn new(
        fetcher: ArxivFetcher,
        classifier: Classifier,
        store: PaperStore,
        audit: Arc<AuditLog>,
    ) -> Self {
        Self {
            fetcher,
            classifier,
            store,
            audit,
        }
    }

    pub async fn run(&self) -> Result<RunStats> {
        self.audit.banner();
        self.audit.info("Agent started");

        let papers = self.fetcher.fetch_all().await;
        self.audit.info(&format!(
            "Fetched {} papers — starting classification...",
            papers.len()
        ));

        let mut stats = RunStats {
            total: papers.len(),
            ..Default::default()
        };

        for (i, paper) in papers.iter().enumerate() {
            println!(
                "\n{} {}...",
                format!("[{}/{}]", i + 1, papers.len()).cyan(),
                paper.title_preview(70)
            );

            let decision = self.classifier.is_healthcare(paper).await?;

            if !decision.healthcare {
                self.store.save_discarded(paper, &decision.reason)?;
                stats.discarded += 1;
                continue;
            }

            let specialty = self.classifier.classify_specialty(paper).await?;
            self.store.save_healthcare(paper, specialty)?;

            stats.healthcare += 1;
            *stats
                .specialties
                .entry(specialty.as_str().to_string())
                .or_insert(0) += 1;
        }

        self.audit.banner();
        self.audit.info(&format!(
            "Run complete | Total: {} | Healthcare: {} | Discarded: {}",
            stats.total, stats.healthcare, stats.discarded
        ));
        for (specialty, count) in &stats.specialties {
            self.audit.info(&format!("  {}: {} paper(s)", specialty, count));
        }
        self.audit.banner();

        Ok(stats)
    }
}
