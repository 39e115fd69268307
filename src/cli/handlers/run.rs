use crate::fetch::ArxivFetcher;
use crate::llm::{Classifier, LlmService};
use crate::pipeline::Pipeline;
use crate::storage::{AuditLog, PaperStore};
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

pub async fn handle_run_command(
    max_per_query: usize,
    data_dir: PathBuf,
    log_dir: PathBuf,
) -> Result<()> {
    let service = LlmService::from_env()
        .context("LLM service initialization failed")?;
    let classifier = Classifier::new(Box::new(service));

    let fetcher = ArxivFetcher::new(max_per_query)
        .context("HTTP client initialization failed")?;

    let audit = Arc::new(AuditLog::open(&log_dir).with_context(|| {
        format!("failed to open audit log in {}", log_dir.display())
    })?);
    let store = PaperStore::new(data_dir, Arc::clone(&audit));

    let pipeline = Pipeline::new(fetcher, classifier, store, audit);
    let stats = pipeline.run().await?;

    info!(
        "Done: {} healthcare, {} discarded",
        stats.healthcare, stats.discarded
    );

    Ok(())
}
