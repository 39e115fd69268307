pub mod feed;

use crate::paper::Paper;
use std::collections::HashSet;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

/// Public arXiv query API endpoint.
pub const ARXIV_API_URL: &str = "https://export.arxiv.org/api/query";

/// Fixed search queries covering the medical domains of interest.
pub const SEARCH_QUERIES: &[&str] = &[
    "cat:q-bio.NC", // Neuroscience
    "cat:q-bio.GN", // Genomics
    "ti:cardiology",
    "ti:dermatology",
    "ti:anesthesia",
    "ti:medicine OR ti:clinical OR ti:diagnosis",
];

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors that can occur while fetching one query.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("feed parse failed: {0}")]
    Feed(#[from] quick_xml::Error),
}

/// Fetches paper metadata from the arXiv API.
pub struct ArxivFetcher {
    client: reqwest::Client,
    base_url: String,
    max_per_query: usize,
}

impl ArxivFetcher {
    pub fn new(max_per_query: usize) -> Result<Self, FetchError> {
        Self::with_base_url(ARXIV_API_URL, max_per_query)
    }

    /// Build a fetcher against a custom endpoint. Used by tests to point at
    /// a local mock server.
    pub fn with_base_url(base_url: &str, max_per_query: usize) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
            max_per_query,
        })
    }

    /// Fetch one page of results for a single query, newest first.
    pub async fn fetch_query(&self, query: &str) -> Result<Vec<Paper>, FetchError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("search_query", query),
                ("max_results", &self.max_per_query.to_string()),
                ("sortBy", "submittedDate"),
                ("sortOrder", "descending"),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        Ok(feed::parse_feed(&body)?)
    }

    /// Run every query in [`SEARCH_QUERIES`] and merge the results,
    /// deduplicated by paper id (first occurrence wins).
    ///
    /// A failed query is logged and contributes nothing; it never aborts the
    /// run, so papers from the remaining queries still appear.
    pub async fn fetch_all(&self) -> Vec<Paper> {
        let mut seen_ids: HashSet<String> = HashSet::new();
        let mut all_papers = Vec::new();

        for query in SEARCH_QUERIES {
            match self.fetch_query(query).await {
                Ok(papers) => {
                    for paper in papers {
                        if seen_ids.insert(paper.id.clone()) {
                            all_papers.push(paper);
                        }
                    }
                }
                Err(e) => {
                    warn!("Failed to fetch query={}: {}", query, e);
                }
            }
        }

        info!("Total papers fetched: {}", all_papers.len());
        all_papers
    }
}
