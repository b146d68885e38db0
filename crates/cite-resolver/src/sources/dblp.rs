//! DBLP publication search adapter.

use crate::client::HttpClient;
use crate::config::Config;
use crate::error::{Origin, SourceError, SourceResult};
use crate::models::{Candidate, DblpRecord, SearchResponse, rank_candidates};

use super::PublicationSearch;
use super::dblp_url::{UrlResolver, resolve_offline};

/// Title search against the DBLP publication API.
#[derive(Debug, Clone)]
pub struct DblpSource {
    http: HttpClient,
    search_url: String,
    urls: UrlResolver,
}

impl DblpSource {
    /// Create an adapter for the search endpoint named in `config`.
    #[must_use]
    pub fn new(http: HttpClient, config: &Config) -> Self {
        Self {
            urls: UrlResolver::new(http.clone()),
            http,
            search_url: config.dblp_search_url.clone(),
        }
    }

    /// Run the search and decode every hit, in source order.
    async fn fetch_records(&self, title: &str) -> SourceResult<Vec<DblpRecord>> {
        tracing::info!(url = %self.search_url, title, "Grabbing DBLP information");

        let response: SearchResponse = self
            .http
            .get_json(&self.search_url, &[("format", "json"), ("q", title)])
            .await
            .map_err(|e| SourceError::unavailable(Origin::Dblp, e))?;

        Ok(response.into_records())
    }
}

#[async_trait::async_trait]
impl PublicationSearch for DblpSource {
    async fn search_by_title(&self, title: &str) -> SourceResult<Vec<Candidate>> {
        let records = self.fetch_records(title).await?;

        let mut candidates: Vec<Candidate> = records
            .into_iter()
            .map(|record| {
                let url = record.ee.clone().unwrap_or_else(|| resolve_offline(&record.record_url));
                record.into_candidate(title, url)
            })
            .collect();
        rank_candidates(&mut candidates);

        tracing::debug!(title, count = candidates.len(), "Ranked DBLP candidates");
        Ok(candidates)
    }

    async fn best_match(&self, title: &str) -> SourceResult<DblpRecord> {
        let records = self.fetch_records(title).await?;

        // min_by_key keeps the first of equal keys, same as rank_candidates.
        records
            .into_iter()
            .min_by_key(|record| record.ranking_key(title))
            .ok_or_else(|| SourceError::no_candidates(Origin::Dblp, title))
    }

    async fn resolve_url(&self, record_url: &str, allow_fetch: bool) -> SourceResult<String> {
        self.urls.resolve_url(record_url, allow_fetch).await
    }
}
