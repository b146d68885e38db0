//! Source adapters for the two external bibliographic APIs.
//!
//! Each adapter returns explicit [`SourceResult`]s; fallbacks are decided by the
//! resolver, never inside an adapter. The traits are the seam for test doubles.

mod arxiv;
mod dblp;
pub mod dblp_url;

pub use arxiv::{ArxivSource, AtomEntry, arxiv_id, parse_atom_entry};
pub use dblp::DblpSource;
pub use dblp_url::UrlResolver;

use crate::error::SourceResult;
use crate::models::{Candidate, DblpRecord};

/// Fuzzy title search against a publication index (DBLP).
#[async_trait::async_trait]
pub trait PublicationSearch: Send + Sync {
    /// All hits for `title` as candidates, best first.
    async fn search_by_title(&self, title: &str) -> SourceResult<Vec<Candidate>>;

    /// The single top-ranked hit for `title`, unformatted.
    ///
    /// Fails with `NoCandidates` when the index has no hits.
    async fn best_match(&self, title: &str) -> SourceResult<DblpRecord>;

    /// Turn a record URL into an outbound link, fetching the record if allowed.
    async fn resolve_url(&self, record_url: &str, allow_fetch: bool) -> SourceResult<String>;
}

/// Lookup of a single article by URL (arXiv).
#[async_trait::async_trait]
pub trait ArticleMetadata: Send + Sync {
    /// The article behind `url`, scored as an exact match.
    async fn fetch_by_url(&self, url: &str) -> SourceResult<Candidate>;
}
