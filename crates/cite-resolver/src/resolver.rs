//! Citation resolution: query dispatch, cross-search and fallbacks.
//!
//! ```text
//! "Some Title"                -> DBLP search
//! https://arxiv.org/abs/<id>  -> arXiv fetch -> DBLP search on the fetched title
//! any other URL               -> nothing
//! ```
//!
//! Source failures never escape [`CitationResolver::resolve`]; they are logged and
//! degrade to fewer (or zero) candidates. Only cancellation is reported, through
//! [`CitationResolver::resolve_cancellable`].

use std::future::Future;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::client::HttpClient;
use crate::config::Config;
use crate::error::{SourceError, SourceResult};
use crate::formatters::format_citation;
use crate::models::Candidate;
use crate::sources::{ArticleMetadata, ArxivSource, DblpSource, PublicationSearch};

/// URL prefixes handled by the arXiv adapter.
const ARXIV_PREFIXES: [&str; 2] = ["http://arxiv.org", "https://arxiv.org"];

/// What a query string asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    /// Free text, searched as a title.
    Title,
    /// An arXiv abstract or PDF URL.
    Arxiv,
    /// A URL no adapter understands.
    Unsupported,
}

impl QueryKind {
    /// Classify a raw query.
    #[must_use]
    pub fn classify(query: &str) -> Self {
        if !query.starts_with("http") {
            Self::Title
        } else if ARXIV_PREFIXES.iter().any(|prefix| query.starts_with(prefix)) {
            Self::Arxiv
        } else {
            Self::Unsupported
        }
    }
}

/// Resolves citation queries against DBLP and arXiv.
#[derive(Clone)]
pub struct CitationResolver {
    dblp: Arc<dyn PublicationSearch>,
    arxiv: Arc<dyn ArticleMetadata>,
}

impl CitationResolver {
    /// Create a resolver talking to the endpoints in `config`.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let http = HttpClient::new(config)?;
        Ok(Self::with_sources(
            Arc::new(DblpSource::new(http.clone(), config)),
            Arc::new(ArxivSource::new(http, config)),
        ))
    }

    /// Create a resolver over arbitrary source implementations.
    #[must_use]
    pub fn with_sources(
        dblp: Arc<dyn PublicationSearch>,
        arxiv: Arc<dyn ArticleMetadata>,
    ) -> Self {
        Self { dblp, arxiv }
    }

    /// Candidates for `query`, best first. Never fails; empty when nothing was found
    /// or no source could be reached.
    pub async fn resolve(&self, query: &str) -> Vec<Candidate> {
        // A fresh token is never cancelled, so only the Ok arm is reachable.
        self.resolve_cancellable(query, &CancellationToken::new()).await.unwrap_or_default()
    }

    /// Like [`resolve`](Self::resolve), but aborts the in-flight request and
    /// returns [`SourceError::Cancelled`] once `cancel` fires.
    pub async fn resolve_cancellable(
        &self,
        query: &str,
        cancel: &CancellationToken,
    ) -> SourceResult<Vec<Candidate>> {
        match QueryKind::classify(query) {
            QueryKind::Title => {
                match guarded(cancel, self.dblp.search_by_title(query)).await {
                    Ok(candidates) => Ok(candidates),
                    Err(SourceError::Cancelled) => Err(SourceError::Cancelled),
                    Err(err) => {
                        tracing::warn!(query, error = %err, "DBLP search failed");
                        Ok(Vec::new())
                    }
                }
            }
            QueryKind::Arxiv => self.resolve_arxiv(query, cancel).await,
            QueryKind::Unsupported => {
                tracing::debug!(query, "Unsupported query source");
                Ok(Vec::new())
            }
        }
    }

    async fn resolve_arxiv(
        &self,
        url: &str,
        cancel: &CancellationToken,
    ) -> SourceResult<Vec<Candidate>> {
        let primary = match guarded(cancel, self.arxiv.fetch_by_url(url)).await {
            Ok(candidate) => candidate,
            Err(SourceError::Cancelled) => return Err(SourceError::Cancelled),
            Err(err) => {
                tracing::warn!(url, error = %err, "arXiv fetch failed");
                return Ok(Vec::new());
            }
        };

        if primary.title.is_empty() {
            return Ok(vec![primary]);
        }

        match guarded(cancel, self.dblp.search_by_title(&primary.title)).await {
            Ok(cross) => {
                let mut candidates = Vec::with_capacity(cross.len() + 1);
                candidates.push(primary);
                candidates.extend(cross);
                Ok(candidates)
            }
            Err(SourceError::Cancelled) => Err(SourceError::Cancelled),
            Err(err) => {
                tracing::warn!(title = %primary.title, error = %err, "DBLP cross-search failed");
                Ok(vec![primary])
            }
        }
    }

    /// The single best record for `query`, rendered as an inline citation.
    ///
    /// For arXiv URLs a matching DBLP record is preferred over the preprint when
    /// one exists, since it usually carries the published venue and year.
    pub async fn resolve_one(&self, query: &str) -> SourceResult<String> {
        let candidate = match QueryKind::classify(query) {
            QueryKind::Title => self.best_dblp_candidate(query).await?,
            QueryKind::Arxiv => {
                let preprint = self.arxiv.fetch_by_url(query).await?;
                if preprint.title.is_empty() {
                    preprint
                } else {
                    match self.best_dblp_candidate(&preprint.title).await {
                        Ok(published) => published,
                        Err(err) => {
                            tracing::warn!(
                                title = %preprint.title,
                                error = %err,
                                "No DBLP record for preprint"
                            );
                            preprint
                        }
                    }
                }
            }
            QueryKind::Unsupported => {
                return Err(SourceError::UnsupportedQuery(query.to_string()));
            }
        };

        Ok(format_citation(&candidate))
    }

    /// DBLP's best match for `title`, with its record URL resolved.
    async fn best_dblp_candidate(&self, title: &str) -> SourceResult<Candidate> {
        let record = self.dblp.best_match(title).await?;

        let url = match &record.ee {
            Some(ee) => ee.clone(),
            None => match self.dblp.resolve_url(&record.record_url, true).await {
                Ok(url) => url,
                Err(err) => {
                    tracing::warn!(
                        record = %record.record_url,
                        error = %err,
                        "Record URL lookup failed"
                    );
                    record.record_url.clone()
                }
            },
        };

        Ok(record.into_candidate(title, url))
    }
}

impl std::fmt::Debug for CitationResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CitationResolver").finish_non_exhaustive()
    }
}

/// Run `call` unless `cancel` fires first; dropping `call` aborts its request.
async fn guarded<T>(
    cancel: &CancellationToken,
    call: impl Future<Output = SourceResult<T>>,
) -> SourceResult<T> {
    tokio::select! {
        biased;
        () = cancel.cancelled() => Err(SourceError::Cancelled),
        result = call => result,
    }
}
