//! DBLP publication search payloads.
//!
//! The search API is loose about shapes: `authors.author`, `venue` and `ee` are a
//! bare value for one item and an array for several, and an author is either a
//! plain string or an object carrying the name in `text`. Those shapes are
//! absorbed here by [`OneOrMany`] and [`RawAuthor`]; everything past
//! [`DblpRecord`] sees plain strings.

use serde::{Deserialize, Serialize};

use super::candidate::{ARXIV_VENUE, Candidate, RankingKey};
use crate::similarity::title_similarity;
use crate::text::normalize;

/// DBLP's venue string for arXiv preprints.
pub const CORR_VENUE: &str = "CoRR";

/// Top-level search response.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    /// Result envelope.
    pub result: SearchBody,
}

impl SearchResponse {
    /// Decode every hit into a record, keeping source order.
    #[must_use]
    pub fn into_records(self) -> Vec<DblpRecord> {
        self.result.hits.hit.into_iter().map(|hit| DblpRecord::from(hit.info)).collect()
    }
}

/// Result envelope of a search response.
#[derive(Debug, Default, Deserialize)]
pub struct SearchBody {
    /// Hit collection.
    #[serde(default)]
    pub hits: Hits,
}

/// Hit collection. `hit` is absent when nothing matched.
#[derive(Debug, Default, Deserialize)]
pub struct Hits {
    /// Individual hits.
    #[serde(default)]
    pub hit: Vec<Hit>,
}

/// A single search hit.
#[derive(Debug, Deserialize)]
pub struct Hit {
    /// Bibliographic fields.
    pub info: HitInfo,
}

/// Bibliographic fields of a hit.
#[derive(Debug, Default, Deserialize)]
pub struct HitInfo {
    /// Author list.
    #[serde(default)]
    pub authors: Option<AuthorList>,

    /// Venue (e.g. "NeurIPS", "CoRR").
    #[serde(default)]
    pub venue: Option<OneOrMany<String>>,

    /// Publication year.
    #[serde(default)]
    pub year: Option<String>,

    /// Title, usually with a trailing period.
    #[serde(default)]
    pub title: Option<String>,

    /// DBLP record URL (`https://dblp.org/rec/...`).
    #[serde(default)]
    pub url: Option<String>,

    /// Electronic edition link(s).
    #[serde(default)]
    pub ee: Option<OneOrMany<String>>,
}

/// Wrapper object around the author list.
#[derive(Debug, Default, Deserialize)]
pub struct AuthorList {
    /// One author or several.
    #[serde(default)]
    pub author: OneOrMany<RawAuthor>,
}

/// A value the API sends bare when there is one and as an array otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    /// Single bare value.
    One(T),
    /// Array of values.
    Many(Vec<T>),
}

impl<T> Default for OneOrMany<T> {
    fn default() -> Self {
        Self::Many(Vec::new())
    }
}

impl<T> OneOrMany<T> {
    /// Flatten into a vector, preserving order.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::One(value) => vec![value],
            Self::Many(values) => values,
        }
    }

    /// First value, if any.
    #[must_use]
    pub fn into_first(self) -> Option<T> {
        self.into_vec().into_iter().next()
    }
}

/// An author as sent by the API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawAuthor {
    /// Plain name string.
    Name(String),
    /// Object form, e.g. `{"@pid": "...", "text": "Ashish Vaswani"}`.
    Tagged {
        /// Full name.
        text: String,
    },
}

impl RawAuthor {
    /// The author's full name.
    #[must_use]
    pub fn into_name(self) -> String {
        match self {
            Self::Name(name) | Self::Tagged { text: name } => name,
        }
    }
}

/// A decoded DBLP hit, before scoring or URL resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DblpRecord {
    /// Full author names in source order.
    pub authors: Vec<String>,
    /// Normalized venue; "CoRR" already mapped to "arXiv".
    pub venue: String,
    /// Normalized year.
    pub year: String,
    /// Normalized title.
    pub title: String,
    /// DBLP record URL, possibly empty.
    pub record_url: String,
    /// First electronic edition link.
    pub ee: Option<String>,
}

impl DblpRecord {
    /// Whether this record is DBLP's copy of an arXiv preprint.
    #[must_use]
    pub fn is_arxiv(&self) -> bool {
        self.venue == ARXIV_VENUE
    }

    /// Case-insensitive title similarity to `query`.
    #[must_use]
    pub fn similarity_to(&self, query: &str) -> f64 {
        title_similarity(query, &self.title)
    }

    /// Ranking key relative to `query`.
    #[must_use]
    pub fn ranking_key(&self, query: &str) -> RankingKey {
        RankingKey { similarity: self.similarity_to(query), is_arxiv: self.is_arxiv() }
    }

    /// Score against `query` and attach the resolved outbound `url`.
    #[must_use]
    pub fn into_candidate(self, query: &str, url: String) -> Candidate {
        let similarity = self.similarity_to(query);
        let is_arxiv = self.is_arxiv();
        Candidate {
            authors: self.authors,
            venue: self.venue,
            year: self.year,
            title: self.title,
            url,
            similarity,
            is_arxiv,
        }
    }
}

impl From<HitInfo> for DblpRecord {
    fn from(info: HitInfo) -> Self {
        let authors = info
            .authors
            .map(|list| list.author.into_vec().into_iter().map(RawAuthor::into_name).collect())
            .unwrap_or_default();

        let venue = normalize(&info.venue.and_then(OneOrMany::into_first).unwrap_or_default());
        let venue = if venue == CORR_VENUE { ARXIV_VENUE.to_string() } else { venue };

        Self {
            authors,
            venue,
            year: normalize(info.year.as_deref().unwrap_or_default()),
            title: normalize(info.title.as_deref().unwrap_or_default()),
            record_url: info.url.as_deref().map(str::trim).unwrap_or_default().to_string(),
            ee: info
                .ee
                .and_then(OneOrMany::into_first)
                .map(|ee| ee.trim().to_string())
                .filter(|ee| !ee.is_empty()),
        }
    }
}
