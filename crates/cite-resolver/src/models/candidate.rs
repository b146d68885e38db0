//! Candidate bibliographic record and its ranking key.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Venue label used for arXiv preprints.
pub const ARXIV_VENUE: &str = "arXiv";

/// A normalized bibliographic record scored against a query title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Full author names in source order.
    pub authors: Vec<String>,

    /// Normalized venue, possibly empty.
    pub venue: String,

    /// Publication year as given by the source, possibly empty.
    pub year: String,

    /// Normalized title.
    pub title: String,

    /// Outbound URL.
    pub url: String,

    /// Title-vs-query similarity in `[0, 1]`.
    pub similarity: f64,

    /// Whether the venue is the arXiv label.
    pub is_arxiv: bool,
}

impl Candidate {
    /// Ordering key: higher similarity first, then non-arXiv before arXiv.
    #[must_use]
    pub const fn ranking_key(&self) -> RankingKey {
        RankingKey { similarity: self.similarity, is_arxiv: self.is_arxiv }
    }
}

/// Derived sort key for candidates.
///
/// Sorting ascending by this key puts the best candidate first.
#[derive(Debug, Clone, Copy)]
pub struct RankingKey {
    /// Title similarity.
    pub similarity: f64,
    /// arXiv preprints lose ties.
    pub is_arxiv: bool,
}

impl Ord for RankingKey {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .similarity
            .total_cmp(&self.similarity)
            .then_with(|| self.is_arxiv.cmp(&other.is_arxiv))
    }
}

impl PartialOrd for RankingKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for RankingKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for RankingKey {}

/// Stable sort by [`RankingKey`]; equal keys keep source order.
pub fn rank_candidates(candidates: &mut [Candidate]) {
    candidates.sort_by_key(Candidate::ranking_key);
}
