//! Data models for candidates and source payloads.
//!
//! Wire types use `#[serde(default)]` for optional fields; everything that leaves
//! a source adapter is a [`Candidate`].

mod candidate;
mod dblp;

pub use candidate::{ARXIV_VENUE, Candidate, RankingKey, rank_candidates};
pub use dblp::{
    AuthorList, CORR_VENUE, DblpRecord, Hit, HitInfo, Hits, OneOrMany, RawAuthor, SearchBody,
    SearchResponse,
};
