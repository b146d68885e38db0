//! Citation resolver for DBLP and arXiv.
//!
//! Turns a paper title or an arXiv URL into a ranked list of citation candidates,
//! combining DBLP's publication search with arXiv's metadata API.
//!
//! # Features
//!
//! - **Fuzzy ranking**: candidates are ordered by title similarity, published
//!   versions ahead of preprints on ties
//! - **Cross-search**: an arXiv URL also yields the DBLP records for its title
//! - **Degrading**: a failing source shrinks the result, it never fails it
//! - **Cancellable**: an in-flight resolution can be aborted with a token
//!
//! # Example
//!
//! ```no_run
//! use cite_resolver::{CitationResolver, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let resolver = CitationResolver::new(&config)?;
//!
//!     for candidate in resolver.resolve("Attention is all you need").await {
//!         println!("{:.2} {}", candidate.similarity, candidate.title);
//!     }
//!     Ok(())
//! }
//! ```

pub mod authors;
pub mod client;
pub mod config;
pub mod error;
pub mod formatters;
pub mod models;
pub mod resolver;
pub mod server;
pub mod similarity;
pub mod sources;
pub mod text;

pub use config::Config;
pub use error::{ClientError, Origin, SourceError};
pub use models::Candidate;
pub use resolver::{CitationResolver, QueryKind};
