//! arXiv article metadata adapter (Atom feed).
//!
//! API docs: https://info.arxiv.org/help/api/user-manual.html

use quick_xml::Reader;
use quick_xml::events::Event;
use url::Url;

use crate::client::HttpClient;
use crate::config::Config;
use crate::error::{ClientError, ClientResult, Origin, SourceError, SourceResult};
use crate::models::{ARXIV_VENUE, Candidate};
use crate::text::normalize;

use super::ArticleMetadata;

/// Marker in the `id` of the entry arXiv returns for a bad identifier.
const ERROR_ENTRY_MARKER: &str = "/api/errors";

/// Fetches single articles from the arXiv API.
#[derive(Debug, Clone)]
pub struct ArxivSource {
    http: HttpClient,
    api_url: String,
}

impl ArxivSource {
    /// Create an adapter for the API endpoint named in `config`.
    #[must_use]
    pub fn new(http: HttpClient, config: &Config) -> Self {
        Self { http, api_url: config.arxiv_api_url.clone() }
    }
}

#[async_trait::async_trait]
impl ArticleMetadata for ArxivSource {
    async fn fetch_by_url(&self, url: &str) -> SourceResult<Candidate> {
        let id = arxiv_id(url)
            .ok_or_else(|| SourceError::MalformedQuery(format!("no arXiv identifier in {url}")))?;

        tracing::info!(url = %self.api_url, id, "Grabbing arXiv information");

        let body = self
            .http
            .get_text(&self.api_url, &[("id_list", id.as_str())])
            .await
            .map_err(|e| SourceError::unavailable(Origin::Arxiv, e))?;

        let entry =
            parse_atom_entry(&body).map_err(|e| SourceError::unavailable(Origin::Arxiv, e))?;
        Ok(entry.into_candidate(url))
    }
}

/// arXiv identifier named by an abstract or PDF URL.
///
/// The final path segment without a `.pdf` suffix; old-style identifiers
/// (`/abs/hep-th/9901001`) keep their archive prefix.
#[must_use]
pub fn arxiv_id(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let segments: Vec<&str> = parsed.path_segments()?.filter(|s| !s.is_empty()).collect();

    let id = match segments.as_slice() {
        [kind, archive, number] if matches!(*kind, "abs" | "pdf") => {
            format!("{archive}/{number}")
        }
        [.., last] => (*last).to_string(),
        [] => return None,
    };

    let id = id.strip_suffix(".pdf").unwrap_or(&id);
    (!id.is_empty()).then(|| id.to_string())
}

/// Fields of the first `<entry>` in an Atom feed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AtomEntry {
    /// Entry id (abstract URL).
    pub id: String,
    /// Raw title text.
    pub title: String,
    /// Publication timestamp, e.g. `2023-01-01T18:59:59Z`.
    pub published: String,
    /// Author names in feed order.
    pub authors: Vec<String>,
}

impl AtomEntry {
    /// Year part of `published`.
    #[must_use]
    pub fn year(&self) -> &str {
        self.published.split('-').next().unwrap_or_default().trim()
    }

    /// The arXiv record as an exact-match candidate for `url`.
    #[must_use]
    pub fn into_candidate(self, url: &str) -> Candidate {
        Candidate {
            year: self.year().to_string(),
            title: normalize(&self.title),
            authors: self.authors,
            venue: ARXIV_VENUE.to_string(),
            url: url.to_string(),
            similarity: 1.0,
            is_arxiv: true,
        }
    }
}

#[derive(Clone, Copy)]
enum Field {
    Id,
    Title,
    Published,
    AuthorName,
}

/// Parse the first `<entry>` of an arXiv Atom response.
///
/// Elements are matched by local name; arXiv's own extension elements
/// (`arxiv:comment`, `arxiv:affiliation`, ...) use names Atom does not.
pub fn parse_atom_entry(xml: &str) -> ClientResult<AtomEntry> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut entry: Option<AtomEntry> = None;
    let mut in_author = false;
    let mut author_name = String::new();
    let mut field: Option<Field> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = e.local_name();
                field = None;
                match (name.as_ref(), entry.is_some()) {
                    (b"entry", false) => entry = Some(AtomEntry::default()),
                    (b"author", true) => {
                        in_author = true;
                        author_name.clear();
                    }
                    (b"name", true) if in_author => field = Some(Field::AuthorName),
                    (b"id", true) if !in_author => field = Some(Field::Id),
                    (b"title", true) => field = Some(Field::Title),
                    (b"published", true) => field = Some(Field::Published),
                    _ => {}
                }
            }
            Event::Text(text) => {
                if let (Some(field), Some(entry)) = (field, entry.as_mut()) {
                    let text = text.unescape()?;
                    match field {
                        Field::Id => entry.id.push_str(&text),
                        Field::Title => entry.title.push_str(&text),
                        Field::Published => entry.published.push_str(&text),
                        Field::AuthorName => author_name.push_str(&text),
                    }
                }
            }
            Event::End(e) => {
                field = None;
                match (e.local_name().as_ref(), entry.as_mut()) {
                    (b"entry", Some(_)) => break,
                    (b"author", Some(entry)) => {
                        in_author = false;
                        let name = author_name.trim();
                        if !name.is_empty() {
                            entry.authors.push(name.to_string());
                        }
                    }
                    _ => {}
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    let entry = entry.ok_or(ClientError::MissingElement("entry"))?;
    if entry.id.contains(ERROR_ENTRY_MARKER) {
        return Err(ClientError::not_found(normalize(&entry.title)));
    }
    Ok(entry)
}
