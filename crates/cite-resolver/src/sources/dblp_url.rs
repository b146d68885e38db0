//! DBLP record URL resolution.
//!
//! DBLP encodes an arXiv identifier `2301.12345` as the record
//! `journals/corr/abs-2301-12345`; those are rebuilt without any I/O. Other
//! records are looked up in their XML form, whose first element carries the
//! electronic edition (`ee`) link.

use std::sync::LazyLock;

use quick_xml::Reader;
use quick_xml::events::Event;
use regex::Regex;

use crate::client::HttpClient;
use crate::error::{ClientError, ClientResult, Origin, SourceError, SourceResult};

static CORR_RECORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/rec/(?:xml/)?journals/corr/abs-(\d+)-(\d+)").expect("valid CoRR record regex")
});

/// arXiv abstract URL for a DBLP CoRR record, if `record_url` is one.
#[must_use]
pub fn arxiv_abs_url(record_url: &str) -> Option<String> {
    let caps = CORR_RECORD.captures(record_url)?;
    Some(format!("http://arxiv.org/abs/{}.{}", &caps[1], &caps[2]))
}

/// Best link available without a network call.
#[must_use]
pub fn resolve_offline(record_url: &str) -> String {
    arxiv_abs_url(record_url).unwrap_or_else(|| record_url.to_string())
}

/// XML variant of a record URL (`/rec/...` becomes `/rec/xml/...`).
#[must_use]
pub fn xml_record_url(record_url: &str) -> String {
    if record_url.contains("/rec/xml/") {
        record_url.to_string()
    } else {
        record_url.replacen("/rec/", "/rec/xml/", 1)
    }
}

/// Text of the first `ee` child of the document's first element.
///
/// ```xml
/// <dblp>
///   <inproceedings key="conf/nips/VaswaniSPUJGKP17">
///     <ee>https://proceedings.neurips.cc/...</ee>
///   </inproceedings>
/// </dblp>
/// ```
pub fn parse_record_ee(xml: &str) -> ClientResult<String> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    // 1 = root, 2 = record, 3 = record field
    let mut depth = 0usize;
    let mut in_ee = false;
    let mut ee = String::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                depth += 1;
                in_ee = depth == 3 && e.local_name().as_ref() == b"ee";
            }
            Event::Empty(_) if depth == 1 => return Err(ClientError::MissingElement("ee")),
            Event::Text(text) if in_ee => ee.push_str(&text.unescape()?),
            Event::End(_) => {
                if in_ee {
                    in_ee = false;
                    let link = ee.trim();
                    if !link.is_empty() {
                        return Ok(link.to_string());
                    }
                    ee.clear();
                }
                depth = depth.saturating_sub(1);
                if depth == 1 {
                    return Err(ClientError::MissingElement("ee"));
                }
            }
            Event::Eof => return Err(ClientError::MissingElement("ee")),
            _ => {}
        }
    }
}

/// Resolves DBLP record URLs to outbound links.
#[derive(Debug, Clone)]
pub struct UrlResolver {
    http: HttpClient,
}

impl UrlResolver {
    /// Create a resolver sharing the given HTTP client.
    #[must_use]
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Outbound link for `record_url`.
    ///
    /// CoRR records are rebuilt as arXiv links. Anything else is fetched as XML
    /// when `allow_fetch` is set, and returned unchanged otherwise.
    pub async fn resolve_url(&self, record_url: &str, allow_fetch: bool) -> SourceResult<String> {
        if let Some(url) = arxiv_abs_url(record_url) {
            return Ok(url);
        }
        if !allow_fetch {
            return Ok(record_url.to_string());
        }
        if record_url.is_empty() {
            return Err(SourceError::unavailable(Origin::Dblp, ClientError::MissingElement("url")));
        }

        let xml_url = xml_record_url(record_url);
        tracing::info!(url = %xml_url, "Fetching DBLP record");

        let body = self
            .http
            .get_text(&xml_url, &[])
            .await
            .map_err(|e| SourceError::unavailable(Origin::Dblp, e))?;

        parse_record_ee(&body).map_err(|e| SourceError::unavailable(Origin::Dblp, e))
    }
}
