//! Inline citation snippets for markdown notes.

use crate::authors::format_authors;
use crate::models::Candidate;

/// Placeholder for a missing part.
const MISSING: &str = "???";

/// Render a candidate as `<cite>(Authors, Venue Year) [Title](url)</cite>`.
#[must_use]
pub fn format_citation(candidate: &Candidate) -> String {
    let authors = format_authors(&candidate.authors);
    format!(
        "<cite>({}, {} {}) [{}]({})</cite>",
        or_missing(&authors),
        or_missing(&candidate.venue),
        or_missing(&candidate.year),
        or_missing(&candidate.title),
        or_missing(&candidate.url),
    )
}

fn or_missing(value: &str) -> &str {
    if value.is_empty() { MISSING } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_citation() {
        let candidate = Candidate {
            authors: vec!["Ashish Vaswani".into(), "Noam Shazeer".into(), "Niki Parmar".into()],
            venue: "NIPS".into(),
            year: "2017".into(),
            title: "Attention is All you Need".into(),
            url: "https://proceedings.neurips.cc/paper/7181".into(),
            similarity: 1.0,
            is_arxiv: false,
        };
        assert_eq!(
            format_citation(&candidate),
            "<cite>(Vaswani et al., NIPS 2017) [Attention is All you Need]\
             (https://proceedings.neurips.cc/paper/7181)</cite>"
        );
    }

    #[test]
    fn test_missing_parts() {
        let candidate = Candidate {
            authors: Vec::new(),
            venue: String::new(),
            year: String::new(),
            title: "Untitled".into(),
            url: String::new(),
            similarity: 0.0,
            is_arxiv: false,
        };
        assert_eq!(format_citation(&candidate), "<cite>(???, ??? ???) [Untitled](???)</cite>");
    }
}
