//! Property-based tests for normalization, author formatting and similarity.

use proptest::prelude::*;

use cite_resolver::authors::format_authors;
use cite_resolver::models::{Candidate, rank_candidates};
use cite_resolver::similarity::{ratio, title_similarity};
use cite_resolver::text::normalize;

/// Names of one to four alphabetic tokens.
fn arb_name() -> impl Strategy<Value = String> {
    proptest::collection::vec("[A-Z][a-z]{1,8}", 1..=4).prop_map(|tokens| tokens.join(" "))
}

fn arb_candidate() -> impl Strategy<Value = Candidate> {
    (0u8..=4, any::<bool>(), "[a-z]{1,6}").prop_map(|(score, is_arxiv, title)| Candidate {
        authors: Vec::new(),
        venue: if is_arxiv { "arXiv".to_string() } else { "ICML".to_string() },
        year: "2020".to_string(),
        title,
        url: String::new(),
        similarity: f64::from(score) / 4.0,
        is_arxiv,
    })
}

proptest! {
    /// Normalizing twice changes nothing.
    #[test]
    fn normalize_idempotent(text in "[ a-zA-Z.\t\n]{0,40}") {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once);
    }

    /// Normalized text has no edge or repeated whitespace.
    #[test]
    fn normalize_collapses_whitespace(text in "\\PC{0,40}") {
        let out = normalize(&text);
        prop_assert_eq!(out.trim(), out.as_str());
        prop_assert!(!out.contains("  "));
        prop_assert!(!out.contains('\n'));
    }

    /// Two authors are joined with "and".
    #[test]
    fn two_authors_joined(a in arb_name(), b in arb_name()) {
        let out = format_authors(&[a, b]);
        prop_assert!(out.contains(" and "));
        prop_assert!(!out.ends_with("et al."));
    }

    /// Three or more authors collapse to "et al.".
    #[test]
    fn many_authors_et_al(names in proptest::collection::vec(arb_name(), 3..10)) {
        let out = format_authors(&names);
        prop_assert!(out.ends_with(" et al."));
        prop_assert!(!out.contains(" and "));
    }

    /// Similarity stays within [0, 1].
    #[test]
    fn ratio_in_unit_interval(a in "\\PC{0,60}", b in "\\PC{0,60}") {
        let r = ratio(&a, &b);
        prop_assert!((0.0..=1.0).contains(&r));
    }

    /// A title is a perfect match for itself, whatever its case.
    #[test]
    fn identical_titles_score_one(title in "[A-Za-z ]{0,80}") {
        let score = title_similarity(&title.to_uppercase(), &title);
        prop_assert!((score - 1.0).abs() < f64::EPSILON);
    }

    /// Ranking is by similarity descending, non-arXiv first on ties.
    #[test]
    fn ranking_order(mut candidates in proptest::collection::vec(arb_candidate(), 0..20)) {
        rank_candidates(&mut candidates);
        for pair in candidates.windows(2) {
            prop_assert!(pair[0].similarity >= pair[1].similarity);
            if pair[0].similarity == pair[1].similarity {
                prop_assert!(pair[0].is_arxiv <= pair[1].is_arxiv);
            }
        }
    }
}
