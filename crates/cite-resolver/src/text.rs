//! Title and venue normalization.

use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Collapse whitespace, trim, and drop a trailing period.
///
/// A lone trailing period is removed (re-trimming afterwards, so `"Title ."`
/// becomes `"Title"`); an ellipsis is left alone. The result is a fixed point:
/// `normalize(normalize(x)) == normalize(x)`.
#[must_use]
pub fn normalize(text: &str) -> String {
    let collapsed = WHITESPACE.replace_all(text, " ");
    let mut out = collapsed.trim();

    while let Some(rest) = out.strip_suffix('.') {
        if rest.ends_with('.') {
            break;
        }
        out = rest.trim_end();
    }

    out.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_and_trims() {
        assert_eq!(normalize("  Attention   is\n all\tyou need  "), "Attention is all you need");
    }

    #[test]
    fn test_strips_trailing_period() {
        assert_eq!(normalize("Attention is All you Need."), "Attention is All you Need");
        assert_eq!(normalize("NeurIPS ."), "NeurIPS");
        assert_eq!(normalize("."), "");
    }

    #[test]
    fn test_keeps_inner_periods_and_ellipsis() {
        assert_eq!(normalize("Proc. VLDB Endow."), "Proc. VLDB Endow");
        assert_eq!(normalize("Wait for it..."), "Wait for it...");
        assert_eq!(normalize("Wait for it.."), "Wait for it..");
    }

    #[test]
    fn test_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \n\t "), "");
    }

    #[test]
    fn test_idempotent_on_stacked_periods() {
        for input in ["a . .", "a.", "a ..", "x . . . y ."] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "input {input:?}");
        }
    }
}
