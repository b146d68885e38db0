//! Compact author strings for inline citations.

/// Reduce a list of full names to a citation-style author string.
///
/// | names | result            |
/// |-------|-------------------|
/// | 0     | `""`              |
/// | 1     | `"Vaswani"`       |
/// | 2     | `"Vaswani and Shazeer"` |
/// | 3+    | `"Vaswani et al."` |
///
/// Each name is reduced with [`surname`].
#[must_use]
pub fn format_authors<S: AsRef<str>>(names: &[S]) -> String {
    match names {
        [] => String::new(),
        [only] => surname(only.as_ref()),
        [first, second] => {
            format!("{} and {}", surname(first.as_ref()), surname(second.as_ref()))
        }
        [first, ..] => format!("{} et al.", surname(first.as_ref())),
    }
}

/// Drop the first name, keeping the rest of the name.
///
/// Assumes "First Last" or "First Middle Last" ordering. Trailing all-digit
/// tokens are DBLP homonym suffixes (`"Wei Wang 0001"`) and are dropped first.
/// A single-token name is returned whole.
#[must_use]
pub fn surname(full_name: &str) -> String {
    let mut tokens: Vec<&str> = full_name.split_whitespace().collect();
    while tokens.len() > 1 && tokens.last().is_some_and(|t| is_homonym_suffix(t)) {
        tokens.pop();
    }

    match tokens.as_slice() {
        [] => String::new(),
        [only] => (*only).to_string(),
        [_, rest @ ..] => rest.join(" "),
    }
}

fn is_homonym_suffix(token: &str) -> bool {
    token.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_authors() {
        let names: [&str; 0] = [];
        assert_eq!(format_authors(&names), "");
    }

    #[test]
    fn test_single_author() {
        assert_eq!(format_authors(&["Geoffrey E. Hinton"]), "E. Hinton");
        assert_eq!(format_authors(&["Yann LeCun"]), "LeCun");
    }

    #[test]
    fn test_two_authors() {
        assert_eq!(format_authors(&["Yann LeCun", "Yoshua Bengio"]), "LeCun and Bengio");
    }

    #[test]
    fn test_three_or_more_authors() {
        let names = ["Ashish Vaswani", "Noam Shazeer", "Niki Parmar"];
        assert_eq!(format_authors(&names), "Vaswani et al.");
    }

    #[test]
    fn test_surname_keeps_particles() {
        assert_eq!(surname("Ludwig van Beethoven"), "van Beethoven");
    }

    #[test]
    fn test_surname_drops_dblp_homonym_suffix() {
        assert_eq!(surname("Wei Wang 0001"), "Wang");
        assert_eq!(surname("Plato"), "Plato");
        assert_eq!(surname("  "), "");
    }
}
