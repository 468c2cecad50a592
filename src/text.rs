//! Text helpers for derived columns and token-list fields.

/// Reverse a string by code point.
///
/// The `expression_reverse`/`reading_reverse` columns hold this projection
/// so that suffix lookups can run as prefix queries against an ordinary
/// index. The projection must satisfy `reverse(reverse(s)) == s`.
pub fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}

/// Split a space-separated token field into its tokens.
///
/// Fields like `definition_tags`, `term_tags`, `rules`, `onyomi`, and
/// `kunyomi` are stored as single-space-separated strings. An empty field
/// yields an empty list, never `[""]`.
pub fn split_tokens(field: &str) -> Vec<String> {
    if field.is_empty() {
        return Vec::new();
    }
    field.split(' ').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_multibyte() {
        assert_eq!(reverse("日本語"), "語本日");
        assert_eq!(reverse("よむ"), "むよ");
        assert_eq!(reverse(""), "");
    }

    #[test]
    fn test_reverse_involution() {
        for s in ["日本語", "abc", "", "ねこ", "100%"] {
            assert_eq!(reverse(&reverse(s)), s);
        }
    }

    #[test]
    fn test_suffix_is_reversed_prefix() {
        // The property suffix search relies on: t is a suffix of s iff
        // reverse(t) is a prefix of reverse(s).
        let s = "日本語";
        assert!(reverse(s).starts_with(&reverse("語")));
        assert!(reverse(s).starts_with(&reverse("本語")));
        assert!(!reverse(s).starts_with(&reverse("本")));
    }

    #[test]
    fn test_split_tokens() {
        assert_eq!(split_tokens("n v5 adj"), vec!["n", "v5", "adj"]);
        assert_eq!(split_tokens("n"), vec!["n"]);
        assert!(split_tokens("").is_empty());
    }
}
