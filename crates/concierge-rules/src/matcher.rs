//! Predicate kinds a rule can use against normalized input.

use regex::Regex;

/// A predicate over lowercased input text.
#[derive(Debug)]
pub enum Matcher {
    /// True when any of the keywords occurs as a substring.
    Keywords(&'static [&'static str]),
    /// True when the compiled pattern matches.
    Pattern(Regex),
    /// Always true. Exactly one rule (the final catch-all) uses this.
    Always,
}

impl Matcher {
    /// Evaluate against already-normalized (lowercased) input.
    #[must_use]
    pub fn matches(&self, normalized: &str) -> bool {
        match self {
            Self::Keywords(keywords) => keywords.iter().any(|kw| normalized.contains(kw)),
            Self::Pattern(pattern) => pattern.is_match(normalized),
            Self::Always => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_match_substrings() {
        let m = Matcher::Keywords(&["logo", "site"]);
        assert!(m.matches("need a logo please"));
        assert!(m.matches("website")); // "site" inside "website"
        assert!(!m.matches("presentation"));
    }

    #[test]
    fn keywords_empty_input() {
        let m = Matcher::Keywords(&["logo"]);
        assert!(!m.matches(""));
    }

    #[test]
    fn pattern_is_anchored_when_written_so() {
        let m = Matcher::Pattern(Regex::new("^(hi|hello)").unwrap());
        assert!(m.matches("hello there"));
        assert!(!m.matches("say hello"));
    }

    #[test]
    fn always_matches_anything() {
        assert!(Matcher::Always.matches(""));
        assert!(Matcher::Always.matches("asdkjasdkj"));
    }
}
