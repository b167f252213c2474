//! Word tokenization for the rule-based detectors.

use std::sync::LazyLock;

use regex::Regex;

/// Numbers (with internal `.`/`,` groups) or words with internal
/// apostrophes, hyphens, periods and ampersands ("U.S", "AT&T",
/// "time-consuming", "country's").
static WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\p{N}+(?:[.,]\p{N}+)*|[\p{L}\p{N}]+(?:['’\-.&][\p{L}\p{N}]+)*")
        .expect("word pattern is valid")
});

/// A word within a sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// Byte offset of the token start within the sentence.
    pub start: usize,
    /// Byte offset one past the token end.
    pub end: usize,
    /// The token text.
    pub text: &'a str,
}

impl Token<'_> {
    /// Whether the token starts with a digit.
    pub fn is_numeric(&self) -> bool {
        self.text.chars().next().is_some_and(|c| c.is_numeric())
    }

    /// Whether the token starts with an uppercase letter.
    pub fn is_capitalized(&self) -> bool {
        self.text.chars().next().is_some_and(|c| c.is_uppercase())
    }

    /// Whether the token is an acronym: two or more capitals, optionally
    /// followed by a plural "s" ("NASA", "UAVs", "U.S").
    pub fn is_acronym(&self) -> bool {
        let body = self.text.strip_suffix('s').unwrap_or(self.text);
        let letters: Vec<char> = body.chars().filter(|c| c.is_alphabetic()).collect();
        letters.len() >= 2
            && letters.iter().all(|c| c.is_uppercase())
            && body.chars().all(|c| c.is_alphabetic() || c == '.' || c == '&')
    }

    /// Lowercased token text.
    pub fn lower(&self) -> String {
        self.text.to_lowercase()
    }
}

/// Split a sentence into word tokens.
pub fn tokenize(sentence: &str) -> Vec<Token<'_>> {
    WORD.find_iter(sentence)
        .map(|m| Token {
            start: m.start(),
            end: m.end(),
            text: m.as_str(),
        })
        .collect()
}

/// Whether only whitespace separates `prev` and `next` in `sentence`.
pub fn adjacent(sentence: &str, prev: &Token<'_>, next: &Token<'_>) -> bool {
    sentence
        .get(prev.end..next.start)
        .is_some_and(|gap| gap.chars().all(char::is_whitespace))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(s: &str) -> Vec<&str> {
        tokenize(s).into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_tokenize_basic() {
        assert_eq!(
            words("Drones, also known as UAVs, evolved."),
            vec!["Drones", "also", "known", "as", "UAVs", "evolved"]
        );
    }

    #[test]
    fn test_tokenize_compounds() {
        assert_eq!(
            words("time-consuming work in the country's U.S offices"),
            vec!["time-consuming", "work", "in", "the", "country's", "U.S", "offices"]
        );
    }

    #[test]
    fn test_tokenize_numbers() {
        assert_eq!(words("about 1,000 drones at 3.5 km"), vec![
            "about", "1,000", "drones", "at", "3.5", "km"
        ]);
    }

    #[test]
    fn test_acronyms() {
        let toks = tokenize("UAVs NASA U.S Drones A x");
        assert!(toks[0].is_acronym());
        assert!(toks[1].is_acronym());
        assert!(toks[2].is_acronym());
        assert!(!toks[3].is_acronym());
        assert!(!toks[4].is_acronym());
        assert!(!toks[5].is_acronym());
    }

    #[test]
    fn test_adjacency() {
        let s = "green fields, blue sky";
        let toks = tokenize(s);
        assert!(adjacent(s, &toks[0], &toks[1]));
        assert!(!adjacent(s, &toks[1], &toks[2]));
        assert!(adjacent(s, &toks[2], &toks[3]));
    }
}
