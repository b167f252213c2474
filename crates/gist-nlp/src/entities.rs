//! Heuristic named-entity recognition.
//!
//! Capitalized words that are not function words form proper-name runs.
//! A capitalized first word only opens a run when the word after it is
//! capitalized too, since sentence-initial capitals are usually just
//! capitalization. Acronyms count anywhere; numbers count when enabled.

use crate::lexicon;
use crate::pipeline::{Mention, MentionKind};
use crate::tokens::{Token, adjacent, tokenize};

/// Whether a token may take part in a proper-name run.
fn is_name_word(token: &Token<'_>) -> bool {
    if token.is_acronym() {
        return true;
    }
    token.is_capitalized() && !lexicon::is_closed_class(&token.lower())
}

/// Detect named entities in a single sentence.
pub fn detect_entities(sentence: &str, numeric_entities: bool) -> Vec<Mention> {
    let tokens = tokenize(sentence);
    let mut mentions = Vec::new();

    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];

        if token.is_numeric() {
            if numeric_entities {
                mentions.push(Mention {
                    start: token.start,
                    end: token.end,
                    kind: MentionKind::Numeric,
                });
            }
            i += 1;
            continue;
        }

        if !is_name_word(token) {
            i += 1;
            continue;
        }

        // Extend the run over adjacent name words.
        let mut j = i + 1;
        while j < tokens.len()
            && is_name_word(&tokens[j])
            && adjacent(sentence, &tokens[j - 1], &tokens[j])
        {
            j += 1;
        }
        let run = &tokens[i..j];

        let sentence_initial = i == 0;
        let single = run.len() == 1;
        if sentence_initial && single && !token.is_acronym() {
            i = j;
            continue;
        }

        let kind = if single && token.is_acronym() {
            MentionKind::Acronym
        } else {
            MentionKind::ProperName
        };
        mentions.push(Mention {
            start: run[0].start,
            end: run[run.len() - 1].end,
            kind,
        });
        i = j;
    }

    mentions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity_texts(sentence: &str) -> Vec<&str> {
        detect_entities(sentence, true)
            .iter()
            .map(|m| m.text(sentence))
            .collect()
    }

    #[test]
    fn test_acronym_entity() {
        let s = "Drones, also known as unmanned aerial vehicles (UAVs), have evolved.";
        let found = detect_entities(s, true);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].text(s), "UAVs");
        assert_eq!(found[0].kind, MentionKind::Acronym);
    }

    #[test]
    fn test_sentence_initial_capital_ignored() {
        assert!(entity_texts("Spices play a central role.").is_empty());
    }

    #[test]
    fn test_sentence_initial_multiword_name() {
        assert_eq!(
            entity_texts("New Delhi hosts the festival."),
            vec!["New Delhi"]
        );
    }

    #[test]
    fn test_mid_sentence_names() {
        assert_eq!(
            entity_texts("Rice is the staple food in most parts of India."),
            vec!["India"]
        );
        assert_eq!(
            entity_texts("From the fiery curries to the creamy Mughlai dishes."),
            vec!["Mughlai"]
        );
    }

    #[test]
    fn test_function_words_not_entities() {
        assert!(entity_texts("In agriculture, drones map fields.").is_empty());
        assert!(entity_texts("However, I think so.").is_empty());
    }

    #[test]
    fn test_punctuation_breaks_runs() {
        assert_eq!(
            entity_texts("They visited Paris, London and Rome."),
            vec!["Paris", "London", "Rome"]
        );
    }

    #[test]
    fn test_numeric_entities_toggle() {
        let s = "About 1,000 drones flew in 2019.";
        assert_eq!(entity_texts(s), vec!["1,000", "2019"]);
        assert!(detect_entities(s, false).is_empty());
    }

    #[test]
    fn test_empty_sentence() {
        assert!(detect_entities("", true).is_empty());
    }
}
