//! Shallow noun-chunk detection.
//!
//! Pattern: `(DET)? CONTENT+` over whitespace-adjacent words, where a
//! content word is anything outside the closed classes that does not look
//! like a verb or an adverb. Pronouns are chunks on their own.

use crate::lexicon;
use crate::pipeline::{Mention, MentionKind};
use crate::tokens::{Token, adjacent, tokenize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WordClass {
    Pronoun,
    Determiner,
    Break,
    Content,
}

fn classify(token: &Token<'_>, after_determiner: bool) -> WordClass {
    if token.is_numeric() {
        return WordClass::Content;
    }

    let lower = token.lower();
    if lexicon::is_pronoun(&lower) {
        return WordClass::Pronoun;
    }
    if lexicon::is_determiner(&lower) {
        return WordClass::Determiner;
    }
    if lexicon::is_function_word(&lower) || lexicon::is_verb(&lower) {
        return WordClass::Break;
    }
    if lexicon::is_ly_adverb(&lower) {
        return WordClass::Break;
    }

    let verb_shaped =
        lexicon::is_past_participle_shaped(&lower) || lexicon::is_gerund_shaped(&lower);
    if verb_shaped && !token.is_capitalized() && !after_determiner {
        return WordClass::Break;
    }

    WordClass::Content
}

/// An open chunk as a byte range.
#[derive(Debug, Clone, Copy)]
struct Open {
    start: usize,
    end: usize,
}

/// Detect noun chunks in a single sentence.
pub fn detect_noun_chunks(sentence: &str) -> Vec<Mention> {
    let tokens = tokenize(sentence);
    let mut chunks = Vec::new();
    let mut open: Option<Open> = None;
    let mut pending_det: Option<usize> = None;

    let close = |open: &mut Option<Open>, chunks: &mut Vec<Mention>| {
        if let Some(o) = open.take() {
            chunks.push(Mention {
                start: o.start,
                end: o.end,
                kind: MentionKind::NounChunk,
            });
        }
    };

    for (i, token) in tokens.iter().enumerate() {
        if i > 0 && !adjacent(sentence, &tokens[i - 1], token) {
            close(&mut open, &mut chunks);
            pending_det = None;
        }

        let after_determiner = pending_det.is_some_and(|d| d + 1 == i);
        match classify(token, after_determiner) {
            WordClass::Pronoun => {
                close(&mut open, &mut chunks);
                pending_det = None;
                chunks.push(Mention {
                    start: token.start,
                    end: token.end,
                    kind: MentionKind::NounChunk,
                });
            }
            WordClass::Determiner => {
                close(&mut open, &mut chunks);
                pending_det = Some(i);
            }
            WordClass::Break => {
                close(&mut open, &mut chunks);
                pending_det = None;
            }
            WordClass::Content => {
                let start = match open {
                    Some(o) => o.start,
                    None => pending_det
                        .take()
                        .map(|d| tokens[d].start)
                        .unwrap_or(token.start),
                };
                open = Some(Open {
                    start,
                    end: token.end,
                });
            }
        }
    }
    close(&mut open, &mut chunks);

    chunks
}
