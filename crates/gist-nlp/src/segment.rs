//! Rule-based sentence segmentation.
//!
//! A sentence ends after a terminator (`.`, `!`, `?`, `…`) and any closing
//! quotes or brackets when:
//! - whitespace follows and the next visible character is not lowercase
//!   and not a digit, or
//! - an uppercase letter follows immediately and the terminator closes a
//!   lowercase word of two or more letters (run-together text such as
//!   `civilian uses.Their ability`).
//!
//! A period after a title abbreviation (`Dr.`), a lowercase single letter
//! (`e.g.`) or a name initial (`J. Smith`) never ends a sentence. A blank
//! line always does. Leading whitespace belongs to the first sentence.

use crate::lexicon;
use crate::pipeline::SentenceSpan;

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | '…')
}

fn is_closer(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '}' | '’' | '”' | '»')
}

/// Split `text` into ordered, gap-free sentence spans.
pub fn segment_sentences(text: &str) -> Vec<SentenceSpan> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut starts: Vec<usize> = vec![0];
    let push_start = |pos: usize, starts: &mut Vec<usize>| {
        // Leading whitespace stays with the first sentence.
        let opens_sentence = starts
            .last()
            .is_none_or(|&last| pos > last && !text[last..pos].trim().is_empty());
        if pos < text.len() && opens_sentence {
            starts.push(pos);
        }
    };

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i].1;

        if c == '\n' {
            let k = skip_horizontal_space(&chars, i + 1);
            if k < chars.len() && chars[k].1 == '\n' {
                let m = skip_whitespace(&chars, k);
                if m < chars.len() {
                    push_start(chars[m].0, &mut starts);
                }
                i = m;
                continue;
            }
        }

        if is_terminator(c) {
            let mut j = i + 1;
            while j < chars.len() && is_terminator(chars[j].1) {
                j += 1;
            }
            while j < chars.len() && is_closer(chars[j].1) {
                j += 1;
            }
            if let Some(next) = boundary_after(&chars, i, j) {
                push_start(next, &mut starts);
            }
            i = j;
            continue;
        }

        i += 1;
    }

    let mut spans = Vec::with_capacity(starts.len());
    for (idx, &start) in starts.iter().enumerate() {
        let end = starts.get(idx + 1).copied().unwrap_or(text.len());
        spans.push(SentenceSpan::new(start, end));
    }

    tracing::trace!(sentences = spans.len(), bytes = text.len(), "Segmented text");
    spans
}

/// Decide whether the terminator run `chars[term..after]` ends a sentence.
///
/// Returns the byte offset where the next sentence starts.
fn boundary_after(chars: &[(usize, char)], term: usize, after: usize) -> Option<usize> {
    if after >= chars.len() {
        return None;
    }

    let word = preceding_word(chars, term);
    if chars[term].1 == '.' && is_abbreviation(chars, term, after, &word) {
        return None;
    }

    let next = chars[after].1;
    if next.is_whitespace() {
        let k = skip_whitespace(chars, after);
        if k >= chars.len() {
            return None;
        }
        let visible = chars[k].1;
        if visible.is_lowercase() || visible.is_ascii_digit() {
            return None;
        }
        return Some(chars[k].0);
    }

    let closes_lowercase_word =
        word.chars().count() >= 2 && word.chars().last().is_some_and(|c| c.is_lowercase());
    if next.is_uppercase() && closes_lowercase_word {
        return Some(chars[after].0);
    }

    None
}

/// The alphabetic word immediately before index `term`.
fn preceding_word(chars: &[(usize, char)], term: usize) -> String {
    let mut start = term;
    while start > 0 && chars[start - 1].1.is_alphabetic() {
        start -= 1;
    }
    chars[start..term].iter().map(|(_, c)| *c).collect()
}

fn is_abbreviation(chars: &[(usize, char)], term: usize, after: usize, word: &str) -> bool {
    let mut letters = word.chars();
    match (letters.next(), letters.next()) {
        (Some(c), None) if c.is_uppercase() => is_initial(chars, term - 1, after),
        // "e.g.", "i.e."
        (Some(_), None) => true,
        _ => lexicon::is_title_abbreviation(&word.to_lowercase()),
    }
}

/// Whether the capital at `letter`, followed by a period, is a name initial.
///
/// It is when it continues a dotted run ("U.S.", "J. R."), or when a
/// capitalized content word follows and no verb precedes ("met J. Smith"
/// but not "the answer is A. Next" or "Vitamin C. It").
fn is_initial(chars: &[(usize, char)], letter: usize, after: usize) -> bool {
    let mut gap = letter;
    while gap > 0 && chars[gap - 1].1.is_whitespace() {
        gap -= 1;
    }
    if gap > 0 && chars[gap - 1].1 == '.' {
        let before_dot = preceding_word(chars, gap - 1);
        let mut dotted = before_dot.chars();
        if let (Some(c), None) = (dotted.next(), dotted.next())
            && c.is_uppercase()
        {
            return true;
        }
    }

    let previous = preceding_word(chars, gap).to_lowercase();
    if lexicon::is_verb(&previous) {
        return false;
    }

    let next = following_word(chars, skip_whitespace(chars, after));
    next.chars().next().is_some_and(char::is_uppercase)
        && !lexicon::is_closed_class(&next.to_lowercase())
}

/// The alphabetic word starting at index `from`.
fn following_word(chars: &[(usize, char)], from: usize) -> String {
    chars[from.min(chars.len())..]
        .iter()
        .map(|(_, c)| *c)
        .take_while(|c| c.is_alphabetic())
        .collect()
}

fn skip_whitespace(chars: &[(usize, char)], from: usize) -> usize {
    let mut k = from;
    while k < chars.len() && chars[k].1.is_whitespace() {
        k += 1;
    }
    k
}

fn skip_horizontal_space(chars: &[(usize, char)], from: usize) -> usize {
    let mut k = from;
    while k < chars.len() && chars[k].1 != '\n' && chars[k].1.is_whitespace() {
        k += 1;
    }
    k
}
