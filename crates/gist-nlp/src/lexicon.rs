//! Closed-class English word lists used by the rule-based detectors.
//!
//! All lookups take lowercase input.

/// Abbreviations after which a period never ends a sentence.
const TITLE_ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "st", "jr", "sr", "vs", "mt", "gen", "col", "lt", "sgt",
    "capt", "rev", "hon", "fig", "no", "vol", "approx", "dept", "est",
];

/// Determiners and possessive determiners that may open a noun chunk.
const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "my", "your", "his", "her", "its", "our",
    "their", "some", "any", "each", "every", "no", "all", "both", "many", "several", "few",
    "much", "more", "most", "other", "another", "such", "either", "neither", "whose",
];

/// Pronouns that form a noun chunk on their own.
const PRONOUNS: &[&str] = &[
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "us", "them", "it's", "itself",
    "themselves", "himself", "herself", "ourselves", "yourself", "myself", "someone",
    "something", "anyone", "anything", "everyone", "everything", "nobody", "nothing", "who",
    "what", "which",
];

/// Prepositions, conjunctions, particles and adverbs that break noun chunks.
const FUNCTION_WORDS: &[&str] = &[
    // prepositions
    "of", "in", "on", "at", "by", "for", "with", "without", "from", "to", "into", "onto",
    "over", "under", "about", "above", "below", "between", "among", "through", "during",
    "before", "after", "against", "across", "along", "around", "behind", "beyond", "within",
    "upon", "via", "toward", "towards", "despite", "like", "unlike", "than", "as", "per",
    // conjunctions
    "and", "or", "but", "nor", "so", "yet", "because", "although", "though", "while",
    "whereas", "if", "unless", "until", "since", "when", "where", "whether", "whenever",
    "however", "therefore", "moreover", "furthermore", "additionally", "also", "then",
    // particles and common adverbs
    "not", "only", "even", "just", "still", "already", "very", "too", "quite", "rather",
    "often", "always", "never", "sometimes", "again", "here", "there", "now", "how", "why",
    "well", "alongside", "otherwise", "instead", "especially", "particularly",
];

/// Auxiliaries and frequent verbs that never belong inside a noun chunk.
const VERBS: &[&str] = &[
    "is", "are", "was", "were", "be", "been", "being", "am", "has", "have", "had", "do",
    "does", "did", "can", "could", "will", "would", "shall", "should", "may", "might", "must",
    "make", "makes", "made", "use", "uses", "used", "allow", "allows", "become", "becomes",
    "became",
    "include", "includes", "offer", "offers", "play", "plays", "reach", "reaches", "raise",
    "raises", "worry", "worries", "find", "finds", "found", "cover", "covers", "locate",
    "assess", "deliver", "delivers", "apply", "applies", "map", "maps", "monitor", "reduce",
    "reduces", "minimize", "minimizes", "address", "navigate", "boast", "boasts", "get",
    "gets", "got", "go", "goes", "went", "take", "takes", "took", "give", "gives", "gave",
    "see", "sees", "saw", "seem", "seems", "say", "says", "said", "know", "knows", "known",
    "show", "shows", "shown", "provide", "provides", "help", "helps", "need", "needs", "want",
    "wants", "keep", "keeps", "let", "lets", "put", "puts", "run", "runs", "ran", "come",
    "comes", "came", "remain", "remains", "require", "requires", "enable", "enables",
    "create", "creates", "consider", "considers", "explore", "explores", "involve",
    "involves", "serve", "serves", "share", "shares", "add", "adds", "bring", "brings",
    "brought", "think", "thinks", "thought", "tell", "tells", "told", "feel", "feels", "felt",
];

/// Words ending in "-ly" that are nouns or adjectives rather than adverbs.
const LY_NOUNS: &[&str] = &[
    "family", "supply", "assembly", "rally", "ally", "belly", "jelly", "italy", "july",
    "anomaly", "monopoly", "butterfly", "early", "daily", "weekly", "monthly", "yearly",
    "friendly", "holy", "ugly",
];

/// Whether `word` is a title abbreviation such as "dr" or "prof".
pub fn is_title_abbreviation(word: &str) -> bool {
    TITLE_ABBREVIATIONS.contains(&word)
}

/// Whether `word` is a determiner.
pub fn is_determiner(word: &str) -> bool {
    DETERMINERS.contains(&word)
}

/// Whether `word` is a pronoun.
pub fn is_pronoun(word: &str) -> bool {
    PRONOUNS.contains(&word)
}

/// Whether `word` is a function word: a preposition, conjunction or particle.
pub fn is_function_word(word: &str) -> bool {
    FUNCTION_WORDS.contains(&word)
}

/// Whether `word` is a listed verb or auxiliary.
pub fn is_verb(word: &str) -> bool {
    VERBS.contains(&word)
}

/// Whether `word` belongs to any closed class: never a content word.
pub fn is_closed_class(word: &str) -> bool {
    is_determiner(word) || is_pronoun(word) || is_function_word(word) || is_verb(word)
}

/// Whether `word` looks like an adverb ("rapidly", "remotely").
pub fn is_ly_adverb(word: &str) -> bool {
    word.len() >= 4 && word.ends_with("ly") && !LY_NOUNS.contains(&word)
}

/// Whether `word` has the shape of a past-tense or participle verb.
///
/// Words ending in "-eed" ("speed", "seed") are nouns often enough to be
/// excluded.
pub fn is_past_participle_shaped(word: &str) -> bool {
    word.chars().count() >= 5 && word.ends_with("ed") && !word.ends_with("eed")
}

/// Whether `word` ends in "-ing" and is long enough to be a gerund.
pub fn is_gerund_shaped(word: &str) -> bool {
    word.chars().count() >= 5 && word.ends_with("ing")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_classes() {
        assert!(is_determiner("the"));
        assert!(is_pronoun("them"));
        assert!(is_function_word("between"));
        assert!(is_verb("allows"));
        assert!(is_closed_class("and"));
        assert!(!is_closed_class("drone"));
    }

    #[test]
    fn test_ly_adverbs() {
        assert!(is_ly_adverb("rapidly"));
        assert!(is_ly_adverb("remotely"));
        assert!(!is_ly_adverb("family"));
        assert!(!is_ly_adverb("fly"));
    }

    #[test]
    fn test_verb_shapes() {
        assert!(is_past_participle_shaped("controlled"));
        assert!(is_past_participle_shaped("evolved"));
        assert!(!is_past_participle_shaped("speed"));
        assert!(!is_past_participle_shaped("red"));
        assert!(is_gerund_shaped("farming"));
        assert!(!is_gerund_shaped("king"));
    }

    #[test]
    fn test_title_abbreviations() {
        assert!(is_title_abbreviation("dr"));
        assert!(!is_title_abbreviation("etc"));
    }
}
