//! Pipeline abstraction consumed by the summarizer.
//!
//! The summarizer only needs three things from an NLP engine: where the
//! sentences are, and how many named entities and noun chunks each one
//! contains. Keeping the interface this narrow lets the ranking logic run
//! against any engine, including stub pipelines in tests.

/// A sentence as a byte range into the source text.
///
/// Spans produced by a pipeline are ordered, do not overlap, and together
/// cover the whole input. Whitespace between sentences belongs to the
/// sentence before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SentenceSpan {
    /// Byte offset of the first byte of the span.
    pub start: usize,
    /// Byte offset one past the last byte of the span.
    pub end: usize,
}

impl SentenceSpan {
    /// Create a span over `start..end`.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// The raw slice of `source` covered by this span, whitespace included.
    ///
    /// Returns an empty string if the span does not fall on character
    /// boundaries of `source`.
    pub fn raw<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.start..self.end).unwrap_or("")
    }

    /// The sentence text, trimmed of surrounding whitespace.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        self.raw(source).trim()
    }

    /// Length of the span in bytes.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether the span covers no bytes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// What a detected mention is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MentionKind {
    /// A run of capitalized words ("New Delhi", "Mughlai").
    ProperName,
    /// An all-caps abbreviation, optionally pluralized ("NASA", "UAVs").
    Acronym,
    /// A number ("2019", "3.5", "1,000").
    Numeric,
    /// A noun phrase from the shallow chunker ("the environmental impact").
    NounChunk,
}

/// A detected span inside a sentence.
///
/// Offsets are relative to the sentence text passed to the detector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mention {
    /// Byte offset where the mention starts.
    pub start: usize,
    /// Byte offset one past where the mention ends.
    pub end: usize,
    /// What was detected.
    pub kind: MentionKind,
}

impl Mention {
    /// The mention's text within `sentence`.
    pub fn text<'a>(&self, sentence: &'a str) -> &'a str {
        sentence.get(self.start..self.end).unwrap_or("")
    }
}

/// Trait for NLP engines that can segment text and annotate sentences.
///
/// Implementations must be deterministic: the same input always yields the
/// same spans and counts. The summarizer relies on this to produce stable
/// rankings.
pub trait NlpPipeline: Send + Sync {
    /// Split `text` into sentence spans.
    ///
    /// Empty or whitespace-only input yields no spans.
    fn segment(&self, text: &str) -> Vec<SentenceSpan>;

    /// Number of named-entity mentions inside `span` of `text`.
    fn entities_in(&self, text: &str, span: &SentenceSpan) -> usize;

    /// Number of noun chunks inside `span` of `text`.
    fn noun_chunks_in(&self, text: &str, span: &SentenceSpan) -> usize;

    /// Short identifier for logs.
    fn name(&self) -> &str {
        "unnamed"
    }
}
