//! Extractive summarization by sentence salience.
//!
//! Every sentence is scored as the number of named entities plus the
//! number of noun chunks the pipeline finds in it. The summary is the
//! highest scoring sentences joined by a single space, highest first.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use gist_nlp::NlpPipeline;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Number of sentences in a summary when the caller does not say.
pub const DEFAULT_SENTENCE_COUNT: usize = 2;

/// A sentence with its salience breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(utoipa::ToSchema))]
pub struct ScoredSentence {
    /// Position of the sentence among the pipeline's segments.
    pub index: usize,
    /// Sentence text, trimmed.
    pub text: String,
    /// Named entities found in the sentence.
    pub entities: usize,
    /// Noun chunks found in the sentence.
    pub noun_chunks: usize,
    /// `entities + noun_chunks`.
    pub score: usize,
}

/// Ranks sentences and builds extractive summaries.
///
/// Cheap to clone; the pipeline is shared.
#[derive(Clone)]
pub struct Summarizer {
    pipeline: Arc<dyn NlpPipeline>,
    default_sentences: usize,
}

impl fmt::Debug for Summarizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Summarizer")
            .field("pipeline", &self.pipeline.name())
            .field("default_sentences", &self.default_sentences)
            .finish()
    }
}

impl Summarizer {
    pub fn new(pipeline: Arc<dyn NlpPipeline>) -> Self {
        Self {
            pipeline,
            default_sentences: DEFAULT_SENTENCE_COUNT,
        }
    }

    /// Set the sentence count used by [`Summarizer::summarize_default`].
    pub fn with_default_sentences(mut self, count: usize) -> Self {
        self.default_sentences = count;
        self
    }

    pub fn default_sentences(&self) -> usize {
        self.default_sentences
    }

    /// Name of the underlying pipeline.
    pub fn pipeline_name(&self) -> &str {
        self.pipeline.name()
    }

    /// Score every distinct sentence of `text`, in document order.
    ///
    /// Blank segments are skipped. When the same sentence text appears more
    /// than once only its first occurrence is kept.
    pub fn analyze(&self, text: &str) -> Vec<ScoredSentence> {
        let spans = self.pipeline.segment(text);
        let mut seen = HashSet::new();
        let mut scored = Vec::with_capacity(spans.len());

        for (index, span) in spans.iter().enumerate() {
            let sentence = span.text(text);
            if sentence.is_empty() || !seen.insert(sentence) {
                continue;
            }
            let entities = self.pipeline.entities_in(text, span);
            let noun_chunks = self.pipeline.noun_chunks_in(text, span);
            scored.push(ScoredSentence {
                index,
                text: sentence.to_string(),
                entities,
                noun_chunks,
                score: entities + noun_chunks,
            });
        }

        scored
    }

    /// Score every distinct sentence and order by score, highest first.
    ///
    /// Equal scores keep document order.
    pub fn rank(&self, text: &str) -> Vec<ScoredSentence> {
        let mut scored = self.analyze(text);
        // sort_by is stable
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored
    }

    /// Summarize `text` with its `sentence_count` best sentences.
    ///
    /// Sentences appear in ranked order, not document order. Returns an
    /// empty string for empty input or a zero count.
    pub fn summarize(&self, text: &str, sentence_count: usize) -> String {
        if sentence_count == 0 || text.trim().is_empty() {
            return String::new();
        }

        let ranked = self.rank(text);
        let picked: Vec<&str> = ranked
            .iter()
            .take(sentence_count)
            .map(|s| s.text.as_str())
            .collect();

        debug!(
            pipeline = self.pipeline.name(),
            candidates = ranked.len(),
            picked = picked.len(),
            "Summarized text"
        );
        picked.join(" ")
    }

    /// Summarize with the configured default sentence count.
    pub fn summarize_default(&self, text: &str) -> String {
        self.summarize(text, self.default_sentences)
    }
}
