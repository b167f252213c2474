//! Rule-based pipeline: heuristic segmentation, entities and noun chunks.
//!
//! No model files, no allocation beyond the per-sentence token list. Good
//! enough to rank sentences by information density; not a substitute for a
//! trained tagger when entity types matter.

use crate::chunker::detect_noun_chunks;
use crate::entities::detect_entities;
use crate::pipeline::{Mention, NlpPipeline, SentenceSpan};
use crate::segment::segment_sentences;

/// Configuration for the rule-based pipeline.
#[derive(Debug, Clone)]
pub struct NlpConfig {
    /// Count numbers ("2019", "1,000") as named entities.
    pub numeric_entities: bool,
}

impl Default for NlpConfig {
    fn default() -> Self {
        Self {
            numeric_entities: true,
        }
    }
}

/// Heuristic NLP pipeline for English prose.
#[derive(Debug, Clone, Default)]
pub struct RuleBasedPipeline {
    config: NlpConfig,
}

impl RuleBasedPipeline {
    /// Create a pipeline with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pipeline with custom settings.
    pub fn with_config(config: NlpConfig) -> Self {
        Self { config }
    }

    /// Named entities in a single sentence, offsets relative to `sentence`.
    pub fn entities(&self, sentence: &str) -> Vec<Mention> {
        detect_entities(sentence, self.config.numeric_entities)
    }

    /// Noun chunks in a single sentence, offsets relative to `sentence`.
    pub fn noun_chunks(&self, sentence: &str) -> Vec<Mention> {
        detect_noun_chunks(sentence)
    }
}

impl NlpPipeline for RuleBasedPipeline {
    fn segment(&self, text: &str) -> Vec<SentenceSpan> {
        segment_sentences(text)
    }

    fn entities_in(&self, text: &str, span: &SentenceSpan) -> usize {
        self.entities(span.text(text)).len()
    }

    fn noun_chunks_in(&self, text: &str, span: &SentenceSpan) -> usize {
        self.noun_chunks(span.text(text)).len()
    }

    fn name(&self) -> &str {
        "rule-based"
    }
}
