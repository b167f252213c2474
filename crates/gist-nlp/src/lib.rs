//! Lightweight NLP for extractive summarization.
//!
//! Provides sentence segmentation plus named-entity and noun-chunk
//! detection behind the [`NlpPipeline`] trait. [`RuleBasedPipeline`] is the
//! built-in engine: pure Rust, no model downloads, deterministic.

pub mod chunker;
pub mod entities;
pub mod lexicon;
pub mod pipeline;
pub mod rule_based;
pub mod segment;
pub mod tokens;

pub use chunker::detect_noun_chunks;
pub use entities::detect_entities;
pub use pipeline::{Mention, MentionKind, NlpPipeline, SentenceSpan};
pub use rule_based::{NlpConfig, RuleBasedPipeline};
pub use segment::segment_sentences;
