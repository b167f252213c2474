//! Core model for gist: text ids, the text store and the summarizer.

pub mod error;
pub mod id;
pub mod samples;
pub mod store;
pub mod summarizer;

pub use error::{CoreError, Result};
pub use id::TextId;
pub use store::{DeleteOutcome, MemoryTextStore, TextRepository};
pub use summarizer::{DEFAULT_SENTENCE_COUNT, ScoredSentence, Summarizer};
