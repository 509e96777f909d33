//! Word tokenization
//!
//! The pipeline only depends on the [`Tokenizer`] trait. [`TreebankTokenizer`]
//! is the default implementation.

pub mod treebank;

pub use treebank::TreebankTokenizer;

/// Splits text into word tokens.
///
/// Implementations must be deterministic: the cleaner and the lemmatizer
/// pipeline tokenize the same text and expect the same tokens back.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<String>;
}
