//! Lexicon-backed lemmatization

pub mod lexicon;
pub mod wordnet;

pub use lexicon::Lexicon;
pub use wordnet::{WordNetLemmatizer, morphy};

use crate::tagger::tag_map::LemmaCategory;

/// Reduces a word to its dictionary form for a given word class.
///
/// Implementations return the word unchanged when they have no lemma for it.
pub trait Lemmatizer: Send + Sync {
    fn lemmatize(&self, word: &str, category: LemmaCategory) -> String;
}
