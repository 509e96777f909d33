//! Part-of-speech tagging
//!
//! Taggers label a whole token sequence at once so a tag can depend on its
//! neighbours. [`TagMap`] turns the tagger's labels into lemma categories.

pub mod rule_tagger;
pub mod tag_map;

pub use rule_tagger::RuleTagger;
pub use tag_map::{LemmaCategory, TagMap};

/// A token and the label a tagger gave it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    pub word: String,
    pub tag: String,
}

impl TaggedToken {
    pub fn new(word: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            tag: tag.into(),
        }
    }
}

/// Assigns a part-of-speech label to every token of a sequence.
///
/// The output has one entry per input token, in input order.
pub trait PosTagger: Send + Sync {
    fn tag(&self, tokens: &[String]) -> Vec<TaggedToken>;
}
