//! Tweet normalization: cleaning followed by part-of-speech aware
//! lemmatization.
//!
//! ```
//! let normalizer = tweet_normalizer::TweetNormalizer::builtin();
//! assert_eq!(normalizer.lemmatize("I am running to the stores"), "run store");
//! ```

pub mod cleaner;
pub mod config;
pub mod error;
pub mod lemmatizer;
pub mod normalizer;
pub mod tagger;
pub mod tokenizer;

use once_cell::sync::Lazy;

pub use config::{Config, load_config};
pub use error::ResourceError;
pub use normalizer::{LemmatizedToken, TweetNormalizer};
pub use tagger::{LemmaCategory, TagMap};

static DEFAULT_NORMALIZER: Lazy<TweetNormalizer> = Lazy::new(TweetNormalizer::builtin);

/// [`TweetNormalizer::clean`] with the built-in resources.
pub fn clean(text: &str) -> String {
    DEFAULT_NORMALIZER.clean(text)
}

/// [`TweetNormalizer::lemmatize`] with the built-in resources.
pub fn lemmatize(text: &str) -> String {
    DEFAULT_NORMALIZER.lemmatize(text)
}
