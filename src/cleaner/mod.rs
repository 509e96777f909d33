//! Tweet cleaning
//!
//! URL, non-ASCII and punctuation stripping followed by stopword and length
//! filtering.

pub mod stopwords;
pub mod tweet_cleaner;

pub use stopwords::StopwordSet;
pub use tweet_cleaner::{MIN_TOKEN_LENGTH, TweetCleaner, strip_non_ascii, strip_punctuation, strip_urls};
