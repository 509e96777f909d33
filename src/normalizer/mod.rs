pub mod normalizer;

pub use normalizer::{LemmatizedToken, TweetNormalizer};
