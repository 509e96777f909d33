use std::{borrow::Cow, sync::Arc};

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{cleaner::stopwords::StopwordSet, tokenizer::Tokenizer};

/// Tokens shorter than this (in characters, before any normalization) are dropped.
pub const MIN_TOKEN_LENGTH: usize = 3;

// A URL runs to the next separator, which includes the ASCII information
// separators 0x1C-0x1F.
static URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"http[^\s\x1C-\x1F]+|www[^\s\x1C-\x1F]+|https[^\s\x1C-\x1F]+")
        .expect("invalid url pattern")
});

static NON_ASCII_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\x00-\x7F]+").expect("invalid non-ascii pattern"));

/// Removes anything that starts with `http` or `www` up to the next whitespace.
pub fn strip_urls(text: &str) -> Cow<'_, str> {
    URL_REGEX.replace_all(text, "")
}

/// Removes every run of non-ASCII characters.
///
/// Nothing is put in their place, so `café😀test` becomes `caftest`.
pub fn strip_non_ascii(text: &str) -> Cow<'_, str> {
    NON_ASCII_REGEX.replace_all(text, "")
}

/// Removes the 32 ASCII punctuation characters `!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~`.
pub fn strip_punctuation(text: &str) -> String {
    text.chars().filter(|c| !c.is_ascii_punctuation()).collect()
}

/// Turns a raw tweet into a space separated stream of content tokens.
#[derive(Clone)]
pub struct TweetCleaner {
    stopwords: StopwordSet,
    tokenizer: Arc<dyn Tokenizer>,
}

impl TweetCleaner {
    pub fn new(stopwords: StopwordSet, tokenizer: Arc<dyn Tokenizer>) -> Self {
        Self {
            stopwords,
            tokenizer,
        }
    }

    fn is_content_token(&self, token: &str) -> bool {
        token.chars().count() >= MIN_TOKEN_LENGTH && !self.stopwords.is_stopword(token)
    }

    /// Strips URLs, non-ASCII runs and punctuation (in that order), tokenizes
    /// what is left and drops stopwords and short tokens.
    ///
    /// Token case is preserved; only the stopword lookup is case-insensitive.
    pub fn clean(&self, text: &str) -> String {
        let without_urls = strip_urls(text);
        let ascii_only = strip_non_ascii(&without_urls);
        let without_punctuation = strip_punctuation(&ascii_only);

        let tokens = self.tokenizer.tokenize(&without_punctuation);
        let token_count = tokens.len();
        let kept: Vec<String> = tokens
            .into_iter()
            .filter(|token| self.is_content_token(token))
            .collect();

        debug!("cleaner kept {} of {} tokens", kept.len(), token_count);
        kept.join(" ")
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::tokenizer::TreebankTokenizer;
    use proptest::prelude::*;

    const STOPWORDS: &[&str] = &[
        "the", "this", "out", "and", "not", "you", "she", "was", "them", "there", "again", "about",
        "while", "can", "will",
    ];

    const CONTRACTIONS: &[&str] = &["gonna", "cannot", "gimme", "wanna", "gotta", "lemme"];

    fn cleaner() -> TweetCleaner {
        TweetCleaner::new(StopwordSet::english(), Arc::new(TreebankTokenizer::new()))
    }

    // -- Strategy helpers --

    fn arb_url() -> impl Strategy<Value = String> {
        "(https?://|www\\.)[!-~]{1,20}"
    }

    fn arb_non_ascii() -> impl Strategy<Value = String> {
        "[\\x{1F300}-\\x{1F64F}\\x{C0}-\\x{FF}\\x{4E00}-\\x{4E50}]{1,4}"
    }

    fn arb_punctuation() -> impl Strategy<Value = String> {
        "[!-/:-@\\[-`{-~]{1,5}"
    }

    fn arb_word() -> impl Strategy<Value = String> {
        "[a-zA-Z]{1,9}"
    }

    fn arb_stopword() -> impl Strategy<Value = String> {
        (
            prop::sample::select(STOPWORDS),
            prop::collection::vec(any::<bool>(), 8),
        )
            .prop_map(|(word, upper)| {
                word.chars()
                    .zip(upper.iter().cycle())
                    .map(|(c, &up)| if up { c.to_ascii_uppercase() } else { c })
                    .collect::<String>()
            })
    }

    fn arb_contraction() -> impl Strategy<Value = String> {
        prop::sample::select(CONTRACTIONS).prop_map(|word| word.to_string())
    }

    /// Two words with emoji or punctuation between them and no space.
    fn arb_glued() -> impl Strategy<Value = String> {
        (
            arb_word(),
            prop_oneof![arb_non_ascii(), arb_punctuation()],
            arb_word(),
        )
            .prop_map(|(left, middle, right)| format!("{left}{middle}{right}"))
    }

    fn arb_fragment() -> impl Strategy<Value = String> {
        prop_oneof![
            arb_url(),
            arb_non_ascii(),
            arb_punctuation(),
            arb_word(),
            arb_stopword(),
            arb_contraction(),
            arb_glued(),
            "[0-9]{1,4}",
        ]
    }

    fn arb_tweet() -> impl Strategy<Value = String> {
        prop::collection::vec((arb_fragment(), "[ \t\n]{1,2}"), 0..12).prop_map(|parts| {
            parts
                .into_iter()
                .map(|(fragment, separator)| fragment + &separator)
                .collect::<String>()
        })
    }

    proptest! {
        #[test]
        fn url_only_input_cleans_to_nothing(urls in prop::collection::vec(arb_url(), 1..6)) {
            prop_assert_eq!(cleaner().clean(&urls.join(" ")), "");
        }

        #[test]
        fn non_ascii_only_input_cleans_to_nothing(
            runs in prop::collection::vec("[^\\x00-\\x7F]{1,6}", 1..6)
        ) {
            prop_assert_eq!(cleaner().clean(&runs.concat()), "");
        }

        #[test]
        fn output_has_no_punctuation_short_tokens_or_stopwords(tweet in arb_tweet()) {
            let stopwords = StopwordSet::english();
            let cleaned = cleaner().clean(&tweet);
            prop_assert!(cleaned.is_ascii(), "{:?}", cleaned);
            prop_assert!(!cleaned.chars().any(|c| c.is_ascii_punctuation()), "{:?}", cleaned);
            if !cleaned.is_empty() {
                for token in cleaned.split(' ') {
                    prop_assert!(token.len() >= MIN_TOKEN_LENGTH, "{:?} in {:?}", token, cleaned);
                    prop_assert!(!stopwords.is_stopword(token), "{:?} in {:?}", token, cleaned);
                }
            }
        }

        #[test]
        fn clean_is_idempotent(tweet in arb_tweet()) {
            // stripping can glue a new "http" or "www" prefix together
            let stripped = strip_punctuation(&strip_non_ascii(&strip_urls(&tweet)));
            prop_assume!(strip_urls(&stripped) == stripped);

            let cleaner = cleaner();
            let once = cleaner.clean(&tweet);
            prop_assert_eq!(cleaner.clean(&once), once);
        }
    }
}
