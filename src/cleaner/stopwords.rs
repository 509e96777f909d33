//! Stopword filtering
//!
//! The default list is NLTK's English stopword corpus, embedded at compile
//! time. Custom lists use the same format: one word per line.

use std::{fs, path::Path};

use log::info;
use rustc_hash::FxHashSet;

use crate::error::ResourceError;

static ENGLISH_STOPWORDS: &str = include_str!("../../resources/stopwords/english");

/// A case-insensitive set of stopwords.
#[derive(Debug, Clone)]
pub struct StopwordSet {
    /// Lowercase stopwords
    words: FxHashSet<String>,
}

impl StopwordSet {
    /// NLTK's English stopword list.
    pub fn english() -> Self {
        Self::parse(ENGLISH_STOPWORDS)
    }

    /// A set with no stopwords.
    pub fn empty() -> Self {
        Self {
            words: FxHashSet::default(),
        }
    }

    /// Load a stopword list with one word per line.
    ///
    /// Blank lines and lines starting with `#` are skipped. A file without a
    /// single word is rejected rather than silently disabling the filter.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ResourceError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| ResourceError::io(path, e))?;
        let set = Self::parse(&contents);
        if set.is_empty() {
            return Err(ResourceError::Empty(path.to_path_buf()));
        }
        info!("loaded {} stopwords from {}", set.len(), path.display());
        Ok(set)
    }

    fn parse(contents: &str) -> Self {
        let mut set = Self::empty();
        set.extend(
            contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        );
        set
    }

    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.words.insert(word.as_ref().to_lowercase());
        }
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
