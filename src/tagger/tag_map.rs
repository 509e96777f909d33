use std::fmt;

/// The word class a token is lemmatized as.
///
/// `Unmapped` covers every tag outside the four open classes (determiners,
/// numbers, particles, ...). Such tokens are passed through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LemmaCategory {
    Adjective,
    Verb,
    Noun,
    Adverb,
    Unmapped,
}

impl LemmaCategory {
    /// The four categories a lexicon knows about, in WordNet order.
    pub const OPEN_CLASSES: [LemmaCategory; 4] = [
        LemmaCategory::Noun,
        LemmaCategory::Verb,
        LemmaCategory::Adjective,
        LemmaCategory::Adverb,
    ];
}

impl fmt::Display for LemmaCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LemmaCategory::Adjective => "ADJ",
            LemmaCategory::Verb => "VERB",
            LemmaCategory::Noun => "NOUN",
            LemmaCategory::Adverb => "ADV",
            LemmaCategory::Unmapped => "NONE",
        };
        f.pad(name)
    }
}

/// Maps a tagger's labels to lemma categories by prefix.
///
/// Rows are checked in order and the first matching prefix wins. A tag with
/// no matching row is [`LemmaCategory::Unmapped`].
#[derive(Debug, Clone, PartialEq)]
pub struct TagMap {
    rows: Vec<(String, LemmaCategory)>,
}

impl TagMap {
    pub fn new<S: Into<String>>(rows: impl IntoIterator<Item = (S, LemmaCategory)>) -> Self {
        Self {
            rows: rows
                .into_iter()
                .map(|(prefix, category)| (prefix.into(), category))
                .collect(),
        }
    }

    /// Penn Treebank tags: `JJ*`, `VB*`, `NN*`, `RB*`.
    pub fn penn_treebank() -> Self {
        Self::new([
            ("J", LemmaCategory::Adjective),
            ("V", LemmaCategory::Verb),
            ("N", LemmaCategory::Noun),
            ("R", LemmaCategory::Adverb),
        ])
    }

    /// Universal Dependencies tags. Proper nouns count as nouns, the same as
    /// `NNP` does under Penn Treebank prefixes.
    pub fn universal() -> Self {
        Self::new([
            ("ADJ", LemmaCategory::Adjective),
            ("ADV", LemmaCategory::Adverb),
            ("VERB", LemmaCategory::Verb),
            ("NOUN", LemmaCategory::Noun),
            ("PROPN", LemmaCategory::Noun),
        ])
    }

    pub fn category(&self, tag: &str) -> LemmaCategory {
        self.rows
            .iter()
            .find(|(prefix, _)| tag.starts_with(prefix.as_str()))
            .map(|(_, category)| *category)
            .unwrap_or(LemmaCategory::Unmapped)
    }
}
