use std::sync::Arc;

use log::{debug, info};

use crate::{
    cleaner::{StopwordSet, TweetCleaner},
    config::Config,
    error::ResourceError,
    lemmatizer::{Lemmatizer, Lexicon, WordNetLemmatizer},
    tagger::{LemmaCategory, PosTagger, RuleTagger, TagMap},
    tokenizer::{Tokenizer, TreebankTokenizer},
};

/// One token's trip through the lemmatizer pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LemmatizedToken {
    pub word: String,
    pub tag: String,
    pub category: LemmaCategory,
    pub lemma: String,
}

/// Cleans and lemmatizes tweets.
///
/// Holds the stopword list, tokenizer, tagger and lemmatizer for the lifetime
/// of the process. Nothing is mutated after construction, so a single
/// instance can be shared between threads.
pub struct TweetNormalizer {
    cleaner: TweetCleaner,
    tokenizer: Arc<dyn Tokenizer>,
    tagger: Box<dyn PosTagger>,
    tag_map: TagMap,
    lemmatizer: Box<dyn Lemmatizer>,
}

impl TweetNormalizer {
    /// Built-in resources: NLTK English stopwords, the Treebank tokenizer and
    /// the compact lexicon for both tagging and lemmatization.
    pub fn builtin() -> Self {
        Self::with_resources(StopwordSet::english(), Arc::new(Lexicon::builtin()))
    }

    /// Loads the resources named in `config`.
    ///
    /// A resource that is configured but fails to load is an error; there is
    /// no fallback to the built-in one.
    pub fn from_config(config: &Config) -> Result<Self, ResourceError> {
        let mut stopwords = match &config.stopwords_file {
            Some(path) => StopwordSet::from_file(path)?,
            None => StopwordSet::english(),
        };
        stopwords.extend(&config.extra_stopwords);

        let lexicon = match &config.wordnet_dir {
            Some(dir) => Lexicon::from_wordnet_dir(dir)?,
            None => Lexicon::builtin(),
        };

        info!(
            "normalizer ready with {} stopwords and {} noun lemmas",
            stopwords.len(),
            lexicon.lemma_count(LemmaCategory::Noun)
        );
        Ok(Self::with_resources(stopwords, Arc::new(lexicon)))
    }

    fn with_resources(stopwords: StopwordSet, lexicon: Arc<Lexicon>) -> Self {
        Self::from_parts(
            Arc::new(TreebankTokenizer::new()),
            stopwords,
            Box::new(RuleTagger::new(lexicon.clone())),
            TagMap::penn_treebank(),
            Box::new(WordNetLemmatizer::new(lexicon)),
        )
    }

    /// Assembles a normalizer from arbitrary collaborators.
    ///
    /// `tag_map` must understand the labels `tagger` produces.
    pub fn from_parts(
        tokenizer: Arc<dyn Tokenizer>,
        stopwords: StopwordSet,
        tagger: Box<dyn PosTagger>,
        tag_map: TagMap,
        lemmatizer: Box<dyn Lemmatizer>,
    ) -> Self {
        Self {
            cleaner: TweetCleaner::new(stopwords, tokenizer.clone()),
            tokenizer,
            tagger,
            tag_map,
            lemmatizer,
        }
    }

    pub fn with_tag_map(mut self, tag_map: TagMap) -> Self {
        self.tag_map = tag_map;
        self
    }

    pub fn clean(&self, text: &str) -> String {
        self.cleaner.clean(text)
    }

    /// Runs the full pipeline and keeps every intermediate value.
    pub fn analyze(&self, text: &str) -> Vec<LemmatizedToken> {
        let cleaned = self.cleaner.clean(text);
        let tokens = self.tokenizer.tokenize(&cleaned);
        if tokens.is_empty() {
            return Vec::new();
        }

        let tagged = self.tagger.tag(&tokens);
        debug!("tagged {} tokens", tagged.len());

        tagged
            .into_iter()
            .map(|tagged| {
                let category = self.tag_map.category(&tagged.tag);
                let lemma = match category {
                    LemmaCategory::Unmapped => tagged.word.clone(),
                    _ => self.lemmatizer.lemmatize(&tagged.word, category),
                };
                LemmatizedToken {
                    word: tagged.word,
                    tag: tagged.tag,
                    category,
                    lemma,
                }
            })
            .collect()
    }

    /// Cleans `text`, then replaces every token with its lemma.
    pub fn lemmatize(&self, text: &str) -> String {
        self.analyze(text)
            .into_iter()
            .map(|token| token.lemma)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
