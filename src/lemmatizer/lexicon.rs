//! Lemma and exception tables in WordNet's database format.
//!
//! `index.<pos>` files list one lemma per line as the first field; header
//! lines start with two spaces. `<pos>.exc` files map an irregular form to one
//! or more lemmas: `geese goose`.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::info;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::{error::ResourceError, tagger::tag_map::LemmaCategory};

struct LexiconSource {
    category: LemmaCategory,
    index_file: &'static str,
    exception_file: &'static str,
    builtin_index: &'static str,
    builtin_exceptions: &'static str,
}

const SOURCES: [LexiconSource; 4] = [
    LexiconSource {
        category: LemmaCategory::Noun,
        index_file: "index.noun",
        exception_file: "noun.exc",
        builtin_index: include_str!("../../resources/lexicon/index.noun"),
        builtin_exceptions: include_str!("../../resources/lexicon/noun.exc"),
    },
    LexiconSource {
        category: LemmaCategory::Verb,
        index_file: "index.verb",
        exception_file: "verb.exc",
        builtin_index: include_str!("../../resources/lexicon/index.verb"),
        builtin_exceptions: include_str!("../../resources/lexicon/verb.exc"),
    },
    LexiconSource {
        category: LemmaCategory::Adjective,
        index_file: "index.adj",
        exception_file: "adj.exc",
        builtin_index: include_str!("../../resources/lexicon/index.adj"),
        builtin_exceptions: include_str!("../../resources/lexicon/adj.exc"),
    },
    LexiconSource {
        category: LemmaCategory::Adverb,
        index_file: "index.adv",
        exception_file: "adv.exc",
        builtin_index: include_str!("../../resources/lexicon/index.adv"),
        builtin_exceptions: include_str!("../../resources/lexicon/adv.exc"),
    },
];

#[derive(Debug, Clone, Default)]
struct Entries {
    lemmas: FxHashSet<String>,
    exceptions: FxHashMap<String, Vec<String>>,
}

impl Entries {
    fn parse_index(&mut self, contents: &str) {
        for line in contents.lines() {
            if line.starts_with(' ') {
                continue;
            }
            if let Some(lemma) = line.split_whitespace().next() {
                self.lemmas.insert(lemma.to_string());
            }
        }
    }

    fn parse_exceptions(&mut self, contents: &str) {
        for line in contents.lines() {
            let mut fields = line.split_whitespace();
            let Some(form) = fields.next() else {
                continue;
            };
            let lemmas: Vec<String> = fields.map(str::to_string).collect();
            if lemmas.is_empty() {
                continue;
            }
            self.exceptions
                .entry(form.to_string())
                .or_default()
                .extend(lemmas);
        }
    }
}

/// Per-category lemma sets and irregular-form exceptions.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    noun: Entries,
    verb: Entries,
    adjective: Entries,
    adverb: Entries,
}

impl Lexicon {
    /// A lexicon with no entries.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The compact English lexicon compiled into the crate.
    pub fn builtin() -> Self {
        let mut lexicon = Self::empty();
        for source in &SOURCES {
            if let Some(entries) = lexicon.entries_mut(source.category) {
                entries.parse_index(source.builtin_index);
                entries.parse_exceptions(source.builtin_exceptions);
            }
        }
        lexicon
    }

    /// Load a WordNet `dict/` directory.
    ///
    /// All four index files and all four exception files must be present.
    pub fn from_wordnet_dir<P: AsRef<Path>>(dir: P) -> Result<Self, ResourceError> {
        let dir = dir.as_ref();
        let mut lexicon = Self::empty();

        for source in &SOURCES {
            let index = read_wordnet_file(dir, source.index_file)?;
            let exceptions = read_wordnet_file(dir, source.exception_file)?;
            if let Some(entries) = lexicon.entries_mut(source.category) {
                entries.parse_index(&index);
                entries.parse_exceptions(&exceptions);
                if entries.lemmas.is_empty() {
                    return Err(ResourceError::Empty(dir.join(source.index_file)));
                }
            }
        }

        let counts: Vec<String> = LemmaCategory::OPEN_CLASSES
            .iter()
            .map(|category| format!("{} {}", lexicon.lemma_count(*category), category))
            .collect();
        info!("loaded wordnet lexicon from {}: {}", dir.display(), counts.join(", "));
        Ok(lexicon)
    }

    fn entries(&self, category: LemmaCategory) -> Option<&Entries> {
        match category {
            LemmaCategory::Noun => Some(&self.noun),
            LemmaCategory::Verb => Some(&self.verb),
            LemmaCategory::Adjective => Some(&self.adjective),
            LemmaCategory::Adverb => Some(&self.adverb),
            LemmaCategory::Unmapped => None,
        }
    }

    fn entries_mut(&mut self, category: LemmaCategory) -> Option<&mut Entries> {
        match category {
            LemmaCategory::Noun => Some(&mut self.noun),
            LemmaCategory::Verb => Some(&mut self.verb),
            LemmaCategory::Adjective => Some(&mut self.adjective),
            LemmaCategory::Adverb => Some(&mut self.adverb),
            LemmaCategory::Unmapped => None,
        }
    }

    pub fn is_lemma(&self, word: &str, category: LemmaCategory) -> bool {
        self.entries(category)
            .is_some_and(|entries| entries.lemmas.contains(word))
    }

    /// Lemmas listed for an irregular form, if it is one.
    pub fn exceptions(&self, form: &str, category: LemmaCategory) -> Option<&[String]> {
        self.entries(category)
            .and_then(|entries| entries.exceptions.get(form))
            .map(Vec::as_slice)
    }

    pub fn insert_lemma(&mut self, lemma: &str, category: LemmaCategory) {
        if let Some(entries) = self.entries_mut(category) {
            entries.lemmas.insert(lemma.to_string());
        }
    }

    pub fn insert_exception(&mut self, form: &str, lemma: &str, category: LemmaCategory) {
        if let Some(entries) = self.entries_mut(category) {
            entries
                .exceptions
                .entry(form.to_string())
                .or_default()
                .push(lemma.to_string());
        }
    }

    pub fn lemma_count(&self, category: LemmaCategory) -> usize {
        self.entries(category)
            .map_or(0, |entries| entries.lemmas.len())
    }
}

fn read_wordnet_file(dir: &Path, file: &'static str) -> Result<String, ResourceError> {
    let path: PathBuf = dir.join(file);
    if !path.is_file() {
        return Err(ResourceError::MissingFile {
            dir: dir.to_path_buf(),
            file,
        });
    }
    fs::read_to_string(&path).map_err(|e| ResourceError::io(path, e))
}
