use std::sync::Arc;

use rustc_hash::FxHashSet;

use super::{Lemmatizer, lexicon::Lexicon};
use crate::tagger::tag_map::LemmaCategory;

const NOUN_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("ves", "f"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

const VERB_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ies", "y"),
    ("es", "e"),
    ("es", ""),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
];

const ADJECTIVE_RULES: &[(&str, &str)] = &[("er", ""), ("est", ""), ("er", "e"), ("est", "e")];

fn detachment_rules(category: LemmaCategory) -> &'static [(&'static str, &'static str)] {
    match category {
        LemmaCategory::Noun => NOUN_RULES,
        LemmaCategory::Verb => VERB_RULES,
        LemmaCategory::Adjective => ADJECTIVE_RULES,
        LemmaCategory::Adverb | LemmaCategory::Unmapped => &[],
    }
}

fn detach(forms: &[String], rules: &[(&str, &str)]) -> Vec<String> {
    let mut detached = Vec::new();
    for form in forms {
        for (suffix, replacement) in rules {
            if let Some(stem) = form.strip_suffix(suffix) {
                detached.push(format!("{stem}{replacement}"));
            }
        }
    }
    detached
}

fn known_lemmas(lexicon: &Lexicon, forms: &[String], category: LemmaCategory) -> Vec<String> {
    let mut seen = FxHashSet::default();
    forms
        .iter()
        .filter(|form| lexicon.is_lemma(form, category))
        .filter(|form| seen.insert(form.as_str()))
        .cloned()
        .collect()
}

/// Candidate lemmas for `form` in `category`, in discovery order.
///
/// Irregular forms are resolved through the exception table only. Regular
/// forms are tried as-is and with one suffix detached; if nothing matches,
/// suffixes keep being detached from the generated forms until a lemma turns
/// up or no rule applies.
pub fn morphy(lexicon: &Lexicon, form: &str, category: LemmaCategory) -> Vec<String> {
    if category == LemmaCategory::Unmapped {
        return Vec::new();
    }

    if let Some(lemmas) = lexicon.exceptions(form, category) {
        let mut forms = vec![form.to_string()];
        forms.extend(lemmas.iter().cloned());
        return known_lemmas(lexicon, &forms, category);
    }

    let rules = detachment_rules(category);
    let mut forms = detach(&[form.to_string()], rules);

    let mut first_pass = vec![form.to_string()];
    first_pass.extend(forms.iter().cloned());
    let lemmas = known_lemmas(lexicon, &first_pass, category);
    if !lemmas.is_empty() {
        return lemmas;
    }

    while !forms.is_empty() {
        forms = detach(&forms, rules);
        let lemmas = known_lemmas(lexicon, &forms, category);
        if !lemmas.is_empty() {
            return lemmas;
        }
    }

    Vec::new()
}

/// WordNet morphy lemmatizer.
///
/// Picks the shortest candidate `morphy` returns and falls back to the word
/// itself. Lookups are case-sensitive.
#[derive(Debug, Clone)]
pub struct WordNetLemmatizer {
    lexicon: Arc<Lexicon>,
}

impl WordNetLemmatizer {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }
}

impl Lemmatizer for WordNetLemmatizer {
    fn lemmatize(&self, word: &str, category: LemmaCategory) -> String {
        morphy(&self.lexicon, word, category)
            .into_iter()
            .min_by_key(|lemma| lemma.chars().count())
            .unwrap_or_else(|| word.to_string())
    }
}
