use std::sync::Arc;

use log::debug;

use super::{PosTagger, TaggedToken, tag_map::LemmaCategory};
use crate::lemmatizer::{Lexicon, morphy};

// Function words and auxiliaries with a fixed Penn Treebank tag.
const CLOSED_CLASS: &[(&str, &str)] = &[
    ("a", "DT"),
    ("all", "DT"),
    ("an", "DT"),
    ("another", "DT"),
    ("any", "DT"),
    ("both", "DT"),
    ("each", "DT"),
    ("either", "DT"),
    ("every", "DT"),
    ("neither", "DT"),
    ("no", "DT"),
    ("some", "DT"),
    ("that", "DT"),
    ("the", "DT"),
    ("these", "DT"),
    ("this", "DT"),
    ("those", "DT"),
    ("about", "IN"),
    ("above", "IN"),
    ("across", "IN"),
    ("after", "IN"),
    ("against", "IN"),
    ("although", "IN"),
    ("as", "IN"),
    ("at", "IN"),
    ("because", "IN"),
    ("before", "IN"),
    ("below", "IN"),
    ("between", "IN"),
    ("by", "IN"),
    ("during", "IN"),
    ("for", "IN"),
    ("from", "IN"),
    ("if", "IN"),
    ("in", "IN"),
    ("into", "IN"),
    ("of", "IN"),
    ("off", "IN"),
    ("on", "IN"),
    ("out", "IN"),
    ("over", "IN"),
    ("per", "IN"),
    ("since", "IN"),
    ("than", "IN"),
    ("though", "IN"),
    ("through", "IN"),
    ("under", "IN"),
    ("until", "IN"),
    ("up", "IN"),
    ("upon", "IN"),
    ("via", "IN"),
    ("while", "IN"),
    ("with", "IN"),
    ("within", "IN"),
    ("without", "IN"),
    ("and", "CC"),
    ("but", "CC"),
    ("nor", "CC"),
    ("or", "CC"),
    ("plus", "CC"),
    ("yet", "CC"),
    ("he", "PRP"),
    ("her", "PRP"),
    ("herself", "PRP"),
    ("him", "PRP"),
    ("himself", "PRP"),
    ("i", "PRP"),
    ("it", "PRP"),
    ("itself", "PRP"),
    ("me", "PRP"),
    ("myself", "PRP"),
    ("ourselves", "PRP"),
    ("she", "PRP"),
    ("them", "PRP"),
    ("themselves", "PRP"),
    ("they", "PRP"),
    ("us", "PRP"),
    ("we", "PRP"),
    ("you", "PRP"),
    ("yourself", "PRP"),
    ("yourselves", "PRP"),
    ("his", "PRP$"),
    ("its", "PRP$"),
    ("my", "PRP$"),
    ("our", "PRP$"),
    ("their", "PRP$"),
    ("your", "PRP$"),
    ("what", "WP"),
    ("who", "WP"),
    ("whom", "WP"),
    ("whose", "WP$"),
    ("which", "WDT"),
    ("how", "WRB"),
    ("when", "WRB"),
    ("where", "WRB"),
    ("why", "WRB"),
    ("can", "MD"),
    ("could", "MD"),
    ("may", "MD"),
    ("might", "MD"),
    ("must", "MD"),
    ("shall", "MD"),
    ("should", "MD"),
    ("will", "MD"),
    ("would", "MD"),
    ("to", "TO"),
    ("there", "EX"),
    ("again", "RB"),
    ("also", "RB"),
    ("here", "RB"),
    ("just", "RB"),
    ("n't", "RB"),
    ("not", "RB"),
    ("now", "RB"),
    ("only", "RB"),
    ("so", "RB"),
    ("then", "RB"),
    ("too", "RB"),
    ("very", "RB"),
    ("hello", "UH"),
    ("hey", "UH"),
    ("lol", "UH"),
    ("oh", "UH"),
    ("omg", "UH"),
    ("wow", "UH"),
    ("yeah", "UH"),
    ("yes", "UH"),
    ("be", "VB"),
    ("am", "VBP"),
    ("are", "VBP"),
    ("is", "VBZ"),
    ("was", "VBD"),
    ("were", "VBD"),
    ("been", "VBN"),
    ("being", "VBG"),
    ("have", "VBP"),
    ("has", "VBZ"),
    ("had", "VBD"),
    ("having", "VBG"),
    ("do", "VBP"),
    ("does", "VBZ"),
    ("did", "VBD"),
    ("doing", "VBG"),
];

const AUXILIARIES: &[&str] = &[
    "be", "am", "is", "are", "was", "were", "been", "being", "have", "has", "had", "having",
];

const SUBJECT_PRONOUNS: &[&str] = &["i", "you", "we", "they"];

const ADJECTIVE_SUFFIXES: &[&str] = &[
    "able", "ible", "ful", "ous", "ive", "less", "ish", "ical", "ic", "al",
];

fn closed_class_tag(lower: &str) -> Option<&'static str> {
    CLOSED_CLASS
        .iter()
        .find(|(word, _)| *word == lower)
        .map(|(_, tag)| *tag)
}

fn punctuation_tag(word: &str) -> Option<&'static str> {
    if word.is_empty() || !word.chars().all(|c| c.is_ascii_punctuation()) {
        return None;
    }
    let tag = match word {
        "." | "!" | "?" => ".",
        "," => ",",
        ":" | ";" | "--" | "-" => ":",
        "``" => "``",
        "''" | "'" => "''",
        "(" | "[" | "{" => "(",
        ")" | "]" | "}" => ")",
        "$" => "$",
        "#" => "#",
        _ if word.starts_with("..") => ":",
        _ => "SYM",
    };
    Some(tag)
}

fn is_number(word: &str) -> bool {
    word.chars().any(|c| c.is_ascii_digit())
        && word
            .chars()
            .all(|c| c.is_ascii_digit() || c == ',' || c == '.')
}

fn unknown_word_tag(word: &str, lower: &str) -> &'static str {
    if word.starts_with(|c: char| c.is_uppercase()) {
        return "NNP";
    }
    if lower.len() > 4 && lower.ends_with("ing") {
        return "VBG";
    }
    if lower.len() > 3 && lower.ends_with("ed") {
        return "VBD";
    }
    if lower.len() > 3 && lower.ends_with("ly") {
        return "RB";
    }
    if ADJECTIVE_SUFFIXES
        .iter()
        .any(|suffix| lower.len() > suffix.len() + 2 && lower.ends_with(suffix))
    {
        return "JJ";
    }
    if lower.len() > 3 && lower.ends_with('s') && !lower.ends_with("ss") {
        return "NNS";
    }
    "NN"
}

/// Which open classes can produce a word form.
#[derive(Debug, Default, Clone, Copy)]
struct WordClasses {
    noun: bool,
    verb: bool,
    adjective: bool,
    adverb: bool,
}

impl WordClasses {
    fn any(&self) -> bool {
        self.noun || self.verb || self.adjective || self.adverb
    }
}

/// Lexicon-driven Penn Treebank tagger.
///
/// Each token first gets a tag from the closed-class table, its shape, or the
/// open classes the lexicon can derive it from. A second left-to-right pass
/// revises tags using the previous token.
#[derive(Debug, Clone)]
pub struct RuleTagger {
    lexicon: Arc<Lexicon>,
}

impl RuleTagger {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    fn can_be(&self, lower: &str, category: LemmaCategory) -> bool {
        !morphy(&self.lexicon, lower, category).is_empty()
    }

    fn word_classes(&self, lower: &str) -> WordClasses {
        WordClasses {
            noun: self.can_be(lower, LemmaCategory::Noun),
            verb: self.can_be(lower, LemmaCategory::Verb),
            adjective: self.can_be(lower, LemmaCategory::Adjective),
            adverb: self.can_be(lower, LemmaCategory::Adverb),
        }
    }

    fn initial_tag(&self, word: &str) -> &'static str {
        let lower = word.to_lowercase();
        if let Some(tag) = closed_class_tag(&lower) {
            return tag;
        }
        if let Some(tag) = punctuation_tag(word) {
            return tag;
        }
        if is_number(word) {
            return "CD";
        }

        let classes = self.word_classes(&lower);
        if !classes.any() {
            return unknown_word_tag(word, &lower);
        }

        let lexicon = &self.lexicon;
        if lower.len() > 4 && lower.ends_with("ing") && classes.verb {
            return "VBG";
        }
        if lower.len() > 3
            && lower.ends_with("ed")
            && classes.verb
            && !lexicon.is_lemma(&lower, LemmaCategory::Adjective)
        {
            return "VBD";
        }
        if lower.ends_with("ly") && classes.adverb {
            return "RB";
        }
        if classes.adjective && !lexicon.is_lemma(&lower, LemmaCategory::Adjective) {
            if lower.ends_with("est") {
                return "JJS";
            }
            if lower.ends_with("er") {
                return "JJR";
            }
        }
        if lower.ends_with('s')
            && !lower.ends_with("ss")
            && !lexicon.is_lemma(&lower, LemmaCategory::Noun)
        {
            if classes.noun {
                return "NNS";
            }
            if classes.verb {
                return "VBZ";
            }
        }

        if lexicon.is_lemma(&lower, LemmaCategory::Noun) {
            return "NN";
        }
        if lexicon.is_lemma(&lower, LemmaCategory::Adjective) {
            return "JJ";
        }
        if lexicon.is_lemma(&lower, LemmaCategory::Verb) {
            return "VB";
        }
        if lexicon.is_lemma(&lower, LemmaCategory::Adverb) {
            return "RB";
        }

        // only reachable through an irregular form
        if classes.noun {
            "NNS"
        } else if classes.adjective {
            "JJR"
        } else if classes.verb {
            "VBD"
        } else {
            "RB"
        }
    }

    fn revise(&self, previous_word: &str, previous_tag: &str, word: &str, tag: &'static str) -> &'static str {
        let lower = word.to_lowercase();
        let previous_word = previous_word.to_lowercase();
        let lexicon = &self.lexicon;

        match tag {
            "NN" | "JJ" | "VBP"
                if matches!(previous_tag, "TO" | "MD")
                    && lexicon.is_lemma(&lower, LemmaCategory::Verb) =>
            {
                "VB"
            }
            "NN" | "VB"
                if previous_tag == "PRP"
                    && SUBJECT_PRONOUNS.contains(&previous_word.as_str())
                    && lexicon.is_lemma(&lower, LemmaCategory::Verb) =>
            {
                "VBP"
            }
            "VB" | "VBP"
                if matches!(previous_tag, "DT" | "PRP$" | "JJ" | "IN")
                    && self.can_be(&lower, LemmaCategory::Noun) =>
            {
                "NN"
            }
            "NNS"
                if matches!(previous_tag, "NN" | "NNP" | "PRP")
                    && self.can_be(&lower, LemmaCategory::Verb) =>
            {
                "VBZ"
            }
            "VBD" if AUXILIARIES.contains(&previous_word.as_str()) => "VBN",
            "VBD" if matches!(previous_tag, "DT" | "PRP$") => "JJ",
            "VBG"
                if matches!(previous_tag, "DT" | "JJ" | "PRP$")
                    && self.can_be(&lower, LemmaCategory::Noun) =>
            {
                "NN"
            }
            _ => tag,
        }
    }
}

impl PosTagger for RuleTagger {
    fn tag(&self, tokens: &[String]) -> Vec<TaggedToken> {
        let mut tags: Vec<&'static str> = tokens.iter().map(|token| self.initial_tag(token)).collect();

        for i in 1..tags.len() {
            let revised = self.revise(&tokens[i - 1], tags[i - 1], &tokens[i], tags[i]);
            if revised != tags[i] {
                debug!("retagged {:?} from {} to {}", tokens[i], tags[i], revised);
                tags[i] = revised;
            }
        }

        tokens
            .iter()
            .zip(tags)
            .map(|(token, tag)| TaggedToken::new(token.as_str(), tag))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(words: &[&str]) -> Vec<String> {
        tags_with(Lexicon::builtin(), words)
    }

    fn tags_with(lexicon: Lexicon, words: &[&str]) -> Vec<String> {
        let tagger = RuleTagger::new(Arc::new(lexicon));
        let tokens: Vec<String> = words.iter().map(|w| w.to_string()).collect();
        tagger.tag(&tokens).into_iter().map(|t| t.tag).collect()
    }

    #[test]
    fn test_empty_sequence() {
        assert!(tags(&[]).is_empty());
    }

    #[test]
    fn test_output_keeps_tokens_in_order() {
        let tagger = RuleTagger::new(Arc::new(Lexicon::builtin()));
        let tokens: Vec<String> = ["cats", "chasing", "mice"].iter().map(|w| w.to_string()).collect();
        let tagged = tagger.tag(&tokens);
        let words: Vec<&str> = tagged.iter().map(|t| t.word.as_str()).collect();
        assert_eq!(words, vec!["cats", "chasing", "mice"]);
    }

    #[test]
    fn test_gerund_and_plural() {
        assert_eq!(tags(&["running", "stores"]), vec!["VBG", "NNS"]);
        assert_eq!(tags(&["cats", "chasing", "mice", "gardens"]), vec!["NNS", "VBG", "NNS", "NNS"]);
    }

    #[test]
    fn test_gerund_after_determiner_is_a_noun() {
        assert_eq!(tags(&["the", "running"]), vec!["DT", "NN"]);
    }

    #[test]
    fn test_verb_after_to_and_modal() {
        assert_eq!(tags(&["I", "want", "to", "run"]), vec!["PRP", "VBP", "TO", "VB"]);
        assert_eq!(tags(&["to", "love"]), vec!["TO", "VB"]);
        assert_eq!(tags(&["can", "love"]), vec!["MD", "VB"]);
    }

    #[test]
    fn test_noun_verb_ambiguity_after_subject() {
        assert_eq!(tags(&["we", "love", "coffee"]), vec!["PRP", "VBP", "NN"]);
        assert_eq!(tags(&["Obama", "tweets"]), vec!["NNP", "VBZ"]);
        assert_eq!(tags(&["he", "runs"]), vec!["PRP", "VBZ"]);
    }

    #[test]
    fn test_participle_after_auxiliary() {
        assert_eq!(tags(&["was", "stopped"]), vec!["VBD", "VBN"]);
        assert_eq!(tags(&["stopped"]), vec!["VBD"]);
    }

    #[test]
    fn test_past_form_after_determiner_is_an_adjective() {
        assert_eq!(tags(&["the", "stopped"]), vec!["DT", "JJ"]);
        assert_eq!(tags(&["my", "stopped"]), vec!["PRP$", "JJ"]);
    }

    #[test]
    fn test_verb_base_in_noun_position() {
        // "dice" is a verb lemma and, through the exception table, a noun form
        let mut lexicon = Lexicon::empty();
        lexicon.insert_lemma("die", LemmaCategory::Noun);
        lexicon.insert_exception("dice", "die", LemmaCategory::Noun);
        lexicon.insert_lemma("dice", LemmaCategory::Verb);
        lexicon.insert_lemma("big", LemmaCategory::Adjective);

        assert_eq!(tags_with(lexicon.clone(), &["dice"]), vec!["VB"]);
        assert_eq!(tags_with(lexicon.clone(), &["the", "dice"]), vec!["DT", "NN"]);
        assert_eq!(tags_with(lexicon.clone(), &["my", "dice"]), vec!["PRP$", "NN"]);
        assert_eq!(tags_with(lexicon.clone(), &["big", "dice"]), vec!["JJ", "NN"]);
        assert_eq!(tags_with(lexicon.clone(), &["with", "dice"]), vec!["IN", "NN"]);
        assert_eq!(tags_with(lexicon, &["to", "dice"]), vec!["TO", "VB"]);
    }

    #[test]
    fn test_adjectives_and_adverbs() {
        assert_eq!(tags(&["happier"]), vec!["JJR"]);
        assert_eq!(tags(&["better"]), vec!["JJR"]);
        assert_eq!(tags(&["strongest"]), vec!["JJS"]);
        assert_eq!(tags(&["quickly"]), vec!["RB"]);
        assert_eq!(tags(&["blessed"]), vec!["JJ"]);
        assert_eq!(tags(&["family"]), vec!["NN"]);
    }

    #[test]
    fn test_numbers_and_punctuation() {
        assert_eq!(tags(&["2021", "1,000", "3.5"]), vec!["CD", "CD", "CD"]);
        assert_eq!(tags(&["Hello", ",", "world", "!"]), vec!["UH", ",", "NN", "."]);
        assert_eq!(tags(&["(", "``", "''", ")"]), vec!["(", "``", "''", ")"]);
    }

    #[test]
    fn test_unknown_words_use_word_shape() {
        assert_eq!(tags(&["vibing"]), vec!["VBG"]);
        assert_eq!(tags(&["yeeted"]), vec!["VBD"]);
        assert_eq!(tags(&["glorious"]), vec!["JJ"]);
        assert_eq!(tags(&["covfefe"]), vec!["NN"]);
        assert_eq!(tags(&["memes"]), vec!["NNS"]);
        assert_eq!(tags(&["Trumpland"]), vec!["NNP"]);
    }

    #[test]
    fn test_irregular_forms() {
        assert_eq!(tags(&["mice"]), vec!["NNS"]);
        assert_eq!(tags(&["went"]), vec!["VBD"]);
    }
}
