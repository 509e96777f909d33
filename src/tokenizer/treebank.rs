use once_cell::sync::Lazy;
use regex::Regex;

use super::Tokenizer;

type Rule = (Regex, &'static str);

fn compile(rules: &[(&str, &'static str)]) -> Vec<Rule> {
    rules
        .iter()
        .map(|(pattern, replacement)| {
            (
                Regex::new(pattern).expect("invalid treebank pattern"),
                *replacement,
            )
        })
        .collect()
}

// Quotes, punctuation, brackets and dashes. Applied to the unpadded text.
static SPLIT_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    compile(&[
        (r#"^""#, "``"),
        (r"(``)", " ${1} "),
        (r#"([ (\[{<])("|'{2})"#, "${1} `` "),
        (r#"([^.])(\.)([\])}>"']*)\s*$"#, "${1} ${2} ${3} "),
        (r"([:,])([^\d])", " ${1} ${2}"),
        (r"([:,])$", " ${1} "),
        (r"\.{2,}", " ${0} "),
        (r"[;@#$%&]", " ${0} "),
        (r"[?!]", " ${0} "),
        (r"([^'])' ", "${1} ' "),
        (r"[*]", " ${0} "),
        (r"[\]\[(){}<>]", " ${0} "),
        (r"--", " -- "),
    ])
});

// Closing quotes, clitics and fixed contractions. Applied to the text padded
// with a space on both sides so every pattern can rely on a trailing space.
static CLITIC_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    compile(&[
        (r"''", " '' "),
        (r#"""#, " '' "),
        (r"([^' ])('[sS]|'[mM]|'[dD]|') ", "${1} ${2} "),
        (r"([^' ])('ll|'LL|'re|'RE|'ve|'VE|n't|N'T) ", "${1} ${2} "),
        (r"(?i)\b(can)(not)\b", " ${1} ${2} "),
        (r"(?i)\b(d)('ye)\b", " ${1} ${2} "),
        (r"(?i)\b(gim)(me)\b", " ${1} ${2} "),
        (r"(?i)\b(gon)(na)\b", " ${1} ${2} "),
        (r"(?i)\b(got)(ta)\b", " ${1} ${2} "),
        (r"(?i)\b(lem)(me)\b", " ${1} ${2} "),
        (r"(?i)\b(more)('n)\b", " ${1} ${2} "),
        (r"(?i)\b(wan)(na)\s", " ${1} ${2} "),
        (r"(?i) ('t)(is)\b", " ${1} ${2} "),
        (r"(?i) ('t)(was)\b", " ${1} ${2} "),
    ])
});

/// Penn Treebank style word tokenizer.
///
/// Splits off punctuation and clitics the way the Treebank annotation does
/// (`don't` -> `do n't`, `gonna` -> `gon na`) and then splits on whitespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreebankTokenizer;

/// Whitespace plus the ASCII information separators 0x1C-0x1F, which split
/// words the same way a space does.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

impl TreebankTokenizer {
    pub fn new() -> Self {
        TreebankTokenizer
    }

    fn apply(rules: &[Rule], text: String) -> String {
        rules.iter().fold(text, |text, (pattern, replacement)| {
            pattern.replace_all(&text, *replacement).into_owned()
        })
    }
}

impl Tokenizer for TreebankTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let text: String = text
            .chars()
            .map(|c| if is_separator(c) { ' ' } else { c })
            .collect();
        if text.trim().is_empty() {
            return Vec::new();
        }

        let text = Self::apply(&SPLIT_RULES, text);
        let text = Self::apply(&CLITIC_RULES, format!(" {} ", text));

        text.split_whitespace().map(str::to_string).collect()
    }
}
