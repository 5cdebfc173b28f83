// ABOUTME: Lexicon-and-suffix part-of-speech tagger backed by a JSON model file.
// ABOUTME: Tokenizes with regex, then tags numbers, punctuation, lexicon words, proper nouns and suffixes.

//! Bundled Turkish tagger.
//!
//! The model is a JSON document holding a word list and a list of suffix
//! rules. Tagging a word tries, in order: the exact lowercased form, the
//! apostrophe stem (`Ankara'da`), capitalization mid-sentence, the longest
//! matching suffix, and finally the model's default tag.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use crate::tagger::{PosTag, Tagger, Token};

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?P<num>\p{N}+(?:[.,]\p{N}+)*(?:['’]\w+)?)|(?P<word>\w+(?:['’]\w+)*)|(?P<ws>\s+)|(?P<other>.)",
    )
    .unwrap()
});
static PUNCT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\p{P}$").unwrap());

const SENTENCE_END: &[&str] = &[".", "!", "?", "…"];

fn default_tag() -> PosTag {
    PosTag::Noun
}

/// A suffix rule: words ending in `suffix` receive `tag`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SuffixRule {
    pub suffix: String,
    pub tag: PosTag,
}

/// On-disk model format.
#[derive(Debug, Clone, Deserialize)]
pub struct LexiconModel {
    pub name: String,
    pub language: String,
    #[serde(default = "default_tag")]
    pub default_tag: PosTag,
    #[serde(default)]
    pub words: HashMap<String, PosTag>,
    #[serde(default)]
    pub suffixes: Vec<SuffixRule>,
}

/// Lowercase with the Turkish dotted/dotless I mapping.
pub fn turkish_lowercase(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            'I' => out.push('ı'),
            'İ' => out.push('i'),
            _ => out.extend(c.to_lowercase()),
        }
    }
    out
}

fn is_capitalized(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

/// Tagger built from a [`LexiconModel`].
#[derive(Debug, Clone)]
pub struct LexiconTagger {
    name: String,
    default_tag: PosTag,
    words: HashMap<String, PosTag>,
    // Longest suffix first.
    suffixes: Vec<SuffixRule>,
}

impl LexiconTagger {
    pub fn from_model(model: LexiconModel) -> Self {
        let words = model
            .words
            .into_iter()
            .map(|(form, tag)| (turkish_lowercase(&form), tag))
            .collect();
        let mut suffixes: Vec<SuffixRule> = model
            .suffixes
            .into_iter()
            .filter(|rule| !rule.suffix.is_empty())
            .map(|rule| SuffixRule {
                suffix: turkish_lowercase(&rule.suffix),
                tag: rule.tag,
            })
            .collect();
        suffixes.sort_by(|a, b| b.suffix.chars().count().cmp(&a.suffix.chars().count()));

        Self {
            name: model.name,
            default_tag: model.default_tag,
            words,
            suffixes,
        }
    }

    /// Parse a model from its JSON text.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let model: LexiconModel = serde_json::from_str(json)?;
        Ok(Self::from_model(model))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    fn lookup(&self, word: &str) -> Option<PosTag> {
        self.words.get(&turkish_lowercase(word)).copied()
    }

    fn suffix_tag(&self, word: &str) -> Option<PosTag> {
        let lower = turkish_lowercase(word);
        let len = lower.chars().count();
        self.suffixes
            .iter()
            .find(|rule| len > rule.suffix.chars().count() + 1 && lower.ends_with(&rule.suffix))
            .map(|rule| rule.tag)
    }

    fn tag_word(&self, word: &str, sentence_start: bool) -> PosTag {
        if let Some(tag) = self.lookup(word) {
            return tag;
        }

        if let Some((stem, _)) = word.split_once(['\'', '’']) {
            if is_capitalized(stem) {
                return PosTag::Propn;
            }
            if let Some(tag) = self.lookup(stem) {
                return tag;
            }
        }

        if !sentence_start && is_capitalized(word) {
            return PosTag::Propn;
        }

        self.suffix_tag(word).unwrap_or(self.default_tag)
    }
}

impl Tagger for LexiconTagger {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut sentence_start = true;

        for caps in TOKEN_RE.captures_iter(text) {
            if let Some(m) = caps.name("num") {
                tokens.push(Token::new(m.as_str(), PosTag::Num));
                sentence_start = false;
            } else if let Some(m) = caps.name("word") {
                let tag = self.tag_word(m.as_str(), sentence_start);
                tokens.push(Token::new(m.as_str(), tag));
                sentence_start = false;
            } else if let Some(m) = caps.name("ws") {
                // A lone space separates tokens and is not a token itself.
                if m.as_str() != " " {
                    tokens.push(Token::new(m.as_str(), PosTag::Space));
                }
            } else if let Some(m) = caps.name("other") {
                let s = m.as_str();
                if PUNCT_RE.is_match(s) {
                    tokens.push(Token::new(s, PosTag::Punct));
                    if SENTENCE_END.contains(&s) {
                        sentence_start = true;
                    }
                } else {
                    tokens.push(Token::new(s, PosTag::Sym));
                    sentence_start = false;
                }
            }
        }

        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tagger() -> LexiconTagger {
        LexiconTagger::from_json(
            r#"{
                "name": "test",
                "language": "tr",
                "default_tag": "NOUN",
                "words": {"kitap": "NOUN", "okudum": "VERB", "ve": "CCONJ", "bu": "DET", "çok": "ADV", "Işık": "NOUN"},
                "suffixes": [
                    {"suffix": "dum", "tag": "VERB"},
                    {"suffix": "yorum", "tag": "VERB"},
                    {"suffix": "lı", "tag": "ADJ"}
                ]
            }"#,
        )
        .unwrap()
    }

    fn tags(text: &str) -> Vec<(String, PosTag)> {
        tagger()
            .tokenize(text)
            .into_iter()
            .map(|t| (t.text, t.pos))
            .collect()
    }

    #[test]
    fn tags_simple_sentence() {
        assert_eq!(
            tags("Kitap okudum."),
            vec![
                ("Kitap".to_string(), PosTag::Noun),
                ("okudum".to_string(), PosTag::Verb),
                (".".to_string(), PosTag::Punct),
            ]
        );
    }

    #[test]
    fn numbers_are_num_including_decimals_and_suffixes() {
        let t = tags("3,5 kilo ve 2023'te");
        assert_eq!(t[0], ("3,5".to_string(), PosTag::Num));
        assert_eq!(t[3], ("2023'te".to_string(), PosTag::Num));
    }

    #[test]
    fn apostrophe_capitalized_stem_is_proper_noun() {
        let t = tags("Ankara'da kaldım");
        assert_eq!(t[0], ("Ankara'da".to_string(), PosTag::Propn));
    }

    #[test]
    fn capitalized_mid_sentence_is_proper_noun() {
        let t = tags("bu Mehmet");
        assert_eq!(t[1], ("Mehmet".to_string(), PosTag::Propn));
        // Sentence-initial capitals fall through to the suffix rules.
        let t = tags("Geliyorum. Okuyorum");
        assert_eq!(t[0].1, PosTag::Verb);
        assert_eq!(t[2].1, PosTag::Verb);
    }

    #[test]
    fn suffix_rules_prefer_longest_match() {
        let t = tags("geliyorum");
        assert_eq!(t[0].1, PosTag::Verb);
        let t = tags("tuzlu akıllı");
        assert_eq!(t[1].1, PosTag::Adj);
    }

    #[test]
    fn suffix_needs_a_stem() {
        // "dum" alone is shorter than suffix plus stem; default applies.
        assert_eq!(tags("dum")[0].1, PosTag::Noun);
    }

    #[test]
    fn turkish_lowercase_maps_dotted_and_dotless_i() {
        assert_eq!(turkish_lowercase("IŞIK"), "ışık");
        assert_eq!(turkish_lowercase("İSTANBUL"), "istanbul");
        assert_eq!(tags("IŞIK")[0].1, PosTag::Noun);
    }

    #[test]
    fn whitespace_runs_become_space_tokens() {
        let tokens = tagger().tokenize("kitap\n\nve  bu");
        let spaces: Vec<&Token> = tokens.iter().filter(|t| t.is_space).collect();
        assert_eq!(spaces.len(), 2);
        assert_eq!(tokens.iter().filter(|t| t.is_word()).count(), 3);
    }

    #[test]
    fn symbols_are_words_not_punctuation() {
        let tokens = tagger().tokenize("a + b");
        let plus = tokens.iter().find(|t| t.text == "+").unwrap();
        assert_eq!(plus.pos, PosTag::Sym);
        assert!(plus.is_word());
    }

    #[test]
    fn rejects_malformed_model() {
        assert!(LexiconTagger::from_json("{\"name\": 1}").is_err());
        assert!(LexiconTagger::from_json(r#"{"name":"x","language":"tr","words":{"a":"NOPE"}}"#).is_err());
    }
}
