// ABOUTME: Part-of-speech tagging seam: the Tagger trait, Token, and the PosTag set.
// ABOUTME: Scoring depends only on this interface so tests can supply a fake tagger.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Universal part-of-speech tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PosTag {
    Adj,
    Adp,
    Adv,
    Aux,
    Cconj,
    Det,
    Intj,
    Noun,
    Num,
    Part,
    Pron,
    Propn,
    Punct,
    Sconj,
    Sym,
    Verb,
    X,
    Space,
}

impl PosTag {
    /// Nouns, proper nouns, numbers and verbs count toward density.
    pub fn is_meaningful(self) -> bool {
        matches!(
            self,
            PosTag::Noun | PosTag::Propn | PosTag::Num | PosTag::Verb
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PosTag::Adj => "ADJ",
            PosTag::Adp => "ADP",
            PosTag::Adv => "ADV",
            PosTag::Aux => "AUX",
            PosTag::Cconj => "CCONJ",
            PosTag::Det => "DET",
            PosTag::Intj => "INTJ",
            PosTag::Noun => "NOUN",
            PosTag::Num => "NUM",
            PosTag::Part => "PART",
            PosTag::Pron => "PRON",
            PosTag::Propn => "PROPN",
            PosTag::Punct => "PUNCT",
            PosTag::Sconj => "SCONJ",
            PosTag::Sym => "SYM",
            PosTag::Verb => "VERB",
            PosTag::X => "X",
            PosTag::Space => "SPACE",
        }
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single tagged token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub pos: PosTag,
    pub is_punct: bool,
    pub is_space: bool,
}

impl Token {
    pub fn new(text: impl Into<String>, pos: PosTag) -> Self {
        Self {
            text: text.into(),
            pos,
            is_punct: pos == PosTag::Punct,
            is_space: pos == PosTag::Space,
        }
    }

    /// True for tokens that count toward the total word count.
    pub fn is_word(&self) -> bool {
        !self.is_punct && !self.is_space
    }
}

/// Splits text into tagged tokens.
pub trait Tagger {
    fn tokenize(&self, text: &str) -> Vec<Token>;
}

impl<T: Tagger + ?Sized> Tagger for &T {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        (**self).tokenize(text)
    }
}
