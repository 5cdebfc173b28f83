// ABOUTME: Density scoring over tagged tokens.
// ABOUTME: Counts word tokens and the meaningful subset (NOUN, PROPN, NUM, VERB).

use std::io::Read;

use crate::error::DensityError;
use crate::result::AnalysisResult;
use crate::tagger::Tagger;

/// Score `text` with `tagger`.
///
/// Whitespace-only input short-circuits to an empty result without calling
/// the tagger.
pub fn analyze<T: Tagger>(tagger: &T, text: &str) -> AnalysisResult {
    if text.trim().is_empty() {
        return AnalysisResult::empty();
    }

    let mut meaningful = 0u64;
    let mut total = 0u64;
    for token in tagger.tokenize(text) {
        if !token.is_word() {
            continue;
        }
        total += 1;
        if token.pos.is_meaningful() {
            meaningful += 1;
        }
    }

    tracing::debug!(meaningful, total, "counted tokens");
    AnalysisResult::from_counts(meaningful, total)
}

/// Read all of `reader` as UTF-8 and score it.
pub fn analyze_reader<T: Tagger, R: Read>(
    tagger: &T,
    mut reader: R,
) -> Result<AnalysisResult, DensityError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(analyze(tagger, &text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tagger::{PosTag, Token};
    use std::cell::Cell;

    struct FakeTagger {
        tokens: Vec<Token>,
        calls: Cell<usize>,
    }

    impl FakeTagger {
        fn new(tokens: Vec<Token>) -> Self {
            Self {
                tokens,
                calls: Cell::new(0),
            }
        }
    }

    impl Tagger for FakeTagger {
        fn tokenize(&self, _text: &str) -> Vec<Token> {
            self.calls.set(self.calls.get() + 1);
            self.tokens.clone()
        }
    }

    #[test]
    fn noun_verb_sentence_is_fully_dense() {
        let tagger = FakeTagger::new(vec![
            Token::new("Kitap", PosTag::Noun),
            Token::new("okudum", PosTag::Verb),
            Token::new(".", PosTag::Punct),
        ]);
        let r = analyze(&tagger, "Kitap okudum.");
        assert_eq!(r.total_word_count, 2);
        assert_eq!(r.meaningful_word_count, 2);
        assert_eq!(r.density_score, 1.0);
    }

    #[test]
    fn mixed_tags_give_fraction() {
        let tagger = FakeTagger::new(vec![
            Token::new("bu", PosTag::Det),
            Token::new("çok", PosTag::Adv),
            Token::new("güzel", PosTag::Adj),
            Token::new("Ali", PosTag::Propn),
            Token::new("\n", PosTag::Space),
            Token::new("3", PosTag::Num),
        ]);
        let r = analyze(&tagger, "bu çok güzel Ali\n3");
        assert_eq!(r.total_word_count, 5);
        assert_eq!(r.meaningful_word_count, 2);
        assert!((r.density_score - 0.4).abs() < f64::EPSILON);
    }

    #[test]
    fn whitespace_input_skips_tagger() {
        let tagger = FakeTagger::new(vec![Token::new("x", PosTag::Noun)]);
        for input in ["", "   ", "\n\t\n"] {
            assert_eq!(analyze(&tagger, input), AnalysisResult::empty());
        }
        assert_eq!(tagger.calls.get(), 0);
    }

    #[test]
    fn only_punctuation_scores_zero() {
        let tagger = FakeTagger::new(vec![
            Token::new("!", PosTag::Punct),
            Token::new("?", PosTag::Punct),
        ]);
        let r = analyze(&tagger, "!?");
        assert_eq!(r, AnalysisResult::empty());
        assert_eq!(tagger.calls.get(), 1);
    }

    #[test]
    fn reader_rejects_invalid_utf8() {
        let tagger = FakeTagger::new(vec![]);
        let err = analyze_reader(&tagger, &[0xffu8, 0xfe, 0x00][..]).unwrap_err();
        assert!(matches!(err, DensityError::InputRead(_)));
    }

    #[test]
    fn reader_scores_text() {
        let tagger = FakeTagger::new(vec![Token::new("kitap", PosTag::Noun)]);
        let r = analyze_reader(&tagger, "kitap".as_bytes()).unwrap();
        assert_eq!(r, AnalysisResult::from_counts(1, 1));
    }
}
