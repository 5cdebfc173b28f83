// ABOUTME: Integration tests for density scoring with the bundled Turkish model.
// ABOUTME: Covers the worked examples and the score/count invariants.

use std::path::PathBuf;

use notes_density::{analyze, load_model, AnalysisResult, LexiconTagger, PosTag, Tagger, MODEL_FILE};
use pretty_assertions::assert_eq;

fn bundled() -> LexiconTagger {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("models")
        .join(MODEL_FILE);
    load_model(&path).unwrap()
}

#[test]
fn noun_and_verb_sentence() {
    let r = analyze(&bundled(), "Kitap okudum.");
    assert_eq!(
        r,
        AnalysisResult {
            density_score: 1.0,
            meaningful_word_count: 2,
            total_word_count: 2,
        }
    );
}

#[test]
fn function_words_lower_the_score() {
    // bu(DET) kitap(NOUN) çok(ADV) güzel(ADJ)
    let r = analyze(&bundled(), "Bu kitap çok güzel!");
    assert_eq!(r.total_word_count, 4);
    assert_eq!(r.meaningful_word_count, 1);
    assert_eq!(r.density_score, 0.25);
}

#[test]
fn proper_nouns_and_numbers_are_meaningful() {
    let tagger = bundled();
    let tokens = tagger.tokenize("Cumhuriyet 1923'te Ankara'da ilan edildi.");
    let tags: Vec<PosTag> = tokens.iter().filter(|t| t.is_word()).map(|t| t.pos).collect();
    assert_eq!(tags[1], PosTag::Num);
    assert_eq!(tags[2], PosTag::Propn);

    let r = analyze(&tagger, "Cumhuriyet 1923'te Ankara'da ilan edildi.");
    assert_eq!(r.total_word_count, 5);
    assert!(r.meaningful_word_count >= 3);
}

#[test]
fn empty_and_blank_input_score_zero() {
    let tagger = bundled();
    for input in ["", " ", "\n\n", "\t \r\n"] {
        assert_eq!(analyze(&tagger, input), AnalysisResult::empty());
    }
}

#[test]
fn score_stays_within_bounds() {
    let tagger = bundled();
    let samples = [
        "Öğrenciler sınavdan önce notlarını tekrar ediyorlar.",
        "ve veya ama fakat",
        "1 2 3 4 5",
        "...!!!???",
        "Hücre zarı seçici geçirgendir; madde alışverişini düzenler.",
        "# Başlık\n\n- madde bir\n- madde iki\n",
        "x + y = z",
    ];
    for text in samples {
        let r = analyze(&tagger, text);
        assert!(
            r.meaningful_word_count <= r.total_word_count,
            "counts out of order for {:?}: {:?}",
            text,
            r
        );
        assert!(
            (0.0..=1.0).contains(&r.density_score),
            "score out of range for {:?}: {:?}",
            text,
            r
        );
        if r.total_word_count > 0 {
            let expected = r.meaningful_word_count as f64 / r.total_word_count as f64;
            assert_eq!(r.density_score, expected);
        }
    }
}
