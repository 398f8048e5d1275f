//! Test fixtures and factory functions for creating test data.

use wordgame_core::WordPair;

/// Portuguese pairs with distinct, non-overlapping translations.
pub fn portuguese_pairs() -> Vec<WordPair> {
    [
        ("p1", "hello", "olá"),
        ("p2", "cat", "gato"),
        ("p3", "dog", "cachorro"),
        ("p4", "thank you", "obrigado"),
        ("p5", "please", "por favor"),
    ]
    .into_iter()
    .map(|(id, english, translated)| WordPair::new(id, english, translated, "Portuguese"))
    .collect()
}

/// Spanish pairs for language-switch tests.
pub fn spanish_pairs() -> Vec<WordPair> {
    [("s1", "dog", "perro"), ("s2", "water", "agua")]
        .into_iter()
        .map(|(id, english, translated)| WordPair::new(id, english, translated, "Spanish"))
        .collect()
}

pub fn all_pairs() -> Vec<WordPair> {
    let mut pairs = portuguese_pairs();
    pairs.extend(spanish_pairs());
    pairs
}

/// An answer that cannot match `pair` under any tier.
pub fn wrong_answer_for(pair: &WordPair) -> &'static str {
    if pair.translated_word == "gato" {
        "cachorro"
    } else {
        "gato"
    }
}
