use crate::checker::trigram::extract_ngrams;

/// N-gram overlap between two words.
///
/// Every n-gram of `a` is compared with every n-gram of `b`; each equal pair counts once,
/// so an n-gram repeated in both words contributes the product of its multiplicities. The
/// match count is divided by the total number of n-grams in both words.
///
/// For words without repeated n-grams this is half the Dice coefficient. Highly repetitive
/// words can score above `1.0`.
pub fn score(a: &str, b: &str) -> f64 {
    let a_grams = extract_ngrams(a);
    let b_grams = extract_ngrams(b);

    let matches = a_grams
        .iter()
        .map(|ga| b_grams.iter().filter(|gb| *gb == ga).count())
        .sum::<usize>();

    // Both sequences hold at least one n-gram, even for the empty word
    matches as f64 / (a_grams.len() + b_grams.len()) as f64
}
