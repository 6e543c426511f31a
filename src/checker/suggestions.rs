use std::collections::HashSet;

const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Generate every string exactly one edit away from `word`.
///
/// The result is the union of deletions, adjacent transpositions, substitutions and
/// insertions over the lowercase ASCII alphabet. It does not depend on any dictionary.
pub fn generate(word: &str) -> HashSet<String> {
    let chars: Vec<char> = word.chars().collect();

    let mut candidates = HashSet::with_capacity(chars.len() * 54 + 26);
    candidates.extend(deletions_of(&chars));
    candidates.extend(transpositions_of(&chars));
    candidates.extend(substitutions_of(&chars));
    candidates.extend(insertions_of(&chars));
    candidates
}

/// One variant per removed position (`n` variants)
pub fn deletions(word: &str) -> Vec<String> {
    deletions_of(&word.chars().collect::<Vec<_>>())
}

/// Swap each pair of neighbours (`n - 1` variants)
pub fn transpositions(word: &str) -> Vec<String> {
    transpositions_of(&word.chars().collect::<Vec<_>>())
}

/// Replace each position with each letter (`26 * n` variants)
pub fn substitutions(word: &str) -> Vec<String> {
    substitutions_of(&word.chars().collect::<Vec<_>>())
}

/// Insert each letter at each boundary, both ends included (`26 * (n + 1)` variants)
pub fn insertions(word: &str) -> Vec<String> {
    insertions_of(&word.chars().collect::<Vec<_>>())
}

fn deletions_of(chars: &[char]) -> Vec<String> {
    (0..chars.len())
        .map(|i| {
            let mut new_word = chars.to_vec();
            new_word.remove(i);
            new_word.into_iter().collect()
        })
        .collect()
}

fn transpositions_of(chars: &[char]) -> Vec<String> {
    (0..chars.len().saturating_sub(1))
        .map(|i| {
            let mut new_word = chars.to_vec();
            new_word.swap(i, i + 1);
            new_word.into_iter().collect()
        })
        .collect()
}

fn substitutions_of(chars: &[char]) -> Vec<String> {
    let mut variants = Vec::with_capacity(chars.len() * ALPHABET.len());
    for i in 0..chars.len() {
        for letter in ALPHABET.chars() {
            let mut new_word = chars.to_vec();
            new_word[i] = letter;
            variants.push(new_word.into_iter().collect());
        }
    }
    variants
}

fn insertions_of(chars: &[char]) -> Vec<String> {
    let mut variants = Vec::with_capacity((chars.len() + 1) * ALPHABET.len());
    for i in 0..=chars.len() {
        for letter in ALPHABET.chars() {
            let mut new_word = chars.to_vec();
            new_word.insert(i, letter);
            variants.push(new_word.into_iter().collect());
        }
    }
    variants
}
