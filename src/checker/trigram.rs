use std::collections::HashMap;

/// Unique, monotonically assigned identifier of a dictionary entry.
pub type EntryKey = u32;

/// Words shorter than this are indexed whole instead of being split into windows.
pub const NGRAM_LEN: usize = 3;

/// Split a word into its padded trigrams.
///
/// Words of length `n >= 3` are padded with one blank on each side and yield exactly `n`
/// overlapping windows. Shorter words (including the empty string) yield themselves.
pub fn extract_ngrams(word: &str) -> Vec<String> {
    let len = word.chars().count();
    if len < NGRAM_LEN {
        return vec![word.to_string()];
    }

    let padded: Vec<char> = std::iter::once(' ')
        .chain(word.chars())
        .chain(std::iter::once(' '))
        .collect();

    padded
        .windows(NGRAM_LEN)
        .map(|window| window.iter().collect())
        .collect()
}

/// Inverted index from n-gram to the keys of the dictionary entries that contain it.
///
/// Postings are kept sorted and free of duplicates: keys are registered in ascending
/// order, so appending and skipping a repeat of the last key is enough.
#[derive(Debug, Default, Clone)]
pub struct TrigramIndex {
    postings: HashMap<String, Vec<EntryKey>>,
}

impl TrigramIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `key` to the posting list of every n-gram of `word`.
    pub fn register(&mut self, key: EntryKey, word: &str) {
        for ngram in extract_ngrams(word) {
            let keys = self.postings.entry(ngram).or_default();
            match keys.last() {
                Some(&last) if last == key => {}
                Some(&last) if last > key => {
                    // Out-of-order registration; keep the list sorted
                    if let Err(pos) = keys.binary_search(&key) {
                        keys.insert(pos, key);
                    }
                }
                _ => keys.push(key),
            }
        }
    }

    /// Keys of all entries containing `ngram`, ascending. Empty when the n-gram is unknown.
    pub fn lookup(&self, ngram: &str) -> &[EntryKey] {
        self.postings.get(ngram).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct n-gram keys in the index
    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}
