use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // A letter, then letters/underscores/hyphens/apostrophes, then a letter (3+ chars total)
    static ref TOKEN: Regex = Regex::new(r"[A-Za-z][A-Za-z_'\-]+[A-Za-z]").unwrap();
}

/// Extract lowercased tokens from a line together with their byte offsets.
///
/// The same pattern is used for dictionary sources and for checked text, so punctuation
/// and line breaks never influence what counts as a word.
pub fn tokens(line: &str) -> Vec<(String, usize)> {
    TOKEN
        .find_iter(line)
        .map(|m| (m.as_str().to_ascii_lowercase(), m.start()))
        .collect()
}

/// Same as [`tokens`] without offsets.
pub fn words(line: &str) -> impl Iterator<Item = String> + '_ {
    TOKEN.find_iter(line).map(|m| m.as_str().to_ascii_lowercase())
}
