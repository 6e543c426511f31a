pub mod dictionary;
pub mod similarity;
pub mod suggestions;
pub mod tokenizer;
pub mod trigram;

use crate::parser::{self, ScanMode, TextSpan};
use crate::{CheckResult, Config, SpellError};
use anyhow::{Context, Result};
use dictionary::{Dictionary, DictionaryBuilder};
use rayon::prelude::*;
use std::collections::BTreeSet;
use std::fs;
use std::io::Read;
use std::path::Path;
use trigram::{extract_ngrams, EntryKey};

/// Outcome of looking up a single word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// The word is in the dictionary
    Correct,
    /// The word is unknown; this dictionary word is the proposed fix
    Suggestion(String),
    /// The word is unknown and no dictionary word shares an n-gram with it
    NoSuggestion,
}

impl Classification {
    pub fn is_correct(&self) -> bool {
        matches!(self, Classification::Correct)
    }

    pub fn suggestion(&self) -> Option<&str> {
        match self {
            Classification::Suggestion(word) => Some(word),
            _ => None,
        }
    }
}

/// Lookup engine over a frozen [`Dictionary`].
///
/// Holds no mutable state, so one checker can be shared across threads.
pub struct SpellChecker {
    dictionary: Dictionary,
}

impl SpellChecker {
    pub fn new(config: &Config) -> Result<Self> {
        let dir = config.dictionary_dir()?;
        let files = dictionary::source_files(dir, &config.dictionary_suffix)?;

        if files.is_empty() && config.require_dictionary {
            return Err(crate::config::ConfigError::NoDictionaryFiles {
                dir: dir.to_path_buf(),
                suffix: config.dictionary_suffix.clone(),
            }
            .into());
        }

        let mut builder = DictionaryBuilder::new();
        for path in &files {
            builder.add_file(path)?;
        }
        for word in &config.extra_words {
            builder.add_word(word);
        }

        Ok(Self::with_dictionary(builder.build()?))
    }

    pub fn with_dictionary(dictionary: Dictionary) -> Self {
        Self { dictionary }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Classify a normalized word as correct, correctable or unknown.
    ///
    /// Candidates are the dictionary entries sharing at least one n-gram with `word`,
    /// visited in ascending key order. The first candidate one edit away wins; failing
    /// that, the candidate with the highest [`similarity::score`] wins, earliest key on ties.
    pub fn classify(&self, word: &str) -> Classification {
        if self.dictionary.contains(word) {
            return Classification::Correct;
        }

        let pool = self.candidate_pool(word);
        if pool.is_empty() {
            tracing::trace!(word, "no candidates");
            return Classification::NoSuggestion;
        }

        let edits = suggestions::generate(word);
        let close = pool
            .iter()
            .filter_map(|&key| self.dictionary.word(key))
            .find(|candidate| edits.contains(*candidate));

        if let Some(candidate) = close {
            tracing::trace!(word, candidate, "one edit away");
            return Classification::Suggestion(candidate.to_string());
        }

        let mut best: Option<(&str, f64)> = None;
        for candidate in pool.iter().filter_map(|&key| self.dictionary.word(key)) {
            let score = similarity::score(word, candidate);
            if best.map_or(true, |(_, top)| score > top) {
                best = Some((candidate, score));
            }
        }

        match best {
            Some((candidate, score)) => {
                tracing::trace!(word, candidate, score, "most similar");
                Classification::Suggestion(candidate.to_string())
            }
            None => Classification::NoSuggestion,
        }
    }

    /// Union of the postings of every n-gram of `word`, ascending by key
    fn candidate_pool(&self, word: &str) -> BTreeSet<EntryKey> {
        let index = self.dictionary.index();
        extract_ngrams(word)
            .iter()
            .flat_map(|ngram| index.lookup(ngram).iter().copied())
            .collect()
    }

    /// Classify every span and collect the ones that are not correct, in input order.
    pub fn check_spans(&self, spans: &[TextSpan]) -> CheckResult {
        let errors: Vec<SpellError> = spans
            .par_iter()
            .filter_map(|span| match self.classify(&span.text) {
                Classification::Correct => None,
                other => Some(SpellError {
                    word: span.text.clone(),
                    line: span.line,
                    column: span.column,
                    context: span.original_text.clone(),
                    suggestion: other.suggestion().map(str::to_string),
                }),
            })
            .collect();

        CheckResult {
            words_checked: spans.len(),
            error_count: errors.len(),
            errors,
        }
    }

    /// Check a file, picking the scan mode from `mode` or the file extension.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected.
    pub fn check(&self, file_path: &Path, mode: Option<ScanMode>) -> Result<CheckResult> {
        let bytes = fs::read(file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))?;
        let content = String::from_utf8_lossy(&bytes);

        let mode = mode.unwrap_or_else(|| ScanMode::from_path(file_path));
        let spans = parser::scan(&content, mode, Some(file_path));
        Ok(self.check_spans(&spans))
    }

    /// Check everything readable from `reader`, a patch unless `mode` says otherwise.
    pub fn check_reader<R: Read>(
        &self,
        mut reader: R,
        mode: Option<ScanMode>,
    ) -> Result<CheckResult> {
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .context("Failed to read input")?;
        let content = String::from_utf8_lossy(&bytes);

        let spans = parser::scan(&content, mode.unwrap_or(ScanMode::Patch), None);
        Ok(self.check_spans(&spans))
    }
}
