use crate::checker::tokenizer;
use crate::checker::trigram::{EntryKey, TrigramIndex};
use crate::config::ConfigError;
use fst::{Set, Streamer};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// One occurrence of a word in a dictionary source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEntry {
    pub key: EntryKey,
    pub word: String,
}

/// Frozen dictionary: entries, the set of known words and the trigram index over them.
///
/// Built once by [`DictionaryBuilder`] and only read afterwards.
pub struct Dictionary {
    entries: Vec<DictionaryEntry>,
    known: Set<Vec<u8>>,
    index: TrigramIndex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DictionaryStats {
    pub entries: usize,
    pub known_words: usize,
    pub ngrams: usize,
}

impl Dictionary {
    /// Load every `*.{suffix}` file directly inside `dir`.
    ///
    /// Files are read in file name order so that keys are assigned the same way on every run.
    /// An empty directory yields an empty dictionary.
    pub fn load(dir: &Path, suffix: &str) -> Result<Self, ConfigError> {
        let mut builder = DictionaryBuilder::new();
        for path in source_files(dir, suffix)? {
            builder.add_file(&path)?;
        }
        builder.build()
    }

    /// Build a dictionary from in-memory word-list sources (useful for testing)
    pub fn from_sources<'a, I>(sources: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut builder = DictionaryBuilder::new();
        for text in sources {
            builder.add_source(text);
        }
        builder.build()
    }

    /// Check if the exact word is known
    pub fn contains(&self, word: &str) -> bool {
        self.known.contains(word.as_bytes())
    }

    /// Word stored under `key`
    pub fn word(&self, key: EntryKey) -> Option<&str> {
        self.entries
            .get(key as usize)
            .map(|entry| entry.word.as_str())
    }

    pub fn entries(&self) -> &[DictionaryEntry] {
        &self.entries
    }

    pub fn index(&self) -> &TrigramIndex {
        &self.index
    }

    /// All distinct known words in sorted order
    pub fn known_words(&self) -> Vec<String> {
        let mut words = Vec::with_capacity(self.known.len());
        let mut stream = self.known.stream();

        while let Some(key) = stream.next() {
            if let Ok(word) = String::from_utf8(key.to_vec()) {
                words.push(word);
            }
        }

        words
    }

    pub fn stats(&self) -> DictionaryStats {
        DictionaryStats {
            entries: self.entries.len(),
            known_words: self.known.len(),
            ngrams: self.index.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Accumulates entries and index postings while dictionary sources are read.
#[derive(Default)]
pub struct DictionaryBuilder {
    entries: Vec<DictionaryEntry>,
    index: TrigramIndex,
}

impl DictionaryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a single word verbatim (lowercased). Empty words are ignored.
    ///
    /// Unlike [`add_source`](Self::add_source) this accepts words shorter than three letters.
    pub fn add_word(&mut self, word: &str) -> Option<EntryKey> {
        let word = word.trim().to_ascii_lowercase();
        if word.is_empty() {
            return None;
        }

        let key = EntryKey::try_from(self.entries.len()).ok()?;
        self.index.register(key, &word);
        self.entries.push(DictionaryEntry { key, word });
        Some(key)
    }

    /// Tokenize a word-list source (one word per line or free text) and register every token.
    /// Returns the number of registered entries.
    pub fn add_source(&mut self, text: &str) -> usize {
        let mut added = 0;
        for line in text.lines() {
            for word in tokenizer::words(line) {
                if self.add_word(&word).is_some() {
                    added += 1;
                }
            }
        }
        added
    }

    pub fn add_file(&mut self, path: &Path) -> Result<usize, ConfigError> {
        let bytes = fs::read(path).map_err(|source| ConfigError::UnreadableDictionaryFile {
            path: path.to_path_buf(),
            source,
        })?;

        let added = self.add_source(&String::from_utf8_lossy(&bytes));
        debug!(path = %path.display(), words = added, "loaded dictionary file");
        Ok(added)
    }

    /// Freeze the entries into a [`Dictionary`].
    pub fn build(self) -> Result<Dictionary, ConfigError> {
        let mut words: Vec<&str> = self.entries.iter().map(|e| e.word.as_str()).collect();
        words.sort_unstable();
        words.dedup();

        let known =
            Set::from_iter(words).map_err(|source| ConfigError::KnownWordSet { source })?;

        info!(
            entries = self.entries.len(),
            known_words = known.len(),
            ngrams = self.index.len(),
            "dictionary ready"
        );

        Ok(Dictionary {
            entries: self.entries,
            known,
            index: self.index,
        })
    }
}

/// List the dictionary source files inside `dir`, sorted by file name.
pub fn source_files(dir: &Path, suffix: &str) -> Result<Vec<PathBuf>, ConfigError> {
    if !dir.exists() {
        return Err(ConfigError::MissingDictionaryDir(dir.to_path_buf()));
    }

    // WalkDir yields nothing at all for a plain file, so check explicitly
    if !dir.is_dir() {
        return Err(ConfigError::UnreadableDictionaryDir {
            path: dir.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::Other, "not a directory"),
        });
    }

    let extension = format!(".{}", suffix.trim_start_matches('.'));
    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|err| ConfigError::UnreadableDictionaryDir {
            path: dir.to_path_buf(),
            source: err.into(),
        })?;

        let matches = entry
            .file_name()
            .to_str()
            .map(|name| name.ends_with(&extension) && name.len() > extension.len())
            .unwrap_or(false);

        if matches && entry.path().is_file() {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}
