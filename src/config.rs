use crate::parser::ScanMode;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const LOCAL_CONFIG_FILE: &str = ".patchspell.toml";
pub const DEFAULT_DICTIONARY_SUFFIX: &str = "dict";

/// Fatal problems found before any word is checked.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no dictionary directory configured (use --dir or PATCHSPELL_DICT_DIR)")]
    NoDictionaryDir,

    #[error("dictionary directory not found: {}", .0.display())]
    MissingDictionaryDir(PathBuf),

    #[error("cannot read dictionary directory {}: {source}", .path.display())]
    UnreadableDictionaryDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read dictionary file {}: {source}", .path.display())]
    UnreadableDictionaryFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no *.{suffix} dictionary files in {}", .dir.display())]
    NoDictionaryFiles { dir: PathBuf, suffix: String },

    #[error("cannot build the known word set: {source}")]
    KnownWordSet {
        #[source]
        source: fst::Error,
    },

    #[error("cannot read config file {}: {source}", .path.display())]
    UnreadableConfigFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}: {source}", .path.display())]
    InvalidConfigFile {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub dictionary_dir: Option<PathBuf>,
    pub dictionary_suffix: String,
    pub mode: Option<ScanMode>,
    /// Fail instead of running with an empty dictionary
    pub require_dictionary: bool,
    /// Words registered verbatim in addition to the dictionary files
    pub extra_words: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary_dir: None,
            dictionary_suffix: DEFAULT_DICTIONARY_SUFFIX.to_string(),
            mode: None,
            require_dictionary: false,
            extra_words: Vec::new(),
        }
    }
}

/// One config file as written; unset keys leave lower layers untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub dictionary_dir: Option<PathBuf>,

    #[serde(default)]
    pub dictionary_suffix: Option<String>,

    #[serde(default)]
    pub mode: Option<ScanMode>,

    #[serde(default)]
    pub require_dictionary: Option<bool>,

    #[serde(default)]
    pub extra_words: Vec<String>,
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(
        dictionary_dir: Option<PathBuf>,
        dictionary_suffix: Option<String>,
        mode: Option<ScanMode>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                config = config.merge(Self::from_file(&global_path)?);
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            config = config.merge(Self::from_file(&local_path)?);
        }

        if dictionary_dir.is_some() {
            config.dictionary_dir = dictionary_dir;
        }
        if let Some(suffix) = dictionary_suffix {
            config.dictionary_suffix = suffix;
        }
        if mode.is_some() {
            config.mode = mode;
        }

        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<ConfigFile, ConfigError> {
        let contents =
            fs::read_to_string(path).map_err(|source| ConfigError::UnreadableConfigFile {
                path: path.to_path_buf(),
                source,
            })?;
        toml::from_str(&contents).map_err(|source| ConfigError::InvalidConfigFile {
            path: path.to_path_buf(),
            source,
        })
    }

    fn merge(mut self, other: ConfigFile) -> Self {
        if other.dictionary_dir.is_some() {
            self.dictionary_dir = other.dictionary_dir;
        }
        if let Some(suffix) = other.dictionary_suffix {
            self.dictionary_suffix = suffix;
        }
        if other.mode.is_some() {
            self.mode = other.mode;
        }
        if let Some(require) = other.require_dictionary {
            self.require_dictionary = require;
        }
        self.extra_words.extend(other.extra_words);
        self
    }

    /// The dictionary directory, or an error if none was configured anywhere.
    pub fn dictionary_dir(&self) -> Result<&Path, ConfigError> {
        self.dictionary_dir
            .as_deref()
            .ok_or(ConfigError::NoDictionaryDir)
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "patchspell").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
