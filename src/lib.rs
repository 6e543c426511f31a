pub mod checker;
pub mod cli;
pub mod config;
pub mod dict;
pub mod parser;

pub use checker::{Classification, SpellChecker};
pub use config::{Config, ConfigError};
pub use parser::ScanMode;

#[derive(Debug, Clone, Default)]
pub struct CheckResult {
    pub words_checked: usize,
    pub error_count: usize,
    pub errors: Vec<SpellError>,
}

impl CheckResult {
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }
}

/// A word that is not in the dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpellError {
    pub word: String,
    pub line: usize,
    pub column: usize,
    pub context: String,
    pub suggestion: Option<String>,
}
