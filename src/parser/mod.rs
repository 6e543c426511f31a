pub mod patch;
pub mod plaintext;
pub mod source_code;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Which lines of the input are worth checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanMode {
    /// Comments on added lines of a unified diff
    Patch,
    /// Comment bodies of a source file
    Comments,
    /// Every line
    Text,
}

impl FromStr for ScanMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "patch" | "diff" => Ok(ScanMode::Patch),
            "comments" | "comment" => Ok(ScanMode::Comments),
            "text" => Ok(ScanMode::Text),
            _ => Err(format!("Unknown mode: {}", s)),
        }
    }
}

impl fmt::Display for ScanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanMode::Patch => write!(f, "patch"),
            ScanMode::Comments => write!(f, "comments"),
            ScanMode::Text => write!(f, "text"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStyle {
    /// `//` and `/* ... */`
    CStyle,
    /// `#`
    Hash,
}

impl CommentStyle {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "c" | "h" | "cc" | "cpp" | "cxx" | "hpp" | "hh" | "rs" | "go" | "java" | "js"
            | "mjs" | "cjs" | "ts" | "jsx" | "tsx" | "cs" | "swift" | "kt" | "scala" => {
                Some(CommentStyle::CStyle)
            }
            "py" | "pyw" | "sh" | "bash" | "rb" | "pl" | "toml" | "yaml" | "yml" => {
                Some(CommentStyle::Hash)
            }
            _ => None,
        }
    }
}

impl ScanMode {
    /// Detect the scan mode from a file extension
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "diff" | "patch" => ScanMode::Patch,
            _ if CommentStyle::from_path(path).is_some() => ScanMode::Comments,
            _ => ScanMode::Text,
        }
    }
}

/// A token worth checking, with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    /// Lowercased token
    pub text: String,
    /// 1-based line number in the input
    pub line: usize,
    /// 1-based byte column of the token within the line
    pub column: usize,
    /// The whole source line, for context
    pub original_text: String,
}

impl TextSpan {
    /// Tokens of `segment`, which starts at byte `segment_start` of `line`
    fn from_segment(
        line_num: usize,
        line: &str,
        segment_start: usize,
        segment: &str,
    ) -> Vec<Self> {
        crate::checker::tokenizer::tokens(segment)
            .into_iter()
            .map(|(text, offset)| TextSpan {
                text,
                line: line_num,
                column: segment_start + offset + 1,
                original_text: line.to_string(),
            })
            .collect()
    }
}

/// Extract checkable tokens from `content` according to `mode`.
///
/// `path` only matters in [`ScanMode::Comments`], where it selects the comment syntax
/// (C-style when unknown).
pub fn scan(content: &str, mode: ScanMode, path: Option<&Path>) -> Vec<TextSpan> {
    let spans = match mode {
        ScanMode::Patch => patch::parse(content),
        ScanMode::Comments => {
            let style = path
                .and_then(CommentStyle::from_path)
                .unwrap_or(CommentStyle::CStyle);
            source_code::parse(content, style)
        }
        ScanMode::Text => plaintext::parse(content),
    };

    tracing::debug!(%mode, spans = spans.len(), "scanned input");
    spans
}
