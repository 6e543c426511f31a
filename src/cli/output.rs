use crate::{CheckResult, SpellError};
use anyhow::{Context, Result};
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Results for one input (a file, or `<stdin>`).
#[derive(Debug, Clone)]
pub struct FileReport {
    pub name: String,
    pub result: CheckResult,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonError {
    file: String,
    line: usize,
    column: usize,
    word: String,
    suggestion: Option<String>,
    context: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonOutput {
    files_checked: usize,
    words_checked: usize,
    total_errors: usize,
    errors: Vec<JsonError>,
}

pub fn print_text_report(report: &FileReport, colored_output: bool) {
    if report.result.errors.is_empty() {
        return;
    }

    if colored_output {
        println!("\n{}", report.name.bold().underline());
    } else {
        println!("\n{}", report.name);
    }

    for error in &report.result.errors {
        println!("{}", format_error(error, colored_output));
    }
}

/// Two lines per error: position, word and suggestion, then the source line.
pub fn format_error(error: &SpellError, colored_output: bool) -> String {
    let line_info = format!("{}:{}", error.line, error.column);
    let context = error.context.trim_end();

    if colored_output {
        let suggestion = match &error.suggestion {
            Some(word) => format!("{} {}", "→".dimmed(), word.green()),
            None => "(no suggestion)".dimmed().to_string(),
        };
        format!(
            "  {} {} {}\n    {}",
            line_info.blue().bold(),
            error.word.red().bold(),
            suggestion,
            context.dimmed()
        )
    } else {
        let suggestion = match &error.suggestion {
            Some(word) => format!("→ {}", word),
            None => "(no suggestion)".to_string(),
        };
        format!("  {} {} {}\n    {}", line_info, error.word, suggestion, context)
    }
}

pub fn render_json(reports: &[FileReport]) -> Result<String> {
    let errors = reports
        .iter()
        .flat_map(|report| {
            report.result.errors.iter().map(|e| JsonError {
                file: report.name.clone(),
                line: e.line,
                column: e.column,
                word: e.word.clone(),
                suggestion: e.suggestion.clone(),
                context: e.context.clone(),
            })
        })
        .collect();

    let output = JsonOutput {
        files_checked: reports.len(),
        words_checked: reports.iter().map(|r| r.result.words_checked).sum(),
        total_errors: reports.iter().map(|r| r.result.error_count).sum(),
        errors,
    };

    serde_json::to_string_pretty(&output).context("Failed to serialize results")
}

pub fn print_json(reports: &[FileReport]) -> Result<()> {
    println!("{}", render_json(reports)?);
    Ok(())
}

pub fn print_check_summary(total_errors: usize, files_checked: usize, colored: bool) {
    let files_word = if files_checked == 1 { "input" } else { "inputs" };

    println!();
    if total_errors == 0 {
        if colored {
            println!("{}", "✓ No spelling errors found!".green().bold());
        } else {
            println!("✓ No spelling errors found!");
        }
    } else {
        let error_word = if total_errors == 1 { "word" } else { "words" };
        if colored {
            println!(
                "{} {} {} might be wrong in {} {}",
                "✗".red().bold(),
                total_errors.to_string().red().bold(),
                error_word,
                files_checked,
                files_word
            );
        } else {
            println!(
                "✗ {} {} might be wrong in {} {}",
                total_errors, error_word, files_checked, files_word
            );
        }
    }
}
