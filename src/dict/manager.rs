use crate::checker::dictionary::{self, Dictionary};
use anyhow::{Context, Result};
use colored::*;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

pub struct SourceInfo {
    pub name: String,
    pub size_bytes: u64,
}

/// Describe the dictionary source files found in `dir`
pub fn sources(dir: &Path, suffix: &str) -> Result<Vec<SourceInfo>> {
    let mut infos = Vec::new();

    for path in dictionary::source_files(dir, suffix)? {
        let metadata = fs::metadata(&path)
            .with_context(|| format!("Failed to stat dictionary file: {}", path.display()))?;
        let name = path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("unknown")
            .to_string();

        infos.push(SourceInfo {
            name,
            size_bytes: metadata.len(),
        });
    }

    Ok(infos)
}

pub fn list_sources(dir: &Path, suffix: &str) -> Result<()> {
    let infos = sources(dir, suffix)?;

    if infos.is_empty() {
        println!(
            "{}",
            format!("No *.{} dictionary files found.", suffix).yellow()
        );
    } else {
        println!("{}", "Dictionary sources:".bold());
        println!();

        for info in &infos {
            println!(
                "  {} {} ({})",
                "✓".green(),
                info.name.cyan().bold(),
                format!("{}KB", info.size_bytes.div_ceil(1024)).dimmed()
            );
        }
    }

    println!();
    println!("Dictionary directory: {}", dir.display().to_string().dimmed());

    Ok(())
}

pub fn show_info(dir: &Path, dictionary: &Dictionary) -> io::Result<()> {
    write_info(&mut io::stdout().lock(), dir, dictionary)
}

/// Entry, known word and n-gram counts of `dictionary`
pub fn write_info<W: Write>(out: &mut W, dir: &Path, dictionary: &Dictionary) -> io::Result<()> {
    let stats = dictionary.stats();

    writeln!(out, "{}", "Dictionary information".bold())?;
    writeln!(out, "  Directory:   {}", dir.display())?;
    writeln!(out, "  Entries:     {}", stats.entries.to_string().yellow())?;
    writeln!(out, "  Known words: {}", stats.known_words.to_string().yellow())?;
    writeln!(out, "  N-gram keys: {}", stats.ngrams.to_string().yellow())
}

pub fn show_known_words(dictionary: &Dictionary) {
    for word in dictionary.known_words() {
        println!("{}", word);
    }
}
