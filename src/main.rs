use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use patchspell::cli::output::{self, FileReport, OutputFormat};
use patchspell::{dict, Config, ScanMode, SpellChecker};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "patchspell")]
#[command(version, about = "Spellchecker for patch additions and code comments", long_about = None)]
struct Cli {
    /// Files to check (reads a patch from stdin when omitted)
    #[arg(value_name = "FILES")]
    files: Vec<PathBuf>,

    /// Directory holding the dictionary files
    #[arg(short = 'd', long = "dir", env = "PATCHSPELL_DICT_DIR")]
    dictionary_dir: Option<PathBuf>,

    /// File suffix of dictionary files inside the directory
    #[arg(long, value_name = "SUFFIX")]
    suffix: Option<String>,

    /// Which lines to check (patch, comments, text); detected from the file name by default
    #[arg(short, long)]
    mode: Option<ScanMode>,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Exit with code 0 even if errors are found
    #[arg(long)]
    no_fail: bool,

    /// Print dictionary statistics and debug logs
    #[arg(short, long)]
    verbose: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Parser, Debug)]
enum Commands {
    /// Dictionary inspection
    Dict {
        #[command(subcommand)]
        action: DictCommands,
    },
}

#[derive(Parser, Debug)]
enum DictCommands {
    /// List dictionary source files
    List,
    /// Show entry, word and n-gram counts
    Info,
    /// Print every known word
    Words,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "patchspell", &mut io::stdout());
        return Ok(());
    }

    init_logging(cli.verbose);
    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = Config::load(cli.dictionary_dir.clone(), cli.suffix.clone(), cli.mode)?;

    if let Some(command) = cli.command {
        return handle_command(command, &config);
    }

    let checker = SpellChecker::new(&config)?;
    if cli.verbose {
        let dir = config.dictionary_dir()?;
        dict::manager::write_info(&mut io::stderr().lock(), dir, checker.dictionary())?;
    }

    let colored = !cli.no_color;
    let mut reports = Vec::new();
    let mut unreadable = 0;

    if cli.files.is_empty() {
        match checker.check_reader(io::stdin().lock(), config.mode) {
            Ok(result) => reports.push(FileReport {
                name: "<stdin>".to_string(),
                result,
            }),
            Err(err) => {
                eprintln!("Error: {:#}", err);
                unreadable += 1;
            }
        }
    }

    for file_path in &cli.files {
        if !file_path.exists() {
            eprintln!("Error: File not found: {}", file_path.display());
            unreadable += 1;
            continue;
        }

        match checker.check(file_path, config.mode) {
            Ok(result) => reports.push(FileReport {
                name: file_path.display().to_string(),
                result,
            }),
            Err(err) => {
                eprintln!("Error: {:#}", err);
                unreadable += 1;
            }
        }
    }

    let total_errors: usize = reports.iter().map(|r| r.result.error_count).sum();

    match cli.format {
        OutputFormat::Json => output::print_json(&reports)?,
        OutputFormat::Text => {
            for report in &reports {
                output::print_text_report(report, colored);
            }
            output::print_check_summary(total_errors, reports.len(), colored);
        }
    }

    if unreadable > 0 {
        std::process::exit(2);
    }
    if total_errors > 0 && !cli.no_fail {
        std::process::exit(1);
    }

    Ok(())
}

fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Dict { action } => {
            let dir = config.dictionary_dir()?;
            match action {
                DictCommands::List => {
                    dict::manager::list_sources(dir, &config.dictionary_suffix)?;
                }
                DictCommands::Info => {
                    let checker = SpellChecker::new(config)?;
                    dict::manager::show_info(dir, checker.dictionary())?;
                }
                DictCommands::Words => {
                    let checker = SpellChecker::new(config)?;
                    dict::manager::show_known_words(checker.dictionary());
                }
            }
        }
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "patchspell=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("PATCHSPELL_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
