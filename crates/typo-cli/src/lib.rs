// typo-cli: argument parsing, known-word discovery and the run loop.

use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use typo_engine::checker::{DEFAULT_MAX_RESULTS, DEFAULT_THRESHOLD};
use typo_engine::tokenizer::TokenizerOptions;
use typo_engine::{CheckOptions, Corpus, KnownWords, Report, TypoChecker};

/// Known-word lists looked up in the search path.
pub const DEFAULT_WORD_LISTS: &[&str] = &["words", "w2006.txt"];

/// Environment variable naming a directory that holds the word lists.
pub const WORDS_PATH_ENV: &str = "TYPO_WORDS_PATH";

/// Report format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `file:line:byte [score] word`, one per line
    Text,
    /// A single JSON object with `repeats` and `typos` arrays
    Json,
}

/// Find likely typos by the letter statistics of the text itself.
///
/// Every word is scored by how poorly its trigrams fit the digram and
/// trigram counts of the whole input. Higher scores are more suspicious.
/// Words that immediately repeat the previous word are reported too.
#[derive(Parser, Debug)]
#[command(name = "typo", version)]
pub struct Cli {
    /// Files to check (standard input when none are given)
    pub files: Vec<PathBuf>,

    /// Maximum number of words to print
    #[arg(short = 'n', long, default_value_t = DEFAULT_MAX_RESULTS)]
    pub max_results: usize,

    /// Don't report repeated words
    #[arg(short = 'r', long)]
    pub no_repeats: bool,

    /// Cutoff score; smaller means more words
    #[arg(short = 't', long, default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: u32,

    /// Filter simple HTML tags from the input
    #[arg(long)]
    pub html: bool,

    /// Additional known-word list (repeatable)
    #[arg(short = 'w', long = "words", value_name = "FILE")]
    pub words: Vec<PathBuf>,

    /// Directory searched first for the default known-word lists
    #[arg(short = 'd', long, env = WORDS_PATH_ENV, value_name = "DIR")]
    pub words_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,
}

impl Cli {
    pub fn check_options(&self) -> CheckOptions {
        CheckOptions {
            max_results: self.max_results,
            threshold: self.threshold,
            report_repeats: !self.no_repeats,
        }
    }

    pub fn tokenizer_options(&self) -> TokenizerOptions {
        TokenizerOptions {
            filter_html: self.html,
        }
    }
}

// ---------------------------------------------------------------------------
// Known-word discovery
// ---------------------------------------------------------------------------

/// Build the list of directories to search for known-word lists.
///
/// Search order:
/// 1. `words_dir` (the `--words-dir` flag or `TYPO_WORDS_PATH`)
/// 2. `~/.typo`
/// 3. `/usr/local/plan9/lib`
/// 4. `/usr/share/dict`
/// 5. the current directory
pub fn build_search_paths(words_dir: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(dir) = words_dir {
        paths.push(dir.to_path_buf());
    }

    if let Some(home) = home_dir() {
        paths.push(home.join(".typo"));
    }

    paths.push(PathBuf::from("/usr/local/plan9/lib"));
    paths.push(PathBuf::from("/usr/share/dict"));

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd);
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from)
}

/// Return the first `dir/name` that is a file.
pub fn find_word_list(name: &str, search_paths: &[PathBuf]) -> Option<PathBuf> {
    search_paths
        .iter()
        .map(|dir| dir.join(name))
        .find(|path| path.is_file())
}

/// Load the default lists from the search path plus any explicit lists.
///
/// Lists that cannot be found or read are logged and skipped; the run
/// continues with whatever was loaded.
pub fn load_known_words(words_dir: Option<&Path>, extra: &[PathBuf]) -> KnownWords {
    let search_paths = build_search_paths(words_dir);
    let mut known = KnownWords::new();

    for name in DEFAULT_WORD_LISTS {
        match find_word_list(name, &search_paths) {
            Some(path) => load_list(&mut known, &path),
            None => tracing::warn!("can't find known words file {name:?}"),
        }
    }
    for path in extra {
        load_list(&mut known, path);
    }

    tracing::info!("{} known words", known.len());
    known
}

fn load_list(known: &mut KnownWords, path: &Path) {
    if let Err(e) = known.load(path) {
        tracing::warn!("skipping known words file: {:#}", anyhow::Error::new(e));
    }
}

// ---------------------------------------------------------------------------
// Run
// ---------------------------------------------------------------------------

/// Read every input, check it and write the report to `out`.
pub fn run_with<W: Write>(cli: &Cli, known: KnownWords, out: &mut W) -> Result<Report> {
    let mut corpus = Corpus::new(cli.tokenizer_options());
    if cli.files.is_empty() {
        corpus.add_stdin()?;
    } else {
        for path in &cli.files {
            corpus.add_file(path)?;
        }
    }
    tracing::debug!("{} words read", corpus.len());

    let report = TypoChecker::new(known, cli.check_options()).check(corpus.into_words());
    match cli.format {
        OutputFormat::Text => report.write_text(out)?,
        OutputFormat::Json => report.write_json(out)?,
    }
    Ok(report)
}

/// Load the known words and run against standard output.
pub fn run(cli: &Cli) -> Result<()> {
    let known = load_known_words(cli.words_dir.as_deref(), &cli.words);
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    run_with(cli, known, &mut out)?;
    out.flush().context("flushing output")?;
    Ok(())
}
