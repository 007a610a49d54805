//! Command-line definition.

use std::path::PathBuf;

use clap::Parser;

/// Maximum ad-hoc words accepted from `-d` or a bulk line.
pub const MAX_ADHOC_WORDS: usize = 256;

/// Estimate password strength by minimum-entropy pattern decomposition.
#[derive(Parser, Debug)]
#[command(name = "zxcvbn", version, about)]
pub struct Args {
    /// Space-separated words to match ad hoc at rank 1 (user name, site
    /// name, ...).
    #[arg(short = 'd', value_name = "WORDS")]
    pub words: Option<String>,

    /// Ranked dictionary file: one word per line, most common first.
    /// May be given multiple times.
    #[arg(short = 'D', value_name = "FILE")]
    pub dictionaries: Vec<PathBuf>,

    /// Bulk mode: read one "password [word ...]" line per evaluation from
    /// stdin and emit one JSON object per line.
    #[arg(short = 'b', long)]
    pub bulk: bool,

    /// Only report errors.
    #[arg(short = 'q', long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Report timing and progress notices.
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Passwords to analyze.
    #[arg(value_name = "PASSWORD")]
    pub passwords: Vec<String>,
}

impl Args {
    /// Splits the `-d` argument into at most [`MAX_ADHOC_WORDS`] terms.
    pub fn adhoc_words(&self) -> Vec<&[u8]> {
        self.words
            .as_deref()
            .map(|w| {
                w.split_whitespace()
                    .take(MAX_ADHOC_WORDS)
                    .map(str::as_bytes)
                    .collect()
            })
            .unwrap_or_default()
    }
}
