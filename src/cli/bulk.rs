//! Bulk evaluation mode.
//!
//! Reads one `password [word ...]` line per evaluation and emits one JSON
//! object per line, keeping stdout machine-parseable while diagnostics go
//! to stderr through the notice machinery.

use std::io::{BufRead, Write};

use serde::Serialize;

use crate::analyzer::Analyzer;
use crate::cli::args::MAX_ADHOC_WORDS;
use crate::notice;

#[derive(Serialize)]
struct SuccessLine<'a> {
    password: &'a str,
    entropy: f64,
}

#[derive(Serialize)]
struct FailureLine<'a> {
    password: &'a str,
    error: bool,
}

/// Processes `input` to exhaustion.  Evaluation failures produce an error
/// record and keep going; only I/O failures abort.
pub fn run(
    analyzer: &Analyzer,
    input: impl BufRead,
    mut output: impl Write,
) -> anyhow::Result<()> {
    for line in input.lines() {
        let line = line?;
        let mut fields = line.split(' ');
        let password = fields.next().unwrap_or("");
        let words: Vec<&[u8]> = fields
            .filter(|w| !w.is_empty())
            .take(MAX_ADHOC_WORDS)
            .map(str::as_bytes)
            .collect();

        match analyzer.evaluate(password.as_bytes(), &words, &[]) {
            Ok(analysis) => {
                let record = SuccessLine {
                    password,
                    entropy: (analysis.entropy() * 10.0).round() / 10.0,
                };
                writeln!(output, "{}", serde_json::to_string(&record)?)?;
            }
            Err(err) => {
                let record = FailureLine {
                    password,
                    error: true,
                };
                writeln!(output, "{}", serde_json::to_string(&record)?)?;
                notice!(1, "evaluation of {password:?} failed: {err}\n");
            }
        }
    }
    Ok(())
}
