//! Binary entry point for the `zxcvbn` command-line tool.
//!
//! Dispatch order: parse arguments, set the notification level, load ranked
//! dictionaries, then either stream bulk lines from stdin or analyze the
//! passwords given on the command line, printing the cover breakdown for
//! each.

use std::io::{stdin, stdout};
use std::time::Instant;

use anyhow::bail;
use clap::Parser;

use zxcvbn::cli::args::Args;
use zxcvbn::cli::display::set_display_level;
use zxcvbn::cli::{bulk, dictfile};
use zxcvbn::notice;
use zxcvbn::{Analyzer, Options};

fn run(args: Args) -> anyhow::Result<i32> {
    let mut analyzer = Analyzer::new(Options::default());

    for path in &args.dictionaries {
        let name = path.display().to_string();
        dictfile::load_ranked(&mut analyzer, &name, path)?;
        notice!(3, "loaded dictionary {name}\n");
    }

    if args.bulk {
        bulk::run(&analyzer, stdin().lock(), stdout().lock())?;
        return Ok(0);
    }

    if args.passwords.is_empty() {
        bail!("no password given (see --help)");
    }

    let words = args.adhoc_words();
    let mut failed = false;

    for password in &args.passwords {
        let start = Instant::now();
        let analysis = match analyzer.evaluate(password.as_bytes(), &words, &[]) {
            Ok(analysis) => analysis,
            Err(err) => {
                notice!(1, "evaluation of {password:?} failed: {err}\n");
                failed = true;
                continue;
            }
        };
        notice!(2, "t:{} us\n", start.elapsed().as_micros());

        println!("password: {password}");
        println!("entropy: {:.6}", analysis.entropy());
        for m in analysis.cover() {
            let span = String::from_utf8_lossy(&password.as_bytes()[m.i..=m.j]);
            println!("\t{}: {} -- {:.6}", m.kind.as_str(), span, m.entropy);
        }
        println!();
    }

    Ok(if failed { 1 } else { 0 })
}

fn main() {
    let args = Args::parse();

    if args.quiet {
        set_display_level(1);
    } else if args.verbose {
        set_display_level(3);
    }

    match run(args) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("zxcvbn: {err:#}");
            std::process::exit(1);
        }
    }
}
