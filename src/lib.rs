//! Password strength estimation by minimum-entropy pattern decomposition.
//!
//! A password is scanned by a family of matchers (keyboard walks, digit
//! runs, repeats, sequences, dates, dictionary hits), each candidate match
//! is priced in bits by an information-theoretic entropy model, and a
//! dynamic program selects the cheapest non-overlapping cover of the whole
//! password.  The cover's entropy sum is the reported strength.
//!
//! ```
//! use zxcvbn::{Analyzer, Options};
//!
//! let mut analyzer = Analyzer::new(Options::default());
//! let id = analyzer.register_dictionary("common");
//! analyzer.add_word(id, b"password", 1);
//!
//! let analysis = analyzer.evaluate(b"Password1", &[], &[]).unwrap();
//! assert!(analysis.entropy() < 10.0);
//! for m in analysis.cover() {
//!     println!("{} [{}..{}] {:.2} bits", m.kind.as_str(), m.i, m.j, m.entropy);
//! }
//! ```

pub mod analyzer;
pub mod cli;
pub mod dict;
pub mod matching;
pub mod pack;
pub mod spatial;

mod cover;
mod entropy;

// ─────────────────────────────────────────────────────────────────────────────
// Primary surface re-exports
// ─────────────────────────────────────────────────────────────────────────────

/// Analyzer construction, dictionary registration, and evaluation.
pub use analyzer::{Analysis, Analyzer, DictId, Options};

/// Longest accepted password, in bytes.
pub use analyzer::PASSWORD_LEN_MAX;

/// The symbol alphabet used by [`Options::default`].
pub use analyzer::DEFAULT_SYMBOLS;

/// Outcome of adding one word to a dictionary.
pub use dict::{Dictionary, InsertOutcome};

/// Match model: spans, kinds, and evaluation errors.
pub use matching::{DateMatch, Error, KnownDate, Match, MatchKind, Sequence};

/// Keyboard layout identifiers carried by spatial matches.
pub use spatial::Layout;
