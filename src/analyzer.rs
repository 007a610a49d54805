//! Analyzer construction, dictionary registration, and the evaluation facade.

use smallvec::SmallVec;

use crate::cover;
use crate::dict::{Dictionary, InsertOutcome};
use crate::entropy;
use crate::matching::{self, Error, KnownDate, Match, MatchBuf, INLINE_MATCHES};
use crate::pack::PackTable;
use crate::spatial::{self, SpatialGraph};

/// Longest password an evaluation accepts, in bytes.
pub const PASSWORD_LEN_MAX: usize = 256;

/// The symbol alphabet used when none is supplied.
pub const DEFAULT_SYMBOLS: &str = "!@#$%^&*()-_+=;:,./?\\|`~[]{}";

// ─────────────────────────────────────────────────────────────────────────────
// Options
// ─────────────────────────────────────────────────────────────────────────────

/// Analyzer construction knobs.
#[derive(Clone, Debug)]
pub struct Options<'a> {
    /// Symbol alphabet: each distinct byte widens the packed alphabet and
    /// the bruteforce symbol class.
    pub symbols: &'a str,
    /// Hard cap on candidate matches per evaluation; `None` means unbounded.
    pub max_matches: Option<usize>,
}

impl Default for Options<'_> {
    fn default() -> Self {
        Options {
            symbols: DEFAULT_SYMBOLS,
            max_matches: None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Analyzer
// ─────────────────────────────────────────────────────────────────────────────

/// Handle to a registered dictionary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DictId(usize);

/// Owns everything an evaluation reads: the pack table, the four spatial
/// graphs, and the registered dictionaries.
///
/// Construction and dictionary registration mutate the analyzer; evaluation
/// takes `&self`, so any number of evaluations may run in parallel against
/// an analyzer that is no longer being mutated.
pub struct Analyzer {
    pack: PackTable,
    graphs: [SpatialGraph; 4],
    dicts: Vec<Dictionary>,
    max_matches: Option<usize>,
}

impl Analyzer {
    /// Builds an analyzer: derives the pack table from the symbol alphabet
    /// and precomputes the spatial graphs.
    pub fn new(opts: Options<'_>) -> Analyzer {
        Analyzer {
            pack: PackTable::new(opts.symbols),
            graphs: spatial::build_all(),
            dicts: Vec::new(),
            max_matches: opts.max_matches,
        }
    }

    /// Registers an empty dictionary and returns its handle.
    pub fn register_dictionary(&mut self, name: &str) -> DictId {
        let id = DictId(self.dicts.len());
        self.dicts
            .push(Dictionary::new(name, self.pack.alphabet_size()));
        id
    }

    /// Adds one ranked word to a registered dictionary.
    pub fn add_word(&mut self, id: DictId, word: &[u8], rank: u32) -> InsertOutcome {
        self.dicts[id.0].insert(&self.pack, word, rank)
    }

    /// Registered dictionaries, in registration order.
    pub fn dictionaries(&self) -> &[Dictionary] {
        &self.dicts
    }

    /// Runs the full pipeline: all matchers, per-match entropy, then the
    /// minimum-entropy cover.  `words` are ad-hoc terms matched at rank 1;
    /// `dates` are caller-known dates whose occurrence costs no base entropy.
    pub fn evaluate(
        &self,
        password: &[u8],
        words: &[&[u8]],
        dates: &[KnownDate],
    ) -> Result<Analysis, Error> {
        if password.is_empty() || password.len() > PASSWORD_LEN_MAX {
            return Err(Error::PasswordLength);
        }

        let mut buf = MatchBuf::new(self.max_matches);

        matching::spatial::find_matches(&mut buf, password, &self.graphs)?;
        matching::digits::find_matches(&mut buf, password)?;
        matching::date::find_matches(&mut buf, password, dates)?;
        matching::sequence::find_matches(&mut buf, password)?;
        matching::repeat::find_matches(&mut buf, password)?;
        matching::dictionary::find_matches(&mut buf, password, &self.pack, &self.dicts, words)?;

        entropy::assign_all(
            buf.as_mut_slice(),
            password,
            &self.graphs,
            self.pack.symbol_count(),
        );

        let cardinality =
            entropy::bruteforce_cardinality(password, self.pack.symbol_count());
        let (total, cover) = cover::select(&mut buf, password.len(), cardinality)?;

        Ok(Analysis {
            entropy: total,
            matches: buf.into_matches(),
            cover,
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Analysis
// ─────────────────────────────────────────────────────────────────────────────

/// Result of one evaluation: the candidate match buffer, the selected cover
/// (as indices into it), and the cover's total entropy.
pub struct Analysis {
    entropy: f64,
    matches: SmallVec<[Match; INLINE_MATCHES]>,
    cover: Vec<usize>,
}

impl Analysis {
    /// Total entropy of the minimum cover, in bits.
    #[inline]
    pub fn entropy(&self) -> f64 {
        self.entropy
    }

    /// Every candidate match produced, including the synthesized bruteforce
    /// gap fillers.
    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    /// The selected cover, in position order.  Entries partition the
    /// password: they touch without overlapping.
    pub fn cover(&self) -> impl Iterator<Item = &Match> {
        self.cover.iter().map(|&idx| &self.matches[idx])
    }

    /// Number of cover entries.
    pub fn cover_len(&self) -> usize {
        self.cover.len()
    }
}
