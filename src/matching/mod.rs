//! Candidate-match model and the matchers that produce them.
//!
//! Matchers scan the raw password bytes and append candidate matches to a
//! shared buffer.  They are order-independent: overlapping or duplicate
//! candidates across matchers are expected and reconciled later by the
//! minimum-entropy cover pass.
//!
//! | Matcher                    | Pattern                                   |
//! |----------------------------|-------------------------------------------|
//! | [`spatial`]                | adjacency walks on keyboard layouts       |
//! | [`digits`]                 | contiguous decimal runs                   |
//! | [`repeat`]                 | runs of one repeated byte                 |
//! | [`sequence`]               | alphabetic/numeric sequence walks         |
//! | [`date`]                   | calendar dates, with and without separators |
//! | [`dictionary`]             | ranked word lists and ad-hoc terms        |

use smallvec::SmallVec;
use std::fmt;

use crate::spatial::Layout;

pub mod date;
pub mod dictionary;
pub mod digits;
pub mod repeat;
pub mod sequence;
pub mod spatial;

pub use date::{DateMatch, KnownDate};
pub use sequence::Sequence;

// ─────────────────────────────────────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────────────────────────────────────

/// Failures an evaluation can report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// Password length outside `[1, PASSWORD_LEN_MAX]`.
    PasswordLength,
    /// The configured match cap was reached; the evaluation was aborted.
    TooManyMatches,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::PasswordLength => f.write_str("password length out of range"),
            Error::TooManyMatches => f.write_str("match cap reached"),
        }
    }
}

impl std::error::Error for Error {}

// ─────────────────────────────────────────────────────────────────────────────
// Match model
// ─────────────────────────────────────────────────────────────────────────────

/// One candidate decomposition unit: the byte span `[i, j]` (inclusive), the
/// entropy assigned to it, and the pattern-specific payload.
#[derive(Clone, Debug, PartialEq)]
pub struct Match {
    pub i: usize,
    pub j: usize,
    pub entropy: f64,
    pub kind: MatchKind,
}

impl Match {
    /// Span length in bytes.  Spans are inclusive, so this is at least 1.
    #[inline]
    pub fn len(&self) -> usize {
        self.j - self.i + 1
    }
}

/// Pattern-specific match payload.
#[derive(Clone, Debug, PartialEq)]
pub enum MatchKind {
    /// Hit in a registered dictionary or an ad-hoc word list.
    Dictionary { rank: u32 },
    /// Adjacency walk on one keyboard layout.
    Spatial {
        layout: Layout,
        /// Direction changes along the walk (the first step counts).
        turns: u32,
        /// Steps that landed on a shifted glyph.
        shifted: u32,
    },
    /// Contiguous decimal digits.
    Digits,
    /// Calendar date.
    Date(DateMatch),
    /// Walk along a well-known character sequence.
    Sequence {
        seq: &'static Sequence,
        descending: bool,
    },
    /// Run of a single repeated byte.
    Repeat,
    /// Gap filler: no structure found, full alphabet assumed.
    Bruteforce,
}

impl MatchKind {
    /// Stable lowercase name for the pattern kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchKind::Dictionary { .. } => "dict",
            MatchKind::Spatial { .. } => "spatial",
            MatchKind::Digits => "digits",
            MatchKind::Date(_) => "date",
            MatchKind::Sequence { .. } => "sequence",
            MatchKind::Repeat => "repeat",
            MatchKind::Bruteforce => "bruteforce",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Match buffer
// ─────────────────────────────────────────────────────────────────────────────

/// Number of matches held inline before the buffer spills to the heap.
pub const INLINE_MATCHES: usize = 32;

/// Growable match buffer with an optional hard cap.
///
/// The cover pass stores indices into this buffer, so entries must never be
/// removed or reordered once pushed.
pub(crate) struct MatchBuf {
    matches: SmallVec<[Match; INLINE_MATCHES]>,
    cap: Option<usize>,
}

impl MatchBuf {
    pub(crate) fn new(cap: Option<usize>) -> MatchBuf {
        MatchBuf {
            matches: SmallVec::new(),
            cap,
        }
    }

    /// Appends a match, failing once the cap is reached.
    pub(crate) fn push(&mut self, m: Match) -> Result<(), Error> {
        if let Some(cap) = self.cap {
            if self.matches.len() >= cap {
                return Err(Error::TooManyMatches);
            }
        }
        self.matches.push(m);
        Ok(())
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.matches.len()
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[Match] {
        &self.matches
    }

    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [Match] {
        &mut self.matches
    }

    pub(crate) fn into_matches(self) -> SmallVec<[Match; INLINE_MATCHES]> {
        self.matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_are_stable() {
        assert_eq!(MatchKind::Digits.as_str(), "digits");
        assert_eq!(MatchKind::Repeat.as_str(), "repeat");
        assert_eq!(MatchKind::Bruteforce.as_str(), "bruteforce");
        assert_eq!(MatchKind::Dictionary { rank: 1 }.as_str(), "dict");
    }

    #[test]
    fn cap_is_enforced() {
        let mut buf = MatchBuf::new(Some(2));
        let m = Match {
            i: 0,
            j: 0,
            entropy: 0.0,
            kind: MatchKind::Digits,
        };
        assert!(buf.push(m.clone()).is_ok());
        assert!(buf.push(m.clone()).is_ok());
        assert_eq!(buf.push(m), Err(Error::TooManyMatches));
    }

    #[test]
    fn uncapped_buffer_grows_past_inline() {
        let mut buf = MatchBuf::new(None);
        for i in 0..INLINE_MATCHES + 8 {
            buf.push(Match {
                i,
                j: i,
                entropy: 0.0,
                kind: MatchKind::Repeat,
            })
            .unwrap();
        }
        assert_eq!(buf.len(), INLINE_MATCHES + 8);
    }
}
