//! Per-match entropy assignment.
//!
//! Every formula is a base-2 logarithm of an estimated candidate-space size.
//! The bruteforce cardinality is always derived from the whole password's
//! character classes, not per-span; gaps in an otherwise structured password
//! are priced as if the attacker knew the full alphabet in use.

use crate::matching::date::{DateMatch, MIN_YEAR_SPACE, REF_YEAR};
use crate::matching::sequence::OBVIOUS_STARTS;
use crate::matching::{Match, MatchKind};
use crate::spatial::SpatialGraph;

// ─────────────────────────────────────────────────────────────────────────────
// Shared helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Size of the plausible character alphabet for `bytes`: 10 for digits, 26
/// per letter case, and the symbol-alphabet size once any other byte occurs.
/// Clamped to 1 so downstream logarithms stay finite even with an empty
/// symbol alphabet.
pub(crate) fn bruteforce_cardinality(bytes: &[u8], n_symbols: u32) -> u32 {
    let mut digit = false;
    let mut lower = false;
    let mut upper = false;
    let mut symbol = false;
    for &b in bytes {
        match b {
            b'0'..=b'9' => digit = true,
            b'a'..=b'z' => lower = true,
            b'A'..=b'Z' => upper = true,
            _ => symbol = true,
        }
    }
    let card = u32::from(digit) * 10
        + u32::from(lower) * 26
        + u32::from(upper) * 26
        + u32::from(symbol) * n_symbols;
    card.max(1)
}

/// Entropy of bruteforcing a `len`-byte span over a `cardinality`-sized
/// alphabet.
pub(crate) fn bruteforce_entropy(len: usize, cardinality: u32) -> f64 {
    len as f64 * (cardinality as f64).log2()
}

/// Binomial coefficient in `f64`.  Exact for the small operands the entropy
/// formulas produce in practice; large spans degrade gracefully instead of
/// wrapping.
fn nck(n: u32, k: u32) -> f64 {
    if k > n {
        return 0.0;
    }
    if k == 0 {
        return 1.0;
    }
    let mut r = 1.0;
    let mut n = n as f64;
    for d in 1..=k {
        r *= n;
        r /= d as f64;
        n -= 1.0;
    }
    r
}

// ─────────────────────────────────────────────────────────────────────────────
// Assignment
// ─────────────────────────────────────────────────────────────────────────────

/// Assigns entropy to every candidate match in the buffer.
pub(crate) fn assign_all(
    matches: &mut [Match],
    password: &[u8],
    graphs: &[SpatialGraph; 4],
    n_symbols: u32,
) {
    for m in matches.iter_mut() {
        m.entropy = match &m.kind {
            MatchKind::Dictionary { rank } => {
                dictionary(*rank, &password[m.i..=m.j], password[m.i])
            }
            MatchKind::Spatial {
                layout,
                turns,
                shifted,
            } => spatial(&graphs[layout.index()], m.j - m.i + 1, *turns, *shifted),
            MatchKind::Digits => digits(m.j - m.i + 1),
            MatchKind::Date(date) => date_entropy(date),
            MatchKind::Sequence { seq, descending } => {
                sequence(seq, *descending, m.j - m.i + 1, password[m.i])
            }
            MatchKind::Repeat => repeat(password[m.i], m.j - m.i + 1, n_symbols),
            MatchKind::Bruteforce => m.entropy, // assigned at creation
        };
    }
}

/// `log2(rank)` plus a case bump: free for all-lowercase, one bit for a
/// single leading capital, otherwise the log of the number of ways to place
/// up to `min(upper, lower)` capitals in the word.
fn dictionary(rank: u32, span: &[u8], first: u8) -> f64 {
    let mut entropy = (rank as f64).log2();

    let upper = span.iter().filter(|b| b.is_ascii_uppercase()).count() as u32;
    let lower = span.iter().filter(|b| b.is_ascii_lowercase()).count() as u32;

    if upper == 1 && first.is_ascii_uppercase() {
        entropy += 1.0;
    } else if upper > 0 {
        let possibilities: f64 = (0..=upper.min(lower)).map(|k| nck(upper + lower, k)).sum();
        entropy += possibilities.log2();
    }
    entropy
}

/// Counts the walks of up to `length` steps with up to `turns` direction
/// changes an attacker would have to try, weighted by the layout's start
/// positions and branching degree, plus a shift bump when shifted glyphs
/// were used.
fn spatial(graph: &SpatialGraph, length: usize, turns: u32, shifted: u32) -> f64 {
    let length = length as u32;
    let mut possibilities = 0.0;
    for i in 2..=length {
        let possible_turns = turns.min(i - 1);
        for j in 1..=possible_turns {
            possibilities +=
                nck(i - 1, j - 1) * graph.n_chars() as f64 * graph.degree().powi(j as i32);
        }
    }
    let mut entropy = possibilities.log2();

    if shifted > 0 {
        let unshifted = length - shifted;
        let shift_ways: f64 = (0..=shifted.min(unshifted))
            .map(|k| nck(shifted + unshifted, k))
            .sum();
        entropy += shift_ways.log2();
    }
    entropy
}

fn digits(length: usize) -> f64 {
    length as f64 * 10f64.log2()
}

/// Year space around the reference year (floored at 20), times the day/month
/// grid unless the match is a bare year; zeroed entirely for a known date.
/// Writing all four year digits costs one extra bit, separators two.
fn date_entropy(date: &DateMatch) -> f64 {
    let mut entropy = if date.known {
        0.0
    } else {
        let mut possibilities = (date.year as i32 - REF_YEAR).abs().max(MIN_YEAR_SPACE) as f64;
        if !date.only_year {
            possibilities *= 12.0 * 31.0;
        }
        possibilities.log2()
    };
    if date.full_year {
        entropy += 1.0;
    }
    if date.separator {
        entropy += 2.0;
    }
    entropy
}

fn sequence(
    seq: &crate::matching::Sequence,
    descending: bool,
    length: usize,
    first: u8,
) -> f64 {
    let mut entropy = if OBVIOUS_STARTS.contains(&first) {
        1.0
    } else {
        (seq.len() as f64).log2() + seq.extra_entropy as f64
    };
    if descending {
        entropy += 1.0;
    }
    entropy + (length as f64).log2()
}

/// A repeat is the repeated byte's class cardinality times the run length.
fn repeat(byte: u8, length: usize, n_symbols: u32) -> f64 {
    let card = bruteforce_cardinality(std::slice::from_ref(&byte), n_symbols);
    (card as f64 * length as f64).log2()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::sequence::SEQUENCES;
    use crate::spatial::{build_all, Layout};

    const EPS: f64 = 1e-9;

    #[test]
    fn cardinality_per_class() {
        assert_eq!(bruteforce_cardinality(b"abc", 28), 26);
        assert_eq!(bruteforce_cardinality(b"abC", 28), 52);
        assert_eq!(bruteforce_cardinality(b"a1", 28), 36);
        assert_eq!(bruteforce_cardinality(b"a1!", 28), 64);
        assert_eq!(bruteforce_cardinality(b"Password1", 28), 62);
    }

    #[test]
    fn cardinality_never_zero() {
        assert_eq!(bruteforce_cardinality(b"~~~", 0), 1);
    }

    #[test]
    fn nck_small_values() {
        assert_eq!(nck(5, 0), 1.0);
        assert_eq!(nck(5, 2), 10.0);
        assert_eq!(nck(10, 10), 1.0);
        assert_eq!(nck(3, 7), 0.0);
    }

    #[test]
    fn digits_entropy_is_linear() {
        assert!((digits(3) - 3.0 * 10f64.log2()).abs() < EPS);
    }

    #[test]
    fn dictionary_case_bumps() {
        // All lowercase: rank only.
        assert!((dictionary(1, b"password", b'p') - 0.0).abs() < EPS);
        // Single leading capital: +1.
        assert!((dictionary(1, b"Password", b'P') - 1.0).abs() < EPS);
        // Single capital elsewhere: combinatorial bump.
        let e = dictionary(1, b"passworD", b'p');
        let expected = (1.0 + nck(8, 1)).log2();
        assert!((e - expected).abs() < EPS);
    }

    #[test]
    fn repeat_entropy_matches_formula() {
        assert!((repeat(b'z', 5, 28) - (26.0f64 * 5.0).log2()).abs() < EPS);
        assert!((repeat(b'7', 4, 28) - (10.0f64 * 4.0).log2()).abs() < EPS);
    }

    #[test]
    fn spatial_entropy_single_turn() {
        let graphs = build_all();
        let qwerty = &graphs[Layout::Qwerty.index()];
        // One turn: each prefix length contributes n_chars * degree walks.
        let expected: f64 = (2..=6u32)
            .map(|_| qwerty.n_chars() as f64 * qwerty.degree())
            .sum::<f64>()
            .log2();
        assert!((spatial(qwerty, 6, 1, 0) - expected).abs() < EPS);
    }

    #[test]
    fn spatial_shift_bump_added() {
        let graphs = build_all();
        let qwerty = &graphs[Layout::Qwerty.index()];
        let base = spatial(qwerty, 6, 1, 0);
        assert!(spatial(qwerty, 6, 1, 2) > base);
    }

    #[test]
    fn date_entropy_flags() {
        let base = DateMatch {
            day: 11,
            month: 3,
            year: 1985,
            only_year: false,
            full_year: false,
            separator: false,
            known: false,
        };
        let expected = ((2000.0f64 - 1985.0).max(20.0) * 12.0 * 31.0).log2();
        assert!((date_entropy(&base) - expected).abs() < EPS);

        let full_sep = DateMatch {
            full_year: true,
            separator: true,
            ..base
        };
        assert!((date_entropy(&full_sep) - (expected + 3.0)).abs() < EPS);

        // A known date keeps only the format bumps.
        let known = DateMatch {
            known: true,
            full_year: true,
            separator: true,
            ..base
        };
        assert!((date_entropy(&known) - 3.0).abs() < EPS);
    }

    #[test]
    fn sequence_entropy_obvious_start() {
        let latin = &SEQUENCES[0];
        let e = sequence(latin, false, 6, b'a');
        assert!((e - (1.0 + 6f64.log2())).abs() < EPS);
    }

    #[test]
    fn sequence_entropy_interior_start_and_direction() {
        let latin = &SEQUENCES[0];
        let asc = sequence(latin, false, 5, b'k');
        let expected = 26f64.log2() + 5f64.log2();
        assert!((asc - expected).abs() < EPS);
        assert!((sequence(latin, true, 5, b'k') - (expected + 1.0)).abs() < EPS);
    }
}
