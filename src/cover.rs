//! Minimum-entropy cover selection.
//!
//! A position-indexed dynamic program: `E[p]` is the cheapest total entropy
//! of any cover of `[0..p]`, taking either one bruteforced byte on top of
//! `E[p-1]` or any candidate match ending at `p` on top of `E[i-1]`.
//! Backpointers reconstruct the chosen matches; uncovered gaps between them
//! are synthesized as bruteforce matches over the whole-password alphabet.
//!
//! Candidates are visited in buffer order and only a strictly cheaper one
//! displaces the incumbent, so ties resolve to the earliest-appended match.

use crate::entropy::bruteforce_entropy;
use crate::matching::{Error, Match, MatchBuf, MatchKind};

/// Runs the DP and gap fill.  Returns the total entropy and the cover as
/// indices into the match buffer, in increasing span order.
///
/// Must run after all matchers: the cover holds indices, and the buffer is
/// append-only from here on (gap fillers land at the tail).
pub(crate) fn select(
    buf: &mut MatchBuf,
    password_len: usize,
    cardinality: u32,
) -> Result<(f64, Vec<usize>), Error> {
    let per_byte = (cardinality as f64).log2();

    let mut pos_entropy = vec![0f64; password_len];
    let mut chosen: Vec<Option<usize>> = vec![None; password_len];

    for pos in 0..password_len {
        let mut best = if pos > 0 { pos_entropy[pos - 1] } else { 0.0 } + per_byte;
        let mut best_match = None;
        for (idx, m) in buf.as_slice().iter().enumerate() {
            if m.j != pos {
                continue;
            }
            let cand = if m.i > 0 { pos_entropy[m.i - 1] } else { 0.0 } + m.entropy;
            if best > cand {
                best = cand;
                best_match = Some(idx);
            }
        }
        pos_entropy[pos] = best;
        chosen[pos] = best_match;
    }

    let total = pos_entropy[password_len - 1];

    // Backpointer walk; positions with no chosen match fall into gaps.
    let mut picked = Vec::new();
    let mut pos = password_len as isize - 1;
    while pos >= 0 {
        match chosen[pos as usize] {
            None => pos -= 1,
            Some(idx) => {
                picked.push(idx);
                pos = buf.as_slice()[idx].i as isize - 1;
            }
        }
    }
    picked.reverse();

    // Synthesize bruteforce matches over the uncovered gaps.
    let mut cover = Vec::with_capacity(picked.len() + 2);
    let mut next_uncovered = 0usize;
    for idx in picked {
        let (i, j) = {
            let m = &buf.as_slice()[idx];
            (m.i, m.j)
        };
        if i > next_uncovered {
            cover.push(push_bruteforce(buf, next_uncovered, i - 1, cardinality)?);
        }
        cover.push(idx);
        next_uncovered = j + 1;
    }
    if next_uncovered < password_len {
        cover.push(push_bruteforce(buf, next_uncovered, password_len - 1, cardinality)?);
    }

    Ok((total, cover))
}

fn push_bruteforce(
    buf: &mut MatchBuf,
    i: usize,
    j: usize,
    cardinality: u32,
) -> Result<usize, Error> {
    let idx = buf.len();
    buf.push(Match {
        i,
        j,
        entropy: bruteforce_entropy(j - i + 1, cardinality),
        kind: MatchKind::Bruteforce,
    })?;
    Ok(idx)
}
