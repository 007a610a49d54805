//! Walks along well-known character sequences.

use super::{Error, Match, MatchBuf, MatchKind};

/// Minimum bytes for a sequence walk to count.
const MIN_LEN: usize = 3;

/// One entry of the fixed sequence table.
#[derive(Debug, PartialEq)]
pub struct Sequence {
    /// The sequence characters, in ascending order.
    pub chars: &'static str,
    /// Extra entropy charged for starting in this sequence (uppercase and
    /// non-Latin variants are rarer starts than plain lowercase).
    pub extra_entropy: u32,
}

impl Sequence {
    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    fn position(&self, ch: u8) -> Option<usize> {
        self.chars.bytes().position(|c| c == ch)
    }
}

/// Lowercase/uppercase Latin, the Dvorak home-row walk in both cases, the
/// transliterated Cyrillic alphabet in both cases, and decimal digits.
pub static SEQUENCES: [Sequence; 7] = [
    Sequence {
        chars: "abcdefghijklmnopqrstuvwxyz",
        extra_entropy: 0,
    },
    Sequence {
        chars: "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
        extra_entropy: 1,
    },
    Sequence {
        chars: "f,dult;pbqrkvyjghcnea[wxio]sm'.z",
        extra_entropy: 1,
    },
    Sequence {
        chars: "F<DULT:PBQRKVYJGHCNEA{WXIO}SM\">Z",
        extra_entropy: 2,
    },
    Sequence {
        chars: "abvgdegziyklmnoprstufhc",
        extra_entropy: 1,
    },
    Sequence {
        chars: "ABVGDEGZIYKLMNOPRSTUFHC",
        extra_entropy: 2,
    },
    Sequence {
        chars: "0123456789",
        extra_entropy: 0,
    },
];

/// Starts considered obvious enough to carry almost no information.
pub(crate) const OBVIOUS_STARTS: &[u8] = b"aAzZfF019";

/// Finds maximal runs whose consecutive bytes step through one sequence in a
/// consistent direction.  Steps are modular, so `zab` is an ascending walk.
pub(crate) fn find_matches(out: &mut MatchBuf, password: &[u8]) -> Result<(), Error> {
    let mut i = 0;
    while i + MIN_LEN - 1 < password.len() {
        let Some((seq, mut pos, descending)) = initial_step(password[i], password[i + 1]) else {
            i += 1;
            continue;
        };

        let mut j = i + 2;
        while j < password.len() {
            let Some(next) = seq.position(password[j]) else {
                break;
            };
            let expected = if descending {
                (seq.len() + pos - 1) % seq.len()
            } else {
                (pos + 1) % seq.len()
            };
            if next != expected {
                break;
            }
            pos = next;
            j += 1;
        }

        if j - i >= MIN_LEN {
            out.push(Match {
                i,
                j: j - 1,
                entropy: 0.0,
                kind: MatchKind::Sequence { seq, descending },
            })?;
        }
        i = j;
    }
    Ok(())
}

/// Looks for a sequence where `a` and `b` are one modular step apart, in
/// table order; the first sequence containing such a step wins.
fn initial_step(a: u8, b: u8) -> Option<(&'static Sequence, usize, bool)> {
    for seq in &SEQUENCES {
        let Some(a_n) = seq.position(a) else { continue };
        let Some(b_n) = seq.position(b) else { continue };
        if (a_n + 1) % seq.len() == b_n {
            return Some((seq, b_n, false));
        }
        if (b_n + 1) % seq.len() == a_n {
            return Some((seq, b_n, true));
        }
    }
    None
}
