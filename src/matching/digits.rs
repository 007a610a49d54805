//! Contiguous digit runs.

use super::{Error, Match, MatchBuf, MatchKind};

/// Emits one match per maximal run of decimal digits longer than two bytes.
pub(crate) fn find_matches(out: &mut MatchBuf, password: &[u8]) -> Result<(), Error> {
    let mut i = 0;
    while i < password.len() {
        if !password[i].is_ascii_digit() {
            i += 1;
            continue;
        }
        let mut j = i + 1;
        while j < password.len() && password[j].is_ascii_digit() {
            j += 1;
        }
        if j - i > 2 {
            out.push(Match {
                i,
                j: j - 1,
                entropy: 0.0,
                kind: MatchKind::Digits,
            })?;
        }
        i = j;
    }
    Ok(())
}
