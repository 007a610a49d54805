//! Single-byte repeat runs.

use super::{Error, Match, MatchBuf, MatchKind};

/// Emits one match per maximal run of one repeated byte longer than two.
pub(crate) fn find_matches(out: &mut MatchBuf, password: &[u8]) -> Result<(), Error> {
    let mut i = 0;
    while i + 1 < password.len() {
        let ch = password[i];
        let mut j = i + 1;
        while j < password.len() && password[j] == ch {
            j += 1;
        }
        if j - i > 2 {
            out.push(Match {
                i,
                j: j - 1,
                entropy: 0.0,
                kind: MatchKind::Repeat,
            })?;
        }
        i = j;
    }
    Ok(())
}
