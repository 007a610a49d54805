//! Keyboard adjacency walks.

use super::{Error, Match, MatchBuf, MatchKind};
use crate::spatial::{Layout, SpatialGraph};

/// Runs the walk detection once per layout.  Layouts are independent; the
/// same span may match on several of them.
pub(crate) fn find_matches(
    out: &mut MatchBuf,
    password: &[u8],
    graphs: &[SpatialGraph; 4],
) -> Result<(), Error> {
    for layout in Layout::ALL {
        walk_layout(out, password, layout, &graphs[layout.index()])?;
    }
    Ok(())
}

/// Extends a run while each byte is adjacent (in any direction, the same key
/// included) to its predecessor, then emits runs longer than two bytes.
fn walk_layout(
    out: &mut MatchBuf,
    password: &[u8],
    layout: Layout,
    graph: &SpatialGraph,
) -> Result<(), Error> {
    let mut i = 0;
    while i + 2 < password.len() {
        let mut turns = 0u32;
        let mut shifted = 0u32;
        let mut prev_dir = None;
        let mut j = i + 1;
        while j < password.len() {
            match graph.step(password[j - 1], password[j]) {
                Some((dir, shift)) => {
                    shifted += shift as u32;
                    if prev_dir != Some(dir) {
                        turns += 1;
                        prev_dir = Some(dir);
                    }
                    j += 1;
                }
                None => break,
            }
        }
        if j - i > 2 {
            out.push(Match {
                i,
                j: j - 1,
                entropy: 0.0,
                kind: MatchKind::Spatial {
                    layout,
                    turns,
                    shifted,
                },
            })?;
        }
        i = j;
    }
    Ok(())
}
