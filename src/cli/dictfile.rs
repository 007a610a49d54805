//! Ranked dictionary file loading.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::Context;

use crate::analyzer::{Analyzer, DictId};

/// Loads a ranked word file into a freshly registered dictionary.
///
/// One word per line, surrounding whitespace trimmed, blank lines skipped;
/// rank is the 1-based counter over non-blank lines, so the file must be
/// sorted most-common-first.  Words the trie refuses (over-ranked or
/// unpackable) still consume their rank.
pub fn load_ranked(analyzer: &mut Analyzer, name: &str, path: &Path) -> anyhow::Result<DictId> {
    let file =
        File::open(path).with_context(|| format!("cannot open dictionary {}", path.display()))?;

    let id = analyzer.register_dictionary(name);
    let mut rank = 1u32;
    for line in BufReader::new(file).lines() {
        let line = line.with_context(|| format!("read error in {}", path.display()))?;
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        analyzer.add_word(id, word.as_bytes(), rank);
        rank += 1;
    }
    Ok(id)
}
