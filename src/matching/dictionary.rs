//! Dictionary hits: ad-hoc terms and registered ranked word lists.
//!
//! Both layers search the packed form of the password, so case and leet
//! variants of a word are found at no extra cost to the matcher.

use memchr::memmem;

use super::{Error, Match, MatchBuf, MatchKind};
use crate::dict::Dictionary;
use crate::pack::{PackTable, NO_INDEX};

/// Scans for ad-hoc `words` (every non-overlapping occurrence, rank 1), then
/// walks every registered trie from every start position, emitting a match
/// for each ranked prefix found.
pub(crate) fn find_matches(
    out: &mut MatchBuf,
    password: &[u8],
    pack: &PackTable,
    dicts: &[Dictionary],
    words: &[&[u8]],
) -> Result<(), Error> {
    let packed = pack.pack(password);

    for word in words {
        if word.is_empty() || word.len() > password.len() {
            continue;
        }
        let packed_word = pack.pack(word);
        for pos in memmem::find_iter(&packed, &packed_word) {
            out.push(Match {
                i: pos,
                j: pos + packed_word.len() - 1,
                entropy: 0.0,
                kind: MatchKind::Dictionary { rank: 1 },
            })?;
        }
    }

    for dict in dicts {
        for i in 0..packed.len() {
            let mut node = dict.root();
            for (j, &index) in packed.iter().enumerate().skip(i) {
                if index == NO_INDEX {
                    break;
                }
                let Some(child) = node.child(index) else {
                    break;
                };
                if let Some(rank) = child.rank() {
                    out.push(Match {
                        i,
                        j,
                        entropy: 0.0,
                        kind: MatchKind::Dictionary { rank },
                    })?;
                }
                node = child;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SYMBOLS: &str = "!@#$%^&*()-_+=;:,./?\\|`~[]{}";

    fn hits(
        password: &[u8],
        dict_words: &[(&[u8], u32)],
        adhoc: &[&[u8]],
    ) -> Vec<(usize, usize, u32)> {
        let pack = PackTable::new(SYMBOLS);
        let mut dict = Dictionary::new("test", pack.alphabet_size());
        for &(word, rank) in dict_words {
            dict.insert(&pack, word, rank);
        }
        let mut buf = MatchBuf::new(None);
        find_matches(&mut buf, password, &pack, std::slice::from_ref(&dict), adhoc).unwrap();
        buf.as_slice()
            .iter()
            .map(|m| match m.kind {
                MatchKind::Dictionary { rank } => (m.i, m.j, rank),
                _ => unreachable!(),
            })
            .collect()
    }

    #[test]
    fn exact_word_found() {
        assert_eq!(hits(b"password", &[(b"password", 3)], &[]), vec![(0, 7, 3)]);
    }

    #[test]
    fn leet_and_case_variants_found() {
        assert_eq!(hits(b"P4ssw0rd", &[(b"password", 3)], &[]), vec![(0, 7, 3)]);
    }

    #[test]
    fn embedded_word_found_at_offset() {
        assert_eq!(
            hits(b"xxpasswordyy", &[(b"password", 5)], &[]),
            vec![(2, 9, 5)]
        );
    }

    #[test]
    fn all_ranked_prefixes_reported() {
        let found = hits(b"passwords", &[(b"pass", 10), (b"password", 2)], &[]);
        assert!(found.contains(&(0, 3, 10)));
        assert!(found.contains(&(0, 7, 2)));
    }

    #[test]
    fn adhoc_words_rank_one_nonoverlapping() {
        let found = hits(b"abcabcabc", &[], &[b"abc"]);
        assert_eq!(found, vec![(0, 2, 1), (3, 5, 1), (6, 8, 1)]);
    }

    #[test]
    fn adhoc_word_longer_than_password_ignored() {
        assert!(hits(b"ab", &[], &[b"abcdef"]).is_empty());
    }

    #[test]
    fn unpackable_bytes_stop_the_walk() {
        // A space is outside the packed alphabet; no hit can straddle it.
        assert!(hits(b"pass word", &[(b"password", 1)], &[]).is_empty());
    }
}
