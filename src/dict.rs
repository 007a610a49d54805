//! Ranked dictionaries over the packed alphabet.
//!
//! Each dictionary is a prefix tree whose edges are packed-byte indices, so
//! `P4ssw0rd` and `password` walk the same path.  Terminal nodes carry the
//! word's 1-based frequency rank; smaller rank means a more common word.

use crate::pack::{PackTable, NO_INDEX};

/// Outcome of inserting one word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The word (or a better rank for it) is now in the trie.
    Inserted,
    /// The word was not stored: guessing it outright is cheaper than its
    /// rank suggests (`26^len < rank`), or it contains bytes outside the
    /// packed alphabet and could never be matched.
    Skipped,
}

pub(crate) struct Node {
    rank: Option<u32>,
    children: Vec<Option<Box<Node>>>,
}

impl Node {
    fn new(fanout: usize) -> Node {
        let mut children = Vec::with_capacity(fanout);
        children.resize_with(fanout, || None);
        Node {
            rank: None,
            children,
        }
    }

    #[inline]
    pub(crate) fn rank(&self) -> Option<u32> {
        self.rank
    }

    #[inline]
    pub(crate) fn child(&self, index: u8) -> Option<&Node> {
        self.children[index as usize].as_deref()
    }
}

/// A named ranked word list in trie form.
pub struct Dictionary {
    name: String,
    root: Node,
    fanout: usize,
}

impl Dictionary {
    pub(crate) fn new(name: &str, fanout: usize) -> Dictionary {
        Dictionary {
            name: name.to_owned(),
            root: Node::new(fanout),
            fanout,
        }
    }

    /// The name the dictionary was registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub(crate) fn root(&self) -> &Node {
        &self.root
    }

    /// Inserts `word` with the given rank, folding through `pack`.
    ///
    /// A word is skipped when `26^len < rank`: the alphabetic bruteforce
    /// space is already smaller than the rank claims, so storing the word
    /// could only overstate its weakness.  An existing rank is only ever
    /// lowered, never raised.
    pub(crate) fn insert(&mut self, pack: &PackTable, word: &[u8], rank: u32) -> InsertOutcome {
        if word.is_empty() || (26f64).powi(word.len().min(256) as i32) < rank as f64 {
            return InsertOutcome::Skipped;
        }

        let packed = pack.pack(word);
        if packed.iter().any(|&b| b == NO_INDEX) {
            return InsertOutcome::Skipped;
        }

        let fanout = self.fanout;
        let mut node = &mut self.root;
        for (pos, &index) in packed.iter().enumerate() {
            let child: &mut Node = node.children[index as usize]
                .get_or_insert_with(|| Box::new(Node::new(fanout)));
            if pos == packed.len() - 1 {
                match child.rank {
                    Some(existing) if existing <= rank => {}
                    _ => child.rank = Some(rank),
                }
            }
            node = child;
        }

        InsertOutcome::Inserted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pack() -> PackTable {
        PackTable::new("!@#$%^&*()-_+=;:,./?\\|`~[]{}")
    }

    #[test]
    fn insert_and_walk() {
        let pack = pack();
        let mut dict = Dictionary::new("test", pack.alphabet_size());
        assert_eq!(dict.insert(&pack, b"password", 1), InsertOutcome::Inserted);

        let packed = pack.pack(b"password");
        let mut node = dict.root();
        for (pos, &b) in packed.iter().enumerate() {
            node = node.child(b).expect("path exists");
            if pos < packed.len() - 1 {
                assert_eq!(node.rank(), None);
            }
        }
        assert_eq!(node.rank(), Some(1));
    }

    #[test]
    fn leet_spelling_walks_same_path() {
        let pack = pack();
        let mut dict = Dictionary::new("test", pack.alphabet_size());
        dict.insert(&pack, b"password", 7);

        let mut node = dict.root();
        for &b in &pack.pack(b"P4ssw0rd") {
            node = node.child(b).expect("leet path exists");
        }
        assert_eq!(node.rank(), Some(7));
    }

    #[test]
    fn rank_never_increases() {
        let pack = pack();
        let mut dict = Dictionary::new("test", pack.alphabet_size());
        dict.insert(&pack, b"abc", 40);
        dict.insert(&pack, b"abc", 9);
        dict.insert(&pack, b"abc", 500);

        let mut node = dict.root();
        for &b in &pack.pack(b"abc") {
            node = node.child(b).unwrap();
        }
        assert_eq!(node.rank(), Some(9));
    }

    #[test]
    fn overranked_word_skipped_without_mutation() {
        let pack = pack();
        let mut dict = Dictionary::new("test", pack.alphabet_size());
        // 26^2 = 676 < 700: not worth storing.
        assert_eq!(dict.insert(&pack, b"ab", 700), InsertOutcome::Skipped);
        assert!(dict.root().child(pack.pack_byte(b'a')).is_none());
    }

    #[test]
    fn out_of_alphabet_word_skipped() {
        let pack = pack();
        let mut dict = Dictionary::new("test", pack.alphabet_size());
        assert_eq!(dict.insert(&pack, b"a b", 1), InsertOutcome::Skipped);
    }
}
