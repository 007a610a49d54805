//! Byte→alphabet-index fold used by the dictionary layer.
//!
//! The pack table conflates the equivalence classes that matter for
//! dictionary search: upper/lower case collapse to one index, and common
//! "leet" substitutions collapse onto their alphabetic equivalent
//! (`4`/`@` → `a`, `3` → `e`, `$`/`5` → `s`, ...).  Packing is a lossy
//! normalization; the entropy model, not the matcher, accounts for the
//! information lost here.

// ─────────────────────────────────────────────────────────────────────────────
// Sentinel
// ─────────────────────────────────────────────────────────────────────────────

/// Index meaning "byte is outside the packed alphabet".  A packed byte equal
/// to this value never walks a trie edge.
pub const NO_INDEX: u8 = 0xFF;

// ─────────────────────────────────────────────────────────────────────────────
// Pack table
// ─────────────────────────────────────────────────────────────────────────────

/// Byte→index fold table plus the symbol-alphabet bookkeeping derived from it.
///
/// Index layout: `a`..`z` take `0..26`, `0`..`9` take `26..36`, then each
/// distinct registered symbol takes the next slot.  After that, leet bytes
/// (including every decimal digit) are re-pointed at their alphabetic
/// equivalent, so the digit/symbol slots they vacate stay allocated but
/// unreachable.  `size` counts allocated slots, reachable or not; it is the
/// trie fanout.
#[derive(Clone)]
pub struct PackTable {
    table: [u8; 256],
    size: usize,
    n_symbols: u32,
}

/// Leet equivalences: each byte on the left packs to the same index as the
/// letter on the right.
const LEET: &[(u8, u8)] = &[
    (b'4', b'a'),
    (b'@', b'a'),
    (b'8', b'b'),
    (b'(', b'c'),
    (b'{', b'c'),
    (b'[', b'c'),
    (b'<', b'c'),
    (b'3', b'e'),
    (b'6', b'g'),
    (b'9', b'g'),
    (b'1', b'i'),
    (b'!', b'i'),
    (b'|', b'i'),
    (b'0', b'o'),
    (b'$', b's'),
    (b'5', b's'),
    (b'+', b't'),
    (b'7', b't'),
    (b'%', b'x'),
    (b'2', b'z'),
];

impl PackTable {
    /// Builds the fold table for the given symbol alphabet.  Symbols already
    /// holding an index (duplicates in `symbols`) are not counted twice.
    pub fn new(symbols: &str) -> PackTable {
        let mut table = [NO_INDEX; 256];
        let mut size = 0usize;
        let mut n_symbols = 0u32;

        for b in b'a'..=b'z' {
            table[b as usize] = size as u8;
            size += 1;
        }
        for b in b'0'..=b'9' {
            table[b as usize] = size as u8;
            size += 1;
        }
        for b in symbols.bytes() {
            if table[b as usize] == NO_INDEX {
                table[b as usize] = size as u8;
                size += 1;
                n_symbols += 1;
            }
        }

        // Leet folding last: it may shadow digit and symbol slots.
        for &(from, to) in LEET {
            table[from as usize] = table[to as usize];
        }

        // Case folding: uppercase letters share the lowercase index.
        for b in b'A'..=b'Z' {
            table[b as usize] = table[(b + 32) as usize];
        }

        PackTable {
            table,
            size,
            n_symbols,
        }
    }

    /// Folds one byte; returns [`NO_INDEX`] for bytes outside the alphabet.
    #[inline]
    pub fn pack_byte(&self, b: u8) -> u8 {
        self.table[b as usize]
    }

    /// Folds a whole byte string.
    pub fn pack(&self, src: &[u8]) -> Vec<u8> {
        src.iter().map(|&b| self.pack_byte(b)).collect()
    }

    /// Number of allocated alphabet indices (trie fanout).
    #[inline]
    pub fn alphabet_size(&self) -> usize {
        self.size
    }

    /// Count of distinct registered symbols.
    #[inline]
    pub fn symbol_count(&self) -> u32 {
        self.n_symbols
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SYMBOLS: &str = "!@#$%^&*()-_+=;:,./?\\|`~[]{}";

    #[test]
    fn letters_and_digits_get_distinct_slots() {
        let pack = PackTable::new("");
        assert_eq!(pack.alphabet_size(), 36);
        for b in b'a'..=b'z' {
            assert_eq!(pack.pack_byte(b), b - b'a');
        }
        // Digit slots are allocated, but the bytes themselves fold to letters.
        assert_eq!(pack.pack_byte(b'4'), pack.pack_byte(b'a'));
        assert_eq!(pack.pack_byte(b'0'), pack.pack_byte(b'o'));
    }

    #[test]
    fn case_folds_to_lowercase() {
        let pack = PackTable::new(SYMBOLS);
        for b in b'a'..=b'z' {
            assert_eq!(pack.pack_byte(b), pack.pack_byte(b - 32));
        }
    }

    #[test]
    fn leet_equivalences_hold() {
        let pack = PackTable::new(SYMBOLS);
        for &(from, to) in LEET {
            assert_eq!(pack.pack_byte(from), pack.pack_byte(to), "{from} -> {to}");
        }
    }

    #[test]
    fn leet_password_packs_like_plain() {
        let pack = PackTable::new(SYMBOLS);
        assert_eq!(pack.pack(b"P4ssw0rd"), pack.pack(b"password"));
    }

    #[test]
    fn symbols_counted_once() {
        let pack = PackTable::new("!!..");
        // '!' is a leet byte but still allocates a slot before folding.
        assert_eq!(pack.symbol_count(), 2);
        assert_eq!(pack.alphabet_size(), 38);
        assert_eq!(pack.pack_byte(b'!'), pack.pack_byte(b'i'));
    }

    #[test]
    fn out_of_alphabet_bytes_map_to_sentinel() {
        let pack = PackTable::new(SYMBOLS);
        assert_eq!(pack.pack_byte(0x80), NO_INDEX);
        assert_eq!(pack.pack_byte(b' '), NO_INDEX);
    }
}
