//! Key grids for the supported layouts.
//!
//! Each label holds the unshifted glyph followed by the shifted glyph
//! (keyboards) or a single glyph (keypads).  The outer ring of every grid is
//! empty so neighbor lookups never leave the grid.

/// One grid row: `None` marks an unlabelled position.
pub(crate) type Row = &'static [Option<&'static str>];

macro_rules! keys {
    [ $($k:tt),* $(,)? ] => { &[ $(keys!(@one $k)),* ] };
    (@one _) => { None };
    (@one $s:literal) => { Some($s) };
}

pub(crate) const QWERTY: &[Row] = &[
    keys![_, _, _, _, _, _, _, _, _, _, _, _, _, _, _, _],
    keys![_, "`~", "1!", "2@", "3#", "4$", "5%", "6^", "7&", "8*", "9(", "0)", "-_", "=+", _, _],
    keys![_, _, "qQ", "wW", "eE", "rR", "tT", "yY", "uU", "iI", "oO", "pP", "[{", "]}", "\\|", _],
    keys![_, _, "aA", "sS", "dD", "fF", "gG", "hH", "jJ", "kK", "lL", ";:", "'\"", _, _, _],
    keys![_, _, "zZ", "xX", "cC", "vV", "bB", "nN", "mM", ",<", ".>", "/?", _, _, _, _],
    keys![_, _, _, _, _, _, _, _, _, _, _, _, _, _, _, _],
];

pub(crate) const DVORAK: &[Row] = &[
    keys![_, _, _, _, _, _, _, _, _, _, _, _, _, _, _, _],
    keys![_, "`~", "1!", "2@", "3#", "4$", "5%", "6^", "7&", "8*", "9(", "0)", "[{", "]}", _, _],
    keys![_, _, "'\"", ",<", ".>", "pP", "yY", "fF", "gG", "cC", "rR", "lL", "/?", "=+", "\\|", _],
    keys![_, _, "aA", "oO", "eE", "uU", "iI", "dD", "hH", "tT", "nN", "sS", "-_", _, _, _],
    keys![_, _, ";:", "qQ", "jJ", "kK", "xX", "bB", "mM", "wW", "vV", "zZ", _, _, _, _],
    keys![_, _, _, _, _, _, _, _, _, _, _, _, _, _, _, _],
];

pub(crate) const KEYPAD: &[Row] = &[
    keys![_, _, _, _, _, _],
    keys![_, _, "/", "*", "-", _],
    keys![_, "7", "8", "9", "+", _],
    keys![_, "4", "5", "6", _, _],
    keys![_, "1", "2", "3", _, _],
    keys![_, _, "0", ".", _, _],
    keys![_, _, _, _, _, _],
];

pub(crate) const MACPAD: &[Row] = &[
    keys![_, _, _, _, _, _],
    keys![_, _, "=", "/", "*", _],
    keys![_, "7", "8", "9", "-", _],
    keys![_, "4", "5", "6", "+", _],
    keys![_, "1", "2", "3", _, _],
    keys![_, "0", ".", _, _, _],
    keys![_, _, _, _, _, _],
];
