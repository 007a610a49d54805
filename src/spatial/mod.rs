//! Keyboard adjacency model.
//!
//! Four layouts are supported: QWERTY and Dvorak keyboards (slanted rows,
//! 6 neighbors per key) and the PC/Mac numeric keypads (aligned rows,
//! 8 neighbors per key).  Each graph is precomputed from a sparse key grid
//! at analyzer construction.

pub mod graph;
pub mod layouts;

pub use graph::SpatialGraph;

/// Identifies the layout a spatial match was found on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    Qwerty,
    Dvorak,
    Keypad,
    MacPad,
}

impl Layout {
    /// All supported layouts, in the order they are attempted by the matcher.
    pub const ALL: [Layout; 4] = [Layout::Qwerty, Layout::Dvorak, Layout::Keypad, Layout::MacPad];

    /// Stable lowercase layout name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::Qwerty => "qwerty",
            Layout::Dvorak => "dvorak",
            Layout::Keypad => "keypad",
            Layout::MacPad => "macpad",
        }
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// Builds all four graphs, indexed by [`Layout::index`].
pub(crate) fn build_all() -> [SpatialGraph; 4] {
    use graph::Shape;
    [
        graph::build(layouts::QWERTY, 2, Shape::Slant),
        graph::build(layouts::DVORAK, 2, Shape::Slant),
        graph::build(layouts::KEYPAD, 1, Shape::Align),
        graph::build(layouts::MACPAD, 1, Shape::Align),
    ]
}
