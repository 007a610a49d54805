//! Adjacency-graph construction and lookup.

use super::layouts::Row;

/// Neighbor slots per byte: up to 8 surrounding keys plus the key itself.
/// A step that stays on the same key (a held-down repeat) counts as adjacent.
pub const NEIGHBOR_SLOTS: usize = 9;

/// Neighbor geometry of a grid.
#[derive(Clone, Copy)]
pub(crate) enum Shape {
    /// Keyboard rows are offset by half a key: 6 neighbors.
    Slant,
    /// Keypad rows are aligned: 8 neighbors.
    Align,
}

impl Shape {
    fn offsets(self) -> &'static [(i32, i32)] {
        match self {
            Shape::Slant => &[(-1, 0), (0, -1), (1, -1), (1, 0), (0, 1), (-1, 1)],
            Shape::Align => &[
                (-1, 0),
                (-1, -1),
                (0, -1),
                (1, -1),
                (1, 0),
                (1, 1),
                (0, 1),
                (-1, 1),
            ],
        }
    }
}

/// Precomputed adjacency table for one layout.
///
/// `neighbors[b]` lists, for every byte `b` appearing in a key label, the
/// labels of the surrounding keys in a fixed direction order, with the key's
/// own label in the final slot.  Absent neighbors stay `None`.
pub struct SpatialGraph {
    neighbors: Box<[[Option<&'static str>; NEIGHBOR_SLOTS]; 256]>,
    n_chars: u32,
    degree: f64,
    token_size: usize,
    n_dirs: usize,
}

/// Populates a graph from a key grid.
pub(crate) fn build(rows: &[Row], token_size: usize, shape: Shape) -> SpatialGraph {
    let offsets = shape.offsets();
    let mut neighbors = Box::new([[None; NEIGHBOR_SLOTS]; 256]);
    let mut n_chars = 0u32;
    let mut labelled_neighbors = 0u64;

    for y in 1..rows.len() - 1 {
        let row = rows[y];
        for x in 1..row.len() - 1 {
            let Some(label) = row[x] else { continue };
            for ch in label.bytes() {
                n_chars += 1;
                for (dir, &(dx, dy)) in offsets.iter().enumerate() {
                    let nx = (x as i32 + dx) as usize;
                    let ny = (y as i32 + dy) as usize;
                    if let Some(neighbor) = rows[ny][nx] {
                        neighbors[ch as usize][dir] = Some(neighbor);
                        labelled_neighbors += 1;
                    }
                }
                neighbors[ch as usize][offsets.len()] = Some(label);
            }
        }
    }

    SpatialGraph {
        neighbors,
        n_chars,
        degree: labelled_neighbors as f64 / n_chars as f64,
        token_size,
        n_dirs: offsets.len() + 1,
    }
}

impl SpatialGraph {
    /// Looks up whether typing `to` directly after `from` stays on this
    /// layout.  Returns the direction index and whether `to` is the shifted
    /// glyph of the destination key.
    pub(crate) fn step(&self, from: u8, to: u8) -> Option<(usize, bool)> {
        let slots = &self.neighbors[from as usize];
        for dir in 0..self.n_dirs {
            let Some(label) = slots[dir] else { continue };
            for (pos, ch) in label.bytes().take(self.token_size).enumerate() {
                if ch == to {
                    return Some((dir, pos > 0));
                }
            }
        }
        None
    }

    /// Count of labelled glyphs on the layout.
    #[inline]
    pub fn n_chars(&self) -> u32 {
        self.n_chars
    }

    /// Average labelled-neighbor count per glyph.
    #[inline]
    pub fn degree(&self) -> f64 {
        self.degree
    }
}
