use serde::{Deserialize, Serialize};

/// Value held by a board cell, `0` marks an empty cell.
pub type Tile = u64;

/// Single coordinate axis used for rows and columns.
pub type Coord = u8;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// Width and height of the board.
pub const BOARD_SIZE: Coord = 4;

/// Number of tiles in a row or column.
pub const LINE_LEN: usize = BOARD_SIZE as usize;

/// One row or column, ordered from the edge the tiles slide toward.
pub type Line = [Tile; LINE_LEN];

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Self::Left, Self::Right, Self::Up, Self::Down];

    /// Coordinates of the `index`-th row (left/right) or column (up/down), starting at the edge
    /// the tiles move toward.
    pub const fn line_coords(self, index: Coord) -> [Coord2; LINE_LEN] {
        use Direction::*;

        let mut coords = [(0, 0); LINE_LEN];
        let mut i = 0;
        while i < LINE_LEN {
            let near = i as Coord;
            let far = BOARD_SIZE - 1 - near;
            coords[i] = match self {
                Left => (index, near),
                Right => (index, far),
                Up => (near, index),
                Down => (far, index),
            };
            i += 1;
        }
        coords
    }
}

/// Neighbours that are checked for equal pairs: the cell to the right and the cell below.
const FORWARD_DISPLACEMENTS: [(isize, isize); 2] = [(0, 1), (1, 0)];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (isize, isize), bounds: Coord2) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = delta;
    let (max_row, max_col) = bounds;

    let next_row = row.checked_add_signed(d_row.try_into().ok()?)?;
    if next_row >= max_row {
        return None;
    }

    let next_col = col.checked_add_signed(d_col.try_into().ok()?)?;
    if next_col >= max_col {
        return None;
    }

    Some((next_row, next_col))
}

/// Iterates the right and bottom neighbours of a cell, so every adjacent pair of the board is
/// visited exactly once when walking all cells.
#[derive(Debug)]
pub struct ForwardNeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl ForwardNeighborIter {
    pub fn new(center: Coord2) -> Self {
        Self {
            center,
            bounds: (BOARD_SIZE, BOARD_SIZE),
            index: 0,
        }
    }
}

impl Iterator for ForwardNeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= FORWARD_DISPLACEMENTS.len() {
                return None;
            }

            let next_item = apply_delta(
                self.center,
                FORWARD_DISPLACEMENTS[self.index as usize],
                self.bounds,
            );
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}
