use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// The 4×4 grid of tiles, addressed row-major by `(row, col)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Tile>,
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: Array2::default((BOARD_SIZE, BOARD_SIZE).to_nd_index()),
        }
    }

    pub fn from_rows(rows: [[Tile; LINE_LEN]; LINE_LEN]) -> Self {
        Self {
            cells: Array2::from_shape_fn((LINE_LEN, LINE_LEN), |(row, col)| rows[row][col]),
        }
    }

    pub fn to_rows(&self) -> [[Tile; LINE_LEN]; LINE_LEN] {
        core::array::from_fn(|row| core::array::from_fn(|col| self.cells[[row, col]]))
    }

    pub fn row(&self, row: Coord) -> Line {
        self.line(Direction::Left, row)
    }

    /// Reads the `index`-th line as seen when sliding toward `direction`.
    pub fn line(&self, direction: Direction, index: Coord) -> Line {
        direction.line_coords(index).map(|coords| self[coords])
    }

    pub(crate) fn set_line(&mut self, direction: Direction, index: Coord, line: Line) {
        for (coords, tile) in direction.line_coords(index).into_iter().zip(line) {
            self.set(coords, tile);
        }
    }

    pub(crate) fn set(&mut self, coords: Coord2, tile: Tile) {
        self.cells[coords.to_nd_index()] = tile;
    }

    /// Empty cells in row-major order.
    pub fn iter_empty(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.cells
            .indexed_iter()
            .filter(|&(_, &tile)| tile == 0)
            .map(|((row, col), _)| (row as Coord, col as Coord))
    }

    pub fn empty_count(&self) -> usize {
        self.iter_empty().count()
    }

    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|&&tile| tile != 0).count()
    }

    pub fn tile_sum(&self) -> Tile {
        self.cells
            .iter()
            .fold(0, |sum: Tile, &tile| sum.saturating_add(tile))
    }

    pub fn contains(&self, value: Tile) -> bool {
        self.cells.iter().any(|&tile| tile == value)
    }

    pub fn highest_tile(&self) -> Tile {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&tile| tile != 0)
    }

    /// Whether any two horizontally or vertically adjacent cells hold the same tile.
    pub fn has_adjacent_pair(&self) -> bool {
        self.cells.indexed_iter().any(|((row, col), &tile)| {
            ForwardNeighborIter::new((row as Coord, col as Coord))
                .any(|neighbor| self[neighbor] == tile)
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Coord2> for Board {
    type Output = Tile;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_is_empty() {
        let board = Board::new();

        assert_eq!(board.empty_count(), 16);
        assert_eq!(board.tile_count(), 0);
        assert_eq!(board.highest_tile(), 0);
        assert!(!board.is_full());
    }

    #[test]
    fn rows_round_trip_and_index_row_major() {
        let rows = [[2, 0, 0, 4], [0, 8, 0, 0], [0, 0, 16, 0], [32, 0, 0, 64]];
        let board = Board::from_rows(rows);

        assert_eq!(board.to_rows(), rows);
        assert_eq!(board[(0, 3)], 4);
        assert_eq!(board[(3, 0)], 32);
        assert_eq!(board.row(1), [0, 8, 0, 0]);
        assert_eq!(board.line(Direction::Down, 0), [32, 0, 0, 2]);
    }

    #[test]
    fn empty_cells_are_listed_in_row_major_order() {
        let board = Board::from_rows([[2, 2, 2, 2], [2, 0, 2, 2], [2, 2, 2, 0], [0, 2, 2, 2]]);

        let empty: [Coord2; 3] = {
            let mut iter = board.iter_empty();
            [
                iter.next().unwrap(),
                iter.next().unwrap(),
                iter.next().unwrap(),
            ]
        };
        assert_eq!(empty, [(1, 1), (2, 3), (3, 0)]);
        assert_eq!(board.tile_count(), 13);
    }

    #[test]
    fn adjacent_pair_detection_covers_rows_and_columns() {
        let none = Board::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        let horizontal =
            Board::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 4, 8], [4, 2, 8, 2]]);
        let vertical = Board::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 8], [4, 2, 4, 8]]);

        assert!(!none.has_adjacent_pair());
        assert!(horizontal.has_adjacent_pair());
        assert!(vertical.has_adjacent_pair());
    }

    #[test]
    #[should_panic]
    fn out_of_bounds_index_panics() {
        let board = Board::new();
        let tile: Tile = board[(4, 0)];
        assert_eq!(tile, 0);
    }
}
