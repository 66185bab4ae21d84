use alloc::vec::Vec;

use crate::*;
pub use random::*;

mod random;

/// Chooses where a freshly spawned tile lands.
pub trait TileSpawner {
    /// Picks one cell out of `empty_cells`, which always holds at least one entry.
    fn pick(&mut self, empty_cells: &[Coord2]) -> Coord2;
}

/// Places `value` on an empty cell chosen by `spawner`, doing nothing when the board is full.
pub fn spawn_tile<S: TileSpawner + ?Sized>(
    board: &mut Board,
    spawner: &mut S,
    value: Tile,
) -> Option<Coord2> {
    let empty_cells: Vec<Coord2> = board.iter_empty().collect();
    if empty_cells.is_empty() {
        log::warn!("No empty cell left, skipped spawning {}", value);
        return None;
    }

    let coords = spawner.pick(&empty_cells);
    assert!(
        empty_cells.contains(&coords),
        "spawner picked occupied cell {:?}",
        coords
    );
    board.set(coords, value);
    Some(coords)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct LastEmpty;

    impl TileSpawner for LastEmpty {
        fn pick(&mut self, empty_cells: &[Coord2]) -> Coord2 {
            empty_cells[empty_cells.len() - 1]
        }
    }

    struct Occupied;

    impl TileSpawner for Occupied {
        fn pick(&mut self, _: &[Coord2]) -> Coord2 {
            (0, 0)
        }
    }

    #[test]
    fn spawn_fills_exactly_one_empty_cell() {
        let mut board = Board::from_rows([[2, 0, 4, 0], [8, 8, 8, 8], [0; 4], [2, 2, 2, 2]]);
        let before = board.clone();

        let coords = spawn_tile(&mut board, &mut LastEmpty, 3);

        assert_eq!(coords, Some((2, 3)));
        assert_eq!(board[(2, 3)], 3);
        assert_eq!(board.tile_count(), before.tile_count() + 1);
    }

    #[test]
    fn spawn_on_full_board_is_a_no_op() {
        let mut board = Board::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        let before = board.clone();

        assert_eq!(spawn_tile(&mut board, &mut LastEmpty, 2), None);
        assert_eq!(board, before);
    }

    #[test]
    #[should_panic(expected = "occupied")]
    fn spawner_cannot_overwrite_tiles() {
        let mut board = Board::from_rows([[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
        spawn_tile(&mut board, &mut Occupied, 2);
    }
}
