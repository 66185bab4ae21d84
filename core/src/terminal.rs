use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    Playing,
    Won,
    Lost,
}

impl EngineState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::Playing
    }
}

pub fn is_won(board: &Board, win_value: Tile) -> bool {
    board.contains(win_value)
}

/// No empty cell and no equal neighbours means no direction can change the board.
pub fn is_lost(board: &Board) -> bool {
    board.is_full() && !board.has_adjacent_pair()
}

/// Win is checked before loss, so a board that reaches the target on its last free cell wins.
pub fn check_terminal(board: &Board, win_value: Tile) -> EngineState {
    if is_won(board, win_value) {
        EngineState::Won
    } else if is_lost(board) {
        EngineState::Lost
    } else {
        EngineState::Playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHECKERBOARD: [[Tile; 4]; 4] = [[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]];

    #[test]
    fn win_tile_anywhere_wins() {
        let board = Board::from_rows([[0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 2048, 0], [2, 0, 0, 0]]);

        assert!(is_won(&board, 2048));
        assert_eq!(check_terminal(&board, 2048), EngineState::Won);
        assert_eq!(check_terminal(&board, 4096), EngineState::Playing);
    }

    #[test]
    fn locked_board_loses() {
        let board = Board::from_rows(CHECKERBOARD);

        assert!(is_lost(&board));
        assert_eq!(check_terminal(&board, 2048), EngineState::Lost);
    }

    #[test]
    fn one_equal_pair_keeps_playing() {
        let mut rows = CHECKERBOARD;
        rows[3][3] = 4;
        let board = Board::from_rows(rows);

        assert!(!is_lost(&board));
        assert_eq!(check_terminal(&board, 2048), EngineState::Playing);
    }

    #[test]
    fn empty_cell_keeps_playing() {
        let mut rows = CHECKERBOARD;
        rows[1][2] = 0;

        assert_eq!(
            check_terminal(&Board::from_rows(rows), 2048),
            EngineState::Playing
        );
    }

    #[test]
    fn win_takes_precedence_over_loss() {
        let mut rows = CHECKERBOARD;
        rows[0][0] = 512;
        let board = Board::from_rows(rows);

        assert!(is_lost(&board));
        assert_eq!(check_terminal(&board, 512), EngineState::Won);
    }
}
