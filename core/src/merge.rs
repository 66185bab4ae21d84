//! Slide-and-combine rule applied to every row or column of a board.

use crate::*;

/// Compacts `line` toward its start and merges equal neighbours once.
///
/// Pairs are taken left to right and a freshly merged tile never merges again in the same pass,
/// so `[v, v, v, 0]` becomes `[2v, v, 0, 0]` under doubling.
pub fn merge_line(line: Line, mode: MergeMode) -> Line {
    let mut compacted: Line = [0; LINE_LEN];
    let mut len = 0;
    for tile in line.into_iter().filter(|&tile| tile != 0) {
        compacted[len] = tile;
        len += 1;
    }

    let mut merged: Line = [0; LINE_LEN];
    let mut out = 0;
    let mut i = 0;
    while i < len {
        if i + 1 < len && compacted[i] == compacted[i + 1] {
            merged[out] = mode.combine(compacted[i]);
            i += 2;
        } else {
            merged[out] = compacted[i];
            i += 1;
        }
        out += 1;
    }

    merged
}

/// Slides every line of `board` toward `direction`, returning whether any tile moved or merged.
pub fn slide(board: &mut Board, direction: Direction, mode: MergeMode) -> bool {
    let mut moved = false;

    for index in 0..BOARD_SIZE {
        let line = board.line(direction, index);
        let merged = merge_line(line, mode);
        if merged != line {
            board.set_line(direction, index, merged);
            moved = true;
        }
    }

    moved
}

/// Whether sliding toward `direction` would change the board.
pub fn can_slide(board: &Board, direction: Direction, mode: MergeMode) -> bool {
    (0..BOARD_SIZE).any(|index| {
        let line = board.line(direction, index);
        merge_line(line, mode) != line
    })
}
