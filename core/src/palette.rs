use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Formats as a CSS colour, `rgb(r, g, b)`.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self(r, g, b) = *self;
        write!(f, "rgb({}, {}, {})", r, g, b)
    }
}

pub const BACKGROUND_COLOR: Rgb = Rgb(187, 173, 160);
pub const EMPTY_TILE_COLOR: Rgb = Rgb(205, 193, 180);
pub const FONT_COLOR: Rgb = Rgb(119, 110, 101);

/// Tile colours by merge depth, the last entry covers every deeper tile.
pub const TILE_PALETTE: [Rgb; 12] = [
    Rgb(238, 228, 218),
    Rgb(237, 224, 200),
    Rgb(242, 177, 121),
    Rgb(245, 149, 99),
    Rgb(246, 124, 95),
    Rgb(246, 94, 59),
    Rgb(237, 207, 114),
    Rgb(237, 204, 97),
    Rgb(237, 200, 80),
    Rgb(237, 197, 63),
    Rgb(237, 194, 46),
    Rgb(60, 58, 50),
];

/// Number of merges that produced `tile` from base tiles, `None` when `tile` is not
/// `base * multiplier^k`.
pub fn merge_depth(tile: Tile, base: Tile, mode: MergeMode) -> Option<u32> {
    if base == 0 || tile < base || tile % base != 0 {
        return None;
    }

    let multiplier = mode.multiplier();
    let mut rest = tile / base;
    let mut depth = 0;
    while rest > 1 {
        if rest % multiplier != 0 {
            return None;
        }
        rest /= multiplier;
        depth += 1;
    }
    Some(depth)
}

pub fn tile_color(tile: Tile, base: Tile, mode: MergeMode) -> Rgb {
    const LAST: usize = TILE_PALETTE.len() - 1;

    if tile == 0 {
        return EMPTY_TILE_COLOR;
    }

    let index = merge_depth(tile, base, mode).map_or(LAST, |depth| (depth as usize).min(LAST));
    TILE_PALETTE[index]
}
