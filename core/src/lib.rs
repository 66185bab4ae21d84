#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use difficulty::*;
pub use engine::*;
pub use error::*;
pub use merge::*;
pub use palette::*;
pub use spawner::*;
pub use terminal::*;
pub use types::*;

mod board;
mod difficulty;
mod engine;
mod error;
mod merge;
mod palette;
mod spawner;
mod terminal;
mod types;

/// Smallest base that can grow by merging.
pub const MIN_BASE: Tile = 2;

/// Settings fixed for one session.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    base: Tile,
    difficulty: Difficulty,
    merge_mode: MergeMode,
    win_value: Tile,
}

impl GameConfig {
    pub fn new(base: Tile, difficulty: Difficulty) -> Result<Self> {
        Self::with_merge_mode(base, difficulty, MergeMode::for_base(base))
    }

    pub fn with_merge_mode(
        base: Tile,
        difficulty: Difficulty,
        merge_mode: MergeMode,
    ) -> Result<Self> {
        if base < MIN_BASE {
            return Err(GameError::InvalidBase);
        }

        let win_value = base
            .checked_pow(difficulty.target_power())
            .ok_or(GameError::WinValueOverflow)?;

        Ok(Self {
            base,
            difficulty,
            merge_mode,
            win_value,
        })
    }

    pub const fn base(&self) -> Tile {
        self.base
    }

    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub const fn merge_mode(&self) -> MergeMode {
        self.merge_mode
    }

    /// `base ^ target_power`, the tile that ends the game in a win.
    pub const fn win_value(&self) -> Tile {
        self.win_value
    }
}

/// Parses the base number typed on the welcome screen.
pub fn parse_base(text: &str) -> Result<Tile> {
    let base: Tile = text.trim().parse().map_err(|_| GameError::InvalidBase)?;
    if base < MIN_BASE {
        return Err(GameError::InvalidBase);
    }
    Ok(base)
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    NoChange,
    Moved,
    Won,
    Lost,
}

impl MoveOutcome {
    pub const fn has_update(self) -> bool {
        use MoveOutcome::*;
        match self {
            NoChange => false,
            Moved => true,
            Won => true,
            Lost => true,
        }
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}
