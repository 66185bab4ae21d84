use serde::{Deserialize, Serialize};

use crate::*;

/// Difficulty picked on the welcome screen, selecting the power the base must be raised to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    BabyMode,
    Easy,
    Normal,
    Hard,
    SuperHard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 5] = [
        Self::BabyMode,
        Self::Easy,
        Self::Normal,
        Self::Hard,
        Self::SuperHard,
    ];

    pub const fn target_power(self) -> u32 {
        use Difficulty::*;
        match self {
            BabyMode => 9,
            Easy => 10,
            Normal => 11,
            Hard => 12,
            SuperHard => 13,
        }
    }

    pub const fn label(self) -> &'static str {
        use Difficulty::*;
        match self {
            BabyMode => "Baby Mode",
            Easy => "Easy",
            Normal => "Normal",
            Hard => "Hard",
            SuperHard => "Super Hard",
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Normal
    }
}

/// How two equal tiles combine.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MergeMode {
    Doubling,
    Tripling,
}

impl MergeMode {
    /// A base of 2 plays classic doubling, every other base triples.
    pub const fn for_base(base: Tile) -> Self {
        if base == 2 {
            Self::Doubling
        } else {
            Self::Tripling
        }
    }

    pub const fn multiplier(self) -> Tile {
        match self {
            Self::Doubling => 2,
            Self::Tripling => 3,
        }
    }

    /// Value of the tile produced by merging two tiles of value `tile`.
    pub const fn combine(self, tile: Tile) -> Tile {
        tile.saturating_mul(self.multiplier())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulties_map_to_increasing_powers() {
        let powers = Difficulty::ALL.map(Difficulty::target_power);
        assert_eq!(powers, [9, 10, 11, 12, 13]);
        assert_eq!(Difficulty::default().target_power(), 11);
    }

    #[test]
    fn merge_mode_follows_base() {
        assert_eq!(MergeMode::for_base(2), MergeMode::Doubling);
        assert_eq!(MergeMode::for_base(3), MergeMode::Tripling);
        assert_eq!(MergeMode::for_base(5), MergeMode::Tripling);
    }

    #[test]
    fn combine_saturates() {
        assert_eq!(MergeMode::Doubling.combine(8), 16);
        assert_eq!(MergeMode::Tripling.combine(9), 27);
        assert_eq!(MergeMode::Tripling.combine(Tile::MAX / 2), Tile::MAX);
    }
}
