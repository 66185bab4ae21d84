use rand::prelude::*;
use rand::rngs::SmallRng;

use super::*;

/// Spawns on a uniformly random empty cell, reproducible from the seed.
#[derive(Clone, Debug)]
pub struct RandomSpawner {
    seed: u64,
    rng: SmallRng,
}

impl RandomSpawner {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl TileSpawner for RandomSpawner {
    fn pick(&mut self, empty_cells: &[Coord2]) -> Coord2 {
        empty_cells[self.rng.random_range(0..empty_cells.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_picks_same_cells() {
        let cells = [(0, 0), (1, 2), (2, 1), (3, 3)];
        let mut a = RandomSpawner::new(7);
        let mut b = RandomSpawner::new(7);

        for _ in 0..32 {
            assert_eq!(a.pick(&cells), b.pick(&cells));
        }
    }

    #[test]
    fn picks_cover_every_candidate() {
        let cells = [(0, 1), (1, 0), (2, 2), (3, 1)];
        let mut spawner = RandomSpawner::new(11);
        let mut hits = [0u32; 4];

        for _ in 0..4000 {
            let coords = spawner.pick(&cells);
            let slot = cells.iter().position(|&c| c == coords).unwrap();
            hits[slot] += 1;
        }

        // roughly uniform, 1000 expected per cell
        for count in hits {
            assert!((800..1200).contains(&count), "skewed pick count {}", count);
        }
    }

    #[test]
    fn spawns_onto_board() {
        let mut board = Board::new();
        let mut spawner = RandomSpawner::new(3);

        for placed in 1..=16 {
            let coords = spawn_tile(&mut board, &mut spawner, 5).unwrap();
            assert_eq!(board[coords], 5);
            assert_eq!(board.tile_count(), placed);
        }
        assert_eq!(spawn_tile(&mut board, &mut spawner, 5), None);
    }
}
