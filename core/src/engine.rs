use crate::*;

/// Tiles placed on the board before the first move.
pub const INITIAL_TILES: usize = 2;

/// One game session: configuration, board, and the spawner feeding it new tiles.
#[derive(Clone, Debug)]
pub struct PlayEngine<S = RandomSpawner> {
    config: GameConfig,
    board: Board,
    spawner: S,
    state: EngineState,
    move_count: u32,
}

impl PlayEngine<RandomSpawner> {
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        let engine = Self::new(config, RandomSpawner::new(seed));
        log::info!("Game seed: {}", engine.spawner().seed());
        engine
    }
}

impl<S: TileSpawner> PlayEngine<S> {
    /// Starts a session on an empty board seeded with two base tiles.
    pub fn new(config: GameConfig, mut spawner: S) -> Self {
        let mut board = Board::new();
        for _ in 0..INITIAL_TILES {
            spawn_tile(&mut board, &mut spawner, config.base());
        }
        log::debug!(
            "New game: base {}, power {}, win value {}",
            config.base(),
            config.difficulty().target_power(),
            config.win_value()
        );
        Self::from_board(config, board, spawner)
    }

    /// Resumes play on an arbitrary board.
    pub fn from_board(config: GameConfig, board: Board, spawner: S) -> Self {
        let state = check_terminal(&board, config.win_value());
        Self {
            config,
            board,
            spawner,
            state,
            move_count: 0,
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn spawner(&self) -> &S {
        &self.spawner
    }

    pub fn tile_at(&self, coords: Coord2) -> Tile {
        self.board[coords]
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn win_value(&self) -> Tile {
        self.config.win_value()
    }

    pub fn highest_tile(&self) -> Tile {
        self.board.highest_tile()
    }

    /// Whether `direction` would change the board right now.
    pub fn can_move(&self, direction: Direction) -> bool {
        !self.is_finished() && can_slide(&self.board, direction, self.config.merge_mode())
    }

    /// Plays one turn: slide, spawn a base tile if anything moved, then check for win or loss.
    pub fn apply_move(&mut self, direction: Direction) -> Result<MoveOutcome> {
        self.check_not_finished()?;

        if !slide(&mut self.board, direction, self.config.merge_mode()) {
            log::trace!("{:?} changed nothing", direction);
            return Ok(MoveOutcome::NoChange);
        }

        self.move_count = self.move_count.saturating_add(1);
        let spawned = spawn_tile(&mut self.board, &mut self.spawner, self.config.base());
        self.state = check_terminal(&self.board, self.config.win_value());
        log::trace!(
            "move {}: {:?}, spawned at {:?}, state {:?}",
            self.move_count,
            direction,
            spawned,
            self.state
        );

        Ok(match self.state {
            EngineState::Playing => MoveOutcome::Moved,
            EngineState::Won => MoveOutcome::Won,
            EngineState::Lost => MoveOutcome::Lost,
        })
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
