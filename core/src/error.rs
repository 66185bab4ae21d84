use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Base number must be a whole number of at least 2")]
    InvalidBase,
    #[error("Winning tile is too large for this base and difficulty")]
    WinValueOverflow,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

pub type Result<T> = core::result::Result<T, GameError>;
