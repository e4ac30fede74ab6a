use core::fmt;
use thiserror::Error;
use tripick_core::GameError;

/// Limited-use special moves in ranked play.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Powerup {
    Pop,
    Undo,
    Wash,
}

impl fmt::Display for Powerup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pop => "pop",
            Self::Undo => "undo",
            Self::Wash => "shuffle",
        })
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SessionError {
    /// Surfaced to the player as a refusal notice; the action did not run.
    #[error("no {0} uses remaining")]
    AllowanceExhausted(Powerup),
    #[error(transparent)]
    Game(#[from] GameError),
}

pub type Result<T, E = SessionError> = core::result::Result<T, E>;
