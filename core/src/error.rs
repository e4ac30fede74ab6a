use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("tile index {0} is out of range")]
    OutOfRange(usize),
    #[error("no click is waiting to settle")]
    NotSettling,
    #[error("symbol catalog is empty")]
    EmptyCatalog,
    #[error("ranked level sequence is empty")]
    EmptySequence,
}

pub type Result<T> = core::result::Result<T, GameError>;
