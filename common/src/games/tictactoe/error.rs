use derive_more::{Display, Error};

/// Rejections raised by the board, the session and the move selector.
/// None of them leave the board modified.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameError {
    #[display("Cell {index} is out of range or already marked")]
    InvalidMove { index: usize },

    #[display("No empty cell left to play")]
    NoMoveAvailable,

    #[display("Round is already over")]
    GameOver,

    #[display("It is the computer's turn")]
    NotHumanTurn,

    #[display("Invalid board layout: {reason}")]
    InvalidLayout { reason: String },
}

