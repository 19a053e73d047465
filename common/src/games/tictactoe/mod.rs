mod board;
mod bot_controller;
mod error;
mod game_state;
mod types;
mod win_detector;

pub use board::{BOARD_SIZE, Board};
pub use bot_controller::{BotInput, MoveChoice, calculate_minimax_move, compute_computer_move};
pub use error::GameError;
pub use game_state::TicTacToeGameState;
pub use types::{Cell, GameMode, GameOutcome, Mark};
pub use win_detector::{WINNING_LINES, check_win, check_win_with_line};
