use super::board::Board;
use super::error::GameError;
use super::game_state::TicTacToeGameState;
use super::types::Mark;

const WIN_SCORE: i32 = 10;
const DRAW_SCORE: i32 = 0;

pub struct BotInput {
    pub board: Board,
    pub current_mark: Mark,
}

impl BotInput {
    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self {
            board: state.board().clone(),
            current_mark: state.current_mark(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveChoice {
    pub index: usize,
    /// +10 when O can force a win, -10 when X can, 0 for a forced draw.
    pub score: i32,
}

/// Index of the optimal cell for `side`, leaving `board` untouched.
pub fn compute_computer_move(board: &Board, side: Mark) -> Result<usize, GameError> {
    let mut board = board.clone();
    select_move(&mut board, side).map(|choice| choice.index)
}

/// Full-depth minimax without pruning. O maximizes and X minimizes the same
/// score, so a side to move of X is searched symmetrically.
pub fn calculate_minimax_move(input: &BotInput) -> Result<MoveChoice, GameError> {
    let mut board = input.board.clone();
    select_move(&mut board, input.current_mark)
}

fn select_move(board: &mut Board, side: Mark) -> Result<MoveChoice, GameError> {
    let available_moves = board.empty_cells();
    let is_maximizing = side == Mark::O;

    let mut best_move: Option<MoveChoice> = None;

    for index in available_moves {
        let score = minimax(&mut board.hypothetical(index, side), !is_maximizing);

        // Strict comparison keeps the lowest index among equal scores.
        let improves = match best_move {
            None => true,
            Some(best) if is_maximizing => score > best.score,
            Some(best) => score < best.score,
        };
        if improves {
            best_move = Some(MoveChoice { index, score });
        }
    }

    best_move.ok_or(GameError::NoMoveAvailable)
}

// Scores are not weighted by depth: a win five plies away is worth the same
// as an immediate one.
fn minimax(board: &mut Board, is_maximizing: bool) -> i32 {
    if board.is_win(Mark::X) {
        return -WIN_SCORE;
    }
    if board.is_win(Mark::O) {
        return WIN_SCORE;
    }
    if board.is_full() {
        return DRAW_SCORE;
    }

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for index in board.empty_cells() {
            let eval = minimax(&mut board.hypothetical(index, Mark::O), false);
            max_eval = max_eval.max(eval);
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for index in board.empty_cells() {
            let eval = minimax(&mut board.hypothetical(index, Mark::X), true);
            min_eval = min_eval.min(eval);
        }
        min_eval
    }
}
