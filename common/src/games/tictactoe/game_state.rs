use super::board::Board;
use super::bot_controller::{BotInput, calculate_minimax_move};
use super::error::GameError;
use super::types::{GameMode, GameOutcome, Mark};
use crate::log;

/// One round of play. Owned by the caller; every operation goes through it.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    current_mark: Mark,
    mode: GameMode,
    last_move: Option<usize>,
}

impl TicTacToeGameState {
    pub fn new_round(mode: GameMode) -> Self {
        log!("New round started ({})", mode);
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            mode,
            last_move: None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new_round(self.mode);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn outcome(&self) -> GameOutcome {
        if self.board.is_win(Mark::X) {
            GameOutcome::Win(Mark::X)
        } else if self.board.is_win(Mark::O) {
            GameOutcome::Win(Mark::O)
        } else if self.board.is_draw() {
            GameOutcome::Draw
        } else {
            GameOutcome::Ongoing
        }
    }

    pub fn winning_line(&self) -> Option<[usize; 3]> {
        match self.outcome() {
            GameOutcome::Win(mark) => self.board.winning_line(mark),
            _ => None,
        }
    }

    /// The computer always plays O.
    pub fn is_computer_turn(&self) -> bool {
        self.mode == GameMode::HumanVsComputer
            && self.current_mark == Mark::O
            && self.outcome() == GameOutcome::Ongoing
    }

    pub fn apply_human_move(&mut self, index: usize) -> Result<GameOutcome, GameError> {
        if self.outcome().is_terminal() {
            return Err(GameError::GameOver);
        }
        if self.is_computer_turn() {
            return Err(GameError::NotHumanTurn);
        }
        self.place_mark(index)
    }

    pub fn apply_computer_move(&mut self) -> Result<(usize, GameOutcome), GameError> {
        if self.outcome().is_terminal() {
            return Err(GameError::GameOver);
        }

        let choice = calculate_minimax_move(&BotInput::from_game_state(self))?;
        log!(
            "Computer picked cell {} for {} (score {})",
            choice.index,
            self.current_mark,
            choice.score
        );

        let outcome = self.place_mark(choice.index)?;
        Ok((choice.index, outcome))
    }

    fn place_mark(&mut self, index: usize) -> Result<GameOutcome, GameError> {
        if self.outcome().is_terminal() {
            return Err(GameError::GameOver);
        }

        self.board.place(index, self.current_mark)?;
        self.last_move = Some(index);
        log!(
            "{} placed at {}, board {}",
            self.current_mark,
            index,
            self.board
        );

        let outcome = self.outcome();
        match outcome {
            GameOutcome::Ongoing => self.current_mark = self.current_mark.opponent(),
            GameOutcome::Win(mark) => log!("Round over, {} wins", mark),
            GameOutcome::Draw => log!("Round over, draw"),
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(state: &mut TicTacToeGameState, moves: &[usize]) -> GameOutcome {
        let mut outcome = state.outcome();
        for &index in moves {
            outcome = state.apply_human_move(index).unwrap();
        }
        outcome
    }

    #[test]
    fn test_new_round_starts_empty_with_x() {
        let state = TicTacToeGameState::new_round(GameMode::HumanVsHuman);
        assert_eq!(state.board(), &Board::new());
        assert_eq!(state.current_mark(), Mark::X);
        assert_eq!(state.outcome(), GameOutcome::Ongoing);
        assert_eq!(state.last_move(), None);
    }

    #[test]
    fn test_turn_alternates_after_each_move() {
        let mut state = TicTacToeGameState::new_round(GameMode::HumanVsHuman);
        assert_eq!(state.apply_human_move(4), Ok(GameOutcome::Ongoing));
        assert_eq!(state.current_mark(), Mark::O);
        assert_eq!(state.apply_human_move(0), Ok(GameOutcome::Ongoing));
        assert_eq!(state.current_mark(), Mark::X);
        assert_eq!(state.last_move(), Some(0));
    }

    #[test]
    fn test_invalid_move_keeps_turn_and_board() {
        let mut state = TicTacToeGameState::new_round(GameMode::HumanVsHuman);
        state.apply_human_move(4).unwrap();
        let board = state.board().clone();
        assert_eq!(
            state.apply_human_move(4),
            Err(GameError::InvalidMove { index: 4 })
        );
        assert_eq!(
            state.apply_human_move(9),
            Err(GameError::InvalidMove { index: 9 })
        );
        assert_eq!(state.board(), &board);
        assert_eq!(state.current_mark(), Mark::O);
    }

    #[test]
    fn test_win_stops_the_round() {
        let mut state = TicTacToeGameState::new_round(GameMode::HumanVsHuman);
        let outcome = play(&mut state, &[0, 3, 1, 4, 2]);
        assert_eq!(outcome, GameOutcome::Win(Mark::X));
        assert_eq!(state.current_mark(), Mark::X);
        assert_eq!(state.winning_line(), Some([0, 1, 2]));
        assert_eq!(state.apply_human_move(5), Err(GameError::GameOver));
        assert_eq!(state.apply_computer_move(), Err(GameError::GameOver));
    }

    #[test]
    fn test_full_board_is_draw() {
        let mut state = TicTacToeGameState::new_round(GameMode::HumanVsHuman);
        let outcome = play(&mut state, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(outcome, GameOutcome::Draw);
        assert!(state.board().empty_cells().is_empty());
        assert_eq!(state.winning_line(), None);
    }

    #[test]
    fn test_human_cannot_move_for_computer() {
        let mut state = TicTacToeGameState::new_round(GameMode::HumanVsComputer);
        state.apply_human_move(4).unwrap();
        assert!(state.is_computer_turn());
        assert_eq!(state.apply_human_move(0), Err(GameError::NotHumanTurn));
    }

    #[test]
    fn test_computer_replies_with_corner_to_center() {
        let mut state = TicTacToeGameState::new_round(GameMode::HumanVsComputer);
        state.apply_human_move(4).unwrap();
        let (index, outcome) = state.apply_computer_move().unwrap();
        assert!([0, 2, 6, 8].contains(&index));
        assert_eq!(outcome, GameOutcome::Ongoing);
        assert_eq!(state.current_mark(), Mark::X);
        assert!(!state.is_computer_turn());
    }

    #[test]
    fn test_reset_keeps_mode_and_clears_board() {
        let mut state = TicTacToeGameState::new_round(GameMode::HumanVsComputer);
        state.apply_human_move(0).unwrap();
        state.reset();
        assert_eq!(state.mode(), GameMode::HumanVsComputer);
        assert_eq!(state.board(), &Board::new());
        assert_eq!(state.current_mark(), Mark::X);
    }
}
