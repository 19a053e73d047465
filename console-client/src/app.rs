use tictactoe_common::games::tictactoe::{GameError, GameMode, GameOutcome, TicTacToeGameState};
use tictactoe_common::log;

use crate::state::Screen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Continue,
    ComputerTurn,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub action: AppAction,
    pub notice: Option<String>,
}

impl Step {
    fn proceed() -> Self {
        Self {
            action: AppAction::Continue,
            notice: None,
        }
    }

    fn computer_turn() -> Self {
        Self {
            action: AppAction::ComputerTurn,
            notice: None,
        }
    }

    fn quit() -> Self {
        Self {
            action: AppAction::Quit,
            notice: None,
        }
    }

    fn notice(message: impl Into<String>) -> Self {
        Self {
            action: AppAction::Continue,
            notice: Some(message.into()),
        }
    }
}

/// Screen flow around a `TicTacToeGameState`. Input is one trimmed line per call.
pub struct ConsoleApp {
    screen: Screen,
    game: Option<TicTacToeGameState>,
    preselected_mode: Option<GameMode>,
}

impl ConsoleApp {
    pub fn new(preselected_mode: Option<GameMode>) -> Self {
        Self {
            screen: Screen::Welcome,
            game: None,
            preselected_mode,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn game(&self) -> Option<&TicTacToeGameState> {
        self.game.as_ref()
    }

    pub fn handle_input(&mut self, input: &str) -> Step {
        let input = input.trim();
        if matches!(input, "q" | "quit" | "exit") {
            return Step::quit();
        }

        match self.screen {
            Screen::Welcome => self.handle_welcome(input),
            Screen::ModeSelection => self.handle_mode_selection(input),
            Screen::Game => self.handle_game_input(input),
            Screen::End { .. } => self.handle_end(input),
        }
    }

    pub fn play_computer_turn(&mut self) -> Result<usize, GameError> {
        let game = self.game.as_mut().ok_or(GameError::GameOver)?;
        let (index, outcome) = game.apply_computer_move()?;
        if outcome.is_terminal() {
            self.finish(outcome);
        }
        Ok(index)
    }

    fn handle_welcome(&mut self, input: &str) -> Step {
        if !matches!(input, "" | "s" | "start") {
            return Step::notice("Press Enter to start");
        }
        self.leave_to_mode_selection();
        Step::proceed()
    }

    fn handle_mode_selection(&mut self, input: &str) -> Step {
        let mode = match parse_mode(input) {
            Some(mode) => mode,
            None => return Step::notice("Choose 1 (computer) or 2 (friend)"),
        };
        self.start_round(mode);
        Step::proceed()
    }

    fn handle_game_input(&mut self, input: &str) -> Step {
        let Some(game) = self.game.as_mut() else {
            self.screen = Screen::ModeSelection;
            return Step::proceed();
        };

        let Some(index) = parse_cell(input) else {
            log!("Rejected input '{}'", input);
            return Step::notice("Enter a cell number from 1 to 9");
        };

        match game.apply_human_move(index) {
            Ok(outcome) if outcome.is_terminal() => {
                self.finish(outcome);
                Step::proceed()
            }
            Ok(_) if game.is_computer_turn() => Step::computer_turn(),
            Ok(_) => Step::proceed(),
            Err(GameError::InvalidMove { .. }) => {
                Step::notice(format!("Cell {} is already taken", index + 1))
            }
            Err(GameError::NotHumanTurn) => Step::notice("Wait for the computer's move"),
            Err(e) => Step::notice(e.to_string()),
        }
    }

    fn handle_end(&mut self, input: &str) -> Step {
        if !matches!(input, "" | "r" | "restart") {
            return Step::notice("Press Enter to play again");
        }
        self.game = None;
        self.leave_to_mode_selection();
        Step::proceed()
    }

    fn leave_to_mode_selection(&mut self) {
        match self.preselected_mode {
            Some(mode) => self.start_round(mode),
            None => self.screen = Screen::ModeSelection,
        }
    }

    fn start_round(&mut self, mode: GameMode) {
        self.game = Some(TicTacToeGameState::new_round(mode));
        self.screen = Screen::Game;
    }

    fn finish(&mut self, outcome: GameOutcome) {
        if let Some(message) = end_message(outcome) {
            self.screen = Screen::End { message };
        }
    }
}

fn parse_mode(input: &str) -> Option<GameMode> {
    match input {
        "1" => Some(GameMode::HumanVsComputer),
        "2" => Some(GameMode::HumanVsHuman),
        _ => None,
    }
}

/// Cells are typed 1-9; the board uses 0-8.
fn parse_cell(input: &str) -> Option<usize> {
    match input.parse::<usize>() {
        Ok(cell @ 1..=9) => Some(cell - 1),
        _ => None,
    }
}

fn end_message(outcome: GameOutcome) -> Option<String> {
    match outcome {
        GameOutcome::Win(mark) => Some(format!("{}'s Wins!", mark)),
        GameOutcome::Draw => Some("Draw!".to_string()),
        GameOutcome::Ongoing => None,
    }
}
