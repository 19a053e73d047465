use std::io::Write;

use tictactoe_common::games::tictactoe::{BOARD_SIZE, Board, Cell, TicTacToeGameState};

use crate::app::ConsoleApp;
use crate::state::Screen;

/// Output side of the shell. The game task only talks to this trait.
pub trait ScreenPresenter {
    fn show_screen(&mut self, app: &ConsoleApp);
    fn show_notice(&mut self, notice: &str);
    fn show_computer_move(&mut self, index: usize);
}

pub struct ConsolePresenter<W: Write> {
    out: W,
}

impl<W: Write> ConsolePresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn write_lines(&mut self, text: &str) {
        let _ = writeln!(self.out, "{}", text);
        let _ = self.out.flush();
    }
}

impl<W: Write> ScreenPresenter for ConsolePresenter<W> {
    fn show_screen(&mut self, app: &ConsoleApp) {
        let text = render_screen(app);
        self.write_lines(&text);
    }

    fn show_notice(&mut self, notice: &str) {
        self.write_lines(&format!("! {}", notice));
    }

    fn show_computer_move(&mut self, index: usize) {
        self.write_lines(&format!("Computer plays {}", index + 1));
    }
}

const WELCOME_TEXT: &str = "TIC TAC TOE\n\nPress Enter to start, q to quit.";
const MODE_SELECTION_TEXT: &str =
    "Choose a mode:\n  1) Play against the computer\n  2) Play against a friend";
const END_PROMPT: &str = "Press Enter to play again, q to quit.";

pub fn render_screen(app: &ConsoleApp) -> String {
    match app.screen() {
        Screen::Welcome => WELCOME_TEXT.to_string(),
        Screen::ModeSelection => MODE_SELECTION_TEXT.to_string(),
        Screen::Game => match app.game() {
            Some(game) if game.is_computer_turn() => {
                let board = render_game_board(game);
                format!("{board}\n\nComputer is thinking...")
            }
            Some(game) => {
                let board = render_game_board(game);
                let mark = game.current_mark();
                format!("{board}\n\n{mark} to move, enter a cell 1-9:")
            }
            None => String::new(),
        },
        Screen::End { message } => {
            let board = app.game().map(render_game_board).unwrap_or_default();
            let line = app
                .game()
                .and_then(TicTacToeGameState::winning_line)
                .map(render_winning_line)
                .unwrap_or_default();
            format!("{board}\n{line}\n{message}\n\n{END_PROMPT}")
        }
    }
}

/// The board followed by the cell the previous move went to, if any.
fn render_game_board(game: &TicTacToeGameState) -> String {
    let board = render_board(game.board());
    match game.last_move() {
        Some(index) => format!("{board}\n\nLast move: cell {}", index + 1),
        None => board,
    }
}

fn render_winning_line([a, b, c]: [usize; 3]) -> String {
    format!("\nWinning line: {}-{}-{}", a + 1, b + 1, c + 1)
}

/// Empty cells show the number to type for them.
pub fn render_board(board: &Board) -> String {
    let symbols: Vec<String> = (0..BOARD_SIZE)
        .map(|index| match board.get(index) {
            Some(Cell::X) => "X".to_string(),
            Some(Cell::O) => "O".to_string(),
            _ => (index + 1).to_string(),
        })
        .collect();

    symbols
        .chunks(3)
        .map(|row| format!(" {} | {} | {}", row[0], row[1], row[2]))
        .collect::<Vec<_>>()
        .join("\n---+---+---\n")
}
