use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

use super::error::GameError;
use super::types::{Cell, Mark};
use super::win_detector::{check_win, check_win_with_line};

pub const BOARD_SIZE: usize = 9;
const ROW_WIDTH: usize = 3;

/// Nine cells in row-major order:
///
/// ```text
/// 0 1 2
/// 3 4 5
/// 6 7 8
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Marks an empty cell. Out-of-range and occupied cells are rejected
    /// with the board left untouched.
    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), GameError> {
        match self.cells.get_mut(index) {
            Some(cell) if cell.is_empty() => {
                *cell = Cell::from(mark);
                Ok(())
            }
            _ => Err(GameError::InvalidMove { index }),
        }
    }

    /// Both marks can only win at once through illegal play; callers stop
    /// the round at the first win so that never happens.
    pub fn is_win(&self, mark: Mark) -> bool {
        check_win(&self.cells, mark)
    }

    pub fn winning_line(&self, mark: Mark) -> Option<[usize; 3]> {
        check_win_with_line(&self.cells, mark)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn is_draw(&self) -> bool {
        self.is_full() && !self.is_win(Mark::X) && !self.is_win(Mark::O)
    }

    /// Empty indices in ascending order. The selector breaks ties on this order.
    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    pub fn count(&self, mark: Mark) -> usize {
        let target = Cell::from(mark);
        self.cells.iter().filter(|&&cell| cell == target).count()
    }

    /// Places `mark` on an empty cell until the returned guard is dropped.
    pub(super) fn hypothetical(&mut self, index: usize, mark: Mark) -> HypotheticalMove<'_> {
        debug_assert!(self.cells[index].is_empty());
        self.cells[index] = Cell::from(mark);
        HypotheticalMove { board: self, index }
    }
}

pub(super) struct HypotheticalMove<'a> {
    board: &'a mut Board,
    index: usize,
}

impl Deref for HypotheticalMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for HypotheticalMove<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for HypotheticalMove<'_> {
    fn drop(&mut self) {
        self.board.cells[self.index] = Cell::Empty;
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, cell) in self.cells.iter().enumerate() {
            if index > 0 && index % ROW_WIDTH == 0 {
                write!(f, "/")?;
            }
            let symbol = match cell {
                Cell::Empty => '.',
                Cell::X => 'X',
                Cell::O => 'O',
            };
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

/// Parses the `Display` layout, e.g. `"XX./O../..."`. Whitespace and `/` are
/// ignored; `.`, `_` and `-` are empty cells.
impl FromStr for Board {
    type Err = GameError;

    fn from_str(layout: &str) -> Result<Self, Self::Err> {
        let mut board = Board::new();
        let mut index = 0;

        for symbol in layout.chars().filter(|c| !c.is_whitespace() && *c != '/') {
            if index >= BOARD_SIZE {
                return Err(GameError::InvalidLayout {
                    reason: format!("more than {} cells", BOARD_SIZE),
                });
            }
            board.cells[index] = match symbol {
                'X' | 'x' => Cell::X,
                'O' | 'o' => Cell::O,
                '.' | '_' | '-' => Cell::Empty,
                other => {
                    return Err(GameError::InvalidLayout {
                        reason: format!("unexpected symbol '{}'", other),
                    });
                }
            };
            index += 1;
        }

        if index != BOARD_SIZE {
            return Err(GameError::InvalidLayout {
                reason: format!("expected {} cells, got {}", BOARD_SIZE, index),
            });
        }

        let x_count = board.count(Mark::X);
        let o_count = board.count(Mark::O);
        if x_count < o_count || x_count - o_count > 1 {
            return Err(GameError::InvalidLayout {
                reason: format!("{} X marks against {} O marks", x_count, o_count),
            });
        }

        Ok(board)
    }
}
