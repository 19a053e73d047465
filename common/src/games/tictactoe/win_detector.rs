use super::board::BOARD_SIZE;
use super::types::{Cell, Mark};

/// Rows, columns and the two diagonals of the row-major 3x3 grid.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win(cells: &[Cell; BOARD_SIZE], mark: Mark) -> bool {
    check_win_with_line(cells, mark).is_some()
}

/// First line, in `WINNING_LINES` order, fully occupied by `mark`.
pub fn check_win_with_line(cells: &[Cell; BOARD_SIZE], mark: Mark) -> Option<[usize; 3]> {
    let target = Cell::from(mark);
    WINNING_LINES
        .iter()
        .copied()
        .find(|line| line.iter().all(|&index| cells[index] == target))
}
