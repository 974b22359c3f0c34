use super::types::{Mark, Position, SIZE, WinningLine};

type Line = [(usize, usize); SIZE];

/// Rows, then columns, then the two diagonals.
pub const LINES: [Line; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

#[inline]
fn is_line_of(cells: &[[Mark; SIZE]; SIZE], line: &Line, mark: Mark) -> bool {
    line.iter().all(|&(row, col)| cells[row][col] == mark)
}

pub fn check_win(cells: &[[Mark; SIZE]; SIZE], mark: Mark) -> bool {
    LINES.iter().any(|line| is_line_of(cells, line, mark))
}

pub fn check_win_with_line(cells: &[[Mark; SIZE]; SIZE], mark: Mark) -> Option<WinningLine> {
    LINES
        .iter()
        .find(|line| is_line_of(cells, line, mark))
        .map(|line| {
            let (start_row, start_col) = line[0];
            let (end_row, end_col) = line[SIZE - 1];
            WinningLine::new(
                mark,
                Position::new(start_row, start_col),
                Position::new(end_row, end_col),
            )
        })
}
