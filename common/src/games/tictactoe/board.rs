use std::fmt;

use super::types::{COMPUTER_MARK, GameStatus, Mark, PLAYER_MARK, Position, SIZE, WinningLine};
use super::win_detector::{check_win, check_win_with_line};

/// The 3×3 grid. Cheap to copy; the search mutates one instance in place and
/// restores it after every speculative move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Mark; SIZE]; SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cell(&self, row: usize, col: usize) -> Mark {
        self.cells[row][col]
    }

    pub fn is_win(&self, mark: Mark) -> bool {
        check_win(&self.cells, mark)
    }

    pub fn winning_line(&self, mark: Mark) -> Option<WinningLine> {
        check_win_with_line(&self.cells, mark)
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
    }

    pub fn is_valid_move(&self, row: usize, col: usize) -> bool {
        row < SIZE && col < SIZE && self.cells[row][col] == Mark::Empty
    }

    /// Writes `mark` without bounds or occupancy checks beyond indexing.
    #[inline]
    pub fn apply_move(&mut self, row: usize, col: usize, mark: Mark) {
        self.cells[row][col] = mark;
    }

    #[inline]
    pub fn undo_move(&mut self, row: usize, col: usize) {
        self.cells[row][col] = Mark::Empty;
    }

    /// Player win, then computer win, then fullness.
    pub fn terminal_status(&self) -> GameStatus {
        if self.is_win(PLAYER_MARK) {
            GameStatus::PlayerWon
        } else if self.is_win(COMPUTER_MARK) {
            GameStatus::ComputerWon
        } else if self.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// Empty cells in row-major order.
    pub fn available_moves(&self) -> Vec<Position> {
        let mut moves = Vec::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell == Mark::Empty {
                    moves.push(Position::new(row, col));
                }
            }
        }
        moves
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().flatten().filter(|&&cell| cell == mark).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            if row > 0 {
                writeln!(f, "---------")?;
            }
            writeln!(f, "{} | {} | {}", cells[0], cells[1], cells[2])?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Board {
    type Err = String;

    /// Nine cells in row-major order: `X`, `O`, or `.`; whitespace and `|` are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let marks: Vec<Mark> = s
            .chars()
            .filter(|ch| !ch.is_whitespace() && *ch != '|')
            .map(|ch| match ch {
                'X' | 'x' => Ok(Mark::X),
                'O' | 'o' => Ok(Mark::O),
                '.' => Ok(Mark::Empty),
                other => Err(format!("Unexpected board character '{}'", other)),
            })
            .collect::<Result<_, _>>()?;

        if marks.len() != SIZE * SIZE {
            return Err(format!(
                "Board needs {} cells, got {}",
                SIZE * SIZE,
                marks.len()
            ));
        }

        let mut board = Board::new();
        for (index, mark) in marks.into_iter().enumerate() {
            board.apply_move(index / SIZE, index % SIZE, mark);
        }
        Ok(board)
    }
}
