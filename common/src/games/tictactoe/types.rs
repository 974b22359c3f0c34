use std::fmt;

pub const SIZE: usize = 3;
pub const PLAYER_MARK: Mark = Mark::X;
pub const COMPUTER_MARK: Mark = Mark::O;

pub const WIN_SCORE: i32 = 10;
pub const LOSS_SCORE: i32 = -10;
pub const DRAW_SCORE: i32 = 0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn symbol(&self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Who is sitting at the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Human,
    Computer,
}

impl Side {
    pub fn mark(&self) -> Mark {
        match self {
            Side::Human => PLAYER_MARK,
            Side::Computer => COMPUTER_MARK,
        }
    }

    pub fn other(&self) -> Side {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    PlayerWon,
    ComputerWon,
    Draw,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        *self != GameStatus::InProgress
    }
}

/// Zero-indexed cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Converts console coordinates (1..=3) to a position; `None` when out of range.
    pub fn from_one_based(row: i64, col: i64) -> Option<Self> {
        let range = 1..=SIZE as i64;
        if range.contains(&row) && range.contains(&col) {
            Some(Self::new(row as usize - 1, col as usize - 1))
        } else {
            None
        }
    }
}

impl fmt::Display for Position {
    /// One-indexed, as shown to the player.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row + 1, self.col + 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub start: Position,
    pub end: Position,
}

impl WinningLine {
    pub fn new(mark: Mark, start: Position, end: Position) -> Self {
        Self { mark, start, end }
    }
}

/// Outcome of a search frame. `best_move` is `None` for leaf evaluations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub score: i32,
    pub best_move: Option<Position>,
}

impl SearchResult {
    pub fn leaf(score: i32) -> Self {
        Self {
            score,
            best_move: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    GameOver,
    NotYourTurn,
    OutOfBounds(Position),
    CellOccupied(Position),
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::GameOver => write!(f, "Game is already over"),
            MoveError::NotYourTurn => write!(f, "Not your turn"),
            MoveError::OutOfBounds(pos) => write!(f, "Position {} is out of bounds", pos),
            MoveError::CellOccupied(pos) => write!(f, "Cell {} is already marked", pos),
        }
    }
}

impl std::error::Error for MoveError {}
