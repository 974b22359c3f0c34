use crate::log;
use super::board::Board;
use super::bot_controller::{BotMove, calculate_move};
use super::search::SearchSettings;
use super::types::{GameStatus, MoveError, Position, SIZE, Side};

/// One game between the human (`X`) and the computer (`O`).
#[derive(Debug)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub current_player: Side,
    pub status: GameStatus,
    pub last_move: Option<Position>,
}

impl TicTacToeGameState {
    pub fn new(first_player: Side) -> Self {
        Self {
            board: Board::new(),
            current_player: first_player,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    pub fn place_player_mark(&mut self, position: Position) -> Result<(), MoveError> {
        self.place_mark(Side::Human, position)
    }

    /// Runs the search and applies its move for the computer.
    pub fn play_computer_move(&mut self, settings: &SearchSettings) -> Result<BotMove, MoveError> {
        self.check_turn(Side::Computer)?;
        let bot_move = calculate_move(&self.board, settings).ok_or(MoveError::GameOver)?;
        self.place_mark(Side::Computer, bot_move.position)?;
        Ok(bot_move)
    }

    fn check_turn(&self, side: Side) -> Result<(), MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }
        if side != self.current_player {
            return Err(MoveError::NotYourTurn);
        }
        Ok(())
    }

    fn place_mark(&mut self, side: Side, position: Position) -> Result<(), MoveError> {
        self.check_turn(side)?;

        let Position { row, col } = position;
        if row >= SIZE || col >= SIZE {
            return Err(MoveError::OutOfBounds(position));
        }
        if !self.board.is_valid_move(row, col) {
            return Err(MoveError::CellOccupied(position));
        }

        self.board.apply_move(row, col, side.mark());
        self.last_move = Some(position);
        self.status = self.board.terminal_status();

        if self.status.is_over() {
            self.log_result();
        } else {
            self.current_player = side.other();
        }

        Ok(())
    }

    fn log_result(&self) {
        log!("{}", self.result_summary());
    }

    /// One-line description of a finished game: the outcome, the deciding move
    /// and, for a win, the completed line.
    pub fn result_summary(&self) -> String {
        let mut summary = format!("Game over: {:?}", self.status);
        if let Some(position) = self.last_move {
            summary.push_str(&format!(" after {}", position));
        }
        let line = match self.status {
            GameStatus::PlayerWon => self.board.winning_line(Side::Human.mark()),
            GameStatus::ComputerWon => self.board.winning_line(Side::Computer.mark()),
            _ => None,
        };
        if let Some(line) = line {
            summary.push_str(&format!(
                ", {} line from {} to {}",
                line.mark, line.start, line.end
            ));
        }
        summary
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }
}
