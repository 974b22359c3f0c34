use std::io::{BufRead, Write};

use common::games::tictactoe::{GameStatus, Position, SearchSettings, Side, TicTacToeGameState};
use common::log;

use crate::config::FirstPlayerMode;
use crate::input::{ConsoleError, TokenReader};

const FIRST_PLAYER_PROMPT: &str = "Would you like to play first? (yes/no): ";
const MOVE_PROMPT: &str = "Enter your move (row and column between 1 and 3): ";
const INVALID_MOVE: &str = "Invalid move. Please enter valid row and column.";

/// Line-oriented game session between a console user and the search engine.
pub struct ConsoleSession<R: BufRead, W: Write> {
    input: TokenReader<R>,
    output: W,
    first_player: FirstPlayerMode,
}

impl<R: BufRead, W: Write> ConsoleSession<R, W> {
    pub fn new(input: R, output: W, first_player: FirstPlayerMode) -> Self {
        Self {
            input: TokenReader::new(input),
            output,
            first_player,
        }
    }

    /// Plays one game to completion and returns how it ended.
    pub fn run(&mut self) -> Result<GameStatus, ConsoleError> {
        let first = match self.first_player {
            FirstPlayerMode::Ask => self.ask_first_player()?,
            FirstPlayerMode::Human => Side::Human,
            FirstPlayerMode::Computer => Side::Computer,
        };
        log!("New game, {:?} moves first", first);

        let mut state = TicTacToeGameState::new(first);
        while !state.is_over() {
            match state.current_player {
                Side::Human => self.player_turn(&mut state)?,
                Side::Computer => self.computer_turn(&mut state)?,
            }
        }

        self.announce(state.status)?;
        Ok(state.status)
    }

    fn ask_first_player(&mut self) -> Result<Side, ConsoleError> {
        write!(self.output, "{}", FIRST_PLAYER_PROMPT)?;
        self.output.flush()?;
        let answer = self.input.next_token()?;
        Ok(if answer.eq_ignore_ascii_case("yes") {
            Side::Human
        } else {
            Side::Computer
        })
    }

    fn player_turn(&mut self, state: &mut TicTacToeGameState) -> Result<(), ConsoleError> {
        loop {
            write!(self.output, "{}", MOVE_PROMPT)?;
            self.output.flush()?;
            let row = self.input.next_i64()?;
            let col = self.input.next_i64()?;

            let placed = Position::from_one_based(row, col)
                .map(|position| state.place_player_mark(position));
            match placed {
                Some(Ok(())) => break,
                Some(Err(err)) => log!("Rejected move ({}, {}): {}", row, col, err),
                None => log!("Rejected move ({}, {}): out of range", row, col),
            }
            writeln!(self.output, "{}", INVALID_MOVE)?;
        }

        self.print_board(state)
    }

    fn computer_turn(&mut self, state: &mut TicTacToeGameState) -> Result<(), ConsoleError> {
        // Real games always search with pruning.
        let bot_move = state.play_computer_move(&SearchSettings::default())?;
        writeln!(self.output, "Computer chose: {}", bot_move.position)?;
        self.print_board(state)
    }

    fn print_board(&mut self, state: &TicTacToeGameState) -> Result<(), ConsoleError> {
        writeln!(self.output, "{}", state.board)?;
        Ok(())
    }

    fn announce(&mut self, status: GameStatus) -> Result<(), ConsoleError> {
        let message = match status {
            GameStatus::PlayerWon => "Congratulations, you win!",
            GameStatus::ComputerWon => "Computer wins!",
            GameStatus::Draw => "It's a draw!",
            GameStatus::InProgress => return Ok(()),
        };
        writeln!(self.output, "{}", message)?;
        self.output.flush()?;
        Ok(())
    }
}
