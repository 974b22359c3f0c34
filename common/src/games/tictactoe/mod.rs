mod board;
mod bot_controller;
mod game_state;
mod search;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{BotMove, calculate_move};
pub use game_state::TicTacToeGameState;
pub use search::{Search, SearchSettings, SearchStats};
pub use types::*;
pub use win_detector::{LINES, check_win, check_win_with_line};
