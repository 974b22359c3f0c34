use crate::log;
use super::board::Board;
use super::search::{Search, SearchSettings, SearchStats};
use super::types::{COMPUTER_MARK, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotMove {
    pub position: Position,
    pub score: i32,
    pub stats: SearchStats,
}

/// Picks the computer's reply for `board`, or `None` if the game is already decided.
///
/// The search runs on a scratch copy, so `board` is only read.
pub fn calculate_move(board: &Board, settings: &SearchSettings) -> Option<BotMove> {
    if board.terminal_status().is_over() {
        return None;
    }

    let mut scratch = *board;
    let mut search = Search::new(&mut scratch, *settings);
    let result = search.best_move();
    let stats = search.stats();

    let position = result.best_move?;
    log!(
        "Search picked {} for {} with score {} ({} nodes, {} cutoffs, pruning {})",
        position,
        COMPUTER_MARK,
        result.score,
        stats.nodes,
        stats.cutoffs,
        if settings.pruning { "on" } else { "off" }
    );

    Some(BotMove {
        position,
        score: result.score,
        stats,
    })
}
