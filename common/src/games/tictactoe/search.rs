use super::board::Board;
use super::types::{
    COMPUTER_MARK, DRAW_SCORE, LOSS_SCORE, Mark, PLAYER_MARK, Position, SIZE, SearchResult,
    WIN_SCORE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchSettings {
    /// Alpha-beta cutoffs. Turning them off changes node counts only.
    pub pruning: bool,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self { pruning: true }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub cutoffs: u64,
}

/// Exhaustive minimax over a borrowed board.
///
/// The computer (`O`) is always the maximizing side. Every speculative move is
/// undone before the frame returns, so the board is unchanged afterwards.
pub struct Search<'a> {
    board: &'a mut Board,
    pruning: bool,
    stats: SearchStats,
}

impl<'a> Search<'a> {
    pub fn new(board: &'a mut Board, settings: SearchSettings) -> Self {
        Self {
            board,
            pruning: settings.pruning,
            stats: SearchStats::default(),
        }
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Root call for the computer's move: maximizing with an unbounded window.
    pub fn best_move(&mut self) -> SearchResult {
        self.search(true, i32::MIN, i32::MAX)
    }

    pub fn search(&mut self, maximizing: bool, mut alpha: i32, mut beta: i32) -> SearchResult {
        self.stats.nodes += 1;

        if self.board.is_win(PLAYER_MARK) {
            return SearchResult::leaf(LOSS_SCORE);
        }
        if self.board.is_win(COMPUTER_MARK) {
            return SearchResult::leaf(WIN_SCORE);
        }
        if self.board.is_full() {
            return SearchResult::leaf(DRAW_SCORE);
        }

        let mark = if maximizing { COMPUTER_MARK } else { PLAYER_MARK };
        let mut best = SearchResult {
            score: if maximizing { i32::MIN } else { i32::MAX },
            best_move: None,
        };

        'scan: for row in 0..SIZE {
            for col in 0..SIZE {
                if self.board.cell(row, col) != Mark::Empty {
                    continue;
                }

                self.board.apply_move(row, col, mark);

                // A finishing move for the computer cannot be improved on.
                if self.board.is_win(COMPUTER_MARK) {
                    self.board.undo_move(row, col);
                    return SearchResult {
                        score: WIN_SCORE,
                        best_move: Some(Position::new(row, col)),
                    };
                }

                let score = self.search(!maximizing, alpha, beta).score;
                self.board.undo_move(row, col);

                if maximizing {
                    if score > best.score {
                        best.score = score;
                        best.best_move = Some(Position::new(row, col));
                    }
                    alpha = alpha.max(score);
                } else {
                    if score < best.score {
                        best.score = score;
                        best.best_move = Some(Position::new(row, col));
                    }
                    beta = beta.min(score);
                }

                if self.pruning && beta <= alpha {
                    self.stats.cutoffs += 1;
                    break 'scan;
                }
            }
        }

        best
    }
}
