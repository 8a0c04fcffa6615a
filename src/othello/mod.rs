pub mod board;
pub mod eval;
pub mod logic;

pub use board::{DiscTally, OthelloBoard};

use crate::ai::GameRules;
use crate::core::{PlayerId, Position};
use std::cmp::Ordering;

/// 難易度として選べる探索深さ
pub const DEPTH_CHOICES: [u8; 4] = [2, 4, 6, 8];

/// オセロ用の GameRules 実装
///
/// 着手は置くマスの座標そのもの。返る石は適用時に導出される。
#[derive(Debug, Clone, Copy, Default)]
pub struct OthelloRules;

impl GameRules for OthelloRules {
    type Board = OthelloBoard;
    type Move = Position;
    type Tally = DiscTally;

    fn initial_board(&self) -> OthelloBoard {
        OthelloBoard::initial()
    }

    fn candidate_moves(&self, board: &OthelloBoard, player: PlayerId) -> Vec<Position> {
        logic::legal_moves(board, player)
    }

    fn apply(&self, board: &OthelloBoard, mv: &Position, player: PlayerId) -> OthelloBoard {
        logic::apply_move(board, *mv, player)
    }

    fn evaluate(&self, board: &OthelloBoard) -> i32 {
        eval::evaluate(board)
    }

    fn no_move_score(&self, board: &OthelloBoard) -> i32 {
        // 手番なしの局面も静的評価する (チェスと違い 0 固定ではない)
        eval::evaluate(board)
    }

    fn allows_pass(&self) -> bool {
        true
    }

    fn final_winner(&self, board: &OthelloBoard) -> Option<PlayerId> {
        let tally = board.tally();
        match tally.human.cmp(&tally.ai) {
            Ordering::Greater => Some(PlayerId::Human),
            Ordering::Less => Some(PlayerId::Ai),
            Ordering::Equal => None,
        }
    }

    fn depth_choices(&self) -> &'static [u8] {
        &DEPTH_CHOICES
    }

    fn tally(&self, board: &OthelloBoard) -> DiscTally {
        board.tally()
    }
}
