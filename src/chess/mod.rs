pub mod board;
pub mod eval;
pub mod logic;
pub mod r#move;

pub use board::ChessBoard;
pub use r#move::ChessMove;

use crate::ai::GameRules;
use crate::core::{PieceKind, PlayerId};

/// 難易度として選べる探索深さ
pub const DEPTH_CHOICES: [u8; 4] = [2, 3, 4, 5];

/// 取られた駒の一覧 (盤面との差分から導出、価値の高い順)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedPieces {
    /// Human が取った AI 側の駒
    pub by_human: Vec<PieceKind>,
    /// AI が取った Human 側の駒
    pub by_ai: Vec<PieceKind>,
}

/// チェス用の GameRules 実装
///
/// 候補手は疑似合法手。王手放置の除外は探索側が各枝で遅延適用する。
#[derive(Debug, Clone, Copy, Default)]
pub struct ChessRules;

impl GameRules for ChessRules {
    type Board = ChessBoard;
    type Move = ChessMove;
    type Tally = CapturedPieces;

    fn initial_board(&self) -> ChessBoard {
        ChessBoard::initial()
    }

    fn candidate_moves(&self, board: &ChessBoard, player: PlayerId) -> Vec<ChessMove> {
        logic::pseudo_legal_moves(board, player)
    }

    fn apply(&self, board: &ChessBoard, mv: &ChessMove, _player: PlayerId) -> ChessBoard {
        logic::apply_move(board, mv).0
    }

    fn evaluate(&self, board: &ChessBoard) -> i32 {
        eval::evaluate(board)
    }

    fn leaves_self_exposed(&self, board: &ChessBoard, mover: PlayerId) -> bool {
        logic::is_in_check(board, mover)
    }

    fn is_mated(&self, board: &ChessBoard, player: PlayerId) -> bool {
        logic::is_checkmate(board, player)
    }

    fn in_check(&self, board: &ChessBoard, player: PlayerId) -> bool {
        logic::is_in_check(board, player)
    }

    fn depth_choices(&self) -> &'static [u8] {
        &DEPTH_CHOICES
    }

    fn tally(&self, board: &ChessBoard) -> CapturedPieces {
        // 初期配置との差分が取られた駒。王は取られる前に終局する
        const INITIAL_COUNTS: [(PieceKind, usize); 5] = [
            (PieceKind::Queen, 1),
            (PieceKind::Rook, 2),
            (PieceKind::Bishop, 2),
            (PieceKind::Knight, 2),
            (PieceKind::Pawn, 8),
        ];

        let mut tally = CapturedPieces::default();
        for (kind, initial) in INITIAL_COUNTS {
            for _ in board.count(kind, PlayerId::Ai)..initial {
                tally.by_human.push(kind);
            }
            for _ in board.count(kind, PlayerId::Human)..initial {
                tally.by_ai.push(kind);
            }
        }
        tally
    }
}
