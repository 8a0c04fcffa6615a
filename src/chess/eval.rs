//! # Chess Evaluation
//!
//! Static evaluation of a board from the AI's perspective
//! (positive = AI advantage, negative = human advantage).
//!
//! ## Scoring Strategy
//! The score is composed of:
//! 1. **Material**: fixed per-kind values.
//! 2. **Pawn advancement**: bonus per row travelled toward the promotion rank.
//! 3. **Centre control**: fixed bonus for occupying one of the 4 centre squares.
//! 4. **Mobility**: pseudo-legal move count difference. Deliberately unfiltered,
//!    so it may count moves that would leave the own king in check - a cheap
//!    approximation the search tolerates.

use super::board::ChessBoard;
use super::logic::pseudo_legal_moves;
use crate::core::{PieceKind, PlayerId, Position, BOARD_SIZE};

// Material values (centipawns)
const VAL_PAWN: i32 = 100;
const VAL_KNIGHT: i32 = 320;
const VAL_BISHOP: i32 = 330;
const VAL_ROOK: i32 = 500;
const VAL_QUEEN: i32 = 900;
/// King value dominates any material swing but stays finite to allow pruning.
const VAL_KING: i32 = 20000;

const PAWN_ADVANCE_BONUS: i32 = 10;
const CENTER_BONUS: i32 = 30;
const MOBILITY_WEIGHT: i32 = 10;

/// Returns the static material value of a piece kind.
pub fn piece_val(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => VAL_PAWN,
        PieceKind::Knight => VAL_KNIGHT,
        PieceKind::Bishop => VAL_BISHOP,
        PieceKind::Rook => VAL_ROOK,
        PieceKind::Queen => VAL_QUEEN,
        PieceKind::King => VAL_KING,
    }
}

/// AI視点の静的評価
pub fn evaluate(board: &ChessBoard) -> i32 {
    let mut score = 0;

    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let piece = match board.piece_at(Position::new(row, col)) {
                Some(piece) => piece,
                None => continue,
            };

            let mut val = piece_val(piece.kind);

            // 歩の前進ボーナス (初期行からの前進量に比例)
            if piece.kind == PieceKind::Pawn {
                let advance = match piece.owner {
                    PlayerId::Ai => row as i32 - 1,
                    PlayerId::Human => 6 - row as i32,
                };
                val += advance * PAWN_ADVANCE_BONUS;
            }

            // 中央4マスの支配
            if (row == 3 || row == 4) && (col == 3 || col == 4) {
                val += CENTER_BONUS;
            }

            if piece.owner == PlayerId::Ai {
                score += val;
            } else {
                score -= val;
            }
        }
    }

    // 機動力 (疑似合法手の数の差)
    let ai_moves = pseudo_legal_moves(board, PlayerId::Ai).len() as i32;
    let human_moves = pseudo_legal_moves(board, PlayerId::Human).len() as i32;
    score + (ai_moves - human_moves) * MOBILITY_WEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Piece;

    #[test]
    fn test_piece_values() {
        // Verify relative values
        assert!(piece_val(PieceKind::Queen) > piece_val(PieceKind::Rook));
        assert!(piece_val(PieceKind::Rook) > piece_val(PieceKind::Bishop));
        assert!(piece_val(PieceKind::Bishop) > piece_val(PieceKind::Knight));
        assert!(piece_val(PieceKind::Knight) > piece_val(PieceKind::Pawn));
        assert!(piece_val(PieceKind::King) > 10 * piece_val(PieceKind::Queen));
    }

    #[test]
    fn test_initial_position_is_balanced() {
        assert_eq!(evaluate(&ChessBoard::initial()), 0);
    }

    #[test]
    fn test_material_advantage() {
        let mut board = ChessBoard::initial();
        // Human のクイーンを剥がすと AI 有利に振れる
        board.set(Position::new(7, 3), None);
        assert!(evaluate(&board) > 0);
    }

    #[test]
    fn test_pawn_advance_bonus() {
        let mut near = ChessBoard::empty();
        near.set(
            Position::new(7, 0),
            Some(Piece::new(PieceKind::King, PlayerId::Human)),
        );
        near.set(
            Position::new(0, 7),
            Some(Piece::new(PieceKind::King, PlayerId::Ai)),
        );
        let mut far = near.clone();

        // 同じ AI ポーンでも進んでいる方が高評価
        near.set(
            Position::new(6, 3),
            Some(Piece::new(PieceKind::Pawn, PlayerId::Ai)),
        );
        far.set(
            Position::new(2, 3),
            Some(Piece::new(PieceKind::Pawn, PlayerId::Ai)),
        );
        assert!(evaluate(&near) > evaluate(&far));
    }
}
