use super::board::ChessBoard;
use super::r#move::ChessMove;
use crate::core::{MoveStep, Piece, PieceKind, PlayerId, Position, BOARD_SIZE};

/// 合法手生成 (自殺手を排除)
pub fn legal_moves(board: &ChessBoard, player: PlayerId) -> Vec<ChessMove> {
    pseudo_legal_moves(board, player)
        .into_iter()
        .filter(|mv| {
            let (next, _) = apply_move(board, mv);
            !is_in_check(&next, player)
        })
        .collect()
}

/// 疑似合法手生成 (王手放置は考慮しない)
///
/// row-major 走査 + 駒ごとの固定方向順なので出力順は決定的。
/// 王手放置の除外は呼び出し側の責務 (機動力計算と王手判定が
/// 無限再帰せずこの関数を共有できるようにするため)。
pub fn pseudo_legal_moves(board: &ChessBoard, player: PlayerId) -> Vec<ChessMove> {
    let mut moves = Vec::new();
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let from = Position::new(row, col);
            if let Some(piece) = board.piece_at(from) {
                if piece.owner == player {
                    piece_moves(board, from, piece, &mut moves);
                }
            }
        }
    }
    moves
}

fn piece_moves(board: &ChessBoard, from: Position, piece: Piece, moves: &mut Vec<ChessMove>) {
    if piece.kind == PieceKind::Pawn {
        pawn_moves(board, from, piece, moves);
        return;
    }

    for step in piece.movement_rules() {
        match step {
            MoveStep::Step(dr, dc) => {
                if let Some(to) = from.offset(dr, dc) {
                    match board.piece_at(to) {
                        Some(target) if target.owner != piece.owner => {
                            moves.push(ChessMove::new(from, to));
                        }
                        Some(_) => {}
                        None => moves.push(ChessMove::new(from, to)),
                    }
                }
            }
            MoveStep::Slide(dr, dc) => {
                let mut curr = from;
                while let Some(to) = curr.offset(dr, dc) {
                    if let Some(target) = board.piece_at(to) {
                        if target.owner != piece.owner {
                            moves.push(ChessMove::new(from, to));
                        }
                        break;
                    }
                    moves.push(ChessMove::new(from, to));
                    curr = to;
                }
            }
        }
    }
}

/// Pawn は移動と取りが非対称 (前進は空きマスのみ、取りは斜めのみ)
fn pawn_moves(board: &ChessBoard, from: Position, piece: Piece, moves: &mut Vec<ChessMove>) {
    let forward: i32 = if piece.owner == PlayerId::Human { -1 } else { 1 };
    let start_row = if piece.owner == PlayerId::Human { 6 } else { 1 };

    // 前進1マス、初期位置からは間が空いていれば2マス
    if let Some(to) = from.offset(forward, 0) {
        if board.is_empty_at(to) {
            moves.push(ChessMove::new(from, to));
            if from.row == start_row {
                if let Some(to2) = from.offset(forward * 2, 0) {
                    if board.is_empty_at(to2) {
                        moves.push(ChessMove::new(from, to2));
                    }
                }
            }
        }
    }

    // 斜め取り (敵駒がいる場合のみ)
    for dc in [-1, 1] {
        if let Some(to) = from.offset(forward, dc) {
            if let Some(target) = board.piece_at(to) {
                if target.owner != piece.owner {
                    moves.push(ChessMove::new(from, to));
                }
            }
        }
    }
}

/// 移動適用。新しい盤面と取った駒を返し、元の盤面には触れない
pub fn apply_move(board: &ChessBoard, mv: &ChessMove) -> (ChessBoard, Option<Piece>) {
    let mut next = board.clone();
    let mut captured = None;
    if let Some(piece) = next.take(mv.from) {
        captured = next.take(mv.to);
        next.set(mv.to, Some(piece));
    }
    (next, captured)
}

/// 王が取られる状態か判定
///
/// 相手の「疑似合法手」の行き先に自王のマスが含まれるかで見る。
pub fn is_in_check(board: &ChessBoard, player: PlayerId) -> bool {
    let king_pos = match board.find_king(player) {
        Some(pos) => pos,
        // 王がいない盤面は正常な遷移では現れない
        None => return false,
    };

    pseudo_legal_moves(board, player.opponent())
        .iter()
        .any(|mv| mv.to == king_pos)
}

/// 詰み判定: 王手が掛かっていて、どの手でも王手を解消できない
pub fn is_checkmate(board: &ChessBoard, player: PlayerId) -> bool {
    is_in_check(board, player) && legal_moves(board, player).is_empty()
}
