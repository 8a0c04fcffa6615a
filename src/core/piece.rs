use super::types::PlayerId;
use serde::{Deserialize, Serialize};

/// 駒の種類 (チェス)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

/// 移動の特性
#[derive(Debug, Clone, Copy)]
pub enum MoveStep {
    Step(i32, i32),  // 指定した相対座標へ1マス移動
    Slide(i32, i32), // 指定した方向へ障害物があるまで移動
}

/// 駒の定義
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub owner: PlayerId,
}

impl Piece {
    pub fn new(kind: PieceKind, owner: PlayerId) -> Self {
        Piece { kind, owner }
    }

    /// その駒が本来持っている「動きの定義」を返す
    ///
    /// Pawn は移動と取りが非対称なため空を返し、合法手生成側で特殊処理する。
    pub fn movement_rules(&self) -> Vec<MoveStep> {
        match self.kind {
            PieceKind::Rook => vec![
                MoveStep::Slide(0, 1),
                MoveStep::Slide(0, -1),
                MoveStep::Slide(1, 0),
                MoveStep::Slide(-1, 0),
            ],
            PieceKind::Bishop => vec![
                MoveStep::Slide(1, 1),
                MoveStep::Slide(1, -1),
                MoveStep::Slide(-1, 1),
                MoveStep::Slide(-1, -1),
            ],
            PieceKind::Queen => vec![
                MoveStep::Slide(0, 1),
                MoveStep::Slide(0, -1),
                MoveStep::Slide(1, 0),
                MoveStep::Slide(-1, 0),
                MoveStep::Slide(1, 1),
                MoveStep::Slide(1, -1),
                MoveStep::Slide(-1, 1),
                MoveStep::Slide(-1, -1),
            ],
            PieceKind::Knight => vec![
                MoveStep::Step(-2, -1),
                MoveStep::Step(-2, 1),
                MoveStep::Step(-1, -2),
                MoveStep::Step(-1, 2),
                MoveStep::Step(1, -2),
                MoveStep::Step(1, 2),
                MoveStep::Step(2, -1),
                MoveStep::Step(2, 1),
            ],
            PieceKind::King => vec![
                MoveStep::Step(-1, -1),
                MoveStep::Step(-1, 0),
                MoveStep::Step(-1, 1),
                MoveStep::Step(0, -1),
                MoveStep::Step(0, 1),
                MoveStep::Step(1, -1),
                MoveStep::Step(1, 0),
                MoveStep::Step(1, 1),
            ],
            PieceKind::Pawn => vec![],
        }
    }

    pub fn symbol(&self) -> char {
        match (self.owner, self.kind) {
            (PlayerId::Human, PieceKind::King) => '♔',
            (PlayerId::Human, PieceKind::Queen) => '♕',
            (PlayerId::Human, PieceKind::Rook) => '♖',
            (PlayerId::Human, PieceKind::Bishop) => '♗',
            (PlayerId::Human, PieceKind::Knight) => '♘',
            (PlayerId::Human, PieceKind::Pawn) => '♙',
            (PlayerId::Ai, PieceKind::King) => '♚',
            (PlayerId::Ai, PieceKind::Queen) => '♛',
            (PlayerId::Ai, PieceKind::Rook) => '♜',
            (PlayerId::Ai, PieceKind::Bishop) => '♝',
            (PlayerId::Ai, PieceKind::Pawn) => '♟',
            (PlayerId::Ai, PieceKind::Knight) => '♞',
        }
    }
}
