use crate::core::{Piece, PieceKind, PlayerId, Position, BOARD_SIZE};
use serde::{Deserialize, Serialize};

/// チェス盤 (8x8 固定)
///
/// セルは高々1駒。Clone は配列の深いコピーなので、探索中の枝同士が
/// 盤面を共有することはない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChessBoard {
    squares: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl ChessBoard {
    pub fn empty() -> Self {
        ChessBoard {
            squares: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// 初期配置。Human が下側 (row 6, 7)
    pub fn initial() -> Self {
        const BACK_ROW: [PieceKind; BOARD_SIZE] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut board = Self::empty();
        for col in 0..BOARD_SIZE {
            board.squares[0][col] = Some(Piece::new(BACK_ROW[col], PlayerId::Ai));
            board.squares[1][col] = Some(Piece::new(PieceKind::Pawn, PlayerId::Ai));
            board.squares[6][col] = Some(Piece::new(PieceKind::Pawn, PlayerId::Human));
            board.squares[7][col] = Some(Piece::new(BACK_ROW[col], PlayerId::Human));
        }
        board
    }

    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        self.squares[pos.row][pos.col]
    }

    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.squares[pos.row][pos.col].is_none()
    }

    pub fn set(&mut self, pos: Position, piece: Option<Piece>) {
        self.squares[pos.row][pos.col] = piece;
    }

    pub fn take(&mut self, pos: Position) -> Option<Piece> {
        self.squares[pos.row][pos.col].take()
    }

    pub fn find_king(&self, player: PlayerId) -> Option<Position> {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if let Some(piece) = self.squares[row][col] {
                    if piece.kind == PieceKind::King && piece.owner == player {
                        return Some(Position::new(row, col));
                    }
                }
            }
        }
        None
    }

    /// 盤上の駒数 (owner 別)
    pub fn count(&self, kind: PieceKind, owner: PlayerId) -> usize {
        self.squares
            .iter()
            .flatten()
            .filter(|cell| **cell == Some(Piece::new(kind, owner)))
            .count()
    }
}
