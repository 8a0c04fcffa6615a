use crate::core::Position;
use serde::{Deserialize, Serialize};
use std::fmt;

/// チェスの指し手
///
/// 取った駒は適用時に判明するため持たない (apply_move が返す)。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChessMove {
    pub from: Position,
    pub to: Position,
}

impl ChessMove {
    pub fn new(from: Position, to: Position) -> Self {
        ChessMove { from, to }
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}
