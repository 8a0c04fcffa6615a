use serde::{Deserialize, Serialize};
use std::fmt;

/// 盤面サイズ (チェス・オセロ共通の 8x8 固定)
pub const BOARD_SIZE: usize = 8;

/// 対局者ID
///
/// Human は常に先手 (チェスでは白、オセロでは黒)。対応付けはゲーム開始時に
/// 固定され、途中で入れ替わらない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    Human,
    Ai,
}

impl Default for PlayerId {
    fn default() -> Self {
        PlayerId::Human
    }
}

impl PlayerId {
    pub fn opponent(self) -> PlayerId {
        match self {
            PlayerId::Human => PlayerId::Ai,
            PlayerId::Ai => PlayerId::Human,
        }
    }
}

/// 盤面座標 (0-indexed, row が縦)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    /// 相対移動。盤外になる場合は None
    pub fn offset(self, dr: i32, dc: i32) -> Option<Position> {
        let row = self.row as i32 + dr;
        let col = self.col as i32 + dc;
        if row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32 {
            Some(Position::new(row as usize, col as usize))
        } else {
            None
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
