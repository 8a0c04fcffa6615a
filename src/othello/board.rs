use crate::core::{PlayerId, Position, BOARD_SIZE};
use serde::{Deserialize, Serialize};

/// オセロ盤 (8x8 固定)。セルは None = 空き、Some = 石の持ち主
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OthelloBoard {
    cells: [[Option<PlayerId>; BOARD_SIZE]; BOARD_SIZE],
}

/// 石数 (Human = 黒, Ai = 白)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiscTally {
    pub human: u32,
    pub ai: u32,
}

impl DiscTally {
    pub fn occupied(self) -> u32 {
        self.human + self.ai
    }
}

impl OthelloBoard {
    pub fn empty() -> Self {
        OthelloBoard {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// 初期配置: 中央の4石
    pub fn initial() -> Self {
        let mut board = Self::empty();
        board.cells[3][3] = Some(PlayerId::Ai);
        board.cells[3][4] = Some(PlayerId::Human);
        board.cells[4][3] = Some(PlayerId::Human);
        board.cells[4][4] = Some(PlayerId::Ai);
        board
    }

    pub fn disc_at(&self, pos: Position) -> Option<PlayerId> {
        self.cells[pos.row][pos.col]
    }

    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.cells[pos.row][pos.col].is_none()
    }

    pub fn set(&mut self, pos: Position, player: PlayerId) {
        self.cells[pos.row][pos.col] = Some(player);
    }

    pub fn tally(&self) -> DiscTally {
        let mut tally = DiscTally::default();
        for row in self.cells.iter() {
            for cell in row.iter() {
                match cell {
                    Some(PlayerId::Human) => tally.human += 1,
                    Some(PlayerId::Ai) => tally.ai += 1,
                    None => {}
                }
            }
        }
        tally
    }
}
