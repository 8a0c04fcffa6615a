//! 三目並べ。探索は不要で、三連判定と引き分け判定のみを持つ。

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

/// 3x3 盤面 (row-major)
pub type Cells = [Option<Mark>; 9];

/// 勝利ライン (横・縦・斜め)
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// 三連が成立していれば (勝者, 成立ライン) を返す
pub fn winner(cells: &Cells) -> Option<(Mark, [usize; 3])> {
    for line in LINES.iter() {
        let [a, b, c] = *line;
        if let Some(mark) = cells[a] {
            if cells[b] == Some(mark) && cells[c] == Some(mark) {
                return Some((mark, *line));
            }
        }
    }
    None
}

pub fn is_draw(cells: &Cells) -> bool {
    winner(cells).is_none() && cells.iter().all(|cell| cell.is_some())
}
