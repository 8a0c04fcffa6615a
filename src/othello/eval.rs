//! # Othello Evaluation
//!
//! Disc difference with positional corner/edge weighting and a mobility
//! term, scored from the AI's perspective (positive = AI advantage).
//! Corners dominate edges because they can never be flipped back.

use super::board::OthelloBoard;
use super::logic::legal_moves;
use crate::core::{PlayerId, Position, BOARD_SIZE};

const CORNER_BONUS: i32 = 25;
const EDGE_BONUS: i32 = 5;
const MOBILITY_WEIGHT: i32 = 2;

const CORNERS: [(usize, usize); 4] = [(0, 0), (0, 7), (7, 0), (7, 7)];

/// AI視点の静的評価
pub fn evaluate(board: &OthelloBoard) -> i32 {
    let tally = board.tally();
    let mut score = tally.ai as i32 - tally.human as i32;

    // 角 (辺ボーナスとは別枠で加点)
    for &(row, col) in CORNERS.iter() {
        score += CORNER_BONUS * side_sign(board, Position::new(row, col));
    }

    // 辺 (角を含む外周マス)
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            if row == 0 || row == BOARD_SIZE - 1 || col == 0 || col == BOARD_SIZE - 1 {
                score += EDGE_BONUS * side_sign(board, Position::new(row, col));
            }
        }
    }

    // 機動力 (合法手の数の差)
    let ai_moves = legal_moves(board, PlayerId::Ai).len() as i32;
    let human_moves = legal_moves(board, PlayerId::Human).len() as i32;
    score + (ai_moves - human_moves) * MOBILITY_WEIGHT
}

fn side_sign(board: &OthelloBoard, pos: Position) -> i32 {
    match board.disc_at(pos) {
        Some(PlayerId::Ai) => 1,
        Some(PlayerId::Human) => -1,
        None => 0,
    }
}
