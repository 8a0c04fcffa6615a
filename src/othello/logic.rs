use super::board::OthelloBoard;
use crate::core::{PlayerId, Position, BOARD_SIZE};

/// 走査する8方向
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// 合法手生成
///
/// 空きマスのうち、少なくとも1方向で「隣接する相手石の連続 + 自分の石」が
/// 成立するものが合法。row-major 走査なので出力順は決定的。
pub fn legal_moves(board: &OthelloBoard, player: PlayerId) -> Vec<Position> {
    let mut moves = Vec::new();
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let pos = Position::new(row, col);
            if board.is_empty_at(pos)
                && DIRECTIONS
                    .iter()
                    .any(|&(dr, dc)| flips_in_direction(board, pos, dr, dc, player))
            {
                moves.push(pos);
            }
        }
    }
    moves
}

/// その方向に相手石の連続があり、盤端や空きマスの前に自分の石で挟めるか
fn flips_in_direction(
    board: &OthelloBoard,
    from: Position,
    dr: i32,
    dc: i32,
    player: PlayerId,
) -> bool {
    let mut curr = from;
    let mut seen_opponent = false;
    while let Some(next) = curr.offset(dr, dc) {
        match board.disc_at(next) {
            Some(owner) if owner == player.opponent() => {
                seen_opponent = true;
                curr = next;
            }
            Some(_) => return seen_opponent,
            None => return false,
        }
    }
    // 盤端に到達: 挟めていない
    false
}

/// 着手適用。挟んだ相手石を全て自色に返す。元の盤面には触れない
pub fn apply_move(board: &OthelloBoard, to: Position, player: PlayerId) -> OthelloBoard {
    let mut next = board.clone();
    next.set(to, player);

    for &(dr, dc) in DIRECTIONS.iter() {
        let mut run = Vec::new();
        let mut curr = to;
        while let Some(step) = curr.offset(dr, dc) {
            match next.disc_at(step) {
                Some(owner) if owner == player.opponent() => {
                    run.push(step);
                    curr = step;
                }
                Some(_) => {
                    // 自分の石に到達: この方向の連続を全て返す
                    for flip in run {
                        next.set(flip, player);
                    }
                    break;
                }
                None => break,
            }
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::othello::board::DiscTally;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn test_opening_moves() {
        let board = OthelloBoard::initial();
        // 黒 (Human) の初手は4箇所、row-major 順
        assert_eq!(
            legal_moves(&board, PlayerId::Human),
            vec![pos(2, 3), pos(3, 2), pos(4, 5), pos(5, 4)]
        );
    }

    #[test]
    fn test_opening_flip() {
        let board = OthelloBoard::initial();
        let next = apply_move(&board, pos(2, 3), PlayerId::Human);

        // (2,3) に置くと (3,3) の白石だけが黒に返る
        assert_eq!(next.disc_at(pos(2, 3)), Some(PlayerId::Human));
        assert_eq!(next.disc_at(pos(3, 3)), Some(PlayerId::Human));
        assert_eq!(next.disc_at(pos(4, 4)), Some(PlayerId::Ai));
        assert_eq!(next.tally(), DiscTally { human: 4, ai: 1 });
    }

    #[test]
    fn test_legal_move_grows_own_count() {
        let board = OthelloBoard::initial();
        for player in [PlayerId::Human, PlayerId::Ai] {
            let before = board.tally();
            for mv in legal_moves(&board, player) {
                let after = apply_move(&board, mv, player).tally();
                match player {
                    PlayerId::Human => assert!(after.human > before.human),
                    PlayerId::Ai => assert!(after.ai > before.ai),
                }
                // 石は増えるか返るだけで、盤上から消えることはない
                assert!(after.occupied() > before.occupied());
            }
        }
    }

    #[test]
    fn test_no_flip_without_bracket() {
        // 相手石の先が空きマスなら挟めない
        let mut board = OthelloBoard::empty();
        board.set(pos(3, 4), PlayerId::Ai);
        assert!(legal_moves(&board, PlayerId::Human).is_empty());

        // 相手石の連続が盤端で途切れる場合も同様
        board.set(pos(0, 0), PlayerId::Ai);
        board.set(pos(0, 1), PlayerId::Ai);
        assert!(!legal_moves(&board, PlayerId::Human).contains(&pos(0, 2)));
    }
}
