use super::rules::GameRules;
use crate::core::PlayerId;

/// 詰みスコア。有限の駒得評価を常に支配する大きさ
pub const SCORE_MATE: i32 = 50_000;

/// 探索結果
///
/// best が None のときは「指せる手がない」として扱う
/// (深さ0、詰み・手詰まり、または全候補が王手放置で弾かれた場合)。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult<M> {
    pub score: i32,
    pub best: Option<M>,
}

/// αβ枝刈り付きミニマックス探索
///
/// maximizing = true が AI 手番。候補手は生成順のまま評価する
/// (並べ替えなし)。各枝は適用後に着手側の王手放置だけを確認して
/// 弾く遅延フィルタで、最大化・最小化どちらの側にも同じく掛かる。
pub fn search<R: GameRules>(
    rules: &R,
    board: &R::Board,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
) -> SearchResult<R::Move> {
    let mover = if maximizing {
        PlayerId::Ai
    } else {
        PlayerId::Human
    };

    if depth == 0 {
        return SearchResult {
            score: rules.evaluate(board),
            best: None,
        };
    }

    // 詰みはどの深さでも駒得より優先されるよう符号付き最大値を返す
    if rules.is_mated(board, mover) {
        return SearchResult {
            score: if maximizing { -SCORE_MATE } else { SCORE_MATE },
            best: None,
        };
    }

    let moves = rules.candidate_moves(board, mover);
    if moves.is_empty() {
        return SearchResult {
            score: rules.no_move_score(board),
            best: None,
        };
    }

    let mut best = None;

    if maximizing {
        let mut max_eval = i32::MIN;
        for mv in moves {
            let next = rules.apply(board, &mv, mover);
            if rules.leaves_self_exposed(&next, mover) {
                continue;
            }
            let result = search(rules, &next, depth - 1, alpha, beta, false);
            if result.score > max_eval {
                max_eval = result.score;
                best = Some(mv);
            }
            alpha = alpha.max(result.score);
            if beta <= alpha {
                break;
            }
        }
        SearchResult {
            score: max_eval,
            best,
        }
    } else {
        let mut min_eval = i32::MAX;
        for mv in moves {
            let next = rules.apply(board, &mv, mover);
            if rules.leaves_self_exposed(&next, mover) {
                continue;
            }
            let result = search(rules, &next, depth - 1, alpha, beta, true);
            if result.score < min_eval {
                min_eval = result.score;
                best = Some(mv);
            }
            beta = beta.min(result.score);
            if beta <= alpha {
                break;
            }
        }
        SearchResult {
            score: min_eval,
            best,
        }
    }
}
