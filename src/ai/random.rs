use super::rules::GameRules;
use crate::core::PlayerId;
use rand::seq::SliceRandom;

/// 合法手から一様ランダムに選ぶ (ベースライン・テスト用の相手)
pub fn random_move<R: GameRules>(
    rules: &R,
    board: &R::Board,
    player: PlayerId,
) -> Option<R::Move> {
    let moves = rules.legal_moves(board, player);
    let mut rng = rand::thread_rng();
    moves.choose(&mut rng).cloned()
}
