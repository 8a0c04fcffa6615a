use crate::core::PlayerId;

/// ゲームごとの能力セット
///
/// 探索エンジンと進行管理はこの trait 越しにのみ各ゲームを扱う。
/// 盤面は clone で独立したスナップショットになることを前提とする
/// (探索の兄弟枝が互いの変更を観測しないために必須)。
pub trait GameRules {
    type Board: Clone + Send + 'static;
    type Move: Clone + PartialEq + Send + 'static;
    /// 表示用の集計 (チェス: 取られた駒 / オセロ: 石数)
    type Tally;

    /// 決定的な初期配置
    fn initial_board(&self) -> Self::Board;

    /// 候補手
    ///
    /// チェスは疑似合法手 (王手放置の除外は探索側が各枝で遅延適用)、
    /// オセロは完全な合法手。
    fn candidate_moves(&self, board: &Self::Board, player: PlayerId) -> Vec<Self::Move>;

    /// 着手適用。新しい盤面を返し、入力には触れない
    fn apply(&self, board: &Self::Board, mv: &Self::Move, player: PlayerId) -> Self::Board;

    /// AI視点の静的評価 (正 = AI有利)
    fn evaluate(&self, board: &Self::Board) -> i32;

    /// 着手後の盤面で、着手側の王が取られる状態か (チェスのみ)
    fn leaves_self_exposed(&self, _board: &Self::Board, _mover: PlayerId) -> bool {
        false
    }

    /// 手番側が詰んでいるか (チェスのみ)
    fn is_mated(&self, _board: &Self::Board, _player: PlayerId) -> bool {
        false
    }

    /// 王手が掛かっているか (チェスのみ、状態表示用)
    fn in_check(&self, _board: &Self::Board, _player: PlayerId) -> bool {
        false
    }

    /// 候補手がない局面のスコア
    ///
    /// チェスはステイルメイトと真の引き分けを区別せず 0。
    /// オセロは静的評価を返す。
    fn no_move_score(&self, _board: &Self::Board) -> i32 {
        0
    }

    /// 合法手がない側をパスさせて相手が続行できるゲームか
    fn allows_pass(&self) -> bool {
        false
    }

    /// 双方に合法手がないときの勝者 (引き分けは None)
    fn final_winner(&self, _board: &Self::Board) -> Option<PlayerId> {
        None
    }

    /// 完全な合法手 (候補手から自殺手を除外)
    fn legal_moves(&self, board: &Self::Board, player: PlayerId) -> Vec<Self::Move> {
        self.candidate_moves(board, player)
            .into_iter()
            .filter(|mv| !self.leaves_self_exposed(&self.apply(board, mv, player), player))
            .collect()
    }

    /// 難易度として選べる探索深さ
    fn depth_choices(&self) -> &'static [u8];

    /// 表示用の集計を盤面から導出する
    fn tally(&self, board: &Self::Board) -> Self::Tally;
}
