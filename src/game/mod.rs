use crate::ai::{search, GameRules, SearchResult};
use crate::core::PlayerId;
use std::sync::mpsc;
use std::time::Duration;

/// 進行状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    HumanToMove,
    AiThinking,
    GameOver,
}

/// 1ゲーム分の進行管理
///
/// 盤面の更新は必ず「着手適用 → 終局/王手再計算 → 手番決定」の単位で行う。
/// AiThinking 中は人間の着手・リセット・難易度変更をすべて無視する。
/// AI の思考は遅延タスクとして投入され、結果はチャネル経由で poll() が
/// 受け取って必ず適用する (キャンセルはない)。
pub struct GameSession<R: GameRules> {
    rules: R,
    board: R::Board,
    phase: Phase,
    winner: Option<PlayerId>,
    status: String,
    depth: u8,
    think_delay: Duration,
    ai_rx: Option<mpsc::Receiver<SearchResult<R::Move>>>,
}

impl<R> GameSession<R>
where
    R: GameRules + Clone + Send + 'static,
{
    pub fn new(rules: R, depth: u8, think_delay: Duration) -> Self {
        let board = rules.initial_board();
        GameSession {
            rules,
            board,
            phase: Phase::HumanToMove,
            winner: None,
            status: "Your turn".to_string(),
            depth,
            think_delay,
            ai_rx: None,
        }
    }

    pub fn rules(&self) -> &R {
        &self.rules
    }

    pub fn board(&self) -> &R::Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    pub fn thinking(&self) -> bool {
        self.phase == Phase::AiThinking
    }

    pub fn tally(&self) -> R::Tally {
        self.rules.tally(&self.board)
    }

    /// 人間側の合法手 (HumanToMove 以外では空)
    pub fn legal_moves(&self) -> Vec<R::Move> {
        if self.phase != Phase::HumanToMove {
            return Vec::new();
        }
        self.rules.legal_moves(&self.board, PlayerId::Human)
    }

    /// 人間の着手。HumanToMove 以外と非合法手は黙って無視する
    pub fn submit_human_move(&mut self, mv: R::Move) -> bool {
        if self.phase != Phase::HumanToMove {
            return false;
        }
        if !self
            .rules
            .legal_moves(&self.board, PlayerId::Human)
            .contains(&mv)
        {
            return false;
        }

        self.board = self.rules.apply(&self.board, &mv, PlayerId::Human);
        self.advance_turn(PlayerId::Human);
        true
    }

    /// 難易度変更。選択肢外の値と思考中は無視
    pub fn set_depth(&mut self, depth: u8) -> bool {
        if self.phase == Phase::AiThinking {
            return false;
        }
        if !self.rules.depth_choices().contains(&depth) {
            return false;
        }
        self.depth = depth;
        true
    }

    /// 新規ゲーム。思考中は無視
    pub fn reset(&mut self) -> bool {
        if self.phase == Phase::AiThinking {
            return false;
        }
        self.board = self.rules.initial_board();
        self.phase = Phase::HumanToMove;
        self.winner = None;
        self.status = "Your turn".to_string();
        self.ai_rx = None;
        true
    }

    /// AI の思考結果を取り込む。未完了なら何もしない
    pub fn poll(&mut self) {
        if self.phase != Phase::AiThinking {
            return;
        }
        let result = match self.ai_rx.as_ref().and_then(|rx| rx.try_recv().ok()) {
            Some(result) => result,
            None => return,
        };
        self.ai_rx = None;

        // 探索が手を返せなかった場合は最初の合法手に落とす
        // (スケジュール時点で合法手は必ず1つ以上ある)
        let mv = result.best.or_else(|| {
            self.rules
                .legal_moves(&self.board, PlayerId::Ai)
                .into_iter()
                .next()
        });

        match mv {
            Some(mv) => {
                self.board = self.rules.apply(&self.board, &mv, PlayerId::Ai);
                self.advance_turn(PlayerId::Ai);
            }
            None => {
                // 指せる手が本当にない場合はパス/終局として解決する
                self.advance_turn(PlayerId::Ai);
            }
        }
    }

    /// mover の着手適用後の遷移 (終局判定 → 手番決定)
    fn advance_turn(&mut self, mover: PlayerId) {
        let opponent = mover.opponent();

        if self.rules.is_mated(&self.board, opponent) {
            self.phase = Phase::GameOver;
            self.winner = Some(mover);
            self.status = match mover {
                PlayerId::Human => "Checkmate! You win".to_string(),
                PlayerId::Ai => "Checkmate! AI wins".to_string(),
            };
            return;
        }

        if self.rules.legal_moves(&self.board, opponent).is_empty() {
            // 相手に手がない: パスできるゲームで自分に手が残っていれば続行
            if self.rules.allows_pass()
                && !self.rules.legal_moves(&self.board, mover).is_empty()
            {
                self.begin_turn(mover, true);
                return;
            }

            self.phase = Phase::GameOver;
            self.winner = self.rules.final_winner(&self.board);
            self.status = match self.winner {
                Some(PlayerId::Human) => "You win!".to_string(),
                Some(PlayerId::Ai) => "AI wins!".to_string(),
                None => "Draw".to_string(),
            };
            return;
        }

        self.begin_turn(opponent, false);
    }

    fn begin_turn(&mut self, player: PlayerId, after_pass: bool) {
        match player {
            PlayerId::Human => {
                self.phase = Phase::HumanToMove;
                let pass = if after_pass { "AI has no move. " } else { "" };
                let check = if self.rules.in_check(&self.board, PlayerId::Human) {
                    "Check! "
                } else {
                    ""
                };
                self.status = format!("{}{}Your turn", pass, check);
            }
            PlayerId::Ai => {
                self.phase = Phase::AiThinking;
                self.status = if after_pass {
                    "You have no move. AI thinking...".to_string()
                } else if self.rules.in_check(&self.board, PlayerId::Ai) {
                    "AI thinking... (in check)".to_string()
                } else {
                    "AI thinking...".to_string()
                };
                self.schedule_ai();
            }
        }
    }

    /// AI 手番を遅延タスクとして投入する
    ///
    /// 「思考中」表示を先に描画できるよう固定ウェイトを挟んでから
    /// 探索本体をブロッキングタスクで実行し、結果をチャネルで返す。
    fn schedule_ai(&mut self) {
        let (tx, rx) = mpsc::channel();
        self.ai_rx = Some(rx);

        let rules = self.rules.clone();
        let board = self.board.clone();
        let depth = self.depth;
        let delay = self.think_delay;

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let result = tokio::task::spawn_blocking(move || {
                search(&rules, &board, depth, i32::MIN, i32::MAX, true)
            })
            .await;

            match result {
                Ok(result) => {
                    let _ = tx.send(result);
                }
                Err(e) => eprintln!("AI search task failed: {}", e),
            }
        });
    }
}
