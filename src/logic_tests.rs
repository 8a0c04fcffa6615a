#[cfg(test)]
mod tests {
    use crate::ai::{random_move, search, GameRules, SCORE_MATE};
    use crate::chess::{ChessBoard, ChessMove, ChessRules};
    use crate::core::{Piece, PieceKind, PlayerId, Position};
    use crate::game::{GameSession, Phase};
    use crate::othello::{OthelloBoard, OthelloRules};
    use std::time::Duration;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    /// 枝刈りなしの参照実装。スコアの同値性確認にだけ使う
    fn plain_minimax<R: GameRules>(
        rules: &R,
        board: &R::Board,
        depth: u8,
        maximizing: bool,
    ) -> i32 {
        let mover = if maximizing {
            PlayerId::Ai
        } else {
            PlayerId::Human
        };

        if depth == 0 {
            return rules.evaluate(board);
        }
        if rules.is_mated(board, mover) {
            return if maximizing { -SCORE_MATE } else { SCORE_MATE };
        }
        let moves = rules.candidate_moves(board, mover);
        if moves.is_empty() {
            return rules.no_move_score(board);
        }

        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for mv in moves {
            let next = rules.apply(board, &mv, mover);
            if rules.leaves_self_exposed(&next, mover) {
                continue;
            }
            let score = plain_minimax(rules, &next, depth - 1, !maximizing);
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }
        best
    }

    #[test]
    fn test_depth_zero_is_static_evaluation() {
        let chess = ChessBoard::initial();
        for maximizing in [true, false] {
            let result = search(&ChessRules, &chess, 0, i32::MIN, i32::MAX, maximizing);
            assert_eq!(result.score, ChessRules.evaluate(&chess));
            assert!(result.best.is_none());
        }

        let othello = OthelloRules.apply(&OthelloBoard::initial(), &pos(2, 3), PlayerId::Human);
        let result = search(&OthelloRules, &othello, 0, i32::MIN, i32::MAX, true);
        assert_eq!(result.score, OthelloRules.evaluate(&othello));
        assert!(result.best.is_none());
    }

    #[test]
    fn test_pruning_does_not_change_score() {
        // αβ枝刈りは同じ深さの素朴なミニマックスとスコア一致する
        let chess = ChessBoard::initial();
        for depth in 1..=2 {
            let pruned = search(&ChessRules, &chess, depth, i32::MIN, i32::MAX, true);
            assert_eq!(pruned.score, plain_minimax(&ChessRules, &chess, depth, true));
        }

        let othello = OthelloBoard::initial();
        for depth in 1..=3 {
            let pruned = search(&OthelloRules, &othello, depth, i32::MIN, i32::MAX, false);
            assert_eq!(
                pruned.score,
                plain_minimax(&OthelloRules, &othello, depth, false)
            );
        }
    }

    #[test]
    fn test_search_finds_ladder_mate() {
        // ルーク2枚のはしご詰み。(5,0) -> (7,0) が唯一の即詰み
        let mut board = ChessBoard::empty();
        board.set(pos(0, 0), Some(Piece::new(PieceKind::King, PlayerId::Ai)));
        board.set(pos(5, 0), Some(Piece::new(PieceKind::Rook, PlayerId::Ai)));
        board.set(pos(6, 1), Some(Piece::new(PieceKind::Rook, PlayerId::Ai)));
        board.set(pos(7, 7), Some(Piece::new(PieceKind::King, PlayerId::Human)));

        let result = search(&ChessRules, &board, 2, i32::MIN, i32::MAX, true);
        assert_eq!(result.score, SCORE_MATE);
        assert_eq!(result.best, Some(ChessMove::new(pos(5, 0), pos(7, 0))));
    }

    #[test]
    fn test_search_on_mated_board() {
        // 手番側が詰んでいる局面は駒得評価より悪い符号付き最大値
        let mut board = ChessBoard::empty();
        board.set(pos(0, 0), Some(Piece::new(PieceKind::King, PlayerId::Ai)));
        board.set(pos(0, 7), Some(Piece::new(PieceKind::Rook, PlayerId::Human)));
        board.set(pos(1, 7), Some(Piece::new(PieceKind::Rook, PlayerId::Human)));
        board.set(pos(7, 4), Some(Piece::new(PieceKind::King, PlayerId::Human)));

        let result = search(&ChessRules, &board, 3, i32::MIN, i32::MAX, true);
        assert_eq!(result.score, -SCORE_MATE);
        assert!(result.best.is_none());
    }

    #[test]
    fn test_moves_always_start_from_own_pieces() {
        // 先頭の合法手を選び続けた数局面すべてで成立すること
        let mut board = ChessBoard::initial();
        let mut player = PlayerId::Human;
        for _ in 0..6 {
            for color in [PlayerId::Human, PlayerId::Ai] {
                for mv in ChessRules.candidate_moves(&board, color) {
                    let piece = board.piece_at(mv.from).expect("source occupied");
                    assert_eq!(piece.owner, color);
                }
            }
            let mv = ChessRules.legal_moves(&board, player)[0];
            board = ChessRules.apply(&board, &mv, player);
            player = player.opponent();
        }
    }

    #[test]
    fn test_captured_tally_from_board() {
        let board = ChessBoard::initial();
        let board = ChessRules.apply(&board, &ChessMove::new(pos(6, 4), pos(4, 4)), PlayerId::Human);
        let board = ChessRules.apply(&board, &ChessMove::new(pos(1, 3), pos(3, 3)), PlayerId::Ai);
        // 白ポーンが黒ポーンを取る
        let board = ChessRules.apply(&board, &ChessMove::new(pos(4, 4), pos(3, 3)), PlayerId::Human);

        let tally = ChessRules.tally(&board);
        assert_eq!(tally.by_human, vec![PieceKind::Pawn]);
        assert!(tally.by_ai.is_empty());
    }

    #[test]
    fn test_reset_is_deterministic() {
        let mut session = GameSession::new(OthelloRules, 2, Duration::ZERO);
        assert!(session.reset());
        let first = session.board().clone();
        assert!(session.reset());
        let second = session.board().clone();

        assert_eq!(first, second);
        assert_eq!(first, OthelloBoard::initial());
    }

    async fn wait_until_not_thinking<R>(session: &mut GameSession<R>)
    where
        R: GameRules + Clone + Send + 'static,
    {
        for _ in 0..500 {
            session.poll();
            if session.phase() != Phase::AiThinking {
                return;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("AI did not finish thinking");
    }

    #[tokio::test]
    async fn test_session_ignores_input_while_thinking() {
        let mut session = GameSession::new(ChessRules, 2, Duration::ZERO);
        assert_eq!(session.phase(), Phase::HumanToMove);

        // 非合法手は黙って無視される
        assert!(!session.submit_human_move(ChessMove::new(pos(0, 0), pos(5, 5))));
        assert_eq!(session.phase(), Phase::HumanToMove);

        assert!(session.submit_human_move(ChessMove::new(pos(6, 4), pos(4, 4))));
        assert_eq!(session.phase(), Phase::AiThinking);
        let during = session.board().clone();

        // 思考中は着手・リセット・難易度変更がすべて無視される
        assert!(!session.submit_human_move(ChessMove::new(pos(6, 3), pos(4, 3))));
        assert!(!session.reset());
        assert!(!session.set_depth(4));
        assert_eq!(session.board(), &during);
        assert_eq!(session.depth(), 2);

        wait_until_not_thinking(&mut session).await;
        assert_eq!(session.phase(), Phase::HumanToMove);
        // AI が1手指している
        assert_ne!(session.board(), &during);
    }

    #[tokio::test]
    async fn test_othello_session_plays_out() {
        let mut session = GameSession::new(OthelloRules, 2, Duration::ZERO);
        let mut guard = 0;

        while session.phase() != Phase::GameOver {
            guard += 1;
            assert!(guard < 2000, "game did not finish");

            match session.phase() {
                Phase::HumanToMove => {
                    let mv = random_move(&OthelloRules, session.board(), PlayerId::Human)
                        .expect("human turn implies a legal move");
                    assert!(session.submit_human_move(mv));
                }
                Phase::AiThinking => {
                    session.poll();
                    tokio::time::sleep(Duration::from_millis(1)).await;
                }
                Phase::GameOver => {}
            }
        }

        // 終局時には双方に合法手がない
        let board = session.board();
        assert!(OthelloRules.legal_moves(board, PlayerId::Human).is_empty());
        assert!(OthelloRules.legal_moves(board, PlayerId::Ai).is_empty());

        // 勝敗は石数のとおり
        let tally = board.tally();
        let expected = match tally.human.cmp(&tally.ai) {
            std::cmp::Ordering::Greater => Some(PlayerId::Human),
            std::cmp::Ordering::Less => Some(PlayerId::Ai),
            std::cmp::Ordering::Equal => None,
        };
        assert_eq!(session.winner(), expected);
    }
}
