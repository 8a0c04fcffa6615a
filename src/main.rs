use board_arcade_ai::chess::{self, ChessMove, ChessRules};
use board_arcade_ai::config::AiConfig;
use board_arcade_ai::core::{PlayerId, Position};
use board_arcade_ai::display;
use board_arcade_ai::game::{GameSession, Phase};
use board_arcade_ai::othello::{self, OthelloRules};
use board_arcade_ai::tictactoe::{self, Cells, Mark};

use crossterm::event::{self, Event, KeyCode};
use crossterm::{execute, terminal};
use std::io;
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // ターミナル初期化
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen)?;

    let res = run().await;

    // ターミナル復帰
    execute!(io::stdout(), terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;

    res
}

async fn run() -> anyhow::Result<()> {
    loop {
        print!("\r\n=== Board Arcade (vs AI) ===\r\n");
        print!("\r\nSelect game:\r\n");
        print!("1. Chess\r\n");
        print!("2. Othello\r\n");
        print!("3. Tic-tac-toe (2 players)\r\n");
        print!("q. Quit\r\n");

        let choice = loop {
            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    match key.code {
                        KeyCode::Char('1') => break '1',
                        KeyCode::Char('2') => break '2',
                        KeyCode::Char('3') => break '3',
                        KeyCode::Char('q') => return Ok(()),
                        _ => {}
                    }
                }
            }
        };

        match choice {
            '1' => run_chess().await?,
            '2' => run_othello().await?,
            '3' => run_tictactoe()?,
            _ => unreachable!(),
        }
    }
}

/// 難易度メニュー。None は戻る
fn select_depth(choices: &[u8], default_depth: u8) -> anyhow::Result<Option<u8>> {
    const LABELS: [&str; 4] = ["Easy", "Medium", "Hard", "Expert"];

    print!("\r\nSelect difficulty:\r\n");
    for (i, depth) in choices.iter().enumerate() {
        let default_mark = if *depth == default_depth { " (default)" } else { "" };
        print!("{}. {}{}\r\n", i + 1, LABELS[i], default_mark);
    }
    print!("q. Back\r\n");

    loop {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('1') => return Ok(Some(choices[0])),
                    KeyCode::Char('2') => return Ok(Some(choices[1])),
                    KeyCode::Char('3') => return Ok(Some(choices[2])),
                    KeyCode::Char('4') => return Ok(Some(choices[3])),
                    KeyCode::Enter => return Ok(Some(default_depth)),
                    KeyCode::Char('q') => return Ok(None),
                    _ => {}
                }
            }
        }
    }
}

fn move_cursor(cursor: &mut Position, code: KeyCode) {
    let moved = match code {
        KeyCode::Up => cursor.offset(-1, 0),
        KeyCode::Down => cursor.offset(1, 0),
        KeyCode::Left => cursor.offset(0, -1),
        KeyCode::Right => cursor.offset(0, 1),
        _ => None,
    };
    if let Some(pos) = moved {
        *cursor = pos;
    }
}

async fn run_chess() -> anyhow::Result<()> {
    let tuning = AiConfig::get().chess;
    let depth = match select_depth(&chess::DEPTH_CHOICES, tuning.default_depth)? {
        Some(depth) => depth,
        None => return Ok(()),
    };

    let mut session = GameSession::new(
        ChessRules,
        depth,
        Duration::from_millis(tuning.think_delay_ms),
    );
    let mut cursor = Position::new(6, 4);
    let mut selected: Option<Position> = None;

    loop {
        session.poll();

        // 選択中の駒の合法な行き先をハイライト
        let highlights: Vec<Position> = match selected {
            Some(from) => session
                .legal_moves()
                .into_iter()
                .filter(|mv| mv.from == from)
                .map(|mv| mv.to)
                .collect(),
            None => Vec::new(),
        };

        let state = display::DisplayState {
            cursor,
            selected,
            highlights: highlights.clone(),
            status_msg: Some(session.status().to_string()),
            thinking: session.thinking(),
            depth: session.depth(),
        };
        display::render_chess(session.board(), &session.tally(), &state);

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let key = match event::read()? {
            Event::Key(key) => key,
            _ => continue,
        };

        match key.code {
            KeyCode::Char('q') => return Ok(()),
            KeyCode::Char('r') => {
                if session.reset() {
                    selected = None;
                }
            }
            KeyCode::Char(c @ '1'..='4') => {
                let idx = c as usize - '1' as usize;
                session.set_depth(chess::DEPTH_CHOICES[idx]);
            }
            KeyCode::Esc => selected = None,
            KeyCode::Enter => match selected {
                None => {
                    // 自分の駒で、動ける手があるマスだけ選択できる
                    let own_piece = session
                        .board()
                        .piece_at(cursor)
                        .map(|piece| piece.owner == PlayerId::Human)
                        .unwrap_or(false);
                    let has_move = session.legal_moves().iter().any(|mv| mv.from == cursor);
                    if own_piece && has_move {
                        selected = Some(cursor);
                    }
                }
                Some(from) => {
                    if highlights.contains(&cursor) {
                        session.submit_human_move(ChessMove::new(from, cursor));
                        selected = None;
                    } else if session
                        .board()
                        .piece_at(cursor)
                        .map(|piece| piece.owner == PlayerId::Human)
                        .unwrap_or(false)
                    {
                        // 別の自駒を選び直す
                        selected = Some(cursor);
                    } else {
                        selected = None;
                    }
                }
            },
            code => move_cursor(&mut cursor, code),
        }
    }
}

async fn run_othello() -> anyhow::Result<()> {
    let tuning = AiConfig::get().othello;
    let depth = match select_depth(&othello::DEPTH_CHOICES, tuning.default_depth)? {
        Some(depth) => depth,
        None => return Ok(()),
    };

    let mut session = GameSession::new(
        OthelloRules,
        depth,
        Duration::from_millis(tuning.think_delay_ms),
    );
    let mut cursor = Position::new(2, 3);

    loop {
        session.poll();

        let state = display::DisplayState {
            cursor,
            selected: None,
            highlights: session.legal_moves(),
            status_msg: Some(session.status().to_string()),
            thinking: session.thinking(),
            depth: session.depth(),
        };
        display::render_othello(session.board(), session.tally(), &state);

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let key = match event::read()? {
            Event::Key(key) => key,
            _ => continue,
        };

        match key.code {
            KeyCode::Char('q') => return Ok(()),
            KeyCode::Char('r') => {
                session.reset();
            }
            KeyCode::Char(c @ '1'..='4') => {
                let idx = c as usize - '1' as usize;
                session.set_depth(othello::DEPTH_CHOICES[idx]);
            }
            KeyCode::Enter => {
                session.submit_human_move(cursor);
            }
            code => move_cursor(&mut cursor, code),
        }
    }
}

/// 三目並べは2人用。AI なしで三連判定だけを使う
fn run_tictactoe() -> anyhow::Result<()> {
    let mut cells: Cells = [None; 9];
    let mut next = Mark::X;
    let mut cursor = 4usize;

    loop {
        let result = tictactoe::winner(&cells);
        let status = match result {
            Some((mark, _)) => format!("Winner: {}", mark.symbol()),
            None if tictactoe::is_draw(&cells) => "Draw".to_string(),
            None => format!("Next player: {}", next.symbol()),
        };
        display::render_tictactoe(&cells, cursor, &status, result.map(|(_, line)| line));

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let key = match event::read()? {
            Event::Key(key) => key,
            _ => continue,
        };

        match key.code {
            KeyCode::Char('q') => return Ok(()),
            KeyCode::Char('r') => {
                cells = [None; 9];
                next = Mark::X;
            }
            KeyCode::Enter => {
                if result.is_none() && cells[cursor].is_none() {
                    cells[cursor] = Some(next);
                    next = next.opponent();
                }
            }
            KeyCode::Up if cursor >= 3 => cursor -= 3,
            KeyCode::Down if cursor < 6 => cursor += 3,
            KeyCode::Left if cursor % 3 > 0 => cursor -= 1,
            KeyCode::Right if cursor % 3 < 2 => cursor += 1,
            _ => {}
        }
    }
}
