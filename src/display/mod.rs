use crate::chess::{CapturedPieces, ChessBoard};
use crate::core::{Piece, PlayerId, Position, BOARD_SIZE};
use crate::othello::{DiscTally, OthelloBoard};
use crate::tictactoe::Cells;
use crossterm::{cursor, execute, style::Stylize, terminal};
use std::io::stdout;

pub struct DisplayState {
    pub cursor: Position,
    pub selected: Option<Position>,
    pub highlights: Vec<Position>,
    pub status_msg: Option<String>,
    pub thinking: bool,
    pub depth: u8,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            cursor: Position::default(),
            selected: None,
            highlights: Vec::new(),
            status_msg: None,
            thinking: false,
            depth: 0,
        }
    }
}

impl DisplayState {
    pub fn new() -> Self {
        Self::default()
    }
}

fn render_header(title: &str, state: &DisplayState) {
    let mut out = stdout();

    // 画面クリア（スクロール防止）
    execute!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )
    .unwrap();

    print!("=== {} ===\r\n", title);
    if let Some(msg) = &state.status_msg {
        if state.thinking {
            print!("{}\r\n", msg.clone().bold().magenta());
        } else {
            print!("{}\r\n", msg.clone().bold().yellow());
        }
    } else {
        print!("\r\n");
    }
    print!("\r\n");
}

/// 8x8 盤の1マス分を描く (チェス・オセロ共通)
fn render_cell(pos: Position, symbol: char, owner: Option<PlayerId>, state: &DisplayState) {
    let is_cursor = state.cursor == pos;
    let is_selected = state.selected == Some(pos);
    let is_highlight = state.highlights.contains(&pos);

    let (prefix, suffix) = if is_cursor {
        ("[", "]")
    } else if is_selected {
        ("|", "|")
    } else if is_highlight {
        ("(", ")")
    } else {
        (" ", " ")
    };

    let cell_text = format!("{} {}{}", prefix, symbol, suffix);

    if is_cursor {
        print!("{}", cell_text.yellow());
    } else if is_selected {
        print!("{}", cell_text.blue());
    } else if is_highlight {
        print!("{}", cell_text.green());
    } else {
        match owner {
            Some(PlayerId::Human) => print!("{}", cell_text.cyan()),
            Some(PlayerId::Ai) => print!("{}", cell_text.magenta()),
            None => print!("{}", cell_text),
        }
    }
}

fn render_grid<F>(state: &DisplayState, cell_at: F)
where
    F: Fn(Position) -> (char, Option<PlayerId>),
{
    // X軸ラベル
    print!("    ");
    for col in 0..BOARD_SIZE {
        print!("  {} ", col);
    }
    print!("\r\n");
    print!("   +{}+\r\n", "----".repeat(BOARD_SIZE));

    for row in 0..BOARD_SIZE {
        print!("{:2} |", row);
        for col in 0..BOARD_SIZE {
            let pos = Position::new(row, col);
            let (symbol, owner) = cell_at(pos);
            render_cell(pos, symbol, owner, state);
        }
        print!("|\r\n");
    }
    print!("   +{}+\r\n", "----".repeat(BOARD_SIZE));
}

pub fn render_chess(board: &ChessBoard, tally: &CapturedPieces, state: &DisplayState) {
    render_header("Chess", state);

    render_grid(state, |pos| match board.piece_at(pos) {
        Some(piece) => (piece.symbol(), Some(piece.owner)),
        None => ('.', None),
    });

    print!("Depth: {}  (keys 1-4 to change)\r\n", state.depth);
    render_captured("Captured by you", PlayerId::Ai, &tally.by_human);
    render_captured("Captured by AI", PlayerId::Human, &tally.by_ai);
    print!("[Arrows] Move  [Enter] Select  [Esc] Cancel  [r] New game  [q] Menu\r\n");
}

fn render_captured(label: &str, owner: PlayerId, kinds: &[crate::core::PieceKind]) {
    print!("{}: ", label);
    if kinds.is_empty() {
        print!("(None)");
    } else {
        for kind in kinds {
            print!("{} ", Piece::new(*kind, owner).symbol());
        }
    }
    print!("\r\n");
}

pub fn render_othello(board: &OthelloBoard, tally: DiscTally, state: &DisplayState) {
    render_header("Othello", state);

    render_grid(state, |pos| match board.disc_at(pos) {
        Some(PlayerId::Human) => ('●', Some(PlayerId::Human)),
        Some(PlayerId::Ai) => ('○', Some(PlayerId::Ai)),
        None => {
            if state.highlights.contains(&pos) {
                ('·', None)
            } else {
                ('.', None)
            }
        }
    });

    print!(
        "You (●): {}   AI (○): {}   Depth: {}  (keys 1-4 to change)\r\n",
        tally.human, tally.ai, state.depth
    );
    print!("[Arrows] Move  [Enter] Place  [r] New game  [q] Menu\r\n");
}

pub fn render_tictactoe(cells: &Cells, cursor: usize, status: &str, line: Option<[usize; 3]>) {
    let mut out = stdout();
    execute!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )
    .unwrap();

    print!("=== Tic-tac-toe ===\r\n");
    print!("{}\r\n\r\n", status.to_string().bold().yellow());

    for row in 0..3 {
        print!("   ");
        for col in 0..3 {
            let idx = row * 3 + col;
            let symbol = cells[idx].map(|mark| mark.symbol()).unwrap_or('.');
            let on_line = line.map(|l| l.contains(&idx)).unwrap_or(false);

            let cell_text = if idx == cursor {
                format!("[{}]", symbol)
            } else {
                format!(" {} ", symbol)
            };

            if on_line {
                print!("{}", cell_text.green());
            } else if idx == cursor {
                print!("{}", cell_text.yellow());
            } else {
                print!("{}", cell_text);
            }
        }
        print!("\r\n");
    }
    print!("\r\n[Arrows] Move  [Enter] Place  [r] New game  [q] Menu\r\n");
}
