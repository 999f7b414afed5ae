//! Terminal rendering of Azul game state
//!
//! Everything here builds a `String`; the binaries decide when to print.

use std::fmt::Write;

use azul_engine::{
    floor_penalty, Color, DraftDestination, DraftSource, Game, Move, PlayerBoard, Token,
    BOARD_SIZE, WALL_PATTERN,
};

// ANSI color codes for tile display
pub const BLUE: &str = "\x1b[94m";
pub const YELLOW: &str = "\x1b[93m";
pub const RED: &str = "\x1b[91m";
pub const BLACK: &str = "\x1b[90m";
pub const WHITE: &str = "\x1b[97m";
pub const GREEN: &str = "\x1b[92m";
pub const CYAN: &str = "\x1b[96m";
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

const RULE: &str = "══════════════════════════════════════════════════════════════";

pub fn color_code(color: Color) -> &'static str {
    match color {
        Color::Blue => BLUE,
        Color::Yellow => YELLOW,
        Color::Red => RED,
        Color::Black => BLACK,
        Color::White => WHITE,
    }
}

pub fn display_tile(color: Color) -> String {
    format!("{}{}{}", color_code(color), color.symbol(), RESET)
}

pub fn display_token(token: Token) -> String {
    match token {
        Token::Tile(c) => display_tile(c),
        Token::FirstPlayerMarker => format!("{BOLD}1{RESET}"),
    }
}

fn dim_tile(color: Color) -> String {
    format!("{DIM}{}{RESET}", color.symbol().to_ascii_lowercase())
}

pub fn source_label(source: DraftSource) -> String {
    match source {
        DraftSource::Factory(f) => format!("Factory {}", f + 1),
        DraftSource::Center => "Center".to_string(),
    }
}

/// Format a move for display, e.g. `F2 R -> Line 4`
pub fn format_move(mv: &Move) -> String {
    let source = match mv.source {
        DraftSource::Factory(f) => format!("F{}", f + 1),
        DraftSource::Center => "Center".to_string(),
    };
    let dest = match mv.dest {
        DraftDestination::PatternLine(r) => format!("Line {}", r + 1),
        DraftDestination::Floor => "Floor".to_string(),
    };
    format!("{} {} -> {}", source, display_tile(mv.color), dest)
}

fn player_label(names: &[String], seat: usize) -> String {
    names
        .get(seat)
        .cloned()
        .unwrap_or_else(|| format!("Player {}", seat + 1))
}

/// Full table: factories, center and every board.
///
/// `names` are per-seat labels; missing entries fall back to "Player N".
pub fn render_game(game: &Game, names: &[String]) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "\n{BOLD}{RULE}{RESET}");
    let _ = writeln!(
        out,
        "{BOLD}  Round {}{RESET}   |   To move: {}",
        game.round,
        player_label(names, game.current_player)
    );
    let _ = writeln!(out, "{BOLD}{RULE}{RESET}\n");

    let _ = writeln!(out, "{BOLD}FACTORIES:{RESET}");
    for (f, factory) in game.factories.iter().enumerate() {
        let _ = write!(out, "  F{}: ", f + 1);
        if factory.is_empty() {
            let _ = write!(out, "{DIM}(empty){RESET}");
        } else {
            for &tile in &factory.tiles {
                let _ = write!(out, "{} ", display_tile(tile));
            }
        }
        out.push('\n');
    }

    let _ = write!(out, "\n{BOLD}CENTER:{RESET} ");
    if game.center.has_first_player_marker {
        let _ = write!(out, "{} ", display_token(Token::FirstPlayerMarker));
    }
    if game.center.tiles.is_empty() {
        if !game.center.has_first_player_marker {
            let _ = write!(out, "{DIM}(empty){RESET}");
        }
    } else {
        for &tile in &game.center.tiles {
            let _ = write!(out, "{} ", display_tile(tile));
        }
    }
    out.push_str("\n\n");

    for (seat, board) in game.players.iter().enumerate() {
        let label = player_label(names, seat);
        out.push_str(&render_board(board, &label, seat == game.current_player));
        out.push('\n');
    }

    out
}

/// One player's pattern lines beside the wall, then the floor
pub fn render_board(board: &PlayerBoard, label: &str, highlight: bool) -> String {
    let mut out = String::new();
    let style = if highlight { BOLD } else { DIM };
    let _ = writeln!(out, "{style}{} (Score: {}){RESET}", label, board.score);
    let _ = writeln!(out, "  Pattern Lines          Wall");

    for (row, line) in board.pattern_lines.iter().enumerate() {
        out.push_str("  ");
        // Right-align so every line ends next to the wall
        out.push_str(&"  ".repeat(BOARD_SIZE - line.capacity));
        for _ in 0..line.space() {
            let _ = write!(out, "{DIM}.{RESET} ");
        }
        if let Some(color) = line.color {
            for _ in 0..line.filled {
                let _ = write!(out, "{} ", display_tile(color));
            }
        }

        out.push_str(" -> ");

        for col in 0..BOARD_SIZE {
            let expected = WALL_PATTERN[row][col];
            if board.wall[row][col] {
                let _ = write!(out, "{} ", display_tile(expected));
            } else {
                let _ = write!(out, "{} ", dim_tile(expected));
            }
        }
        out.push('\n');
    }

    out.push_str("  Floor: ");
    if board.floor.is_empty() {
        let _ = write!(out, "{DIM}(empty){RESET}");
    } else {
        for &token in &board.floor {
            let _ = write!(out, "{} ", display_token(token));
        }
        let _ = write!(out, " {RED}({}){RESET}", floor_penalty(board.floor.len()));
    }
    out.push('\n');
    out
}

/// Final scores with the winner starred
pub fn render_game_over(game: &Game, names: &[String]) -> String {
    let mut out = String::new();
    let winner = game.winner();

    let _ = writeln!(out, "\n{BOLD}{RULE}{RESET}");
    let _ = writeln!(out, "{BOLD}{:^62}{RESET}", "GAME OVER");
    let _ = writeln!(out, "{BOLD}{RULE}{RESET}\n");
    let _ = writeln!(out, "{BOLD}Final Scores:{RESET}\n");

    for (seat, board) in game.players.iter().enumerate() {
        let marker = if winner == Some(seat) {
            format!("{GREEN}* {RESET}")
        } else {
            "  ".to_string()
        };
        let _ = writeln!(
            out,
            "{}{:<15} {BOLD}{:>3}{RESET} points  ({} rows)",
            marker,
            player_label(names, seat),
            board.score,
            board.completed_rows()
        );
    }

    match winner {
        Some(seat) => {
            let _ = writeln!(out, "\n{BOLD}{GREEN}{} wins!{RESET}", player_label(names, seat));
        }
        None => {
            let _ = writeln!(out, "\n{BOLD}It's a tie!{RESET}");
        }
    }
    out
}

/// Step 1 of a human turn: numbered list of sources holding tiles
pub fn render_source_prompt(game: &Game, sources: &[DraftSource]) -> String {
    let mut out = format!("\n{BOLD}Step 1:{RESET} Take tiles from where?\n\n");
    for (i, &source) in sources.iter().enumerate() {
        let _ = write!(out, "  {CYAN}{BOLD}[{}]{RESET} {:<10} ", i + 1, source_label(source));
        for color in game.source_colors(source) {
            let count = game.tiles_in_source(source, color);
            let _ = write!(out, "{}x{} ", display_tile(color), count);
        }
        if source == DraftSource::Center && game.center.has_first_player_marker {
            let _ = write!(out, "{DIM}(+ first player marker){RESET}");
        }
        out.push('\n');
    }
    out
}

/// Step 2: numbered list of colors at `source`
pub fn render_color_prompt(game: &Game, source: DraftSource, colors: &[Color]) -> String {
    let mut out = format!(
        "\n{BOLD}Step 2:{RESET} Which color from {}?\n\n",
        source_label(source)
    );
    for (i, &color) in colors.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {CYAN}{BOLD}[{}]{RESET} {} {} x{}",
            i + 1,
            display_tile(color),
            color.name(),
            game.tiles_in_source(source, color)
        );
    }
    out
}

/// Step 3: numbered destinations with what each would do to the board
pub fn render_line_prompt(
    board: &PlayerBoard,
    color: Color,
    count: usize,
    dests: &[DraftDestination],
) -> String {
    let mut out = format!(
        "\n{BOLD}Step 3:{RESET} Place {} {} tile(s) on which line?\n\n",
        count,
        color.name()
    );

    for (i, &dest) in dests.iter().enumerate() {
        let (placed, overflow) = board.preview_placement(dest, count);
        let _ = write!(out, "  {CYAN}{BOLD}[{}]{RESET} ", i + 1);

        match dest {
            DraftDestination::PatternLine(row) => {
                let line = &board.pattern_lines[row];
                let filled = line.filled + placed;
                let _ = write!(out, "Line {} ", row + 1);
                out.push_str(&"  ".repeat(BOARD_SIZE - line.capacity));
                for slot in 0..line.capacity {
                    if slot < filled {
                        let _ = write!(out, "{} ", display_tile(color));
                    } else {
                        let _ = write!(out, "{DIM}.{RESET} ");
                    }
                }
                if filled == line.capacity {
                    let _ = write!(out, "{GREEN}complete{RESET}");
                }
            }
            DraftDestination::Floor => out.push_str("Floor"),
        }

        if overflow > 0 {
            let floor_len = board.floor.len();
            let cost = floor_penalty(floor_len + overflow) - floor_penalty(floor_len);
            let _ = write!(out, " {RED}+{} floor ({}){RESET}", overflow, cost);
        }
        out.push('\n');
    }
    out
}

pub fn render_help() -> String {
    format!(
        "
{BOLD}HOW TO PLAY:{RESET}
  Each turn: pick a source (factory or center), pick a color (you take
  every tile of it), then pick a pattern line. Leftovers from a factory go
  to the center; the first to take from the center also takes the first
  player marker.

{BOLD}PATTERN LINES:{RESET}
  Line N holds N tiles of one color. Full lines move one tile to the wall
  at round end; extra tiles fall to the floor.

{BOLD}SCORING:{RESET}
  A wall tile scores 1, or the length of the row run plus the column run
  it joins. Floor costs -1 -1 -2 -2 -2 -3 -3. End bonuses: +2 per full row,
  +7 per full column, +10 per color placed five times.

{BOLD}GAME END:{RESET}
  After the round in which any player completes a wall row.

{BOLD}CONTROLS:{RESET}
  number  select an option
  b       back to the first step
  h       this help
  q       quit
"
    )
}
