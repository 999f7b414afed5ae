//! Interactive player reading choices from a terminal

use std::io::{self, BufRead, BufReader, Stdin, Write};

use azul_ai::Player;
use azul_engine::{DraftSource, Game, Move};
use log::warn;

use crate::display::{
    render_color_prompt, render_game, render_help, render_line_prompt, render_source_prompt, BOLD,
    RED, RESET,
};

enum Pick {
    Index(usize),
    Back,
}

enum Input {
    Choice(usize),
    Back,
    Help,
    Quit,
    Invalid,
}

/// Push a prompt out before blocking on input. Failures are logged; the
/// read still goes ahead.
fn flush_prompt(out: &mut impl Write) -> bool {
    match out.flush() {
        Ok(()) => true,
        Err(e) => {
            warn!("failed to flush prompt: {e}");
            false
        }
    }
}

/// Picks moves in three steps: source, color, then line.
///
/// Reads from any `BufRead`; `q` or end of input gives up the game.
pub struct HumanPlayer<R = BufReader<Stdin>> {
    name: String,
    seat_names: Vec<String>,
    input: R,
}

impl HumanPlayer {
    pub fn stdin(name: impl Into<String>) -> Self {
        Self::new(name, BufReader::new(io::stdin()))
    }
}

impl<R: BufRead> HumanPlayer<R> {
    pub fn new(name: impl Into<String>, input: R) -> Self {
        Self {
            name: name.into(),
            seat_names: Vec::new(),
            input,
        }
    }

    /// Labels used when drawing the table before each prompt
    pub fn with_seat_names(mut self, names: Vec<String>) -> Self {
        self.seat_names = names;
        self
    }

    fn read(&mut self, prompt: &str) -> Input {
        print!("\n  {prompt} ");
        flush_prompt(&mut io::stdout());

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => return Input::Quit,
            Ok(_) => {}
            Err(e) => {
                warn!("failed to read input: {e}");
                return Input::Quit;
            }
        }

        match line.trim().to_ascii_lowercase().as_str() {
            "b" | "back" => Input::Back,
            "h" | "help" => Input::Help,
            "q" | "quit" => Input::Quit,
            s => s.parse::<usize>().map_or(Input::Invalid, Input::Choice),
        }
    }

    /// Ask for a 1-based option in `1..=n`. None when the player quits.
    fn pick(&mut self, n: usize, prompt: &str) -> Option<Pick> {
        loop {
            match self.read(prompt) {
                Input::Choice(k) if (1..=n).contains(&k) => return Some(Pick::Index(k - 1)),
                Input::Choice(_) | Input::Invalid => {
                    println!("  {RED}Invalid choice. Enter 1-{n}{RESET}");
                }
                Input::Help => print!("{}", render_help()),
                Input::Back => return Some(Pick::Back),
                Input::Quit => return None,
            }
        }
    }
}

impl<R: BufRead> Player for HumanPlayer<R> {
    fn choose_move(&mut self, game: &Game, moves: &[Move]) -> Option<Move> {
        if moves.is_empty() {
            return None;
        }
        let board = game.current_board();

        'source: loop {
            print!("{}", render_game(game, &self.seat_names));
            let sources = game.available_sources();
            print!("{}", render_source_prompt(game, &sources));
            let prompt = "Enter number ('h' help, 'q' quit):";
            let Pick::Index(i) = self.pick(sources.len(), prompt)? else {
                continue 'source;
            };
            let source: DraftSource = sources[i];

            let colors = game.source_colors(source);
            print!("{}", render_color_prompt(game, source, &colors));
            let Pick::Index(i) = self.pick(colors.len(), "Enter number ('b' back):")? else {
                continue 'source;
            };
            let color = colors[i];

            let count = game.tiles_in_source(source, color);
            let dests = board.valid_placements(color);
            print!("{}", render_line_prompt(board, color, count, &dests));
            let Pick::Index(i) = self.pick(dests.len(), "Enter number ('b' back):")? else {
                continue 'source;
            };

            let mv = Move::new(source, color, dests[i]);
            if moves.contains(&mv) {
                return Some(mv);
            }
            println!("  {RED}{BOLD}That move is not available.{RESET}");
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn human(script: &str) -> HumanPlayer<Cursor<Vec<u8>>> {
        HumanPlayer::new("You", Cursor::new(script.as_bytes().to_vec()))
    }

    #[test]
    fn test_three_step_selection() {
        let game = Game::new(2, 11);
        let moves = game.valid_moves();
        let source = game.available_sources()[0];
        let color = game.source_colors(source)[0];

        let mut player = human("1\n1\n6\n");
        let mv = player.choose_move(&game, &moves).unwrap();
        assert_eq!(mv.source, source);
        assert_eq!(mv.color, color);
        assert_eq!(mv.dest, azul_engine::DraftDestination::Floor);
        assert!(moves.contains(&mv));
    }

    #[test]
    fn test_back_help_and_bad_input() {
        let game = Game::new(2, 11);
        let moves = game.valid_moves();
        let second = game.available_sources()[1];

        // Pick factory 1, go back, ask for help, mistype, then factory 2.
        let mut player = human("1\nb\nh\n99\nx\n2\n1\n1\n");
        let mv = player.choose_move(&game, &moves).unwrap();
        assert_eq!(mv.source, second);
        assert!(moves.contains(&mv));
    }

    #[test]
    fn test_quit_and_eof() {
        let game = Game::new(2, 11);
        let moves = game.valid_moves();

        assert_eq!(human("q\n").choose_move(&game, &moves), None);
        assert_eq!(human("1\n").choose_move(&game, &moves), None);
        assert_eq!(human("").choose_move(&game, &moves), None);
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::ErrorKind::BrokenPipe.into())
        }
    }

    #[test]
    fn test_flush_failure_is_reported() {
        assert!(!flush_prompt(&mut BrokenPipe));
        assert!(flush_prompt(&mut Vec::<u8>::new()));
    }

    #[test]
    fn test_name() {
        assert_eq!(human("").name(), "You");
    }
}
