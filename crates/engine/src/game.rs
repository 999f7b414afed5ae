//! Game state machine: turn order, drafting, round end and game end

use crate::bag::Bag;
use crate::board::PlayerBoard;
use crate::error::ApplyError;
use crate::moves::{DraftDestination, DraftSource, Move};
use crate::supply::{Center, Factory, FACTORY_CAPACITY};
use crate::tiles::{Color, Token, TILES_PER_COLOR, TILE_COLORS};

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 4;

/// Factories on the table: 5, 7 or 9
pub fn num_factories_for_players(num_players: usize) -> usize {
    num_players * 2 + 1
}

/// Game phase. Round end is resolved inside the move that empties the
/// supply, so it is never observable between moves.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Phase {
    Drafting,
    GameOver,
}

/// What happened after a move was applied
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum StepOutcome {
    /// Same round; `player` moves next
    NextTurn { player: usize },
    /// The round was scored and `round` has been set up
    RoundEnded { round: u32 },
    /// Final scoring applied
    GameOver,
}

/// Complete game state. The single owner of every board and tile.
///
/// Cloning is a full deep copy, which is what the search relies on to
/// explore hypothetical moves.
#[derive(Clone, Debug)]
pub struct Game {
    pub players: Vec<PlayerBoard>,
    pub factories: Vec<Factory>,
    pub center: Center,
    pub bag: Bag,

    /// Whose turn it is
    pub current_player: usize,

    /// Who starts the next round (whoever took the marker this round)
    pub first_player_next_round: usize,

    /// Current round, starting at 1
    pub round: u32,

    pub phase: Phase,
}

impl Game {
    /// New game for 2-4 players (clamped); player 0 starts.
    pub fn new(num_players: usize, seed: u64) -> Self {
        let num_players = num_players.clamp(MIN_PLAYERS, MAX_PLAYERS);

        let mut game = Game {
            players: vec![PlayerBoard::new(); num_players],
            factories: vec![Factory::new(); num_factories_for_players(num_players)],
            center: Center::new(),
            bag: Bag::new(seed),
            current_player: 0,
            first_player_next_round: 0,
            round: 1,
            phase: Phase::Drafting,
        };
        game.setup_round();
        game
    }

    pub fn num_players(&self) -> usize {
        self.players.len()
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn current_board(&self) -> &PlayerBoard {
        &self.players[self.current_player]
    }

    /// Refill every factory from the bag and reset the center.
    fn setup_round(&mut self) {
        self.center.reset();
        for factory in &mut self.factories {
            factory.tiles.clear();
            factory.fill(self.bag.draw(FACTORY_CAPACITY));
        }
    }

    /// All factories and the center are out of tiles.
    ///
    /// A marker left alone in the center cannot be drafted without tiles,
    /// so it does not keep the round open.
    pub fn is_round_over(&self) -> bool {
        self.factories.iter().all(Factory::is_empty) && self.center.is_empty()
    }

    /// Sources that currently hold at least one tile
    pub fn available_sources(&self) -> Vec<DraftSource> {
        let mut sources: Vec<DraftSource> = self
            .factories
            .iter()
            .enumerate()
            .filter(|(_, f)| !f.is_empty())
            .map(|(i, _)| DraftSource::Factory(i))
            .collect();
        if !self.center.is_empty() {
            sources.push(DraftSource::Center);
        }
        sources
    }

    /// Distinct colors at `source` (empty for an unknown factory)
    pub fn source_colors(&self, source: DraftSource) -> Vec<Color> {
        match source {
            DraftSource::Factory(i) => self
                .factories
                .get(i)
                .map(Factory::colors)
                .unwrap_or_default(),
            DraftSource::Center => self.center.colors(),
        }
    }

    /// Tiles of `color` a draft from `source` would take
    pub fn tiles_in_source(&self, source: DraftSource, color: Color) -> usize {
        match source {
            DraftSource::Factory(i) => self.factories.get(i).map_or(0, |f| f.count(color)),
            DraftSource::Center => self.center.count(color),
        }
    }

    /// Every legal move for the current player.
    ///
    /// Factories in index order, then the center; for each source its colors
    /// in display order; for each color the open pattern lines, then the floor.
    pub fn valid_moves(&self) -> Vec<Move> {
        if self.is_game_over() {
            return Vec::new();
        }

        let board = self.current_board();
        let mut moves = Vec::new();

        for source in self.available_sources() {
            for color in self.source_colors(source) {
                for dest in board.valid_placements(color) {
                    moves.push(Move::new(source, color, dest));
                }
            }
        }

        moves
    }

    /// Play `mv` for the current player.
    ///
    /// Rejects the move, leaving the game untouched, when the source holds no
    /// tile of the color (or is out of range) or the destination line cannot
    /// take the color.
    pub fn apply_move(&mut self, mv: Move) -> Result<StepOutcome, ApplyError> {
        if self.is_game_over() {
            return Err(ApplyError::GameOver);
        }

        let available = match mv.source {
            DraftSource::Factory(i) => self
                .factories
                .get(i)
                .ok_or(ApplyError::NoSuchFactory(i))?
                .count(mv.color),
            DraftSource::Center => self.center.count(mv.color),
        };
        if available == 0 {
            log::debug!("rejected {mv}: source is empty of {}", mv.color);
            return Err(ApplyError::EmptySource {
                from: mv.source,
                color: mv.color,
            });
        }

        let p = self.current_player;
        if let DraftDestination::PatternLine(line) = mv.dest {
            if !self.players[p].can_place(line, mv.color) {
                log::debug!("rejected {mv}: destination cannot take it");
                return Err(ApplyError::InvalidDestination {
                    dest: mv.dest,
                    color: mv.color,
                });
            }
        }

        let taken = match mv.source {
            DraftSource::Factory(i) => self.factories[i].take_color(mv.color, &mut self.center),
            DraftSource::Center => {
                let (taken, took_marker) = self.center.take_color(mv.color);
                if took_marker {
                    self.players[p].add_to_floor(Token::FirstPlayerMarker);
                    self.first_player_next_round = p;
                }
                taken
            }
        };
        debug_assert_eq!(taken.len(), available);

        self.players[p].place_tiles(mv.dest, mv.color, taken.len());

        if self.is_round_over() {
            Ok(self.end_round())
        } else {
            self.current_player = (p + 1) % self.num_players();
            Ok(StepOutcome::NextTurn {
                player: self.current_player,
            })
        }
    }

    /// Score the round; either finish the game or set up the next round.
    fn end_round(&mut self) -> StepOutcome {
        for board in &mut self.players {
            let line_leftovers = board.tile_wall();
            self.bag.discard(line_leftovers);
            let floor_tiles = board.score_floor_line();
            self.bag.discard(floor_tiles);
        }
        debug_assert_eq!(self.tile_census(), [TILES_PER_COLOR; TILE_COLORS]);

        log::debug!(
            "round {} scored: {:?}",
            self.round,
            self.players.iter().map(|b| b.score).collect::<Vec<_>>()
        );

        if self.players.iter().any(PlayerBoard::has_completed_row) {
            self.end_game();
            return StepOutcome::GameOver;
        }

        self.round += 1;
        self.current_player = self.first_player_next_round;
        self.setup_round();

        if self.is_round_over() {
            // Bag and discard pile are both exhausted: nothing can be drafted.
            log::debug!("round {} starts with no tiles; ending game", self.round);
            self.end_game();
            return StepOutcome::GameOver;
        }

        StepOutcome::RoundEnded { round: self.round }
    }

    fn end_game(&mut self) {
        self.phase = Phase::GameOver;
        for board in &mut self.players {
            board.score_end_game();
        }
        log::debug!(
            "game over after round {}: {:?}",
            self.round,
            self.players.iter().map(|b| b.score).collect::<Vec<_>>()
        );
    }

    /// Winning seat once the game is over.
    ///
    /// Highest score wins; a tie goes to the most completed wall rows. A tie
    /// on both reports no winner.
    pub fn winner(&self) -> Option<usize> {
        if !self.is_game_over() {
            return None;
        }

        let best = self.players.iter().map(|b| b.score).max()?;
        let leaders: Vec<usize> = (0..self.num_players())
            .filter(|&i| self.players[i].score == best)
            .collect();
        if let [only] = leaders.as_slice() {
            return Some(*only);
        }

        let most_rows = leaders
            .iter()
            .map(|&i| self.players[i].completed_rows())
            .max()?;
        let mut finalists = leaders
            .into_iter()
            .filter(|&i| self.players[i].completed_rows() == most_rows);
        match (finalists.next(), finalists.next()) {
            (Some(winner), None) => Some(winner),
            _ => None,
        }
    }

    /// Per-color count of every tile, wherever it is. Always 20 each.
    pub fn tile_census(&self) -> [usize; TILE_COLORS] {
        let mut counts = self.bag.census();
        let on_table = self
            .factories
            .iter()
            .flat_map(|f| f.tiles.iter())
            .chain(self.center.tiles.iter());
        for tile in on_table {
            counts[tile.index()] += 1;
        }
        for board in &self.players {
            for (total, n) in counts.iter_mut().zip(board.census()) {
                *total += n;
            }
        }
        counts
    }

    /// Total tiles in play; the first-player marker is not counted
    pub fn tile_count(&self) -> usize {
        self.tile_census().iter().sum()
    }
}
