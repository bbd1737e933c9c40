use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - NotStarted -> InProgress (new game)
/// - InProgress -> Won
/// - InProgress -> Lost
/// - any -> InProgress (new game)
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No game has been started yet
    #[default]
    NotStarted,
    /// Accepting reveals and flags
    InProgress,
    /// Every safe cell is revealed
    Won,
    /// A mine was revealed
    Lost,
}

impl Phase {
    pub const fn is_in_progress(self) -> bool {
        matches!(self, Self::InProgress)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagOutcome {
    NoChange,
    Flagged,
    Unflagged,
}

impl FlagOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed(CellCount),
    HitMine,
    Won(CellCount),
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// A single game from creation to win or loss.
///
/// The state owns its board outright; a front end keeps one instance and drives it through
/// [`GameState::reveal`] and [`GameState::toggle_flag`]. Starting over replaces the whole value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    config: GameConfig,
    board: Board,
    score: CellCount,
    flag_count: CellCount,
    phase: Phase,
    triggered_mine: Option<Coord2>,
}

impl GameState {
    /// Idle state shown before the first game: an unmined board that ignores all input.
    pub fn not_started(config: GameConfig) -> Self {
        Self {
            config,
            board: Board::generate(config.size),
            score: 0,
            flag_count: 0,
            phase: Phase::NotStarted,
            triggered_mine: None,
        }
    }

    pub fn new_game(config: GameConfig, generator: impl MineGenerator) -> Result<Self> {
        if let Err(err) = config.validate() {
            log::debug!("Rejected game config {:?}: {}", config, err);
            return Err(err);
        }

        let mut board = Board::generate(config.size);
        generator.generate(&mut board, config.mines)?;
        board.compute_adjacency();

        log::debug!(
            "New game on a {:?} board with {} mines, {} flags allowed",
            config.size,
            config.mines,
            config.max_flags
        );

        Ok(Self {
            config,
            board,
            score: 0,
            flag_count: 0,
            phase: Phase::InProgress,
            triggered_mine: None,
        })
    }

    pub fn new_seeded(config: GameConfig, seed: u64) -> Result<Self> {
        Self::new_game(config, RandomMineGenerator::new(seed))
    }

    /// Replaces this game with a fresh one on the same config, keeping the old one on failure.
    pub fn restart(&mut self, generator: impl MineGenerator) -> Result<()> {
        *self = Self::new_game(self.config, generator)?;
        Ok(())
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase.is_finished()
    }

    /// Cells revealed by the player this game.
    pub fn score(&self) -> CellCount {
        self.score
    }

    pub fn flag_count(&self) -> CellCount {
        self.flag_count
    }

    pub fn flags_left(&self) -> CellCount {
        self.config.max_flags.saturating_sub(self.flag_count)
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<Cell> {
        self.board.cell_at(coords)
    }

    pub fn reveal(&mut self, coords: Coord2) -> RevealOutcome {
        use RevealOutcome::*;

        if !self.phase.is_in_progress() {
            log::trace!("Ignoring reveal at {:?} in phase {:?}", coords, self.phase);
            return NoChange;
        }

        let Some(&cell) = self.board.get(coords) else {
            return NoChange;
        };
        if !cell.is_revealable() {
            return NoChange;
        }

        if cell.is_mine {
            self.board.reveal_all_mines();
            self.triggered_mine = Some(coords);
            self.phase = Phase::Lost;
            log::debug!("Mine hit at {:?}, game lost with score {}", coords, self.score);
            return HitMine;
        }

        let revealed = self.board.reveal(coords);
        self.score += revealed;

        if self.board.is_cleared() {
            self.phase = Phase::Won;
            log::debug!("Board cleared, game won with score {}", self.score);
            Won(revealed)
        } else {
            Revealed(revealed)
        }
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> FlagOutcome {
        use FlagOutcome::*;

        if !self.phase.is_in_progress() {
            log::trace!("Ignoring flag at {:?} in phase {:?}", coords, self.phase);
            return NoChange;
        }

        let Some(&cell) = self.board.get(coords) else {
            return NoChange;
        };

        match (cell.is_revealed, cell.is_flagged) {
            (true, _) => NoChange,
            (false, true) => {
                self.board.set_flagged(coords, false);
                self.flag_count -= 1;
                Unflagged
            }
            (false, false) if self.flag_count >= self.config.max_flags => {
                log::trace!("Flag limit of {} reached", self.config.max_flags);
                NoChange
            }
            (false, false) => {
                self.board.set_flagged(coords, true);
                self.flag_count += 1;
                Flagged
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::not_started(GameConfig::default())
    }
}
