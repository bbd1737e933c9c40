use serde::{Deserialize, Serialize};

/// A single board position as stored by the engine.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub is_mine: bool,
    pub is_revealed: bool,
    pub adjacent_mines: u8,
    pub is_flagged: bool,
}

impl Cell {
    /// Safe cell with no adjacent mines.
    pub const fn is_blank(self) -> bool {
        !self.is_mine && self.adjacent_mines == 0
    }

    /// Whether a reveal is allowed to open this cell.
    pub const fn is_revealable(self) -> bool {
        !self.is_revealed && !self.is_flagged
    }

    /// Victory condition for a single cell: mines stay hidden, safe cells are open.
    pub const fn is_settled(self) -> bool {
        self.is_mine != self.is_revealed
    }
}
