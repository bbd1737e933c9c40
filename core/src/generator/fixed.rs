use alloc::vec::Vec;

use super::*;

/// Places mines at known coordinates, for puzzles, replays and tests.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedMineGenerator {
    mine_coords: Vec<Coord2>,
}

impl FixedMineGenerator {
    pub fn new(mine_coords: impl Into<Vec<Coord2>>) -> Self {
        Self {
            mine_coords: mine_coords.into(),
        }
    }
}

impl MineGenerator for FixedMineGenerator {
    fn generate(self, board: &mut Board, mines: CellCount) -> Result<()> {
        let actual = self.mine_coords.len() as CellCount;
        if actual != mines {
            return Err(ConfigError::MineCountMismatch {
                expected: mines,
                actual,
            }
            .into());
        }
        board.place_mines_at(&self.mine_coords)
    }
}
