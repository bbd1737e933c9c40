use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Strategy used to lay mines on a freshly generated board.
pub trait MineGenerator {
    fn generate(self, board: &mut Board, mines: CellCount) -> Result<()>;
}
