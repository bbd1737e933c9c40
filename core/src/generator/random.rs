use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

/// Uniformly random layout driven by a seed, so a game can be replayed from `(config, seed)`.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMineGenerator {
    seed: u64,
}

impl RandomMineGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(self, board: &mut Board, mines: CellCount) -> Result<()> {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        board.place_mines(mines, &mut rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_layout() {
        let mut first = Board::generate((9, 9));
        let mut second = Board::generate((9, 9));
        RandomMineGenerator::new(42).generate(&mut first, 10).unwrap();
        RandomMineGenerator::new(42).generate(&mut second, 10).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.mine_count(), 10);
    }

    #[test]
    fn full_board_is_all_mines() {
        let mut board = Board::generate((3, 3));
        RandomMineGenerator::new(0).generate(&mut board, 9).unwrap();

        assert!(board.iter().all(|(_, cell)| cell.is_mine));
    }

    #[test]
    fn overfull_board_is_rejected() {
        let mut board = Board::generate((3, 3));
        let result = RandomMineGenerator::new(0).generate(&mut board, 10);

        assert!(matches!(
            result,
            Err(GameError::InvalidConfiguration(ConfigError::TooManyMines { .. }))
        ));
    }
}
