use serde::{Deserialize, Serialize};

use crate::*;

/// Board dimensions, mine count and flag budget for one game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mines: CellCount,
    pub max_flags: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, mines: CellCount, max_flags: CellCount) -> Self {
        Self {
            size,
            mines,
            max_flags,
        }
    }

    /// Validated config where the flag budget equals the mine count.
    pub fn new(size: Coord2, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(size, mines, mines);
        config.validate()?;
        Ok(config)
    }

    pub const fn with_max_flags(self, max_flags: CellCount) -> Self {
        Self { max_flags, ..self }
    }

    pub fn validate(&self) -> Result<()> {
        let (width, height) = self.size;
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyBoard(self.size).into());
        }

        let capacity = self.total_cells();
        if self.mines > capacity {
            return Err(ConfigError::TooManyMines {
                requested: self.mines,
                capacity,
            }
            .into());
        }

        Ok(())
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Difficulty::Classic.config()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    /// 10x10 with 10 mines
    Classic,
    /// 9x9 with 10 mines
    Beginner,
    /// 16x16 with 40 mines
    Intermediate,
    /// 30x16 with 99 mines
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Classic,
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Expert,
    ];

    pub const fn config(self) -> GameConfig {
        use Difficulty::*;
        match self {
            Classic => GameConfig::new_unchecked((10, 10), 10, 10),
            Beginner => GameConfig::new_unchecked((9, 9), 10, 10),
            Intermediate => GameConfig::new_unchecked((16, 16), 40, 40),
            Expert => GameConfig::new_unchecked((30, 16), 99, 99),
        }
    }

    pub const fn name(self) -> &'static str {
        use Difficulty::*;
        match self {
            Classic => "Classic",
            Beginner => "Beginner",
            Intermediate => "Intermediate",
            Expert => "Expert",
        }
    }
}

impl From<Difficulty> for GameConfig {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_defaults_flag_budget_to_mine_count() {
        let config = GameConfig::new((4, 5), 3).unwrap();

        assert_eq!(config.max_flags, 3);
        assert_eq!(config.total_cells(), 20);
        assert_eq!(config.safe_cells(), 17);
    }

    #[test]
    fn rejects_zero_dimensions() {
        assert_eq!(
            GameConfig::new((0, 5), 0),
            Err(GameError::InvalidConfiguration(ConfigError::EmptyBoard((0, 5))))
        );
        assert_eq!(
            GameConfig::new((5, 0), 0),
            Err(GameError::InvalidConfiguration(ConfigError::EmptyBoard((5, 0))))
        );
    }

    #[test]
    fn rejects_more_mines_than_cells_without_clamping() {
        assert_eq!(
            GameConfig::new((2, 2), 5),
            Err(GameError::InvalidConfiguration(ConfigError::TooManyMines {
                requested: 5,
                capacity: 4,
            }))
        );
    }

    #[test]
    fn full_and_empty_boards_are_valid() {
        assert!(GameConfig::new((2, 2), 4).is_ok());
        assert!(GameConfig::new((2, 2), 0).is_ok());
    }

    #[test]
    fn presets_are_valid() {
        for difficulty in Difficulty::ALL {
            assert_eq!(difficulty.config().validate(), Ok(()), "{}", difficulty.name());
        }
        assert_eq!(GameConfig::default(), GameConfig::new((10, 10), 10).unwrap());
    }

    #[test]
    fn config_survives_json() {
        let config = GameConfig::from(Difficulty::Expert).with_max_flags(120);
        let json = serde_json::to_string(&config).unwrap();

        assert_eq!(serde_json::from_str::<GameConfig>(&json).unwrap(), config);
    }
}
