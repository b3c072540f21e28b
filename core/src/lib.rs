use serde::{Deserialize, Serialize};

pub use board::*;
pub use error::*;
pub use generator::*;
pub use session::*;
pub use tile::*;
pub use types::*;

mod board;
mod error;
mod generator;
mod session;
mod tile;
mod types;

/// Board side and mine count of a game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Validated config: at least one tile, and at least one tile left without a mine.
    pub fn new(size: Coord, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(size, mines);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(GameError::InvalidSize);
        }
        if self.safe_cells() == 0 {
            return Err(GameError::TooManyMines);
        }
        Ok(())
    }

    pub const fn total_cells(&self) -> CellCount {
        total_cells(self.size)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(10, 10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.total_cells(), 100);
        assert_eq!(config.safe_cells(), 90);
    }

    #[test]
    fn config_rejects_zero_size() {
        assert_eq!(GameConfig::new(0, 0), Err(GameError::InvalidSize));
    }

    #[test]
    fn config_rejects_board_without_safe_tiles() {
        assert_eq!(GameConfig::new(2, 4), Err(GameError::TooManyMines));
        assert_eq!(GameConfig::new(2, 5), Err(GameError::TooManyMines));
        assert!(GameConfig::new(2, 3).is_ok());
    }

    #[test]
    fn config_deserializes_from_json() {
        let config: GameConfig = serde_json::from_str(r#"{"size":16,"mines":40}"#).unwrap();
        assert_eq!(config, GameConfig::new_unchecked(16, 40));
    }
}
