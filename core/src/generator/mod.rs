use crate::*;
pub use random::*;

mod random;

/// Decides where the mines of a new board go.
pub trait MinefieldGenerator {
    fn generate(self, config: GameConfig) -> Result<Vec<Position>>;
}

/// Uses a caller-supplied layout, for reproducible games and tests.
///
/// The layout must hold exactly `config.mines` positions.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedMinefieldGenerator(pub Vec<Position>);

impl MinefieldGenerator for FixedMinefieldGenerator {
    fn generate(self, config: GameConfig) -> Result<Vec<Position>> {
        let Self(mines) = self;
        if mines.len() != usize::from(config.mines) {
            log::warn!(
                "Fixed layout has {} mines but config requested {}",
                mines.len(),
                config.mines
            );
            return Err(GameError::MineCountMismatch);
        }
        Ok(mines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_layout_is_used_as_given() {
        let config = GameConfig::new(3, 2).unwrap();
        let mines = FixedMinefieldGenerator(vec![(2, 2), (0, 1)])
            .generate(config)
            .unwrap();

        assert_eq!(mines, vec![(2, 2), (0, 1)]);
    }

    #[test]
    fn fixed_layout_must_match_mine_count() {
        let config = GameConfig::new(3, 2).unwrap();

        assert_eq!(
            FixedMinefieldGenerator(vec![(0, 0)]).generate(config),
            Err(GameError::MineCountMismatch)
        );
        assert_eq!(
            Board::generate(config, FixedMinefieldGenerator(vec![(0, 0), (1, 1), (2, 2)])),
            Err(GameError::MineCountMismatch)
        );
    }
}
