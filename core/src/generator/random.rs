use std::collections::BTreeSet;

use super::*;

/// Uniform placement by rejection sampling: draw a position, retry if it already holds a mine.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMinefieldGenerator {
    seed: u64,
}

impl RandomMinefieldGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MinefieldGenerator for RandomMinefieldGenerator {
    fn generate(self, config: GameConfig) -> Result<Vec<Position>> {
        use rand::prelude::*;
        use rand::rngs::SmallRng;

        if config.size == 0 {
            return Err(GameError::InvalidSize);
        }
        // a full board would leave rejection sampling spinning on the last few free tiles
        if config.safe_cells() == 0 {
            log::warn!(
                "Refusing to place {} mines on {} tiles",
                config.mines,
                config.total_cells()
            );
            return Err(GameError::TooManyMines);
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut chosen = BTreeSet::new();
        let mut mines = Vec::with_capacity(config.mines.into());
        while mines.len() < usize::from(config.mines) {
            let pos = (
                rng.random_range(0..config.size),
                rng.random_range(0..config.size),
            );
            if chosen.insert(pos) {
                mines.push(pos);
            }
        }

        log::debug!(
            "Placed {} mines on a {}x{} board with seed {}",
            mines.len(),
            config.size,
            config.size,
            self.seed
        );
        Ok(mines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn places_requested_count_without_duplicates() {
        let config = GameConfig::new(10, 30).unwrap();
        let mines = RandomMinefieldGenerator::new(7).generate(config).unwrap();

        assert_eq!(mines.len(), 30);
        let distinct: BTreeSet<_> = mines.iter().copied().collect();
        assert_eq!(distinct.len(), 30);
        assert!(mines.iter().all(|&(x, y)| x < 10 && y < 10));
    }

    #[test]
    fn same_seed_gives_same_layout() {
        let config = GameConfig::new(8, 10).unwrap();
        let first = RandomMinefieldGenerator::new(42).generate(config).unwrap();
        let second = RandomMinefieldGenerator::new(42).generate(config).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn nearly_full_board_terminates() {
        let config = GameConfig::new(3, 8).unwrap();
        let mines = RandomMinefieldGenerator::new(1).generate(config).unwrap();

        assert_eq!(mines.len(), 8);
    }

    #[test]
    fn rejects_full_board() {
        let config = GameConfig::new_unchecked(3, 9);
        assert_eq!(
            RandomMinefieldGenerator::new(1).generate(config),
            Err(GameError::TooManyMines)
        );
    }

    #[test]
    fn rejects_empty_board() {
        let config = GameConfig::new_unchecked(0, 0);
        assert_eq!(
            RandomMinefieldGenerator::new(1).generate(config),
            Err(GameError::InvalidSize)
        );
    }
}
