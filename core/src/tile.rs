use serde::{Deserialize, Serialize};

/// Player-visible state of a single tile.
///
/// Transitions only leave `Hidden`: `Hidden <-> Marked`, `Hidden -> Number`, `Hidden -> Mine`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileStatus {
    Hidden,
    Marked,
    /// Revealed safe tile carrying the amount of mines around it.
    Number(u8),
    /// Revealed mine.
    Mine,
}

impl Default for TileStatus {
    fn default() -> Self {
        Self::Hidden
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub mine: bool,
    pub status: TileStatus,
}

impl Tile {
    pub const fn new(mine: bool) -> Self {
        Self {
            mine,
            status: TileStatus::Hidden,
        }
    }

    pub const fn is_hidden(self) -> bool {
        matches!(self.status, TileStatus::Hidden)
    }

    pub const fn is_marked(self) -> bool {
        matches!(self.status, TileStatus::Marked)
    }

    pub const fn adjacent_mines(self) -> Option<u8> {
        match self.status {
            TileStatus::Number(count) => Some(count),
            _ => None,
        }
    }

    /// Whether this tile is already in its winning state: safe tiles revealed, mines left alone.
    pub const fn is_settled(self) -> bool {
        match self.status {
            TileStatus::Number(_) => true,
            TileStatus::Hidden | TileStatus::Marked => self.mine,
            TileStatus::Mine => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_with_lowercase_names() {
        assert_eq!(
            serde_json::to_string(&TileStatus::Hidden).unwrap(),
            "\"hidden\""
        );
        assert_eq!(
            serde_json::to_string(&TileStatus::Marked).unwrap(),
            "\"marked\""
        );
        assert_eq!(serde_json::to_string(&TileStatus::Mine).unwrap(), "\"mine\"");
        assert_eq!(
            serde_json::to_string(&TileStatus::Number(3)).unwrap(),
            "{\"number\":3}"
        );
    }

    #[test]
    fn settled_tiles() {
        let hidden_mine = Tile::new(true);
        let hidden_safe = Tile::new(false);
        let marked_mine = Tile {
            mine: true,
            status: TileStatus::Marked,
        };
        let marked_safe = Tile {
            mine: false,
            status: TileStatus::Marked,
        };
        let number = Tile {
            mine: false,
            status: TileStatus::Number(0),
        };
        let exploded = Tile {
            mine: true,
            status: TileStatus::Mine,
        };

        assert!(hidden_mine.is_settled());
        assert!(marked_mine.is_settled());
        assert!(number.is_settled());
        assert!(!hidden_safe.is_settled());
        assert!(!marked_safe.is_settled());
        assert!(!exploded.is_settled());
    }

    #[test]
    fn adjacent_mines_only_for_numbers() {
        assert_eq!(Tile::new(false).adjacent_mines(), None);
        let number = Tile {
            mine: false,
            status: TileStatus::Number(2),
        };
        assert_eq!(number.adjacent_mines(), Some(2));
    }
}
