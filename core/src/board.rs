use std::collections::VecDeque;
use std::ops::Index;

use ndarray::{Array2, ArrayView1};
use serde::{Deserialize, Serialize};

use crate::*;

/// Square matrix of tiles, indexed `[x, y]`.
///
/// Operations never mutate a board in place, they return the next snapshot. Mine flags are fixed at creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    size: Coord,
    mine_count: CellCount,
    tiles: Array2<Tile>,
}

/// Unchecked board as read from storage, only turned into a [`Board`] through [`Board::from_tiles`].
#[derive(Deserialize)]
struct RawBoard {
    size: Coord,
    tiles: Array2<Tile>,
}

impl TryFrom<RawBoard> for Board {
    type Error = GameError;

    fn try_from(raw: RawBoard) -> Result<Self> {
        Self::from_tiles(raw.size, raw.tiles)
    }
}

impl Board {
    /// Builds an all-hidden board with mines exactly at `mines`.
    pub fn create(size: Coord, mines: &[Position]) -> Result<Self> {
        if size == 0 {
            return Err(GameError::InvalidSize);
        }

        let side = usize::from(size);
        let mut tiles = Array2::from_elem((side, side), Tile::default());
        let mut mine_count: CellCount = 0;

        for &pos in mines {
            if pos.0 >= size || pos.1 >= size {
                log::warn!("Mine at {:?} is outside a {}x{} board", pos, size, size);
                return Err(GameError::InvalidCoords);
            }
            let tile = &mut tiles[pos.to_nd_index()];
            if tile.mine {
                log::warn!("Mine at {:?} listed twice", pos);
                return Err(GameError::DuplicateMine);
            }
            tile.mine = true;
            mine_count += 1;
        }

        log::debug!(
            "Created {}x{} board with {} mines",
            size,
            size,
            mine_count
        );
        Ok(Self {
            size,
            mine_count,
            tiles,
        })
    }

    /// Rebuilds a board from previously saved tiles, checking the shape and every revealed tile.
    pub fn from_tiles(size: Coord, tiles: Array2<Tile>) -> Result<Self> {
        if size == 0 {
            return Err(GameError::InvalidSize);
        }
        let side = usize::from(size);
        if tiles.dim() != (side, side) {
            log::warn!(
                "Board declared as {}x{} holds {:?} tiles",
                size,
                size,
                tiles.dim()
            );
            return Err(GameError::InvalidBoardShape);
        }

        let mine_count = tiles.iter().filter(|tile| tile.mine).count() as CellCount;
        let board = Self {
            size,
            mine_count,
            tiles,
        };
        board.validate_tiles()?;
        Ok(board)
    }

    fn validate_tiles(&self) -> Result<()> {
        for (pos, tile) in self.iter_tiles() {
            let consistent = match tile.status {
                TileStatus::Hidden | TileStatus::Marked => true,
                TileStatus::Mine => tile.mine,
                TileStatus::Number(_) => {
                    !tile.mine && tile.adjacent_mines() == Some(self.adjacent_mine_count(pos))
                }
            };
            if !consistent {
                log::warn!("Tile at {:?} has inconsistent state {:?}", pos, tile);
                return Err(GameError::InvalidTileState);
            }
        }
        Ok(())
    }

    /// Builds an all-hidden board with mines placed by `generator`.
    pub fn generate(config: GameConfig, generator: impl MinefieldGenerator) -> Result<Self> {
        let mines = generator.generate(config)?;
        Self::create(config.size, &mines)
    }

    pub fn size(&self) -> Coord {
        self.size
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn validate_coords(&self, pos: Position) -> Result<Position> {
        if pos.0 < self.size && pos.1 < self.size {
            Ok(pos)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn tile(&self, pos: Position) -> Result<&Tile> {
        let pos = self.validate_coords(pos)?;
        Ok(&self[pos])
    }

    /// Rows of the board, row `x` holding tiles `(x, 0)..(x, size)`.
    pub fn rows(&self) -> impl Iterator<Item = ArrayView1<'_, Tile>> {
        self.tiles.outer_iter()
    }

    pub fn iter_tiles(&self) -> impl Iterator<Item = (Position, &Tile)> {
        self.tiles
            .indexed_iter()
            .map(|((x, y), tile)| ((x as Coord, y as Coord), tile))
    }

    pub fn mine_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.iter_tiles()
            .filter(|(_, tile)| tile.mine)
            .map(|(pos, _)| pos)
    }

    pub fn iter_neighbors(&self, pos: Position) -> NeighborIter {
        NeighborIter::new(pos, self.size)
    }

    pub fn adjacent_mine_count(&self, pos: Position) -> u8 {
        self.iter_neighbors(pos).filter(|&n| self[n].mine).count() as u8
    }

    /// Toggles a hidden tile to marked and back. Revealed tiles are left as they are.
    pub fn mark_tile(&self, pos: Position) -> Result<Self> {
        use TileStatus::*;

        let pos = self.validate_coords(pos)?;
        let status = match self[pos].status {
            Hidden => Marked,
            Marked => Hidden,
            Number(_) | Mine => return Ok(self.clone()),
        };

        let mut board = self.clone();
        board.tiles[pos.to_nd_index()].status = status;
        Ok(board)
    }

    /// Reveals a hidden tile, cascading through every connected tile without adjacent mines.
    pub fn reveal_tile(&self, pos: Position) -> Result<Self> {
        let pos = self.validate_coords(pos)?;
        let mut board = self.clone();
        board.reveal_in_place(pos);
        Ok(board)
    }

    fn reveal_in_place(&mut self, pos: Position) {
        let tile = self[pos];
        if !tile.is_hidden() {
            return;
        }

        if tile.mine {
            log::debug!("Revealed mine at {:?}", pos);
            self.tiles[pos.to_nd_index()].status = TileStatus::Mine;
            return;
        }

        let mut to_visit = VecDeque::from([pos]);
        while let Some(visit) = to_visit.pop_front() {
            // queued more than once, or marked in the meantime
            if !self[visit].is_hidden() {
                continue;
            }

            let count = self.adjacent_mine_count(visit);
            self.tiles[visit.to_nd_index()].status = TileStatus::Number(count);
            log::trace!("Revealed {:?}, adjacent mines: {}", visit, count);

            if count == 0 {
                to_visit.extend(
                    self.iter_neighbors(visit)
                        .filter(|&neighbor| self[neighbor].is_hidden()),
                );
            }
        }
    }

    /// All safe tiles revealed and no mine revealed. Mines do not need to be marked.
    pub fn check_win(&self) -> bool {
        self.tiles.iter().all(|tile| tile.is_settled())
    }

    pub fn check_lose(&self) -> bool {
        self.tiles
            .iter()
            .any(|tile| tile.status == TileStatus::Mine)
    }

    pub fn marked_tiles_count(&self) -> CellCount {
        self.tiles.iter().filter(|tile| tile.is_marked()).count() as CellCount
    }

    /// End of game view after a loss: marks are cleared and every mine is revealed.
    pub fn expose_mines(&self) -> Self {
        let mut board = self.clone();
        for tile in board.tiles.iter_mut().filter(|tile| tile.is_marked()) {
            tile.status = TileStatus::Hidden;
        }
        let mines: Vec<_> = board.mine_positions().collect();
        for pos in mines {
            board.reveal_in_place(pos);
        }
        board
    }
}

impl Index<Position> for Board {
    type Output = Tile;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.tiles[pos.to_nd_index()]
    }
}
