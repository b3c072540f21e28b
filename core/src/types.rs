/// Single coordinate axis, also used for the side length of the board.
pub type Coord = u8;

/// Count type used for mine counts and total-tile counts.
pub type CellCount = u16;

/// Tile coordinates `(x, y)`, where `x` selects the row and `y` the tile inside it.
pub type Position = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Position {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

/// Number of tiles on a square board with the given side.
pub const fn total_cells(size: Coord) -> CellCount {
    let size = size as CellCount;
    size.saturating_mul(size)
}

const DISPLACEMENTS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `pos`, returning a value only when it remains on a board of side `size`.
fn apply_delta(pos: Position, delta: (i8, i8), size: Coord) -> Option<Position> {
    let (x, y) = pos;
    let (dx, dy) = delta;

    let next_x = x.checked_add_signed(dx)?;
    if next_x >= size {
        return None;
    }

    let next_y = y.checked_add_signed(dy)?;
    if next_y >= size {
        return None;
    }

    Some((next_x, next_y))
}

/// Iterates over the existing 8-neighborhood of a tile, in a fixed order.
#[derive(Debug, Clone)]
pub struct NeighborIter {
    center: Position,
    size: Coord,
    index: u8,
}

impl NeighborIter {
    pub fn new(center: Position, size: Coord) -> Self {
        Self {
            center,
            size,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let delta = *DISPLACEMENTS.get(usize::from(self.index))?;
            self.index += 1;

            if let Some(pos) = apply_delta(self.center, delta, self.size) {
                return Some(pos);
            }
        }
    }
}
