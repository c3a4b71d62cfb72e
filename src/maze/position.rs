use super::moves::Move;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn to_index(self, width: usize) -> usize {
        self.row * width + self.col
    }

    pub fn from_index(index: usize, width: usize) -> Self {
        Self::new(index / width, index % width)
    }

    /// north is row - 1, matching the sensor orientation of the grid
    pub fn step(self, direction: Move, bounds: (usize, usize)) -> Option<Self> {
        let (height, width) = bounds;
        match direction {
            Move::North if self.row > 0 => Some(Self::new(self.row - 1, self.col)),
            Move::South if self.row < height - 1 => Some(Self::new(self.row + 1, self.col)),
            Move::West if self.col > 0 => Some(Self::new(self.row, self.col - 1)),
            Move::East if self.col < width - 1 => Some(Self::new(self.row, self.col + 1)),
            _ => None,
        }
    }

    pub fn neighbors(self, bounds: (usize, usize)) -> Vec<(Self, Move)> {
        Move::ALL
            .into_iter()
            .filter_map(|dir| self.step(dir, bounds).map(|pos| (pos, dir)))
            .collect()
    }
}
