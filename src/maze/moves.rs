use std::fmt;

/// cardinal move vocabulary, in the fixed priority order used everywhere
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    North,
    East,
    South,
    West,
}

impl Move {
    /// every direction, in selection priority order
    pub const ALL: [Move; 4] = [Self::North, Self::East, Self::South, Self::West];

    pub fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// stable index into per-direction storage (child slots, sensor flags)
    pub fn index(self) -> usize {
        match self {
            Self::North => 0,
            Self::East => 1,
            Self::South => 2,
            Self::West => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
        }
    }

    pub fn letter(self) -> char {
        match self {
            Self::North => 'N',
            Self::East => 'E',
            Self::South => 'S',
            Self::West => 'W',
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// one sensor reading: which of the four directions are physically open
/// from the cell the explorer currently occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sensors {
    pub north: bool,
    pub east: bool,
    pub south: bool,
    pub west: bool,
}

impl Sensors {
    pub fn open(&self, direction: Move) -> bool {
        match direction {
            Move::North => self.north,
            Move::East => self.east,
            Move::South => self.south,
            Move::West => self.west,
        }
    }

    pub fn close(&mut self, direction: Move) {
        match direction {
            Move::North => self.north = false,
            Move::East => self.east = false,
            Move::South => self.south = false,
            Move::West => self.west = false,
        }
    }
}
