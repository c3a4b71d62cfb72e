#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Free,
    Blocked,
    Start,
    Unknown,
}

impl Cell {
    pub fn from_char(c: char) -> Self {
        match c {
            '.' | ' ' => Self::Free,
            '#' => Self::Blocked,
            'S' | 's' => Self::Start,
            _ => Self::Unknown,
        }
    }

    pub fn is_walkable(self) -> bool {
        matches!(self, Self::Free | Self::Start)
    }
}
