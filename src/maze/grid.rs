use std::collections::{HashSet, VecDeque};

use super::{
    cell::Cell,
    moves::{Move, Sensors},
    position::Position,
};

/// bounded grid maze parsed from ascii text, used to simulate the dungeon
/// and answer sensor queries for the explorer
#[derive(Debug, Clone)]
pub struct Grid {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
}

impl Grid {
    /// parses a map where `#` is a wall, `.` is free and `S` marks the
    /// explorer's starting cell; short lines are padded with walls
    pub fn from_text(text: &str) -> eyre::Result<Self> {
        let lines: Vec<&str> = text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .collect();

        let height = lines.len();
        let width = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);

        if height == 0 || width == 0 {
            eyre::bail!("empty map");
        }

        let mut cells = Vec::with_capacity(width * height);
        for line in &lines {
            let mut count = 0;
            for c in line.chars() {
                cells.push(Cell::from_char(c));
                count += 1;
            }
            cells.resize(cells.len() + (width - count), Cell::Blocked);
        }

        let grid = Self {
            cells,
            width,
            height,
        };

        if grid.find_start().is_none() {
            eyre::bail!("map has no start cell (expected exactly one 'S')");
        }

        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn bounds(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    pub fn get(&self, pos: Position) -> Option<Cell> {
        if pos.row < self.height && pos.col < self.width {
            Some(self.cells[pos.to_index(self.width)])
        } else {
            None
        }
    }

    pub fn is_walkable(&self, pos: Position) -> bool {
        self.get(pos).is_some_and(|cell| cell.is_walkable())
    }

    pub fn find_start(&self) -> Option<Position> {
        self.cells
            .iter()
            .position(|&cell| cell == Cell::Start)
            .map(|idx| Position::from_index(idx, self.width))
    }

    /// the four booleans handed to the explorer each step
    pub fn sense(&self, pos: Position) -> Sensors {
        let open = |dir| {
            pos.step(dir, self.bounds())
                .is_some_and(|p| self.is_walkable(p))
        };
        Sensors {
            north: open(Move::North),
            east: open(Move::East),
            south: open(Move::South),
            west: open(Move::West),
        }
    }

    /// number of walkable cells reachable from `start`, bfs over the grid;
    /// the run loop uses this as its coverage target
    pub fn reachable_from(&self, start: Position) -> usize {
        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();

        visited.insert(start);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            for (neighbor, _) in current.neighbors(self.bounds()) {
                if self.is_walkable(neighbor) && visited.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }

        visited.len()
    }
}
