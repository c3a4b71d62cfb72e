use std::collections::HashSet;
use std::time::{Duration, Instant};

use crate::algorithms::exploration::ExplorationAlgorithm;
use crate::maze::{ExplorationTree, Grid, Move, NodeId, Position};

pub struct ExplorationReport {
    pub steps: usize,
    pub visited: usize,
    pub reachable: usize,
    pub elapsed: Duration,
}

/// drives an exploration algorithm over a simulated dungeon: senses the
/// four directions at the current cell, asks for one move, applies it to
/// the grid position and the exploration tree, and repeats until every
/// reachable cell has been visited
pub struct BlindSolver<E: ExplorationAlgorithm> {
    algorithm: E,
    delay: Duration,
    max_steps: usize,
}

impl<E: ExplorationAlgorithm> BlindSolver<E> {
    pub fn new(algorithm: E, delay_ms: u64, max_steps: usize) -> Self {
        Self {
            algorithm,
            delay: Duration::from_millis(delay_ms),
            max_steps,
        }
    }

    pub fn solve(&mut self, grid: &Grid) -> eyre::Result<ExplorationReport> {
        let start = grid
            .find_start()
            .ok_or_else(|| eyre::eyre!("map has no start cell"))?;
        let reachable = grid.reachable_from(start);

        log::info!(
            "exploring a {}x{} dungeon, {} reachable cells",
            grid.height(),
            grid.width(),
            reachable
        );

        self.algorithm.reset();

        let mut tree = ExplorationTree::new();
        let mut node = tree.root();
        let mut pos = start;
        let mut visited: HashSet<Position> = HashSet::from([start]);
        let mut steps = 0;
        let started = Instant::now();

        while visited.len() < reachable {
            eyre::ensure!(
                steps < self.max_steps,
                "gave up after {steps} steps with {} of {reachable} cells visited",
                visited.len()
            );

            let sensors = grid.sense(pos);
            let direction = self.algorithm.next_move(&tree, node, &sensors)?;

            let next_pos = pos
                .step(direction, grid.bounds())
                .filter(|p| grid.is_walkable(*p))
                .ok_or_else(|| eyre::eyre!("algorithm walked {direction} into a wall"))?;

            node = self.advance(&mut tree, node, direction)?;
            pos = next_pos;

            if visited.insert(pos) {
                log::debug!(
                    "step {steps}: {direction} to ({}, {}) [new, {}/{}]",
                    pos.row,
                    pos.col,
                    visited.len(),
                    reachable
                );
            } else {
                log::debug!("step {steps}: {direction} to ({}, {})", pos.row, pos.col);
            }

            steps += 1;
            if !self.delay.is_zero() {
                std::thread::sleep(self.delay);
            }
        }

        log::debug!("exploration tree holds {} nodes", tree.len());

        Ok(ExplorationReport {
            steps,
            visited: visited.len(),
            reachable,
            elapsed: started.elapsed(),
        })
    }

    /// keeps the exploration tree in sync with the move just taken: a
    /// reversal of the incoming move climbs to the parent, a direction
    /// already explored re-enters the known child, anything else grows a
    /// fresh node
    fn advance(
        &self,
        tree: &mut ExplorationTree,
        node: NodeId,
        direction: Move,
    ) -> eyre::Result<NodeId> {
        if tree.incoming(node) == Some(direction.opposite()) {
            return tree
                .parent(node)
                .ok_or_else(|| eyre::eyre!("backtracked out of the exploration root"));
        }

        if let Some(child) = tree.child(node, direction) {
            return Ok(child);
        }

        Ok(tree.add_child(node, direction))
    }
}
