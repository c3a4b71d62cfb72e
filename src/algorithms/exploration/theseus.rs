use crate::maze::{ExplorationTree, Move, NodeId, Sensors};

use super::{ambush, predicates, thread::AriadneThread, traits::ExplorationAlgorithm};

/// depth-first explorer guided by an ariadne thread. prefers unexplored
/// directions in fixed N, E, S, W priority, refuses moves that would close
/// a loop over the path already walked, side-steps ambushes (loops already
/// entered from the other side) and backtracks out of exhausted branches.
pub struct Theseus;

impl Theseus {
    pub fn new() -> Self {
        Self
    }

    fn choose(
        &self,
        tree: &ExplorationTree,
        pos: NodeId,
        mut sensors: Sensors,
    ) -> eyre::Result<Move> {
        let thread = AriadneThread::reconstruct(tree, pos);
        log::debug!("ariadne thread ({} moves): {thread}", thread.len());

        // first direction that is unexplored in the tree, physically open
        // and not the way we just came in
        let mut provisional = None;
        for direction in Move::ALL {
            if tree.child(pos, direction).is_none()
                && sensors.open(direction)
                && tree.incoming(pos) != Some(direction.opposite())
            {
                provisional = Some(direction);
                // closed for the rest of this invocation, used or not
                sensors.close(direction);
                break;
            }
        }

        // dead end or fully explored node: climb back toward the parent.
        // a backtrack can never close a loop, so no further checks apply.
        let Some(mut chosen) = provisional else {
            return self.backtrack(tree, pos);
        };

        let trapped = ambush::is_trapped(tree, pos, chosen);

        if predicates::loops(&thread, Some(chosen)) {
            log::debug!("{chosen} would close a loop over the walked path, turning around");
            chosen = self.backtrack(tree, pos)?;
        }

        if trapped {
            // the provisional direction is known, via a sibling branch, to
            // lead somewhere already visited: retry with it closed so the
            // next-priority direction gets considered from the same cell.
            // each retry closes one more direction, so this bottoms out
            // after at most four attempts.
            log::debug!("{} is an ambush, re-selecting without it", chosen);
            chosen = self.choose(tree, pos, sensors)?;
        }

        Ok(chosen)
    }

    fn backtrack(&self, tree: &ExplorationTree, pos: NodeId) -> eyre::Result<Move> {
        let incoming = tree
            .incoming(pos)
            .ok_or_else(|| eyre::eyre!("nowhere left to go from the exploration root"))?;
        Ok(incoming.opposite())
    }
}

impl Default for Theseus {
    fn default() -> Self {
        Self::new()
    }
}

impl ExplorationAlgorithm for Theseus {
    fn next_move(
        &mut self,
        tree: &ExplorationTree,
        pos: NodeId,
        sensors: &Sensors,
    ) -> eyre::Result<Move> {
        self.choose(tree, pos, *sensors)
    }

    fn name(&self) -> &'static str {
        "Theseus (Ariadne thread)"
    }

    fn reset(&mut self) {}
}
