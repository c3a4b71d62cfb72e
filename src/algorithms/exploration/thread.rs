use std::collections::VecDeque;
use std::fmt;

use crate::maze::{ExplorationTree, Move, NodeId};

/// the ariadne thread: the route from the explorer's current position back
/// to the exploration root, most recent move first. the root itself is an
/// implicit sentinel past the oldest move, so an empty thread means "still
/// standing on the root".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AriadneThread {
    moves: VecDeque<Move>,
}

impl AriadneThread {
    pub fn new() -> Self {
        Self {
            moves: VecDeque::new(),
        }
    }

    /// pushes a move onto the most-recent end, O(1)
    pub fn insert(&mut self, m: Move) {
        self.moves.push_front(m);
    }

    /// removes the most-recent move; removing past the root sentinel is a
    /// caller bug, not a recoverable condition
    pub fn remove(&mut self) -> Move {
        self.moves
            .pop_front()
            .expect("removed the root sentinel from the ariadne thread")
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// moves in reverse chronological order (last move taken first)
    pub fn iter(&self) -> impl Iterator<Item = Move> + '_ {
        self.moves.iter().copied()
    }

    /// rebuilds the thread for `target` by depth-first search over the
    /// exploration tree, visiting children in fixed N, E, S, W order.
    /// `target` must be a node of `tree`.
    pub fn reconstruct(tree: &ExplorationTree, target: NodeId) -> Self {
        let mut thread = Self::new();
        let found = Self::descend(tree, tree.root(), target, &mut thread);
        assert!(found, "target node is not part of the exploration tree");
        thread
    }

    /// pushes the node's incoming move, stops on identity match, unwinds
    /// the move again when the whole subtree misses the target
    fn descend(tree: &ExplorationTree, node: NodeId, target: NodeId, thread: &mut Self) -> bool {
        let incoming = tree.incoming(node);
        if let Some(m) = incoming {
            thread.insert(m);
        }

        if node == target {
            return true;
        }

        for direction in Move::ALL {
            if let Some(child) = tree.child(node, direction)
                && Self::descend(tree, child, target, thread)
            {
                return true;
            }
        }

        if incoming.is_some() {
            thread.remove();
        }
        false
    }
}

impl Default for AriadneThread {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AriadneThread {
    /// renders as `"N < E < START"`, most recent move first
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for m in self.iter() {
            write!(f, "{} < ", m.letter())?;
        }
        f.write_str("START")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_then_remove_restores_the_thread() {
        let mut thread = AriadneThread::new();
        thread.insert(Move::East);
        thread.insert(Move::South);
        let before = thread.clone();

        thread.insert(Move::West);
        assert_eq!(thread.remove(), Move::West);
        assert_eq!(thread, before);
    }

    #[test]
    fn iterates_most_recent_first() {
        let mut thread = AriadneThread::new();
        thread.insert(Move::East);
        thread.insert(Move::North);
        assert_eq!(thread.iter().collect::<Vec<_>>(), [Move::North, Move::East]);
    }

    #[test]
    #[should_panic(expected = "root sentinel")]
    fn removing_past_the_sentinel_panics() {
        AriadneThread::new().remove();
    }

    #[test]
    fn display_tags_the_oldest_move_as_start() {
        let mut thread = AriadneThread::new();
        assert_eq!(thread.to_string(), "START");

        thread.insert(Move::East);
        thread.insert(Move::South);
        assert_eq!(thread.to_string(), "S < E < START");
    }

    #[test]
    fn reconstruct_follows_the_ancestor_chain() {
        let mut tree = ExplorationTree::new();
        let root = tree.root();
        // decoy branch visited first by the dfs
        let north = tree.add_child(root, Move::North);
        tree.add_child(north, Move::East);
        // actual route: root -> E -> S -> S
        let east = tree.add_child(root, Move::East);
        let south = tree.add_child(east, Move::South);
        let target = tree.add_child(south, Move::South);

        let thread = AriadneThread::reconstruct(&tree, target);
        assert_eq!(
            thread.iter().collect::<Vec<_>>(),
            [Move::South, Move::South, Move::East]
        );
    }

    #[test]
    fn reconstruct_for_the_root_is_just_the_sentinel() {
        let mut tree = ExplorationTree::new();
        let root = tree.root();
        tree.add_child(root, Move::West);

        let thread = AriadneThread::reconstruct(&tree, root);
        assert_eq!(thread.len(), 0);
    }

    #[test]
    fn reconstruct_then_full_pop_returns_to_the_sentinel() {
        let mut tree = ExplorationTree::new();
        let a = tree.add_child(tree.root(), Move::East);
        let b = tree.add_child(a, Move::North);
        let c = tree.add_child(b, Move::West);

        let mut thread = AriadneThread::reconstruct(&tree, c);
        assert_eq!(thread.remove(), Move::West);
        assert_eq!(thread.remove(), Move::North);
        assert_eq!(thread.remove(), Move::East);
        assert_eq!(thread.len(), 0);
    }
}
