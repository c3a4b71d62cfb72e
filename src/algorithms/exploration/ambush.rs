use crate::maze::{ExplorationTree, Move, NodeId};

use super::{predicates, thread::AriadneThread};

/// reports whether stepping `candidate` out of `pos` walks into an ambush:
/// a cell that looks unexplored from the tree but is geometrically known,
/// through an already-explored sibling branch, to be the far end of a loop.
///
/// every leaf of the subtree rooted at `pos` is visited with a scratch
/// thread holding the sub-path from `pos` to that leaf; the leaf signals if
/// retracing the candidate move backwards from it lands on `pos` again.
pub fn is_trapped(tree: &ExplorationTree, pos: NodeId, candidate: Move) -> bool {
    let mut scratch = AriadneThread::new();
    scan(tree, pos, &mut scratch, candidate)
}

fn scan(
    tree: &ExplorationTree,
    node: NodeId,
    scratch: &mut AriadneThread,
    candidate: Move,
) -> bool {
    if tree.is_leaf(node) {
        let trapped = predicates::returns_to_origin(scratch, Some(candidate.opposite()));
        if trapped {
            log::debug!(
                "ambush: candidate {candidate} is the far end of explored path {scratch}"
            );
        }
        return trapped;
    }

    for direction in Move::ALL {
        if let Some(child) = tree.child(node, direction) {
            scratch.insert(direction);
            let trapped = scan(tree, child, scratch, candidate);
            scratch.remove();

            if trapped {
                return true;
            }
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    /// the dungeon from the procedure's motivating figure:
    ///
    /// ```text
    ///      (1)
    ///       +------+
    ///       |      |
    /// (0) --(X)    |
    ///       |      |
    ///       +------+
    ///      (2)
    /// ```
    ///
    /// the explorer entered X from the west, walked the (1) branch all the
    /// way around the block (N, E, E, S, S, W, W) and stopped on the cell
    /// one step south of X. heading South out of X would re-enter that
    /// explored corridor from the other side.
    fn looped_tree() -> (ExplorationTree, NodeId) {
        let mut tree = ExplorationTree::new();
        let x = tree.add_child(tree.root(), Move::East);
        let mut node = x;
        for m in [
            Move::North,
            Move::East,
            Move::East,
            Move::South,
            Move::South,
            Move::West,
            Move::West,
        ] {
            node = tree.add_child(node, m);
        }
        (tree, x)
    }

    #[test]
    fn detects_a_loop_entered_from_the_other_side() {
        let (tree, x) = looped_tree();
        assert!(is_trapped(&tree, x, Move::South));
    }

    #[test]
    fn unrelated_candidates_are_not_trapped() {
        let (tree, x) = looped_tree();
        assert!(!is_trapped(&tree, x, Move::North));
        assert!(!is_trapped(&tree, x, Move::West));
    }

    #[test]
    fn a_leaf_position_is_never_trapped() {
        let mut tree = ExplorationTree::new();
        let leaf = tree.add_child(tree.root(), Move::North);
        assert!(!is_trapped(&tree, leaf, Move::North));
    }

    #[test]
    fn a_straight_corridor_is_not_an_ambush() {
        let mut tree = ExplorationTree::new();
        let x = tree.add_child(tree.root(), Move::East);
        let a = tree.add_child(x, Move::North);
        tree.add_child(a, Move::North);
        assert!(!is_trapped(&tree, x, Move::South));
    }
}
