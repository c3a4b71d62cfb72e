use super::moves::Move;

/// stable handle into the exploration tree; node identity is index identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug)]
struct Node {
    incoming: Option<Move>,
    parent: Option<NodeId>,
    children: [Option<NodeId>; 4],
}

/// the map built during exploration: a tree rooted at the first cell
/// visited, one node per path taken into a cell. physical loops in the
/// dungeon show up as distinct nodes with coinciding geometry, never as
/// back-edges.
#[derive(Debug)]
pub struct ExplorationTree {
    nodes: Vec<Node>,
}

impl ExplorationTree {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                incoming: None,
                parent: None,
                children: [None; 4],
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// the move that led into this node; `None` only for the root
    pub fn incoming(&self, id: NodeId) -> Option<Move> {
        self.nodes[id.0].incoming
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    pub fn child(&self, id: NodeId, direction: Move) -> Option<NodeId> {
        self.nodes[id.0].children[direction.index()]
    }

    /// no explored child in any direction
    pub fn is_leaf(&self, id: NodeId) -> bool {
        self.nodes[id.0].children.iter().all(Option::is_none)
    }

    /// records a step into unexplored territory; run-loop (collaborator)
    /// API only, the decision core reads the tree but never grows it
    pub fn add_child(&mut self, id: NodeId, direction: Move) -> NodeId {
        debug_assert!(
            self.child(id, direction).is_none(),
            "direction {direction} already explored from this node"
        );

        let child = NodeId(self.nodes.len());
        self.nodes.push(Node {
            incoming: Some(direction),
            parent: Some(id),
            children: [None; 4],
        });
        self.nodes[id.0].children[direction.index()] = Some(child);
        child
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }
}

impl Default for ExplorationTree {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_has_no_incoming_move() {
        let tree = ExplorationTree::new();
        assert_eq!(tree.incoming(tree.root()), None);
        assert_eq!(tree.parent(tree.root()), None);
        assert!(tree.is_leaf(tree.root()));
    }

    #[test]
    fn children_link_both_ways() {
        let mut tree = ExplorationTree::new();
        let root = tree.root();
        let east = tree.add_child(root, Move::East);

        assert_eq!(tree.child(root, Move::East), Some(east));
        assert_eq!(tree.parent(east), Some(root));
        assert_eq!(tree.incoming(east), Some(Move::East));
        assert!(!tree.is_leaf(root));
        assert!(tree.is_leaf(east));
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn identity_is_by_handle_not_by_move() {
        let mut tree = ExplorationTree::new();
        let root = tree.root();
        let a = tree.add_child(root, Move::North);
        let b = tree.add_child(a, Move::East);
        let c = tree.add_child(b, Move::North);

        // two distinct nodes both entered via North
        assert_eq!(tree.incoming(a), tree.incoming(c));
        assert_ne!(a, c);
    }
}
