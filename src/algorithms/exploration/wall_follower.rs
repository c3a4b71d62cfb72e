use crate::maze::{ExplorationTree, Move, NodeId, Sensors};

use super::traits::ExplorationAlgorithm;

/// left-hand-rule baseline: hug the wall on the left and keep walking.
/// covers simply-connected dungeons; dungeons with free-standing blocks
/// can orbit them forever, which the run loop's step cap catches.
pub struct WallFollower {
    facing: Move,
    first_move: bool,
}

impl WallFollower {
    pub fn new() -> Self {
        Self {
            facing: Move::North,
            first_move: true,
        }
    }

    fn left_of(&self) -> Move {
        match self.facing {
            Move::North => Move::West,
            Move::West => Move::South,
            Move::South => Move::East,
            Move::East => Move::North,
        }
    }

    fn right_of(&self) -> Move {
        match self.facing {
            Move::North => Move::East,
            Move::East => Move::South,
            Move::South => Move::West,
            Move::West => Move::North,
        }
    }
}

impl Default for WallFollower {
    fn default() -> Self {
        Self::new()
    }
}

impl ExplorationAlgorithm for WallFollower {
    fn next_move(
        &mut self,
        _tree: &ExplorationTree,
        _pos: NodeId,
        sensors: &Sensors,
    ) -> eyre::Result<Move> {
        if self.first_move {
            self.first_move = false;
            for direction in Move::ALL {
                if sensors.open(direction) {
                    self.facing = direction;
                    return Ok(direction);
                }
            }
            eyre::bail!("no valid initial move, completely surrounded");
        }

        let left = self.left_of();
        let straight = self.facing;
        let right = self.right_of();
        let back = self.facing.opposite();

        let next = if sensors.open(left) {
            left
        } else if sensors.open(straight) {
            straight
        } else if sensors.open(right) {
            right
        } else if sensors.open(back) {
            back
        } else {
            eyre::bail!("completely blocked, no valid moves");
        };

        self.facing = next;
        Ok(next)
    }

    fn name(&self) -> &'static str {
        "Wall Follower (Left-Hand Rule)"
    }

    fn reset(&mut self) {
        self.facing = Move::North;
        self.first_move = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_the_left_hand_wall() {
        let tree = ExplorationTree::new();
        let mut follower = WallFollower::new();

        // first move picks the first open direction in priority order
        let sensors = Sensors {
            north: true,
            east: true,
            south: false,
            west: false,
        };
        assert_eq!(
            follower.next_move(&tree, tree.root(), &sensors).unwrap(),
            Move::North
        );

        // facing north with everything open, left means west
        let open = Sensors {
            north: true,
            east: true,
            south: true,
            west: true,
        };
        assert_eq!(
            follower.next_move(&tree, tree.root(), &open).unwrap(),
            Move::West
        );
    }

    #[test]
    fn turns_around_in_a_dead_end() {
        let tree = ExplorationTree::new();
        let mut follower = WallFollower::new();

        let north_only = Sensors {
            north: true,
            east: false,
            south: false,
            west: false,
        };
        follower.next_move(&tree, tree.root(), &north_only).unwrap();

        let south_only = Sensors {
            north: false,
            east: false,
            south: true,
            west: false,
        };
        assert_eq!(
            follower.next_move(&tree, tree.root(), &south_only).unwrap(),
            Move::South
        );
    }
}
