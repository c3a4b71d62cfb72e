use crate::maze::{ExplorationTree, Move, NodeId, Sensors};

pub trait ExplorationAlgorithm {
    /// picks the next step given the exploration tree built so far, the
    /// node the explorer currently occupies and the live sensor reading
    fn next_move(
        &mut self,
        tree: &ExplorationTree,
        pos: NodeId,
        sensors: &Sensors,
    ) -> eyre::Result<Move>;

    #[allow(dead_code)]
    fn name(&self) -> &'static str;

    fn reset(&mut self);
}
