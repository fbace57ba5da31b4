use crate::{path::Cost, NodeID, Point};

#[derive(Clone, Debug)]
pub struct Node {
    pub pos: Point,
    pub cost_from_start: Cost,
    /// The node this one was reached from. `None` only for the start node.
    pub parent: Option<NodeID>,
}

impl Node {
    pub fn new(pos: Point, cost_from_start: Cost, parent: Option<NodeID>) -> Node {
        Node {
            pos,
            cost_from_start,
            parent,
        }
    }
}
