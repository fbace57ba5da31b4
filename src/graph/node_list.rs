use super::Node;
use crate::{path::Path, NodeID, Point};

/// Append-only arena of the nodes created during one search run.
///
/// A node's `parent` is an index into the same arena and always refers to a
/// node created earlier, so following parents terminates at the start node.
#[derive(Clone, Debug, Default)]
pub struct NodeList {
    nodes: Vec<Node>,
}

impl NodeList {
    pub fn new() -> Self {
        NodeList::default()
    }

    #[allow(unused)]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn add_node(&mut self, node: Node) -> NodeID {
        debug_assert!(node.parent.map_or(true, |parent| parent < self.nodes.len()));
        let id = self.nodes.len();
        self.nodes.push(node);
        id
    }

    /// Follows the parent links from `id` back to the root and returns the
    /// positions in walking order, costed at `id`'s accumulated cost.
    pub fn path_to(&self, id: NodeID) -> Path<Point> {
        let mut steps = vec![];
        let mut current = Some(id);
        while let Some(id) = current {
            let node = &self[id];
            steps.push(node.pos);
            current = node.parent;
        }
        steps.reverse();
        Path::new(steps, self[id].cost_from_start)
    }
}

use std::ops::Index;
impl Index<NodeID> for NodeList {
    type Output = Node;
    #[track_caller]
    fn index(&self, index: NodeID) -> &Node {
        &self.nodes[index]
    }
}

#[test]
fn path_follows_parents() {
    let mut nodes = NodeList::new();
    let root = nodes.add_node(Node::new((0, 0), 0.0, None));
    let _sibling = nodes.add_node(Node::new((0, 1), 1.0, Some(root)));
    let middle = nodes.add_node(Node::new((1, 1), 1.5, Some(root)));
    let leaf = nodes.add_node(Node::new((2, 2), 3.0, Some(middle)));

    let path = nodes.path_to(leaf);
    assert_eq!(path.as_slice(), &[(0, 0), (1, 1), (2, 2)]);
    assert_eq!(path.cost(), 3.0);

    let path = nodes.path_to(root);
    assert_eq!(path.as_slice(), &[(0, 0)]);
    assert_eq!(path.cost(), 0.0);
    assert_eq!(nodes.len(), 4);
}
