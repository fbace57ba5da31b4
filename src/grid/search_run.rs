use super::{heuristic, Element, MissingEndpoint, NoPath, SearchResult};
use crate::{
    board::{BoardAdapter, StepMultiplier},
    graph::{Node, NodeList},
    neighbors::DirectionSet,
    path::Cost,
    NodeID, Point, PointMap,
};

use std::collections::BinaryHeap;

/// One execution of the search, advanced one expansion at a time by [`step`](SearchRun::step).
///
/// Every position is in at most one of `open` and `closed`. Both map to the
/// node in `nodes` that currently represents that position.
#[derive(Clone, Debug)]
pub struct SearchRun {
    generation: u64,
    start: Point,
    end: Point,
    nodes: NodeList,
    open: PointMap<NodeID>,
    closed: PointMap<NodeID>,
    // may hold superseded entries; an entry is live iff `open` still maps its position to its id
    queue: BinaryHeap<Element>,
    expansions: usize,
    max_iterations: usize,
}

impl SearchRun {
    /// Resolves the endpoints of `board` and seeds the open set with the start.
    pub fn new<B: BoardAdapter>(
        board: &B,
        generation: u64,
        max_iterations: usize,
    ) -> Result<SearchRun, MissingEndpoint> {
        let (start, end) = MissingEndpoint::check(board.find_start(), board.find_end())?;

        let mut run = SearchRun {
            generation,
            start,
            end,
            nodes: NodeList::new(),
            open: PointMap::default(),
            closed: PointMap::default(),
            queue: BinaryHeap::new(),
            expansions: 0,
            max_iterations,
        };
        run.push_open(Node::new(start, 0.0, None));
        Ok(run)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn expansions(&self) -> usize {
        self.expansions
    }

    pub fn open_positions(&self) -> impl Iterator<Item = Point> + '_ {
        self.open.keys().copied()
    }

    pub fn closed_positions(&self) -> impl Iterator<Item = Point> + '_ {
        self.closed.keys().copied()
    }

    pub fn open_len(&self) -> usize {
        self.open.len()
    }

    pub fn closed_len(&self) -> usize {
        self.closed.len()
    }

    pub fn is_open(&self, pos: Point) -> bool {
        self.open.contains_key(&pos)
    }

    pub fn is_closed(&self, pos: Point) -> bool {
        self.closed.contains_key(&pos)
    }

    /// The best known cost from the start to `pos`, if `pos` has been discovered.
    pub fn cost_at(&self, pos: Point) -> Option<Cost> {
        self.open
            .get(&pos)
            .or_else(|| self.closed.get(&pos))
            .map(|&id| self.nodes[id].cost_from_start)
    }

    /// Performs one expansion.
    ///
    /// Returns `None` while the search goes on, or the final result once the
    /// end was expanded, the open set ran dry, or the iteration cap was hit.
    /// Calling `step` again after a final result repeats the cap or empty-set
    /// result, but never finds anything new.
    pub fn step<B: BoardAdapter>(
        &mut self,
        board: &B,
        directions: &DirectionSet,
    ) -> Option<SearchResult> {
        if self.expansions >= self.max_iterations {
            return Some(SearchResult::Exhausted(NoPath::IterationCap));
        }

        let current_id = match self.pop_lowest() {
            Some(id) => id,
            None => return Some(SearchResult::Exhausted(NoPath::OpenSetEmpty)),
        };
        self.expansions += 1;

        let current_pos = self.nodes[current_id].pos;
        let current_cost = self.nodes[current_id].cost_from_start;
        self.open.remove(&current_pos);
        self.closed.insert(current_pos, current_id);

        log_trace!(
            "expand {:?} at cost {:.3} (open: {}, closed: {})",
            current_pos,
            current_cost,
            self.open.len(),
            self.closed.len()
        );

        if current_pos == self.end {
            return Some(SearchResult::Found(self.nodes.path_to(current_id)));
        }

        for step in directions.moves() {
            let neighbor = step.apply(current_pos);
            if !board.is_in_bounds(neighbor) {
                continue;
            }
            let multiplier = match board.terrain_at(neighbor) {
                None => 1.0,
                Some(StepMultiplier::Finite(factor)) => factor,
                Some(StepMultiplier::Impassable) => continue,
            };
            if self.closed.contains_key(&neighbor) {
                continue;
            }

            let tentative_cost = current_cost + step.weight * multiplier;
            if let Some(&existing) = self.open.get(&neighbor) {
                if self.nodes[existing].cost_from_start <= tentative_cost {
                    continue;
                }
            }
            self.push_open(Node::new(neighbor, tentative_cost, Some(current_id)));
        }

        None
    }

    /// Adds `node` to the arena and makes it the open entry for its position.
    fn push_open(&mut self, node: Node) {
        let f = node.cost_from_start + heuristic(node.pos, self.end);
        let pos = node.pos;
        let id = self.nodes.add_node(node);
        self.open.insert(pos, id);
        self.queue.push(Element { f, id });
    }

    fn pop_lowest(&mut self) -> Option<NodeID> {
        while let Some(Element { id, .. }) = self.queue.pop() {
            if self.open.get(&self.nodes[id].pos) == Some(&id) {
                return Some(id);
            }
        }
        None
    }
}
