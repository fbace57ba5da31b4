mod search_run;
pub use search_run::SearchRun;

use crate::{path::Cost, path::Path, NodeID, Point};

use std::cmp::Ordering;

/// The state of the most recent search.
#[derive(Clone, Debug, PartialEq)]
pub enum SearchResult {
    /// The search is still expanding nodes.
    Pending,
    /// The end was reached along this path.
    Found(Path<Point>),
    /// The board has no start or no end, so nothing was searched.
    Unreachable(MissingEndpoint),
    /// The search stopped without reaching the end.
    Exhausted(NoPath),
    /// The search was superseded or cancelled before it finished.
    Cancelled,
}

impl SearchResult {
    pub fn is_pending(&self) -> bool {
        matches!(self, SearchResult::Pending)
    }

    pub fn path(&self) -> Option<&Path<Point>> {
        match self {
            SearchResult::Found(path) => Some(path),
            _ => None,
        }
    }
}

/// Which endpoint a board was missing when a search was started.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MissingEndpoint {
    Start,
    End,
    Both,
}

impl MissingEndpoint {
    pub(crate) fn check(start: Option<Point>, end: Option<Point>) -> Result<(Point, Point), Self> {
        match (start, end) {
            (Some(start), Some(end)) => Ok((start, end)),
            (None, Some(_)) => Err(MissingEndpoint::Start),
            (Some(_), None) => Err(MissingEndpoint::End),
            (None, None) => Err(MissingEndpoint::Both),
        }
    }
}

/// Why a search ended without finding the end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoPath {
    /// Every reachable position was expanded.
    OpenSetEmpty,
    /// The configured number of expansions was used up.
    IterationCap,
}

/// Entry of the open queue. Ordered so that `BinaryHeap` pops the lowest `f`
/// first, and among equal `f` the node created first.
#[derive(Clone, Copy, Debug)]
struct Element {
    f: Cost,
    id: NodeID,
}

impl Ord for Element {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.id.cmp(&self.id))
    }
}
impl PartialOrd for Element {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for Element {}

/// Straight-line distance between two positions.
pub(crate) fn heuristic((x1, y1): Point, (x2, y2): Point) -> Cost {
    ((x2 - x1) as Cost).hypot((y2 - y1) as Cost)
}
