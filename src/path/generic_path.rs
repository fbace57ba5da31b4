use super::Cost;
use crate::Point;

use std::sync::Arc;

/// A route through the grid together with the total cost of walking it.
///
/// The first element is where the route starts and the last element is its
/// goal. A `Path` is cheap to clone.
#[derive(Debug, Clone, PartialEq)]
pub struct Path<P> {
    path: Arc<[P]>,
    cost: Cost,
}

impl<P> Path<P> {
    pub fn new(path: Vec<P>, cost: Cost) -> Path<P> {
        Path {
            path: path.into(),
            cost,
        }
    }

    /// The total cost of the route, excluding the cell it starts on.
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// Number of positions on the route, including both endpoints.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, P> {
        self.path.iter()
    }

    pub fn as_slice(&self) -> &[P] {
        &self.path
    }
}

impl<P: Copy> Path<P> {
    pub fn start(&self) -> Option<P> {
        self.path.first().copied()
    }

    pub fn end(&self) -> Option<P> {
        self.path.last().copied()
    }
}

impl Path<Point> {
    /// The offset taken by each step, in walking order.
    pub fn steps(&self) -> impl Iterator<Item = Point> + '_ {
        self.path
            .windows(2)
            .map(|pair| (pair[1].0 - pair[0].0, pair[1].1 - pair[0].1))
    }
}

impl<P> std::ops::Index<usize> for Path<P> {
    type Output = P;
    #[track_caller]
    fn index(&self, index: usize) -> &P {
        &self.path[index]
    }
}

impl<'a, P> IntoIterator for &'a Path<P> {
    type Item = &'a P;
    type IntoIter = std::slice::Iter<'a, P>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
