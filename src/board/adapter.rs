use super::StepMultiplier;
use crate::Point;

use std::{rc::Rc, sync::Arc};

/// The read-only view of a board that a search needs.
///
/// Implemented by [`Board`](super::Board), but any grid the application
/// already owns can implement it instead.
pub trait BoardAdapter {
    fn is_in_bounds(&self, pos: Point) -> bool;

    /// The terrain at `pos`. `None` means open ground with a multiplier of `1`.
    fn terrain_at(&self, pos: Point) -> Option<StepMultiplier>;

    fn find_start(&self) -> Option<Point>;

    fn find_end(&self) -> Option<Point>;
}

macro_rules! forward_board_adapter {
    ($($ty: ty),*) => {$(
        impl<T: BoardAdapter + ?Sized> BoardAdapter for $ty {
            fn is_in_bounds(&self, pos: Point) -> bool {
                (**self).is_in_bounds(pos)
            }
            fn terrain_at(&self, pos: Point) -> Option<StepMultiplier> {
                (**self).terrain_at(pos)
            }
            fn find_start(&self) -> Option<Point> {
                (**self).find_start()
            }
            fn find_end(&self) -> Option<Point> {
                (**self).find_end()
            }
        }
    )*};
}

forward_board_adapter!(&T, Box<T>, Rc<T>, Arc<T>);
