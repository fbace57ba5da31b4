//! Incremental best-first search on weighted 2D grids.
//!
//! A [`SearchEngine`](engine::SearchEngine) looks for a cheap route between the
//! start and end cell of a [`Board`](board::Board). Instead of running in one
//! synchronous burst, the search performs exactly one expansion per scheduled
//! resumption, so a consumer can draw the open and closed sets growing frame
//! by frame.
//!
//! ```
//! use weighted_grid_search::prelude::*;
//!
//! let board: Board = "\
//! S..#.
//! ...#.
//! .~.#.
//! .....
//! ....E"
//!     .parse()
//!     .unwrap();
//!
//! let mut engine = SearchEngine::new(SearchConfig::INSTANT);
//! engine.start(&board);
//! engine.run_to_completion();
//!
//! let path = engine.snapshot().path().unwrap();
//! assert_eq!(path[0], (0, 0));
//! assert_eq!(path[path.len() - 1], (4, 4));
//! ```
//!
//! ## Cargo features
//! - `log`: emit `debug`/`trace` records through the [`log`](https://docs.rs/log) facade.

// a Macro to forward to log::trace, compiled out without the log feature
#[cfg(feature = "log")]
macro_rules! log_trace {
    ($($arg: tt)*) => {
        log::trace!($($arg)*)
    };
}
#[cfg(not(feature = "log"))]
macro_rules! log_trace {
    // does nothing without log feature
    ($($arg: tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg: tt)*) => {
        log::debug!($($arg)*)
    };
}
#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg: tt)*) => {};
}

pub mod board;
pub mod config;
pub mod engine;
mod graph;
mod grid;
pub mod neighbors;
pub mod path;

pub use grid::{MissingEndpoint, NoPath, SearchResult};

/// A position on the grid. Offsets use the same type.
pub type Point = (isize, isize);

/// A [`HashMap`](hashbrown::HashMap) keyed by grid positions.
pub type PointMap<V> = hashbrown::HashMap<Point, V>;
/// A [`HashSet`](hashbrown::HashSet) of grid positions.
pub type PointSet = hashbrown::HashSet<Point>;

pub(crate) type NodeID = usize;

/// The types needed for most applications.
pub mod prelude {
    pub use crate::{
        board::{Board, BoardAdapter, BoardError, StepMultiplier, TerrainKind},
        config::{ConfigError, SearchConfig},
        engine::{Resume, SearchEngine, Snapshot},
        neighbors::{DirectionSet, Move},
        path::{Cost, Path},
        MissingEndpoint, NoPath, Point, PointMap, PointSet, SearchResult,
    };
}
