//! Tuning knobs of the [`SearchEngine`](crate::engine::SearchEngine) and the
//! configuration errors shared with the [`DirectionSet`](crate::neighbors::DirectionSet).

use crate::Point;

use std::time::Duration;

/// Options for how a search is scheduled and bounded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// The delay between two consecutive expansions.
    ///
    /// A zero interval is allowed and makes every expansion due immediately.
    pub step_interval: Duration,
    /// The number of expansions after which a run gives up with
    /// [`NoPath::IterationCap`](crate::NoPath::IterationCap).
    pub max_iterations: usize,
}

impl SearchConfig {
    pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

    /// Upper end of the speed scale accepted by [`with_speed`](SearchConfig::with_speed).
    pub const MAX_SPEED: u8 = 100;

    /// Runs without any delay. Useful for tests and headless tools.
    pub const INSTANT: SearchConfig = SearchConfig {
        step_interval: Duration::ZERO,
        max_iterations: SearchConfig::DEFAULT_MAX_ITERATIONS,
    };

    /// Creates a config from a speed in `0..=100`, where `100` means no delay
    /// and every step down adds one millisecond between expansions.
    ///
    /// Values above [`MAX_SPEED`](SearchConfig::MAX_SPEED) are clamped.
    pub fn with_speed(speed: u8) -> SearchConfig {
        let speed = speed.min(Self::MAX_SPEED);
        SearchConfig {
            step_interval: Duration::from_millis(u64::from(Self::MAX_SPEED - speed)),
            max_iterations: Self::DEFAULT_MAX_ITERATIONS,
        }
    }

    pub fn with_max_iterations(self, max_iterations: usize) -> SearchConfig {
        SearchConfig {
            max_iterations,
            ..self
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig::with_speed(50)
    }
}

/// A rejected configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The center of the neighborhood is the cell itself and cannot be a move.
    #[error("the center of the neighborhood cannot be enabled")]
    CenterEnabled,
    /// Moves are limited to the 3x3 neighborhood around a cell.
    #[error("offset {0:?} lies outside the 3x3 neighborhood")]
    OffsetOutOfRange(Point),
}
