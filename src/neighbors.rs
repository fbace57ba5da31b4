//! The movement rules of a search: which of the 8 surrounding cells can be
//! reached from a cell in one step, and how far that step is.

use crate::{config::ConfigError, path::Cost, Point};

use std::cell::OnceCell;

/// A single enabled step: the offset to add to a position and its base weight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Move {
    pub offset: Point,
    /// Euclidean length of `offset`: `1` for orthogonal and `√2` for diagonal steps.
    pub weight: Cost,
}

impl Move {
    fn new(offset: Point) -> Move {
        let (dx, dy) = offset;
        Move {
            offset,
            weight: ((dx * dx + dy * dy) as Cost).sqrt(),
        }
    }

    /// The position reached by taking this step from `pos`.
    pub fn apply(&self, pos: Point) -> Point {
        (pos.0 + self.offset.0, pos.1 + self.offset.1)
    }
}

/// A 3x3 neighborhood of enabled offsets around the origin.
///
/// `grid[y][x]` corresponds to the offset `(x - 1, y - 1)`. The center is
/// never enabled. The list of [`Move`]s is derived on first use and rebuilt
/// after every change.
#[derive(Clone, Debug)]
pub struct DirectionSet {
    grid: [[bool; 3]; 3],
    moves: OnceCell<Vec<Move>>,
}

impl DirectionSet {
    /// All 8 surrounding cells.
    pub fn all() -> DirectionSet {
        DirectionSet {
            grid: [[true, true, true], [true, false, true], [true, true, true]],
            moves: OnceCell::new(),
        }
    }

    /// Only the 4 orthogonal neighbors.
    pub fn orthogonal() -> DirectionSet {
        DirectionSet {
            grid: [[false, true, false], [true, false, true], [false, true, false]],
            moves: OnceCell::new(),
        }
    }

    /// Builds a set from a 3x3 grid indexed as `grid[y][x]`.
    pub fn from_grid(grid: [[bool; 3]; 3]) -> Result<DirectionSet, ConfigError> {
        if grid[1][1] {
            return Err(ConfigError::CenterEnabled);
        }
        Ok(DirectionSet {
            grid,
            moves: OnceCell::new(),
        })
    }

    pub fn grid(&self) -> [[bool; 3]; 3] {
        self.grid
    }

    pub fn is_enabled(&self, (dx, dy): Point) -> bool {
        Self::cell(dx, dy).map_or(false, |(x, y)| self.grid[y][x])
    }

    /// Enables or disables the step by `offset`.
    pub fn set(&mut self, offset: Point, enabled: bool) -> Result<(), ConfigError> {
        let (x, y) = Self::cell(offset.0, offset.1).ok_or(ConfigError::OffsetOutOfRange(offset))?;
        if (x, y) == (1, 1) {
            if enabled {
                return Err(ConfigError::CenterEnabled);
            }
            return Ok(());
        }
        if self.grid[y][x] != enabled {
            self.grid[y][x] = enabled;
            self.moves = OnceCell::new();
        }
        Ok(())
    }

    /// Flips the step by `offset` and returns whether it is now enabled.
    pub fn toggle(&mut self, offset: Point) -> Result<bool, ConfigError> {
        let enabled = !self.is_enabled(offset);
        self.set(offset, enabled)?;
        Ok(enabled)
    }

    /// The enabled steps, ordered column by column from `(-1, -1)` to `(1, 1)`.
    pub fn moves(&self) -> &[Move] {
        self.moves.get_or_init(|| {
            let mut moves = Vec::with_capacity(8);
            for x in 0..3 {
                for y in 0..3 {
                    if self.grid[y][x] {
                        moves.push(Move::new((x as isize - 1, y as isize - 1)));
                    }
                }
            }
            moves
        })
    }

    fn cell(dx: isize, dy: isize) -> Option<(usize, usize)> {
        if (-1..=1).contains(&dx) && (-1..=1).contains(&dy) {
            Some(((dx + 1) as usize, (dy + 1) as usize))
        } else {
            None
        }
    }
}

impl Default for DirectionSet {
    fn default() -> Self {
        DirectionSet::all()
    }
}

impl PartialEq for DirectionSet {
    fn eq(&self, other: &Self) -> bool {
        self.grid == other.grid
    }
}
