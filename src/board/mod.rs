//! The grid a search runs on.

mod adapter;
pub use adapter::BoardAdapter;

mod terrain;
pub use terrain::{StepMultiplier, TerrainKind};

use crate::{Point, PointMap};

use std::fmt;

/// A rejected board edit or a malformed text board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("position {0:?} is outside the board")]
    OutOfBounds(Point),
    #[error("position {0:?} already holds terrain")]
    Occupied(Point),
    #[error("a board needs a width and height of at least 1")]
    InvalidSize,
    #[error("unknown symbol {symbol:?} at {pos:?}")]
    UnknownSymbol { symbol: char, pos: Point },
    #[error("row {row} has a different length than the first row")]
    RaggedRow { row: usize },
}

/// A fixed-size grid holding at most one [`TerrainKind`] per position.
///
/// Positions without terrain are open ground. At most one start and one end
/// exist at any time: placing a new one removes the previous one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: PointMap<TerrainKind>,
    start: Option<Point>,
    end: Option<Point>,
}

impl Board {
    pub const DEFAULT_WIDTH: usize = 26;
    pub const DEFAULT_HEIGHT: usize = 22;

    pub fn new(width: usize, height: usize) -> Result<Board, BoardError> {
        if width == 0 || height == 0 {
            return Err(BoardError::InvalidSize);
        }
        Ok(Board {
            width,
            height,
            cells: PointMap::default(),
            start: None,
            end: None,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Places `kind` at `pos`.
    ///
    /// Fails if `pos` is outside the board or already holds terrain. Placing a
    /// start or end evicts the previous start or end.
    pub fn insert(&mut self, pos: Point, kind: TerrainKind) -> Result<(), BoardError> {
        if !self.is_in_bounds(pos) {
            return Err(BoardError::OutOfBounds(pos));
        }
        if self.cells.contains_key(&pos) {
            return Err(BoardError::Occupied(pos));
        }

        let slot = match kind {
            TerrainKind::Start => Some(&mut self.start),
            TerrainKind::End => Some(&mut self.end),
            _ => None,
        };
        if let Some(slot) = slot {
            if let Some(prev) = slot.replace(pos) {
                self.cells.remove(&prev);
            }
        }

        self.cells.insert(pos, kind);
        Ok(())
    }

    /// Removes the terrain at `pos`, turning it back into open ground.
    pub fn remove(&mut self, pos: Point) -> Option<TerrainKind> {
        let kind = self.cells.remove(&pos)?;
        match kind {
            TerrainKind::Start => self.start = None,
            TerrainKind::End => self.end = None,
            _ => {}
        }
        Some(kind)
    }

    pub fn clear(&mut self) {
        self.cells.clear();
        self.start = None;
        self.end = None;
    }

    pub fn get(&self, pos: Point) -> Option<TerrainKind> {
        self.cells.get(&pos).copied()
    }

    /// All placed terrain in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, TerrainKind)> + '_ {
        self.cells.iter().map(|(&pos, &kind)| (pos, kind))
    }

    /// The number of positions holding terrain.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board {
            width: Board::DEFAULT_WIDTH,
            height: Board::DEFAULT_HEIGHT,
            cells: PointMap::default(),
            start: None,
            end: None,
        }
    }
}

impl BoardAdapter for Board {
    fn is_in_bounds(&self, (x, y): Point) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    fn terrain_at(&self, pos: Point) -> Option<StepMultiplier> {
        self.cells.get(&pos).map(|kind| kind.multiplier())
    }

    fn find_start(&self) -> Option<Point> {
        self.start
    }

    fn find_end(&self) -> Option<Point> {
        self.end
    }
}

/// Parses the text format: one line per row, `.` for open ground and
/// [`TerrainKind::symbol`] for everything else. Leading and trailing blank
/// lines and surrounding whitespace on each row are ignored.
impl std::str::FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Board, BoardError> {
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|row| !row.is_empty())
            .collect();

        let width = rows.first().map_or(0, |row| row.chars().count());
        let mut board = Board::new(width, rows.len())?;

        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(BoardError::RaggedRow { row: y });
            }
            for (x, symbol) in row.chars().enumerate() {
                let pos = (x as isize, y as isize);
                if symbol == '.' {
                    continue;
                }
                let kind = TerrainKind::from_symbol(symbol)
                    .ok_or(BoardError::UnknownSymbol { symbol, pos })?;
                board.insert(pos, kind)?;
            }
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..self.width {
                let symbol = self
                    .get((x as isize, y as isize))
                    .map_or('.', TerrainKind::symbol);
                write!(f, "{}", symbol)?;
            }
        }
        Ok(())
    }
}
