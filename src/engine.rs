//! The long-lived object an application talks to.
//!
//! A [`SearchEngine`] runs one search at a time. [`start`](SearchEngine::start)
//! supersedes whatever ran before, and every expansion afterwards happens at a
//! [`Resume`] point, one expansion per resumption. Between two resumptions the
//! application can read a consistent [`Snapshot`] of the open set, the closed
//! set and the result.
//!
//! Resumptions are scheduled on the engine's own clock, which only moves when
//! [`update`](SearchEngine::update) is called, so the engine can be driven from
//! a frame loop:
//!
//! ```
//! use std::time::Duration;
//! use weighted_grid_search::prelude::*;
//!
//! let board: Board = "S...\n....\n...E".parse().unwrap();
//! let mut engine = SearchEngine::new(SearchConfig::with_speed(90)); // 10ms per expansion
//! engine.start(&board);
//!
//! while engine.snapshot().result().is_pending() {
//!     engine.update(Duration::from_millis(16));
//!     let frame = engine.snapshot();
//!     // draw frame.open_positions(), frame.closed_positions() ...
//!     # let _ = frame;
//! }
//! assert!(engine.snapshot().path().is_some());
//! ```

use crate::{
    board::BoardAdapter,
    config::SearchConfig,
    grid::{SearchResult, SearchRun},
    neighbors::DirectionSet,
    path::{Cost, Path},
    Point,
};

use std::time::Duration;

/// A scheduled continuation of a search run.
///
/// Only a ticket carrying the engine's current generation can advance the
/// engine; tickets of superseded runs are discarded untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resume {
    generation: u64,
    due: Duration,
}

impl Resume {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The engine time at which this resumption becomes due.
    pub fn due(&self) -> Duration {
        self.due
    }
}

/// Runs searches on boards of type `B` and exposes their progress.
#[derive(Debug)]
pub struct SearchEngine<B> {
    config: SearchConfig,
    directions: DirectionSet,
    generation: u64,
    clock: Duration,
    board: Option<B>,
    run: Option<SearchRun>,
    result: SearchResult,
    pending: Option<Resume>,
}

impl<B: BoardAdapter> SearchEngine<B> {
    /// Creates an idle engine. Until the first [`start`](Self::start) its
    /// snapshot is empty and reports [`SearchResult::Cancelled`].
    pub fn new(config: SearchConfig) -> SearchEngine<B> {
        SearchEngine::with_directions(config, DirectionSet::default())
    }

    pub fn with_directions(config: SearchConfig, directions: DirectionSet) -> SearchEngine<B> {
        SearchEngine {
            config,
            directions,
            generation: 0,
            clock: Duration::ZERO,
            board: None,
            run: None,
            result: SearchResult::Cancelled,
            pending: None,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Changes the config. A run in progress keeps its iteration cap, but
    /// uses the new interval from its next resumption on.
    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    pub fn directions(&self) -> &DirectionSet {
        &self.directions
    }

    /// The movement rules, consulted anew on every expansion.
    pub fn directions_mut(&mut self) -> &mut DirectionSet {
        &mut self.directions
    }

    /// The generation of the most recent run. Every [`start`](Self::start) and
    /// every effective [`cancel`](Self::cancel) increments it.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The engine time, advanced by [`update`](Self::update).
    pub fn clock(&self) -> Duration {
        self.clock
    }

    /// The next resumption of the current run, if it is still going.
    pub fn pending(&self) -> Option<Resume> {
        self.pending
    }

    /// Starts a new search on `board`, superseding any run in progress.
    ///
    /// If the board lacks a start or an end the new run finishes immediately
    /// with [`SearchResult::Unreachable`] and `None` is returned. Otherwise the
    /// open set holds just the start and the first resumption is returned.
    pub fn start(&mut self, board: B) -> Option<Resume> {
        self.supersede();

        match SearchRun::new(&board, self.generation, self.config.max_iterations) {
            Ok(run) => {
                log_debug!(
                    "search {} started: {:?} -> {:?}",
                    self.generation,
                    run.start(),
                    run.end()
                );
                let resume = self.schedule(self.clock);
                self.board = Some(board);
                self.run = Some(run);
                self.result = SearchResult::Pending;
                Some(resume)
            }
            Err(missing) => {
                log_debug!("search {} has no endpoint: {:?}", self.generation, missing);
                self.result = SearchResult::Unreachable(missing);
                None
            }
        }
    }

    /// Stops the current run, if it is still pending.
    ///
    /// The open and closed sets are emptied and the result becomes
    /// [`SearchResult::Cancelled`]. A finished run is left as it is.
    pub fn cancel(&mut self) {
        if !self.result.is_pending() {
            return;
        }
        log_debug!("search {} cancelled", self.generation);
        self.supersede();
        self.result = SearchResult::Cancelled;
    }

    /// Performs one expansion of the run `resume` belongs to.
    ///
    /// Returns the next resumption while the run goes on. A stale ticket, from
    /// a superseded run or one already consumed, changes nothing and returns
    /// `None`.
    pub fn resume(&mut self, resume: Resume) -> Option<Resume> {
        if resume.generation != self.generation || self.pending != Some(resume) {
            log_trace!(
                "dropping stale resumption of search {} (current: {})",
                resume.generation,
                self.generation
            );
            return None;
        }
        self.pending = None;

        let (run, board) = match (self.run.as_mut(), self.board.as_ref()) {
            (Some(run), Some(board)) if run.generation() == resume.generation => (run, board),
            _ => return None,
        };

        match run.step(board, &self.directions) {
            None => Some(self.schedule(resume.due)),
            Some(result) => {
                log_debug!(
                    "search {} finished after {} expansions (open: {}, closed: {}): {:?}",
                    self.generation,
                    run.expansions(),
                    run.open_len(),
                    run.closed_len(),
                    result
                );
                self.result = result;
                None
            }
        }
    }

    /// Advances the engine clock by `elapsed` and performs every expansion
    /// that became due. Returns the number of expansions performed.
    pub fn update(&mut self, elapsed: Duration) -> usize {
        self.clock += elapsed;

        let mut expansions = 0;
        while let Some(resume) = self.pending.filter(|resume| resume.due <= self.clock) {
            self.resume(resume);
            expansions += 1;
        }
        expansions
    }

    /// Performs all remaining expansions of the current run, ignoring the
    /// interval, and returns the final result.
    pub fn run_to_completion(&mut self) -> &SearchResult {
        #[cfg(feature = "log")]
        let timer = std::time::Instant::now();

        while let Some(resume) = self.pending {
            self.resume(resume);
        }

        log_trace!("time to complete search {}: {:?}", self.generation, timer.elapsed());
        &self.result
    }

    /// A consistent view of the most recent run.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            generation: self.generation,
            run: self.run.as_ref(),
            result: &self.result,
        }
    }

    /// Invalidates every outstanding resumption and drops the current run.
    fn supersede(&mut self) {
        self.generation += 1;
        self.pending = None;
        self.run = None;
        self.board = None;
    }

    fn schedule(&mut self, after: Duration) -> Resume {
        let resume = Resume {
            generation: self.generation,
            due: after + self.config.step_interval,
        };
        self.pending = Some(resume);
        resume
    }
}

impl<B: BoardAdapter> Default for SearchEngine<B> {
    fn default() -> Self {
        SearchEngine::new(SearchConfig::default())
    }
}

/// What a consumer sees of the most recent run.
///
/// Borrowed from the engine, so it can never mix the sets of two runs.
#[derive(Clone, Copy, Debug)]
pub struct Snapshot<'a> {
    generation: u64,
    run: Option<&'a SearchRun>,
    result: &'a SearchResult,
}

impl<'a> Snapshot<'a> {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn result(&self) -> &'a SearchResult {
        self.result
    }

    pub fn path(&self) -> Option<&'a Path<Point>> {
        self.result.path()
    }

    pub fn open_positions(&self) -> impl Iterator<Item = Point> + 'a {
        self.run.into_iter().flat_map(SearchRun::open_positions)
    }

    pub fn closed_positions(&self) -> impl Iterator<Item = Point> + 'a {
        self.run.into_iter().flat_map(SearchRun::closed_positions)
    }

    pub fn open_len(&self) -> usize {
        self.run.map_or(0, SearchRun::open_len)
    }

    pub fn closed_len(&self) -> usize {
        self.run.map_or(0, SearchRun::closed_len)
    }

    pub fn is_open(&self, pos: Point) -> bool {
        self.run.map_or(false, |run| run.is_open(pos))
    }

    pub fn is_closed(&self, pos: Point) -> bool {
        self.run.map_or(false, |run| run.is_closed(pos))
    }

    /// The best known cost of reaching `pos` from the start in this run.
    pub fn cost_at(&self, pos: Point) -> Option<Cost> {
        self.run.and_then(|run| run.cost_at(pos))
    }

    pub fn expansions(&self) -> usize {
        self.run.map_or(0, SearchRun::expansions)
    }

    /// The start and end the run resolved when it began.
    pub fn endpoints(&self) -> Option<(Point, Point)> {
        self.run.map(|run| (run.start(), run.end()))
    }
}
