use nanorand::{Rng, WyRand};
use weighted_grid_search::prelude::*;

use std::{collections::VecDeque, f64::consts::SQRT_2, sync::Arc, time::Duration};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn engine<B: BoardAdapter>() -> SearchEngine<B> {
    SearchEngine::new(SearchConfig::INSTANT.with_max_iterations(100_000))
}

fn open_board(width: usize, height: usize, start: Point, end: Point) -> Board {
    let mut board = Board::new(width, height).unwrap();
    board.insert(start, TerrainKind::Start).unwrap();
    board.insert(end, TerrainKind::End).unwrap();
    board
}

/// Every position reachable from the start of `board`, walls excluded.
fn reachable(board: &Board, directions: &DirectionSet) -> PointSet {
    let start = board.find_start().unwrap();
    let mut seen = PointSet::default();
    let mut queue = VecDeque::new();
    seen.insert(start);
    queue.push_back(start);
    while let Some(pos) = queue.pop_front() {
        for m in directions.moves() {
            let next = m.apply(pos);
            if board.is_in_bounds(next)
                && board.get(next) != Some(TerrainKind::Wall)
                && seen.insert(next)
            {
                queue.push_back(next);
            }
        }
    }
    seen
}

/// Recomputes the cost of walking `path` on `board`.
fn walk_cost(board: &Board, path: &Path<Point>) -> Cost {
    path.as_slice()
        .windows(2)
        .map(|pair| {
            let (dx, dy) = (pair[1].0 - pair[0].0, pair[1].1 - pair[0].1);
            let weight = ((dx * dx + dy * dy) as f64).sqrt();
            let factor = board
                .terrain_at(pair[1])
                .map_or(Some(1.0), StepMultiplier::factor)
                .expect("path enters an impassable cell");
            weight * factor
        })
        .sum()
}

fn random_board(rng: &mut WyRand, width: usize, height: usize) -> Board {
    let mut board = Board::new(width, height).unwrap();
    for y in 0..height as isize {
        for x in 0..width as isize {
            let kind = match rng.generate_range(0_u32..100) {
                0..=24 => TerrainKind::Wall,
                25..=32 => TerrainKind::Water,
                33..=37 => TerrainKind::Mud,
                _ => continue,
            };
            board.insert((x, y), kind).unwrap();
        }
    }
    let mut random_pos = || {
        (
            rng.generate_range(0..width) as isize,
            rng.generate_range(0..height) as isize,
        )
    };
    let start = random_pos();
    let end = loop {
        let pos = random_pos();
        if pos != start {
            break pos;
        }
    };
    for (pos, kind) in [(start, TerrainKind::Start), (end, TerrainKind::End)] {
        board.remove(pos);
        board.insert(pos, kind).unwrap();
    }
    board
}

#[test]
fn open_board_goes_straight_diagonal() {
    init_logging();
    let board = open_board(5, 5, (0, 0), (4, 4));
    let mut engine = engine();
    engine.start(&board);

    let path = engine.run_to_completion().path().unwrap().clone();
    assert_eq!(path.as_slice(), &[(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]);
    assert!((path.cost() - 4.0 * SQRT_2).abs() < 1e-9);
    assert!(path.steps().all(|step| step == (1, 1)));
}

#[test]
fn water_on_the_diagonal_is_avoided() {
    init_logging();
    let mut board = open_board(5, 5, (0, 0), (4, 4));
    for i in 1..4 {
        board.insert((i, i), TerrainKind::Water).unwrap();
    }
    let mut engine = engine();
    engine.start(&board);

    let path = engine.run_to_completion().path().unwrap().clone();
    assert!(path.cost() < 8.0 * SQRT_2);
    assert!((path.cost() - (2.0 + 3.0 * SQRT_2)).abs() < 1e-9);
    assert!(path.iter().all(|&pos| board.get(pos) != Some(TerrainKind::Water)));
    assert!((walk_cost(&board, &path) - path.cost()).abs() < 1e-9);
}

#[test]
fn wall_column_forces_detour() {
    init_logging();
    let board: Board = "\
        S.#.E
        ..#..
        ..#..
        ..#..
        ....."
        .parse()
        .unwrap();
    let mut engine = engine();
    engine.start(&board);

    let path = engine.run_to_completion().path().unwrap().clone();
    assert!(path.iter().all(|&pos| board.get(pos) != Some(TerrainKind::Wall)));
    assert!(path.iter().any(|&pos| pos == (2, 4)));
    assert_eq!(path.start(), Some((0, 0)));
    assert_eq!(path.end(), Some((4, 0)));
}

#[test]
fn missing_end_yields_missing_endpoint() {
    init_logging();
    let mut board = Board::new(5, 5).unwrap();
    board.insert((0, 0), TerrainKind::Start).unwrap();
    let mut engine = engine();

    assert_eq!(engine.start(&board), None);
    let snapshot = engine.snapshot();
    assert_eq!(
        snapshot.result(),
        &SearchResult::Unreachable(MissingEndpoint::End)
    );
    assert_eq!(snapshot.closed_len(), 0);
    assert_eq!(snapshot.expansions(), 0);
}

#[test]
fn enclosed_end_exhausts_reachable_region() {
    init_logging();
    let board: Board = "\
        S.......
        ....###.
        .~..#E#.
        ..%.###.
        ........"
        .parse()
        .unwrap();
    let mut engine = engine();
    engine.start(&board);

    assert_eq!(
        engine.run_to_completion(),
        &SearchResult::Exhausted(NoPath::OpenSetEmpty)
    );
    let closed: PointSet = engine.snapshot().closed_positions().collect();
    assert_eq!(closed, reachable(&board, &DirectionSet::all()));
    assert_eq!(engine.snapshot().open_len(), 0);
}

#[test]
fn restarting_is_idempotent() {
    init_logging();
    let mut rng = WyRand::new_seed(7);
    let board = random_board(&mut rng, 16, 12);
    let mut engine = engine();

    engine.start(&board);
    let first = engine.run_to_completion().clone();
    let first_closed: PointSet = engine.snapshot().closed_positions().collect();

    engine.start(&board);
    let second = engine.run_to_completion().clone();
    let second_closed: PointSet = engine.snapshot().closed_positions().collect();

    assert_eq!(first, second);
    assert_eq!(first_closed, second_closed);
}

#[test]
fn cancel_mid_run() {
    init_logging();
    let board = open_board(20, 20, (0, 0), (19, 19));
    let mut engine = SearchEngine::new(SearchConfig::with_speed(99));
    engine.start(&board);
    engine.update(Duration::from_millis(5));
    assert!(engine.snapshot().closed_len() > 0);
    assert!(engine.snapshot().result().is_pending());

    engine.cancel();
    let snapshot = engine.snapshot();
    assert_eq!(snapshot.result(), &SearchResult::Cancelled);
    assert_eq!(snapshot.open_positions().count(), 0);
    assert_eq!(snapshot.closed_positions().count(), 0);

    // nothing is left to resume
    assert_eq!(engine.update(Duration::from_secs(10)), 0);
}

#[test]
fn restart_supersedes_run_in_flight() {
    init_logging();
    let far = open_board(20, 20, (0, 0), (19, 19));
    let near = open_board(3, 3, (0, 0), (1, 0));
    let mut engine: SearchEngine<&Board> = SearchEngine::new(SearchConfig::INSTANT);

    let stale = engine.start(&far).unwrap();
    let stale = engine.resume(stale).unwrap();
    assert!(engine.snapshot().closed_len() > 0);

    engine.start(&near);
    assert_eq!(engine.resume(stale), None);
    assert_eq!(engine.snapshot().closed_len(), 0);
    assert!(engine.snapshot().is_open((0, 0)));

    let path = engine.run_to_completion().path().unwrap();
    assert_eq!(path.as_slice(), &[(0, 0), (1, 0)]);
}

#[test]
fn orthogonal_moves_only() {
    init_logging();
    let board = open_board(6, 6, (0, 0), (5, 5));
    let mut engine = SearchEngine::with_directions(
        SearchConfig::INSTANT,
        DirectionSet::orthogonal(),
    );
    engine.start(Arc::new(board));

    let path = engine.run_to_completion().path().unwrap().clone();
    assert_eq!(path.len(), 11);
    assert!((path.cost() - 10.0).abs() < 1e-9);
    assert!(path.steps().all(|(dx, dy)| dx.abs() + dy.abs() == 1));
}

#[test]
fn random_boards() {
    init_logging();
    let mut rng = WyRand::new_seed(0x5eed);
    let directions = DirectionSet::all();

    for _ in 0..200 {
        let board = random_board(&mut rng, 14, 10);
        let region = reachable(&board, &directions);
        let end = board.find_end().unwrap();

        let mut engine = engine();
        engine.start(&board);
        let result = engine.run_to_completion().clone();
        let snapshot = engine.snapshot();

        // the two sets never share a position
        assert!(snapshot.open_positions().all(|pos| !snapshot.is_closed(pos)));

        if region.contains(&end) {
            let path = result.path().unwrap_or_else(|| panic!("no path on\n{}", board));
            assert_eq!(path.start(), board.find_start());
            assert_eq!(path.end(), Some(end));
            assert!(path.steps().all(|step| directions.is_enabled(step)));
            assert!(path.iter().all(|&pos| board.get(pos) != Some(TerrainKind::Wall)));
            assert!((walk_cost(&board, path) - path.cost()).abs() < 1e-9);
        } else {
            assert_eq!(result, SearchResult::Exhausted(NoPath::OpenSetEmpty));
            let closed: PointSet = snapshot.closed_positions().collect();
            assert_eq!(closed, region);
        }
    }
}
