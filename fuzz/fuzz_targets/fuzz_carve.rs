#![no_main]

use libfuzzer_sys::fuzz_target;

use pretty_assertions::assert_eq;
use rand::SeedableRng as _;

use labyrinth::math::{CellPoint, CellSize};
use labyrinth::{Direction, MazeError, generate_maze};

#[derive(Debug, arbitrary::Arbitrary)]
struct FuzzMaze {
    // Small types keep the grids small enough to check quickly.
    width: i8,
    height: i8,
    start: (i8, i8),
    seed: u64,
    probes: Vec<(i8, i8, Direction)>,
}

fuzz_target!(|input: FuzzMaze| check_maze(input));

fn check_maze(input: FuzzMaze) {
    let FuzzMaze {
        width,
        height,
        start,
        seed,
        probes,
    } = input;
    let size = CellSize::new(width.into(), height.into());
    let start = CellPoint::new(start.0.into(), start.1.into());
    let mut rng = rand_xoshiro::Xoshiro256Plus::seed_from_u64(seed);

    let maze = match generate_maze(size, start, &mut rng) {
        Ok(maze) => maze,
        Err(MazeError::InvalidDimension { size: reported }) => {
            assert!(width <= 0 || height <= 0);
            assert_eq!(reported, size);
            return;
        }
        Err(MazeError::OutOfBounds { point, size: reported }) => {
            assert_eq!((point, reported), (start, size));
            assert!(
                !(0..size.width).contains(&start.x) || !(0..size.height).contains(&start.y)
            );
            return;
        }
        Err(e) => panic!("unexpected error {e:?}"),
    };

    maze.consistency_check();
    assert_eq!(maze.passage_count(), maze.cell_count() - 1);
    assert_eq!(maze.reachable_count(start), Ok(maze.cell_count()));

    for (x, y, direction) in probes {
        let point = CellPoint::new(x.into(), y.into());
        match maze.is_open(point, direction) {
            Ok(open) => {
                assert!(maze.contains(point));
                assert_eq!(open, maze.is_connected(point, direction));
                if open {
                    let path = maze
                        .path_between(point, start)
                        .unwrap()
                        .expect("every cell should be reachable");
                    assert_eq!(path.first(), Some(&point));
                    assert_eq!(path.last(), Some(&start));
                }
            }
            Err(MazeError::OutOfBounds { .. }) => assert!(!maze.contains(point)),
            Err(e) => panic!("unexpected error {e:?}"),
        }
    }
}
