use itertools::Itertools;
use rand::distributions::uniform::SampleRange;
use rand::Rng;

use crate::basic::{BoardDim, Point};
use crate::snake::Snake;

/// Sorted, deduplicated list of every cell covered by a snake body
pub fn get_occupied_cells(snakes: &[Snake]) -> Vec<Point> {
    snakes
        .iter()
        .flat_map(|snake| snake.body.cells.iter().copied())
        .sorted_unstable()
        .dedup()
        .collect()
}

/// Uniformly sample a cell that isn't in `occupied_cells`,
/// `None` if the board is full. Runs in one draw, no retry loop.
pub fn random_free_spot(
    occupied_cells: &[Point],
    board_dim: BoardDim,
    rng: &mut impl Rng,
) -> Option<Point> {
    let free_spaces = (board_dim.x * board_dim.y) as usize - occupied_cells.len();
    if free_spaces == 0 {
        return None;
    }

    // index into the free cells, then shift past the occupied ones
    // (relies on occupied_cells being sorted in row-major order)
    let mut new_idx = (0..free_spaces).sample_single(rng);
    for &Point { x, y } in occupied_cells {
        let idx = (y * board_dim.x + x) as usize;
        if idx <= new_idx {
            new_idx += 1;
        }
    }

    assert!(new_idx < (board_dim.x * board_dim.y) as usize);
    Some(Point {
        x: new_idx as isize % board_dim.x,
        y: new_idx as isize / board_dim.x,
    })
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    const BOARD: BoardDim = Point { x: 4, y: 3 };

    fn all_cells() -> Vec<Point> {
        (0..BOARD.y)
            .flat_map(|y| (0..BOARD.x).map(move |x| Point { x, y }))
            .collect()
    }

    #[test]
    fn free_spot_never_lands_on_occupied_cell() {
        let mut rng = StdRng::seed_from_u64(7);
        let occupied: Vec<Point> = all_cells()
            .into_iter()
            .filter(|p| (p.x + p.y) % 2 == 0)
            .collect();

        for _ in 0..200 {
            let spot = random_free_spot(&occupied, BOARD, &mut rng).unwrap();
            assert!(spot.is_within(BOARD));
            assert!(!occupied.contains(&spot), "sampled occupied cell {:?}", spot);
        }
    }

    #[test]
    fn free_spot_reaches_every_free_cell() {
        let mut rng = StdRng::seed_from_u64(7);
        let occupied = vec![Point { x: 0, y: 0 }, Point { x: 3, y: 2 }];

        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(random_free_spot(&occupied, BOARD, &mut rng).unwrap());
        }
        assert_eq!(seen.len(), (BOARD.x * BOARD.y) as usize - occupied.len());
    }

    #[test]
    fn full_board_yields_none() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(random_free_spot(&all_cells(), BOARD, &mut rng).is_none());
    }

    #[test]
    fn single_free_cell_is_found() {
        let mut rng = StdRng::seed_from_u64(7);
        let hole = Point { x: 2, y: 1 };
        let occupied: Vec<Point> = all_cells().into_iter().filter(|&p| p != hole).collect();
        assert_eq!(random_free_spot(&occupied, BOARD, &mut rng), Some(hole));
    }
}
