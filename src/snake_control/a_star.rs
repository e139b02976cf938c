use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};

use rand::RngCore;

use crate::basic::{BoardDim, Dir, Point};
use crate::food::Food;
use crate::game::GameContext;
use crate::snake::Body;
use crate::snake_control::Controller;
use crate::view::snakes::Snakes;

/// A* to the food on the bounded (non-wrapping) board, treating every body
/// cell, its own included, as blocked. When no route exists it falls back to
/// the collision-free direction with the most open space nearby; when not
/// even that exists it keeps going and accepts the collision.
pub struct AStar;

/// Neighbor expansion order, fixed for determinism
const NEIGHBOR_ORDER: [Dir; 4] = [Dir::D, Dir::U, Dir::R, Dir::L];

/// Depth bound for the fallback reachability count
const FALLBACK_SEARCH_DEPTH: usize = 5;

/// Outside the board bounds (this variant does not wrap) or inside a body
fn is_collision(pos: Point, occupied: &HashSet<Point>, board_dim: BoardDim) -> bool {
    !pos.is_within(board_dim) || occupied.contains(&pos)
}

/// A* with f = g + manhattan, ties broken by discovery order
/// (the heap is kept stable with a running sequence number)
fn a_star_to_food(
    start: Point,
    goal: Point,
    occupied: &HashSet<Point>,
    board_dim: BoardDim,
) -> Option<Vec<Point>> {
    let mut open_set = BinaryHeap::new();
    let mut discovery = 0_usize;
    open_set.push(Reverse((0_usize, discovery, start)));

    let mut came_from: HashMap<Point, Point> = HashMap::new();
    let mut g_score = HashMap::from([(start, 0_usize)]);

    while let Some(Reverse((_, _, current))) = open_set.pop() {
        if current == goal {
            let mut path = vec![current];
            let mut node = current;
            while let Some(&parent) = came_from.get(&node) {
                node = parent;
                path.push(node);
            }
            path.reverse();
            return Some(path);
        }

        for dir in NEIGHBOR_ORDER {
            let neighbor = current.translate(dir);
            if is_collision(neighbor, occupied, board_dim) {
                continue;
            }

            let tentative_g = g_score[&current] + 1;
            if g_score.get(&neighbor).map_or(true, |&g| tentative_g < g) {
                came_from.insert(neighbor, current);
                g_score.insert(neighbor, tentative_g);
                discovery += 1;
                open_set.push(Reverse((
                    tentative_g + neighbor.manhattan_distance(goal),
                    discovery,
                    neighbor,
                )));
            }
        }
    }

    None
}

/// Bounded BFS measuring open space: distinct reachable cells within
/// `FALLBACK_SEARCH_DEPTH` steps, the start cell included
fn count_reachable_cells(start: Point, occupied: &HashSet<Point>, board_dim: BoardDim) -> usize {
    let mut visited = HashSet::from([start]);
    let mut queue = VecDeque::from([(start, 0_usize)]);
    let mut count = 0;

    while let Some((pos, depth)) = queue.pop_front() {
        count += 1;
        if depth >= FALLBACK_SEARCH_DEPTH {
            continue;
        }

        for dir in NEIGHBOR_ORDER {
            let neighbor = pos.translate(dir);
            if !is_collision(neighbor, occupied, board_dim) && visited.insert(neighbor) {
                queue.push_back((neighbor, depth + 1));
            }
        }
    }

    count
}

impl Controller for AStar {
    fn next_dir(
        &mut self,
        body: &Body,
        other_snakes: &dyn Snakes,
        food: &Food,
        gtx: &GameContext,
        _rng: &mut dyn RngCore,
    ) -> Option<Dir> {
        let head = body.head();
        let occupied: HashSet<Point> = body
            .cells
            .iter()
            .copied()
            .chain(other_snakes.iter_cells())
            .collect();

        let path_dir = a_star_to_food(head, food.pos, &occupied, gtx.board_dim).and_then(|path| {
            (path.len() > 1)
                .then(|| NEIGHBOR_ORDER.into_iter().find(|&dir| head.translate(dir) == path[1]))
                .flatten()
        });
        if let Some(dir) = path_dir {
            if dir != -body.dir {
                return Some(dir);
            }
        }

        // no route (or the route starts with a reversal): of the safe
        // directions, take the one with the most open space, first maximal
        // score wins
        let mut best: Option<(usize, Dir)> = None;
        for dir in NEIGHBOR_ORDER {
            if dir == -body.dir {
                continue;
            }
            let next = head.translate(dir);
            if is_collision(next, &occupied, gtx.board_dim) {
                continue;
            }
            let score = count_reachable_cells(next, &occupied, gtx.board_dim);
            if best.map_or(true, |(best_score, _)| score > best_score) {
                best = Some((score, dir));
            }
        }

        if let Some((_, dir)) = best {
            return Some(dir);
        }

        // fully boxed in, keep going and die next tick
        None
    }
}
