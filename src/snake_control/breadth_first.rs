use std::collections::{HashSet, VecDeque};
use std::rc::Rc;

use rand::RngCore;

use crate::basic::{BoardDim, Dir, Point};
use crate::food::Food;
use crate::game::GameContext;
use crate::snake::Body;
use crate::snake_control::Controller;
use crate::view::snakes::Snakes;

/// Chases the shortest wrap-aware route to the food, blind to every
/// obstacle on the way. The recklessness is deliberate: snake bodies are
/// not treated as blocked, this controller models a mid-level player that
/// takes the shortest line regardless of collision risk.
pub struct BreadthFirst;

/// Neighbor expansion order, fixed for determinism
const NEIGHBOR_ORDER: [Dir; 4] = [Dir::L, Dir::R, Dir::U, Dir::D];

struct PathNode {
    pos: Point,
    parent: Option<Rc<PathNode>>,
}

impl PathNode {
    /// Positions from the search start to this node, in travel order
    fn to_path(&self) -> Vec<Point> {
        let mut path = vec![self.pos];
        let mut node = self.parent.as_deref();
        while let Some(n) = node {
            path.push(n.pos);
            node = n.parent.as_deref();
        }
        path.reverse();
        path
    }
}

/// FIFO frontier, visited set keyed by position, parent pointers for path
/// reconstruction. On a fully connected torus this cannot fail, `None` is
/// handled defensively anyway.
fn bfs_to_food(start: Point, goal: Point, board_dim: BoardDim) -> Option<Vec<Point>> {
    let mut queue = VecDeque::from([Rc::new(PathNode { pos: start, parent: None })]);
    let mut visited = HashSet::from([start]);

    while let Some(node) = queue.pop_front() {
        if node.pos == goal {
            return Some(node.to_path());
        }

        for dir in NEIGHBOR_ORDER {
            let neighbor = node.pos.wrapping_translate(dir, board_dim);
            // no obstacle check, snake bodies do not block
            if visited.insert(neighbor) {
                queue.push_back(Rc::new(PathNode {
                    pos: neighbor,
                    parent: Some(node.clone()),
                }));
            }
        }
    }

    None
}

impl Controller for BreadthFirst {
    fn next_dir(
        &mut self,
        body: &Body,
        _other_snakes: &dyn Snakes,
        food: &Food,
        gtx: &GameContext,
        _rng: &mut dyn RngCore,
    ) -> Option<Dir> {
        let head = body.head();
        let path = bfs_to_food(head, food.pos, gtx.board_dim)?;

        if path.len() > 1 {
            let dir = head.wrapping_dir_to_1(path[1], gtx.board_dim)?;
            if dir != -body.dir {
                return Some(dir);
            }
        }

        // head already on the food (transient) or the step would be a
        // reversal, keep the current direction
        None
    }
}
