use log::warn;
use rand::Rng;

use crate::basic::board::{get_occupied_cells, random_free_spot};
use crate::basic::{BoardDim, Point};
use crate::snake::Snake;

/// The single active food pellet
#[derive(Copy, Clone, Debug)]
pub struct Food {
    pub pos: Point,
    board_dim: BoardDim,
}

impl Food {
    /// A pellet at a uniformly random cell; occupancy is only
    /// checked on respawn
    pub fn new(board_dim: BoardDim, rng: &mut impl Rng) -> Self {
        Self {
            pos: Point::random(board_dim, rng),
            board_dim,
        }
    }

    /// Move the pellet to a random cell not covered by any snake body.
    /// On an (unplayably) overcrowded board the pellet stays where it is.
    pub fn respawn(&mut self, snakes: &[Snake], rng: &mut impl Rng) {
        let occupied_cells = get_occupied_cells(snakes);
        match random_free_spot(&occupied_cells, self.board_dim, rng) {
            Some(pos) => self.pos = pos,
            None => warn!("no free cell left for food, leaving it at {:?}", self.pos),
        }
    }
}
