use rand::RngCore;

pub use a_star::AStar;
pub use breadth_first::BreadthFirst;
pub use reactive::Reactive;

use crate::basic::Dir;
use crate::food::Food;
use crate::game::GameContext;
use crate::snake::Body;
use crate::view::snakes::Snakes;

mod a_star;
mod breadth_first;
mod reactive;

/// Closed set of AI strategies a snake can be assigned
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Template {
    Reactive,
    BreadthFirst,
    AStar,
}

impl Template {
    pub fn into_controller(self) -> Box<dyn Controller + Send + Sync> {
        match self {
            Template::Reactive => Box::new(Reactive),
            Template::BreadthFirst => Box::new(BreadthFirst),
            Template::AStar => Box::new(AStar),
        }
    }
}

pub trait Controller {
    /// Decide where the snake goes next, given read-only access to the game
    /// state. Returning `None` keeps the current direction. Implementations
    /// must never return the exact reverse of `body.dir`; the engine drops
    /// (and logs) a reversal as a last line of defense.
    fn next_dir(
        &mut self,
        body: &Body,
        other_snakes: &dyn Snakes,
        food: &Food,
        gtx: &GameContext,
        rng: &mut dyn RngCore,
    ) -> Option<Dir>;
}
