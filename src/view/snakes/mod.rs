pub use other_snakes::OtherSnakes;

use crate::basic::Point;
use crate::snake::Snake;

mod other_snakes;

/// Read-only view of a roster of snakes, the only form in which
/// controllers ever see the competition
pub trait Snakes {
    fn iter(&self) -> Box<dyn Iterator<Item = &Snake> + '_>;

    fn iter_cells(&self) -> Box<dyn Iterator<Item = Point> + '_> {
        Box::new(self.iter().flat_map(|snake| snake.body.cells.iter().copied()))
    }
}

// on `&[Snake]` rather than `[Snake]` so a plain roster slice can still
// be passed as a `&dyn Snakes` trait object
impl Snakes for &[Snake] {
    fn iter(&self) -> Box<dyn Iterator<Item = &Snake> + '_> {
        Box::new(<[Snake]>::iter(self))
    }
}
