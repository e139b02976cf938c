use crate::snake::Snake;
use crate::view::snakes::Snakes;

/// All snakes except the one currently borrowed mutably
#[derive(Copy, Clone)]
pub struct OtherSnakes<'a>(&'a [Snake], &'a [Snake]);

impl<'a> OtherSnakes<'a> {
    pub fn empty() -> Self {
        Self(&[], &[])
    }

    pub fn split_snakes(snakes: &mut [Snake], idx: usize) -> (&mut Snake, OtherSnakes) {
        let (other_snakes1, rest) = snakes.split_at_mut(idx);
        let (snake, other_snakes2) = rest.split_first_mut().unwrap();
        (snake, OtherSnakes(other_snakes1, other_snakes2))
    }
}

impl Snakes for OtherSnakes<'_> {
    fn iter(&self) -> Box<dyn Iterator<Item = &Snake> + '_> {
        Box::new(self.0.iter().chain(self.1.iter()))
    }
}
