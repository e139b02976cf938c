use rand::{Rng, RngCore};

use crate::basic::Dir;
use crate::food::Food;
use crate::game::GameContext;
use crate::snake::Body;
use crate::snake_control::Controller;
use crate::view::snakes::Snakes;

/// Mostly keeps going, occasionally turns at random. No pathfinding and no
/// collision awareness, this controller happily steers into a body.
pub struct Reactive;

/// Probability of keeping the current direction on any given tick
const KEEP_DIR_PROB: f64 = 0.7;

impl Controller for Reactive {
    fn next_dir(
        &mut self,
        body: &Body,
        _other_snakes: &dyn Snakes,
        _food: &Food,
        _gtx: &GameContext,
        rng: &mut dyn RngCore,
    ) -> Option<Dir> {
        if rng.gen_bool(KEEP_DIR_PROB) {
            return None;
        }

        // uniform draw from the three non-reverse directions,
        // the current direction is among them
        let allowed: Vec<_> = Dir::iter().filter(|&dir| dir != -body.dir).collect();
        Some(allowed[rng.gen_range(0..allowed.len())])
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::basic::Point;
    use crate::game::Mode;
    use crate::view::snakes::OtherSnakes;

    fn body(dir: Dir) -> Body {
        Body {
            cells: VecDeque::from([Point { x: 5, y: 5 }]),
            dir,
            grow: false,
        }
    }

    fn gtx() -> GameContext {
        GameContext {
            board_dim: Point { x: 10, y: 10 },
            mode: Mode::Easy,
        }
    }

    #[test]
    fn never_returns_the_reverse_direction() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut reactive = Reactive;
        let body = body(Dir::R);
        let (food, gtx) = (Food::new(gtx().board_dim, &mut rng), gtx());

        for _ in 0..500 {
            if let Some(dir) =
                reactive.next_dir(&body, &OtherSnakes::empty(), &food, &gtx, &mut rng)
            {
                assert_ne!(dir, Dir::L);
            }
        }
    }

    #[test]
    fn turns_eventually() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut reactive = Reactive;
        let body = body(Dir::U);
        let (food, gtx) = (Food::new(gtx().board_dim, &mut rng), gtx());

        let turned = (0..500).any(|_| {
            matches!(
                reactive.next_dir(&body, &OtherSnakes::empty(), &food, &gtx, &mut rng),
                Some(dir) if dir != Dir::U
            )
        });
        assert!(turned, "500 ticks without a single turn");
    }

    #[test]
    fn low_rolls_keep_the_current_direction() {
        // StepRng at zero makes gen_bool(0.7) always succeed
        let mut rng = StepRng::new(0, 0);
        let mut reactive = Reactive;
        let body = body(Dir::D);
        let (food, gtx) = (Food::new(gtx().board_dim, &mut rng), gtx());

        for _ in 0..20 {
            assert_eq!(
                reactive.next_dir(&body, &OtherSnakes::empty(), &food, &gtx, &mut rng),
                None
            );
        }
    }
}
