use crate::food::Food;
use crate::snake::Snake;

/// What a snake's head ran into this tick
#[derive(Copy, Clone, Debug)]
pub enum Collision {
    /// Head landed on the food pellet
    Food { snake_index: usize },
    /// Head of snake1 hit a cell of snake2's body
    Snake {
        snake1_index: usize,
        snake2_index: usize,
    },
    /// Head hit the snake's own body beyond the head
    Itself { snake_index: usize },
}

/// Scan all heads against the food and every body. Runs after all snakes
/// have moved; at most one body collision is reported per snake since its
/// fate is the same either way.
pub fn find_collisions(snakes: &[Snake], food: &Food) -> Vec<Collision> {
    let mut collisions = vec![];

    'outer: for (snake1_index, snake1) in snakes.iter().enumerate() {
        if snake1.head() == food.pos {
            collisions.push(Collision::Food { snake_index: snake1_index });
        }

        for (snake2_index, other) in snakes.iter().enumerate() {
            let mut cells = other.body.cells.iter();

            // a head doesn't collide with its own cell
            if snake1_index == snake2_index {
                let _ = cells.next();
            }

            for &cell in cells {
                if snake1.head() == cell {
                    if snake1_index == snake2_index {
                        collisions.push(Collision::Itself { snake_index: snake1_index });
                    } else {
                        collisions.push(Collision::Snake { snake1_index, snake2_index });
                    }
                    continue 'outer;
                }
            }
        }
    }

    collisions
}
