use log::{debug, warn};
use rand::Rng;

pub use collisions::{find_collisions, Collision};
pub use context::GameContext;

use crate::basic::{BoardDim, Color, Dir, Point};
use crate::food::Food;
use crate::snake::{self, Snake};
use crate::snake_control::Template;
use crate::view::snakes::OtherSnakes;

mod collisions;
mod context;

pub const DEFAULT_BOARD_DIM: BoardDim = Point { x: 30, y: 30 };

/// For the pacing layer outside the engine, the core itself never waits
pub const TICKS_PER_SECOND: u32 = 10;

const FOOD_VALUE: u32 = 10;
const PLAYER_START: Point = Point { x: 5, y: 5 };

/// Difficulty selector, maps one-to-one onto an AI roster
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Mode {
    Easy,
    Medium,
    Hard,
    Impossible,
}

impl Mode {
    /// Number of AI snakes and the strategy they all run
    fn roster(self) -> (usize, Template) {
        match self {
            Mode::Easy => (1, Template::Reactive),
            Mode::Medium => (1, Template::BreadthFirst),
            Mode::Hard => (1, Template::AStar),
            Mode::Impossible => (2, Template::AStar),
        }
    }
}

/// One run of the arena. Strictly sequential per tick: player input, AI
/// decisions, movement, food resolution, collision resolution. Everything
/// the engine needs (board dimensions, roster, random source) is supplied
/// at construction, there is no ambient state.
pub struct Game<R: Rng> {
    gtx: GameContext,
    snakes: Vec<Snake>,
    food: Food,
    score: u32,
    game_over: bool,
    rng: R,
}

impl<R: Rng> Game<R> {
    pub fn new(mode: Mode, board_dim: BoardDim, mut rng: R) -> Result<Self, snake::BuilderError> {
        let mut snakes = vec![snake::Builder::default()
            .snake_type(snake::Type::Player)
            .pos(PLAYER_START)
            .dir(Dir::R)
            .color(Color::PLAYER)
            .build()?];

        let (num_ai, template) = mode.roster();
        for i in 0..num_ai {
            let offset = 10 + 5 * i as isize;
            snakes.push(
                snake::Builder::default()
                    .snake_type(snake::Type::Ai)
                    .pos(Point { x: offset, y: offset })
                    .dir(Dir::R)
                    .color(Color::AI_COLORS[i % Color::AI_COLORS.len()])
                    .controller(template)
                    .build()?,
            );
        }

        let food = Food::new(board_dim, &mut rng);

        Ok(Self {
            gtx: GameContext { board_dim, mode },
            snakes,
            food,
            score: 0,
            game_over: false,
            rng,
        })
    }

    /// Advance the simulation by exactly one tick. `player_dir` is the
    /// pending direction gathered by the input layer, `None` keeps course.
    /// A no-op once the run has ended.
    pub fn step(&mut self, player_dir: Option<Dir>) {
        if self.game_over {
            return;
        }

        self.apply_player_dir(player_dir);
        self.update_ai();

        for snake in &mut self.snakes {
            snake.body.advance(self.gtx.board_dim);
        }

        let collisions = find_collisions(&self.snakes, &self.food);
        self.handle_collisions(&collisions);
    }

    fn apply_player_dir(&mut self, player_dir: Option<Dir>) {
        let Some(dir) = player_dir else { return };

        for snake in &mut self.snakes {
            if !snake.is_player() {
                continue;
            }
            if dir == -snake.body.dir {
                // the input layer should already reject reversals
                warn!(
                    "player tried to perform a 180° turn {:?} -> {:?}",
                    snake.body.dir, dir
                );
            } else {
                snake.body.dir = dir;
            }
        }
    }

    fn update_ai(&mut self) {
        for idx in 0..self.snakes.len() {
            let (snake, other_snakes) = OtherSnakes::split_snakes(&mut self.snakes, idx);
            let Snake { body, controller, .. } = snake;
            let Some(controller) = controller else { continue };

            match controller.next_dir(body, &other_snakes, &self.food, &self.gtx, &mut self.rng) {
                Some(dir) if dir == -body.dir => {
                    warn!(
                        "snake_control tried to perform a 180° turn {:?} -> {:?}",
                        body.dir, dir
                    );
                }
                Some(dir) => body.dir = dir,
                None => {}
            }
        }
    }

    fn handle_collisions(&mut self, collisions: &[Collision]) {
        for collision in collisions.iter().copied() {
            match collision {
                Collision::Food { snake_index } => {
                    self.snakes[snake_index].body.grow = true;
                    self.food.respawn(&self.snakes, &mut self.rng);
                    if self.snakes[snake_index].is_player() {
                        self.score += FOOD_VALUE;
                    }
                }
                Collision::Snake { snake1_index: snake_index, .. }
                | Collision::Itself { snake_index } => {
                    if self.snakes[snake_index].is_player() {
                        self.game_over = true;
                    } else {
                        debug!("ai snake {} collided, soft respawn", snake_index);
                        self.snakes[snake_index].respawn(self.gtx.board_dim, &mut self.rng);
                    }
                }
            }
        }
    }

    pub fn snakes(&self) -> &[Snake] {
        &self.snakes
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn board_dim(&self) -> BoardDim {
        self.gtx.board_dim
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    const BOARD: BoardDim = Point { x: 30, y: 30 };

    fn game(mode: Mode) -> Game<StdRng> {
        Game::new(mode, BOARD, StdRng::seed_from_u64(1)).unwrap()
    }

    #[test]
    fn mode_maps_to_the_exact_roster() {
        for (mode, num_ai, template) in [
            (Mode::Easy, 1, Template::Reactive),
            (Mode::Medium, 1, Template::BreadthFirst),
            (Mode::Hard, 1, Template::AStar),
            (Mode::Impossible, 2, Template::AStar),
        ] {
            assert_eq!(mode.roster(), (num_ai, template));

            let game = game(mode);
            assert_eq!(game.snakes.len(), num_ai + 1);
            assert!(game.snakes[0].is_player());
            assert!(game.snakes[0].controller.is_none());
            for snake in &game.snakes[1..] {
                assert!(!snake.is_player());
                assert!(snake.controller.is_some());
            }
        }
    }

    #[test]
    fn eating_food_grows_scores_and_relocates() {
        let mut game = game(Mode::Easy);
        // player at (5, 5) facing R lands on the food one cell ahead
        game.food.pos = Point { x: 6, y: 5 };

        game.step(None);

        let player = &game.snakes[0];
        assert_eq!(player.head(), Point { x: 6, y: 5 });
        assert!(player.body.grow, "growth is applied at the next tick boundary");
        assert_eq!(game.score(), 10);
        assert_ne!(game.food.pos, Point { x: 6, y: 5 });
        assert!(game.food.pos.is_within(BOARD));
        assert!(!game
            .snakes
            .iter()
            .any(|s| s.body.cells.contains(&game.food.pos)));

        // the growth materializes one tick later
        let len_before = game.snakes[0].body.len();
        game.step(None);
        assert_eq!(game.snakes[0].body.len(), len_before + 1);
    }

    #[test]
    fn ai_eating_does_not_score() {
        let mut game = game(Mode::Medium);
        // the BFS snake spawns at (10, 10) facing R and walks straight
        // onto the food one cell ahead
        game.food.pos = Point { x: 11, y: 10 };
        // park the player away from the action
        game.snakes[0].body.cells[0] = Point { x: 25, y: 5 };

        game.step(None);

        assert_eq!(game.score(), 0);
        assert!(game.snakes[1].body.grow);
        assert_ne!(game.food.pos, Point { x: 11, y: 10 });
    }

    #[test]
    fn player_collision_ends_the_run() {
        let mut game = game(Mode::Medium);
        // wall of AI body directly in front of the player
        game.snakes[1].body.cells = [(6, 5), (6, 6), (6, 7)]
            .map(|(x, y)| Point { x, y })
            .into();
        // food straight above the AI head keeps BFS moving away cleanly
        game.snakes[1].body.dir = Dir::U;
        game.food.pos = Point { x: 6, y: 2 };

        game.step(None);

        assert!(game.game_over());

        // further steps are no-ops
        let head = game.snakes[0].head();
        game.step(Some(Dir::D));
        assert_eq!(game.snakes[0].head(), head);
    }

    #[test]
    fn ai_collision_soft_respawns() {
        let mut game = game(Mode::Medium);
        // the AI snake runs into the player's body and respawns as a
        // single cell; the player survives and the run continues
        game.snakes[0].body.cells = [(5, 5), (8, 3), (7, 3)]
            .map(|(x, y)| Point { x, y })
            .into();
        game.snakes[1].body.cells = [(9, 3), (10, 3)].map(|(x, y)| Point { x, y }).into();
        game.snakes[1].body.dir = Dir::L;
        // food straight ahead of the AI keeps BFS pointing L
        game.food.pos = Point { x: 0, y: 3 };

        game.step(None);

        assert!(!game.game_over());
        assert_eq!(game.snakes[1].body.len(), 1, "soft respawn resets to one cell");
        assert!(game.snakes[1].head().is_within(BOARD));
        assert_eq!(game.snakes[0].body.len(), 3);
    }

    #[test]
    fn player_reversal_is_dropped() {
        let mut game = game(Mode::Easy);
        let dir_before = game.snakes[0].body.dir;
        assert_eq!(dir_before, Dir::R);

        game.step(Some(Dir::L));
        assert_eq!(game.snakes[0].body.dir, Dir::R, "reversal must be dropped");

        game.step(Some(Dir::D));
        assert_eq!(game.snakes[0].body.dir, Dir::D);
    }

    #[test]
    fn score_is_monotonically_non_decreasing() {
        let mut game = game(Mode::Hard);
        let mut last_score = game.score();
        for _ in 0..100 {
            game.step(None);
            assert!(game.score() >= last_score);
            last_score = game.score();
            if game.game_over() {
                break;
            }
        }
    }

    #[test]
    fn every_snake_advances_each_tick() {
        let mut game = game(Mode::Impossible);
        let heads: Vec<Point> = game.snakes.iter().map(|s| s.head()).collect();

        game.step(None);

        for (snake, old_head) in game.snakes.iter().zip(&heads) {
            assert_eq!(snake.head().manhattan_distance(*old_head), 1);
        }
    }
}
