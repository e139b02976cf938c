use std::collections::VecDeque;

pub use builder::{Builder, BuilderError};
use rand::Rng;

use crate::basic::{BoardDim, Color, Dir, Point};
use crate::snake_control::Controller;

pub mod builder;

/// Who drives the snake
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Type {
    Player,
    Ai,
}

pub struct Body {
    /// Occupied cells, head first
    pub cells: VecDeque<Point>,

    /// Direction the snake is currently going
    pub dir: Dir,

    /// Set when food was eaten, consumed at the next tick boundary
    pub grow: bool,
}

impl Body {
    pub fn head(&self) -> Point {
        self.cells[0]
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Advance one cell in the current direction, wrapping around the board.
    /// If the grow flag is set the tail stays and the flag is cleared,
    /// otherwise the length is preserved.
    pub fn advance(&mut self, board_dim: BoardDim) {
        let new_head = self.head().wrapping_translate(self.dir, board_dim);
        self.cells.push_front(new_head);

        if self.grow {
            self.grow = false;
        } else {
            self.cells.pop_back();
        }
    }
}

pub struct Snake {
    pub snake_type: Type,
    pub body: Body,
    pub color: Color,

    /// `None` for the player, whose direction comes from outside the engine
    pub controller: Option<Box<dyn Controller + Send + Sync>>,
}

impl Snake {
    pub fn head(&self) -> Point {
        self.body.head()
    }

    pub fn is_player(&self) -> bool {
        matches!(self.snake_type, Type::Player)
    }

    /// Soft respawn after a collision: the snake stays in the roster, its
    /// body is replaced by a single random cell. The new cell is deliberately
    /// not checked against other bodies; direction, grow flag and controller
    /// state are untouched.
    pub fn respawn(&mut self, board_dim: BoardDim, rng: &mut impl Rng) {
        self.body.cells.clear();
        self.body.cells.push_back(Point::random(board_dim, rng));
    }
}
