use std::cmp::Ordering;
use std::fmt::{Debug, Error, Formatter};

use rand::Rng;

use crate::basic::Dir;

/// Cell coordinates on the board; also used for board dimensions
#[derive(Eq, PartialEq, Copy, Clone, Add, Sub, Hash)]
pub struct Point {
    pub x: isize,
    pub y: isize,
}

pub type BoardDim = Point;

impl Debug for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// row-major order, must agree with the cell indexing in basic::board
impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.y.cmp(&other.y) {
            Ordering::Equal => self.x.cmp(&other.x),
            ord => ord,
        }
    }
}

impl Point {
    /// One step in `dir` on the plane, no wrapping
    #[must_use]
    pub fn translate(self, dir: Dir) -> Self {
        let (dx, dy) = dir.offset();
        Self { x: self.x + dx, y: self.y + dy }
    }

    /// One step in `dir` on the torus, both coordinates reduced
    /// modulo the board dimensions
    #[must_use]
    pub fn wrapping_translate(self, dir: Dir, board_dim: BoardDim) -> Self {
        let (dx, dy) = dir.offset();
        Self {
            x: (self.x + dx).rem_euclid(board_dim.x),
            y: (self.y + dy).rem_euclid(board_dim.y),
        }
    }

    /// Plane Manhattan distance, oblivious to wrapping. Used as a search
    /// heuristic; it only guides search, it never bounds correctness.
    pub fn manhattan_distance(self, other: Self) -> usize {
        ((self.x - other.x).abs() + (self.y - other.y).abs()) as usize
    }

    pub fn is_within(self, board_dim: BoardDim) -> bool {
        (0..board_dim.x).contains(&self.x) && (0..board_dim.y).contains(&self.y)
    }

    // None if the two points are farther than one wrapping step apart
    pub fn wrapping_dir_to_1(self, other: Self, board_dim: BoardDim) -> Option<Dir> {
        Dir::iter().find(|dir| self.wrapping_translate(*dir, board_dim) == other)
    }

    /// Uniformly random cell, no occupancy check
    pub fn random(board_dim: BoardDim, rng: &mut impl Rng) -> Self {
        Self {
            x: rng.gen_range(0..board_dim.x),
            y: rng.gen_range(0..board_dim.y),
        }
    }
}
