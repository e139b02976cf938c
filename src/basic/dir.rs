use std::ops::Neg;

use Dir::*;

/// The four unit directions on a square grid, screen convention
/// (y grows downward, so `U` is (0, -1))
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Dir {
    U,
    R,
    D,
    L,
}

impl Neg for Dir {
    type Output = Self;

    /// The exact reverse, disallowed as an immediate next direction
    fn neg(self) -> Self::Output {
        match self {
            U => D,
            R => L,
            D => U,
            L => R,
        }
    }
}

impl Dir {
    /// Unit offset (dx, dy)
    pub fn offset(self) -> (isize, isize) {
        match self {
            U => (0, -1),
            R => (1, 0),
            D => (0, 1),
            L => (-1, 0),
        }
    }

    // clockwise order starting from U
    pub fn iter() -> impl Iterator<Item = Self> {
        [U, R, D, L].iter().copied()
    }
}

#[test]
fn test_dir_neg() {
    for (dir, reverse) in [(U, D), (D, U), (L, R), (R, L)] {
        assert_eq!(-dir, reverse);
        assert_eq!(-(-dir), dir);
    }
}

#[test]
fn test_offsets_are_unit_vectors() {
    for dir in Dir::iter() {
        let (dx, dy) = dir.offset();
        assert_eq!(dx.abs() + dy.abs(), 1);
        let (rx, ry) = (-dir).offset();
        assert_eq!((rx, ry), (-dx, -dy));
    }
}
