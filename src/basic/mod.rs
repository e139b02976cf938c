pub use color::Color;
pub use dir::Dir;
pub use point::{BoardDim, Point};

pub mod board;
mod color;
mod dir;
mod point;
