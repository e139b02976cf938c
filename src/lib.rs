//! Decision and simulation core for a toroidal-grid snake arena: one player
//! snake competes against computer-controlled snakes for food. Rendering,
//! input handling and pacing live outside this crate; the engine is
//! constructed with explicit board dimensions and a random source and is
//! advanced one tick at a time via [`game::Game::step`].

#[macro_use]
extern crate derive_more;

pub mod basic;
pub mod food;
pub mod game;
pub mod snake;
pub mod snake_control;
pub mod view;
