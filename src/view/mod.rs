pub mod snakes;
