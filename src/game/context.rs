use crate::basic::BoardDim;
use crate::game::Mode;

/// The part of the game state shared read-only with snake controllers
#[derive(Copy, Clone, Debug)]
pub struct GameContext {
    pub board_dim: BoardDim,
    pub mode: Mode,
}
