/// Cosmetic snake identity, never read by the engine itself
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const PLAYER: Self = Self::rgb(0, 200, 0);

    /// Cycled through when more AI snakes spawn than there are colors
    pub const AI_COLORS: [Self; 3] = [
        Self::rgb(200, 0, 0),
        Self::rgb(0, 0, 200),
        Self::rgb(200, 200, 0),
    ];
}
