//! Shared horizontal position type.

/// A block position in the horizontal plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pos {
    pub x: i32,
    pub z: i32,
}

impl Pos {
    #[must_use]
    pub fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Containing chunk coordinates.
    #[must_use]
    pub fn chunk(self) -> (i32, i32) {
        (self.x >> 4, self.z >> 4)
    }

    /// Containing biome cell coordinates.
    #[must_use]
    pub fn cell(self) -> (i32, i32) {
        (self.x >> 2, self.z >> 2)
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}
