use alloc::vec::Vec;

use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Source of mine positions for a fresh board.
pub trait MineGenerator {
    /// Picks `count` positions on a board of `size` (`(width, height)`); the board rejects repeats.
    fn generate(&mut self, size: Coord2, count: CellCount) -> Result<Vec<Coord2>>;
}
