use alloc::vec::Vec;

use super::*;

/// Hands out the same caller-chosen layout on every board, for puzzles and test harnesses.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedMineGenerator {
    mines: Vec<Coord2>,
}

impl FixedMineGenerator {
    pub fn new(mines: &[Coord2]) -> Self {
        Self {
            mines: mines.to_vec(),
        }
    }

    pub fn mine_count(&self) -> CellCount {
        self.mines.len() as CellCount
    }
}

impl MineGenerator for FixedMineGenerator {
    fn generate(&mut self, _size: Coord2, count: CellCount) -> Result<Vec<Coord2>> {
        if count != self.mine_count() {
            return Err(GameError::InvalidMineCount);
        }
        Ok(self.mines.clone())
    }
}
