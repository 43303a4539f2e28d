#![no_std]

extern crate alloc;

use core::ops::BitOr;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use frontend::*;
pub use game::*;
pub use generator::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod frontend;
mod game;
mod generator;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub height: Coord,
    pub width: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(height: Coord, width: Coord, mines: CellCount) -> Self {
        Self {
            height,
            width,
            mines,
        }
    }

    pub fn new(height: Coord, width: Coord, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(height, width, mines);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.height <= 0 || self.width <= 0 {
            return Err(GameError::InvalidDimension);
        }
        if self.mines > self.total_cells() {
            return Err(GameError::InvalidMineCount);
        }
        Ok(())
    }

    /// `(width, height)`
    pub const fn size(&self) -> Coord2 {
        (self.width, self.height)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.width, self.height)
    }
}

/// Result of flagging or unflagging a cell
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlagOutcome {
    NoChange,
    Changed,
}

impl FlagOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

/// Result of opening a cell
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpenOutcome {
    /// Nothing happened, the game had already ended
    NoChange,
    InProgress,
    Won,
    Lost,
}

impl OpenOutcome {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    pub const fn is_success(self) -> bool {
        matches!(self, Self::Won)
    }

    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// Used to merge outcomes during a cascade
impl BitOr for OpenOutcome {
    type Output = OpenOutcome;

    fn bitor(self, rhs: Self) -> Self::Output {
        use OpenOutcome::*;
        match (self, rhs) {
            // a lost game stays lost
            (Lost, _) => Lost,
            (_, Lost) => Lost,
            (Won, _) => Won,
            (_, Won) => Won,
            (InProgress, _) => InProgress,
            (_, InProgress) => InProgress,
            (NoChange, NoChange) => NoChange,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_too_many_mines() {
        assert_eq!(GameConfig::new(10, 10, 101), Err(GameError::InvalidMineCount));
        assert!(GameConfig::new(10, 10, 100).is_ok());
    }

    #[test]
    fn config_rejects_empty_board() {
        assert_eq!(GameConfig::new(0, 10, 0), Err(GameError::InvalidDimension));
        assert_eq!(GameConfig::new(10, -3, 0), Err(GameError::InvalidDimension));
    }

    #[test]
    fn terminal_outcomes_are_never_overwritten() {
        use OpenOutcome::*;

        assert_eq!(Won | InProgress, Won);
        assert_eq!(InProgress | Lost, Lost);
        assert_eq!(Won | Lost, Lost);
        assert_eq!(NoChange | InProgress, InProgress);
        assert_eq!(NoChange | NoChange, NoChange);
    }
}
