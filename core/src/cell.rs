use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

/// Precomputed label of a cell, filled in once after mine placement.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellContent {
    Empty,
    Mine,
    Count(u8),
}

impl CellContent {
    pub const MINE_GLYPH: &'static str = "💣";

    pub const fn count(self) -> Option<u8> {
        match self {
            Self::Count(count) => Some(count),
            _ => None,
        }
    }
}

impl Default for CellContent {
    fn default() -> Self {
        Self::Empty
    }
}

impl fmt::Display for CellContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Mine => f.write_str(Self::MINE_GLYPH),
            Self::Count(count) => write!(f, "{}", count),
        }
    }
}

/// One board position.
///
/// Mutators apply the change, validate the cell and restore the previous value when the result would be both open
/// and flagged.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    is_mine: bool,
    is_open: bool,
    is_flag: bool,
    content: CellContent,
}

impl Cell {
    pub const fn is_mine(&self) -> bool {
        self.is_mine
    }

    pub const fn is_open(&self) -> bool {
        self.is_open
    }

    pub const fn is_flag(&self) -> bool {
        self.is_flag
    }

    pub const fn content(&self) -> CellContent {
        self.content
    }

    /// Closed and not a mine, what still needs opening to win.
    pub const fn is_safe_closed(&self) -> bool {
        !self.is_open && !self.is_mine
    }

    fn validate(&self, violation: GameError) -> Result<()> {
        if self.is_open && self.is_flag {
            Err(violation)
        } else {
            Ok(())
        }
    }

    pub fn set_flag(&mut self, value: bool) -> Result<()> {
        let old = self.is_flag;
        self.is_flag = value;
        self.validate(GameError::CannotFlagOpenCell).inspect_err(|_| {
            self.is_flag = old;
        })
    }

    pub fn set_open(&mut self, value: bool) -> Result<()> {
        let old = self.is_open;
        self.is_open = value;
        self.validate(GameError::Flagged).inspect_err(|_| {
            self.is_open = old;
        })
    }

    pub fn set_mine(&mut self, value: bool) -> Result<()> {
        let old = self.is_mine;
        self.is_mine = value;
        self.validate(GameError::InvalidMineLayout).inspect_err(|_| {
            self.is_mine = old;
        })
    }

    pub fn set_content(&mut self, content: CellContent) {
        self.content = content;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn flagging_open_cell_rolls_back() {
        let mut cell = Cell::default();
        cell.set_open(true).unwrap();

        assert_eq!(cell.set_flag(true), Err(GameError::CannotFlagOpenCell));
        assert!(cell.is_open());
        assert!(!cell.is_flag());
    }

    #[test]
    fn opening_flagged_cell_rolls_back() {
        let mut cell = Cell::default();
        cell.set_flag(true).unwrap();

        assert_eq!(cell.set_open(true), Err(GameError::Flagged));
        assert!(!cell.is_open());
        assert!(cell.is_flag());
    }

    #[test]
    fn unflagging_open_cell_is_allowed() {
        let mut cell = Cell::default();
        cell.set_open(true).unwrap();

        assert_eq!(cell.set_flag(false), Ok(()));
    }

    #[test]
    fn content_labels() {
        assert_eq!(CellContent::Empty.to_string(), "");
        assert_eq!(CellContent::Mine.to_string(), "💣");
        assert_eq!(CellContent::Count(0).to_string(), "0");
        assert_eq!(CellContent::Count(8).to_string(), "8");
    }
}
