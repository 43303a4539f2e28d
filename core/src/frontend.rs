//! The boundary a presentation layer talks to: intents going in, read-only views coming out.

use serde::{Deserialize, Serialize};

use crate::*;

/// Player input, as produced by clicks, key presses or parsed commands.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    Open(Coord2),
    ToggleFlag(Coord2),
    Reset,
}

/// What an intent did, so the presentation layer knows whether to redraw or announce the end of the game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Update {
    Opened(OpenOutcome),
    Flagged(FlagOutcome),
    Reset,
}

impl Update {
    pub const fn has_update(self) -> bool {
        match self {
            Self::Opened(outcome) => outcome.has_update(),
            Self::Flagged(outcome) => outcome.has_update(),
            Self::Reset => true,
        }
    }

    /// Whether this update ended the game
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Opened(outcome) if outcome.is_finished())
    }
}

/// Everything needed to draw a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub is_open: bool,
    pub is_flag: bool,
    pub content: CellContent,
}

impl From<&Cell> for CellView {
    fn from(cell: &Cell) -> Self {
        Self {
            is_open: cell.is_open(),
            is_flag: cell.is_flag(),
            content: cell.content(),
        }
    }
}

/// Implemented by anything that can show a game to a player.
pub trait Frontend {
    type Error;

    /// Redraws the whole board, called after every intent that changed something.
    fn render(&mut self, board: &Board, state: GameState) -> core::result::Result<(), Self::Error>;

    /// Tells the player the game is over, called once per finished game.
    fn announce(&mut self, state: GameState) -> core::result::Result<(), Self::Error>;
}
