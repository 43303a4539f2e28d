use std::io::{self, Write};

use sweeper_core::{Board, CellContent, Frontend, GameState};

/// Plain-text board drawn onto any writer.
pub struct Terminal<W> {
    out: W,
}

impl<W: Write> Terminal<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Free-form line for help texts and rejected moves.
    pub fn notice(&mut self, message: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.out, "{}", message)
    }

    pub fn prompt(&mut self) -> io::Result<()> {
        write!(self.out, "> ")?;
        self.out.flush()
    }
}

fn label(is_open: bool, is_flag: bool, content: CellContent) -> String {
    if is_flag {
        "F".into()
    } else if !is_open {
        ".".into()
    } else if content == CellContent::Mine {
        "*".into()
    } else {
        content.to_string()
    }
}

impl<W: Write> Frontend for Terminal<W> {
    type Error = io::Error;

    fn render(&mut self, board: &Board, state: GameState) -> io::Result<()> {
        let (width, height) = board.size();
        writeln!(
            self.out,
            "mines: {}   flags: {} / {}   {:?}",
            board.mine_count(),
            board.flag_count(),
            board.mine_count(),
            state
        )?;

        write!(self.out, "   ")?;
        for x in 0..width {
            write!(self.out, "{:>3}", x)?;
        }
        writeln!(self.out)?;

        for y in 0..height {
            write!(self.out, "{:>3}", y)?;
            for x in 0..width {
                let cell = board.cell_at((x, y)).map_err(io::Error::other)?;
                write!(
                    self.out,
                    "{:>3}",
                    label(cell.is_open(), cell.is_flag(), cell.content())
                )?;
            }
            writeln!(self.out)?;
        }
        Ok(())
    }

    fn announce(&mut self, state: GameState) -> io::Result<()> {
        match state {
            GameState::Won => writeln!(self.out, "You win!"),
            GameState::Lost => writeln!(self.out, "Game over!"),
            GameState::Active => Ok(()),
        }
    }
}
