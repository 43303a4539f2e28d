use alloc::collections::VecDeque;
use core::fmt;
use hashbrown::HashSet;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// The grid of cells, indexed by `(x, y)` with `0 <= x < width` and `0 <= y < height`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
    mine_count: CellCount,
    mines_placed: bool,
    open_count: CellCount,
    flag_count: CellCount,
}

impl Board {
    pub fn new(height: Coord, width: Coord) -> Result<Self> {
        if height <= 0 || width <= 0 {
            return Err(GameError::InvalidDimension);
        }
        Ok(Self {
            cells: Array2::default((width, height).to_nd_index()),
            mine_count: 0,
            mines_placed: false,
            open_count: 0,
            flag_count: 0,
        })
    }

    /// `(width, height)`
    pub fn size(&self) -> Coord2 {
        let (width, height) = self.cells.dim();
        (width as Coord, height as Coord)
    }

    pub fn width(&self) -> Coord {
        self.size().0
    }

    pub fn height(&self) -> Coord {
        self.size().1
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len() as CellCount
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn flag_count(&self) -> CellCount {
        self.flag_count
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if in_bounds(coords, self.size()) {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<&Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(&self.cells[coords.to_nd_index()])
    }

    pub fn iter_cells(&self) -> impl Iterator<Item = (Coord2, &Cell)> {
        self.cells
            .indexed_iter()
            .map(|((x, y), cell)| ((x as Coord, y as Coord), cell))
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size())
    }

    /// Marks `count` distinct cells chosen by `generator` as mines. Only allowed once per board.
    pub fn place_mines<G: MineGenerator + ?Sized>(
        &mut self,
        count: CellCount,
        generator: &mut G,
    ) -> Result<()> {
        if self.mines_placed {
            return Err(GameError::MinesAlreadyPlaced);
        }
        if count > self.total_cells() {
            return Err(GameError::TooManyMines);
        }

        let positions = generator.generate(self.size(), count)?;
        let mut unique = HashSet::with_capacity(positions.len());
        let layout_ok = positions.len() as CellCount == count
            && positions
                .iter()
                .all(|&pos| in_bounds(pos, self.size()) && unique.insert(pos));
        if !layout_ok {
            log::warn!(
                "Rejected mine layout, requested {} got {:?}",
                count,
                positions
            );
            return Err(GameError::InvalidMineLayout);
        }

        for pos in positions {
            self.cells[pos.to_nd_index()].set_mine(true)?;
        }
        self.mine_count = count;
        self.mines_placed = true;
        log::debug!("Placed {} mines on a {:?} board", count, self.size());
        Ok(())
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.iter_neighbors(coords)
            .filter(|&pos| self.cells[pos.to_nd_index()].is_mine())
            .count() as u8
    }

    /// Fills in every cell's label, run once after the mines are placed.
    pub fn compute_content(&mut self) {
        let (width, height) = self.size();
        for x in 0..width {
            for y in 0..height {
                let coords = (x, y);
                let content = if self.cells[coords.to_nd_index()].is_mine() {
                    CellContent::Mine
                } else {
                    CellContent::Count(self.adjacent_mine_count(coords))
                };
                self.cells[coords.to_nd_index()].set_content(content);
            }
        }
    }

    /// Cells that are neither open nor mines, the game is won when this reaches zero.
    pub fn remaining_safe_cells(&self) -> CellCount {
        self.total_cells() - self.mine_count - self.open_count
    }

    pub fn is_cleared(&self) -> bool {
        self.remaining_safe_cells() == 0
    }

    /// Opens a closed, unflagged cell, cascading through zero-count regions.
    pub fn open(&mut self, coords: Coord2) -> Result<OpenOutcome> {
        let coords = self.validate_coords(coords)?;
        let outcome = self.open_single(coords)?;

        let is_zero = self.cells[coords.to_nd_index()].content() == CellContent::Count(0);
        if outcome.is_finished() || !is_zero {
            return Ok(outcome);
        }

        Ok(outcome | self.cascade(coords)?)
    }

    fn open_single(&mut self, coords: Coord2) -> Result<OpenOutcome> {
        let cell = &mut self.cells[coords.to_nd_index()];
        if cell.is_open() {
            return Err(GameError::AlreadyOpen);
        }
        cell.set_open(true)?;

        if cell.is_mine() {
            log::debug!("Opened mine at {:?}", coords);
            return Ok(OpenOutcome::Lost);
        }
        log::debug!("Open cell at {:?}, content: {}", coords, cell.content());
        self.open_count += 1;

        Ok(if self.is_cleared() {
            OpenOutcome::Won
        } else {
            OpenOutcome::InProgress
        })
    }

    /// Opens the closed neighbors of a zero cell, and theirs in turn while they are zero too. Cells that were already
    /// opened are skipped, so every cell is opened at most once. Flags stop the cascade.
    fn cascade(&mut self, origin: Coord2) -> Result<OpenOutcome> {
        let mut outcome = OpenOutcome::InProgress;
        let mut to_visit: VecDeque<_> = self.iter_neighbors(origin).collect();
        log::trace!(
            "Starting flood-fill from {:?}, initial neighbors: {:?}",
            origin,
            to_visit
        );

        while let Some(visit_coords) = to_visit.pop_front() {
            let cell = self.cells[visit_coords.to_nd_index()];
            if cell.is_open() || cell.is_flag() {
                continue;
            }

            outcome = outcome | self.open_single(visit_coords)?;
            log::trace!("Flood opened cell at {:?}", visit_coords);

            if cell.content() == CellContent::Count(0) {
                to_visit.extend(
                    self.iter_neighbors(visit_coords)
                        .filter(|&pos| !self.cells[pos.to_nd_index()].is_open()),
                );
            }
        }

        Ok(outcome)
    }

    pub fn set_flag(&mut self, coords: Coord2, value: bool) -> Result<()> {
        let coords = self.validate_coords(coords)?;
        let cell = &mut self.cells[coords.to_nd_index()];
        let was_flag = cell.is_flag();
        cell.set_flag(value)?;

        match (was_flag, value) {
            (false, true) => self.flag_count += 1,
            (true, false) => self.flag_count -= 1,
            _ => {}
        }
        Ok(())
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<()> {
        let value = !self.cell_at(coords)?.is_flag();
        self.set_flag(coords, value)
    }

    /// ASCII rendering with `.` for closed cells, for diagnostics.
    pub fn to_debug_string(&self) -> alloc::string::String {
        alloc::format!("{}", self)
    }
}

fn write_border(f: &mut fmt::Formatter<'_>, width: Coord) -> fmt::Result {
    for _ in 0..width {
        f.write_str("+-")?;
    }
    f.write_str("+\n")
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (width, height) = self.size();

        write_border(f, width)?;
        for y in 0..height {
            f.write_str("|")?;
            for x in 0..width {
                let cell = &self.cells[(x, y).to_nd_index()];
                if cell.is_open() {
                    write!(f, "{}|", cell.content())?;
                } else {
                    f.write_str(".|")?;
                }
            }
            f.write_str("\n")?;
            write_border(f, width)?;
        }
        Ok(())
    }
}
