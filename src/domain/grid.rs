use std::fmt;

use rand::Rng;
use rayon::prelude::*;

use super::{Cell, GridError, rules::apply_rule};

/// Grid manages the 2D cellular automaton grid.
/// Uses functional, immutable updates: every generation is a fresh grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        })
    }

    /// Create a grid where exactly the listed coordinates are alive.
    /// Coordinates outside the grid are ignored.
    pub fn from_live_cells(
        width: usize,
        height: usize,
        live: &[(usize, usize)],
    ) -> Result<Self, GridError> {
        let mut grid = Self::new(width, height)?;
        live.iter().for_each(|&(x, y)| grid.set(x, y, Cell::Alive));
        Ok(grid)
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        (x < self.width && y < self.height)
            .then(|| self.cells[self.get_index(x, y)])
    }

    /// Cell state at position. Everything beyond the edge reads as dead,
    /// matching the non-wrapping boundary.
    pub fn state_at(&self, x: usize, y: usize) -> Cell {
        self.get(x, y).unwrap_or(Cell::Dead)
    }

    /// Set cell at position, ignored when out of bounds
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.get_index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// Count live cells in the Moore neighborhood of (x, y).
    /// The grid does not wrap: neighbors past an edge are skipped.
    pub fn count_live_neighbors(&self, x: usize, y: usize) -> u8 {
        (-1isize..=1)
            .flat_map(|dy| (-1isize..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .filter_map(|(dx, dy)| Some((x.checked_add_signed(dx)?, y.checked_add_signed(dy)?)))
            .filter(|&(nx, ny)| self.state_at(nx, ny).is_alive())
            .count() as u8
    }

    fn next_state(&self, x: usize, y: usize) -> Cell {
        apply_rule(self.state_at(x, y), self.count_live_neighbors(x, y))
    }

    /// Pure functional evolution - returns new grid (serial)
    pub fn advance(&self) -> Self {
        let cells = (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| (x, y)))
            .map(|(x, y)| self.next_state(x, y))
            .collect();

        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// Parallel evolution, one rayon task per output row.
    /// Produces exactly the same grid as [`Grid::advance`].
    pub fn advance_parallel(&self) -> Self {
        let mut cells = vec![Cell::Dead; self.cells.len()];
        cells
            .par_chunks_mut(self.width)
            .enumerate()
            .for_each(|(y, row)| {
                row.iter_mut()
                    .enumerate()
                    .for_each(|(x, cell)| *cell = self.next_state(x, y));
            });

        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// Bring cells to life independently with the given probability.
    /// Cells that lose the draw keep their current state.
    pub fn randomize<R: Rng>(
        mut self,
        probability: f64,
        rng: &mut R,
    ) -> Result<Self, GridError> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(GridError::InvalidProbability(probability));
        }

        self.cells.iter_mut().for_each(|cell| {
            if rng.random::<f64>() < probability {
                *cell = Cell::Alive;
            }
        });
        Ok(self)
    }

    /// Number of alive cells
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions, row by row
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| (x, y)))
            .map(|(x, y)| (x, y, self.state_at(x, y)))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width) {
            let line: String = row.iter().map(|cell| cell.glyph()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
