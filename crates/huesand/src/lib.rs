//! Hue-stamped falling sand simulation engine.

pub mod log;

pub mod cell;
pub mod config;
pub mod error;
pub mod hue;
pub mod input;
pub mod rng;
pub mod rules;
pub mod sim;
pub mod universe;


use cell::{Cell, CellView, Particle};
use error::GridError;
use rng::SignSource;
use wasm_bindgen::prelude::*;

pub use config::SimConfig;
pub use sim::Simulation;
pub use universe::Universe;

/// Fixed-size 2D grid of optional particles, stored row-major.
///
/// Stepping is double-buffered: `cells` is the current state and `back` is
/// scratch space that becomes current once a step finishes.
#[derive(Debug, Clone)]
pub struct Grid {
    cols: usize,
    rows: usize,
    cell_size: u32,
    cells: Vec<Cell>,
    back: Vec<Cell>,
}

/// Outcome counts for one call to [`Grid::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepStats {
    /// Particles that fell straight or diagonally.
    pub moved: usize,
    /// Particles that stayed put (floor or blocked).
    pub resting: usize,
    /// Writes that landed on a cell another particle had already claimed
    /// this step. Each one is a particle lost from the grid.
    pub overwritten: usize,
}

impl Grid {
    /// Column and row counts for a `width`x`height` pixel area.
    pub fn dimensions(
        width: u32,
        height: u32,
        cell_size: u32,
    ) -> Result<(usize, usize), GridError> {
        let invalid = GridError::InvalidDimensions {
            width,
            height,
            cell_size,
        };
        if cell_size == 0 {
            return Err(invalid);
        }
        let cols = (width / cell_size) as usize;
        let rows = (height / cell_size) as usize;
        if cols == 0 || rows == 0 {
            return Err(invalid);
        }
        Ok((cols, rows))
    }

    /// Build an empty grid covering `width`x`height` pixels.
    pub fn new(width: u32, height: u32, cell_size: u32) -> Result<Self, GridError> {
        let (cols, rows) = Self::dimensions(width, height, cell_size)?;
        Ok(Self {
            cols,
            rows,
            cell_size,
            cells: vec![None; cols * rows],
            back: vec![None; cols * rows],
        })
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Current cells, row-major (`row * cols + col`).
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[must_use]
    pub fn in_bounds(&self, col: i32, row: i32) -> bool {
        col >= 0 && (col as usize) < self.cols && row >= 0 && (row as usize) < self.rows
    }

    /// In bounds and holding no particle.
    #[must_use]
    pub fn is_vacant(&self, col: i32, row: i32) -> bool {
        self.in_bounds(col, row) && self.cells[self.index(col, row)].is_none()
    }

    pub fn cell_at(&self, col: i32, row: i32) -> Result<Cell, GridError> {
        self.check_bounds(col, row)?;
        Ok(self.cells[self.index(col, row)])
    }

    /// Put a new particle with `hue` into an empty cell.
    pub fn place(&mut self, col: i32, row: i32, hue: u16) -> Result<(), GridError> {
        self.check_bounds(col, row)?;
        let idx = self.index(col, row);
        if self.cells[idx].is_some() {
            return Err(GridError::CellOccupied {
                col: col as usize,
                row: row as usize,
            });
        }
        self.cells[idx] = Some(Particle::new(hue));
        Ok(())
    }

    #[must_use]
    pub fn particle_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Every cell as `((col, row), view)`, row-major.
    pub fn views(&self) -> impl Iterator<Item = ((usize, usize), CellView)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &cell)| ((idx % cols, idx / cols), CellView::from(cell)))
    }

    /// Advance the simulation by one tick.
    ///
    /// Visits columns left to right and each column top to bottom. Every
    /// decision reads the pre-step state; results are written into the back
    /// buffer, which is swapped in at the end. When two particles pick the
    /// same empty cell the one visited later wins and the other is dropped.
    pub fn step<S>(&mut self, signs: &mut S) -> StepStats
    where
        S: SignSource + ?Sized,
    {
        let mut stats = StepStats::default();
        self.back.fill(None);

        for col in 0..self.cols as i32 {
            for row in 0..self.rows as i32 {
                let Some(particle) = self.cells[self.index(col, row)] else {
                    continue;
                };
                let mv = rules::destination(self, col, row, signs);
                let (to_col, to_row) = mv.target(col, row);
                let dest = self.index(to_col, to_row);
                if self.back[dest].is_some() {
                    stats.overwritten += 1;
                }
                self.back[dest] = Some(particle);
                if mv.is_resting() {
                    stats.resting += 1;
                } else {
                    stats.moved += 1;
                }
            }
        }

        std::mem::swap(&mut self.cells, &mut self.back);
        stats
    }

    fn index(&self, col: i32, row: i32) -> usize {
        row as usize * self.cols + col as usize
    }

    fn check_bounds(&self, col: i32, row: i32) -> Result<(), GridError> {
        if self.in_bounds(col, row) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                col,
                row,
                cols: self.cols,
                rows: self.rows,
            })
        }
    }
}

/// Install the panic hook and announce the engine on the console.
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    log::console_log!("huesand {} initialized", env!("CARGO_PKG_VERSION"));
}

#[wasm_bindgen]
#[must_use]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
