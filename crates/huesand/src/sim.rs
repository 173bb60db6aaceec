//! Frame driver: owns the grid, hue counter, RNG and pointer state.

use rand::rngs::StdRng;

use crate::config::SimConfig;
use crate::error::GridError;
use crate::hue::HueCycle;
use crate::rng::{self, SignSource};
use crate::{input, Grid, StepStats};

/// Last known pointer position in pixels and whether the primary button is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pointer {
    pub x: i32,
    pub y: i32,
    pub pressed: bool,
}

#[derive(Debug)]
pub struct Simulation<S = StdRng> {
    grid: Grid,
    hue: HueCycle,
    signs: S,
    pointer: Pointer,
    show_grid_lines: bool,
    frames: u64,
    lost_particles: u64,
}

impl Simulation<StdRng> {
    pub fn new(config: &SimConfig) -> Result<Self, GridError> {
        Self::with_signs(config, rng::seeded(config.seed))
    }
}

impl<S: SignSource> Simulation<S> {
    /// Build a simulation that draws diagonal directions from `signs`.
    pub fn with_signs(config: &SimConfig, signs: S) -> Result<Self, GridError> {
        Ok(Self {
            grid: Grid::new(config.width, config.height, config.cell_size)?,
            hue: HueCycle::new(),
            signs,
            pointer: Pointer::default(),
            show_grid_lines: config.show_grid_lines,
            frames: 0,
            lost_particles: 0,
        })
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn hue(&self) -> u16 {
        self.hue.value()
    }

    #[must_use]
    pub fn pointer(&self) -> Pointer {
        self.pointer
    }

    pub fn pointer_moved(&mut self, x: i32, y: i32) {
        self.pointer.x = x;
        self.pointer.y = y;
    }

    pub fn set_pointer_pressed(&mut self, pressed: bool) {
        self.pointer.pressed = pressed;
    }

    /// Place a particle stamped with the current hue under pixel `(x, y)`.
    pub fn place_at_pixel(&mut self, x: i32, y: i32) -> bool {
        input::place_at_pixel(&mut self.grid, x, y, self.hue.value())
    }

    /// One frame: place under a held pointer, step the grid, advance the hue.
    pub fn frame(&mut self) -> StepStats {
        if self.pointer.pressed {
            let Pointer { x, y, .. } = self.pointer;
            self.place_at_pixel(x, y);
        }
        let stats = self.grid.step(&mut self.signs);
        self.hue.advance();
        self.frames += 1;
        self.lost_particles += stats.overwritten as u64;
        stats
    }

    #[must_use]
    pub fn show_grid_lines(&self) -> bool {
        self.show_grid_lines
    }

    pub fn set_show_grid_lines(&mut self, show: bool) {
        self.show_grid_lines = show;
    }

    /// Flip the grid-line flag and return the new value.
    pub fn toggle_grid_lines(&mut self) -> bool {
        self.show_grid_lines = !self.show_grid_lines;
        self.show_grid_lines
    }

    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Particles dropped by same-cell collisions since start.
    #[must_use]
    pub fn lost_particles(&self) -> u64 {
        self.lost_particles
    }
}
