//! Browser-facing wrapper around [`Simulation`].
//!
//! The host forwards pointer events, calls `tick` once per animation frame,
//! then reads the hue snapshot to draw. Drawing and color conversion stay in
//! the host.

use wasm_bindgen::prelude::*;

use crate::config::{ConfigError, SimConfig};
use crate::log::{console_log, console_warn};
use crate::sim::Simulation;

/// Snapshot value for a cell without a particle.
pub const EMPTY_HUE: u16 = u16::MAX;

#[wasm_bindgen]
#[derive(Debug)]
pub struct Universe {
    sim: Simulation,
    target_fps: u32,
    hues: Vec<u16>,
}

impl Universe {
    pub fn with_config(config: &SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let sim = Simulation::new(config)?;
        let (cols, rows) = (sim.grid().cols(), sim.grid().rows());
        console_log!(
            "universe {cols}x{rows} cells ({} px per cell)",
            config.cell_size
        );
        let mut universe = Self {
            hues: vec![EMPTY_HUE; cols * rows],
            sim,
            target_fps: config.target_fps,
        };
        universe.refresh_hues();
        Ok(universe)
    }

    #[must_use]
    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    fn refresh_hues(&mut self) {
        for (slot, cell) in self.hues.iter_mut().zip(self.sim.grid().cells()) {
            *slot = cell.map_or(EMPTY_HUE, |p| p.original_hue());
        }
    }
}

#[wasm_bindgen]
impl Universe {
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, cell_size: u32, seed: u64) -> Result<Universe, JsError> {
        let config = SimConfig {
            width,
            height,
            cell_size,
            seed,
            ..SimConfig::default()
        };
        Self::with_config(&config).map_err(|err| {
            console_warn!("rejected universe: {err}");
            JsError::from(err)
        })
    }

    /// Build from a JSON settings object; missing fields take defaults.
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(json: &str) -> Result<Universe, JsError> {
        SimConfig::from_json(json)
            .and_then(|config| Self::with_config(&config))
            .map_err(|err| {
                console_warn!("rejected config: {err}");
                JsError::from(err)
            })
    }

    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, x: i32, y: i32) {
        self.sim.pointer_moved(x, y);
    }

    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(&mut self, x: i32, y: i32) {
        self.sim.pointer_moved(x, y);
        self.sim.set_pointer_pressed(true);
    }

    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(&mut self) {
        self.sim.set_pointer_pressed(false);
    }

    /// Run one frame and refresh the hue snapshot.
    pub fn tick(&mut self) {
        self.sim.frame();
        self.refresh_hues();
    }

    #[wasm_bindgen(getter)]
    pub fn cols(&self) -> u32 {
        self.sim.grid().cols() as u32
    }

    #[wasm_bindgen(getter)]
    pub fn rows(&self) -> u32 {
        self.sim.grid().rows() as u32
    }

    #[wasm_bindgen(getter, js_name = cellSize)]
    pub fn cell_size(&self) -> u32 {
        self.sim.grid().cell_size()
    }

    #[wasm_bindgen(getter, js_name = currentHue)]
    pub fn current_hue(&self) -> u16 {
        self.sim.hue()
    }

    #[wasm_bindgen(getter, js_name = particleCount)]
    pub fn particle_count(&self) -> u32 {
        self.sim.grid().particle_count() as u32
    }

    #[wasm_bindgen(getter, js_name = lostParticles)]
    pub fn lost_particles(&self) -> u64 {
        self.sim.lost_particles()
    }

    #[wasm_bindgen(getter)]
    pub fn frames(&self) -> u64 {
        self.sim.frames()
    }

    #[wasm_bindgen(getter, js_name = targetFps)]
    pub fn target_fps(&self) -> u32 {
        self.target_fps
    }

    #[wasm_bindgen(getter, js_name = showGridLines)]
    pub fn show_grid_lines(&self) -> bool {
        self.sim.show_grid_lines()
    }

    #[wasm_bindgen(setter, js_name = showGridLines)]
    pub fn set_show_grid_lines(&mut self, show: bool) {
        self.sim.set_show_grid_lines(show);
    }

    #[wasm_bindgen(js_name = toggleGridLines)]
    pub fn toggle_grid_lines(&mut self) -> bool {
        let show = self.sim.toggle_grid_lines();
        console_log!("grid lines {}", if show { "on" } else { "off" });
        show
    }

    /// Row-major hue per cell, `EMPTY_HUE` where there is no particle.
    pub fn hues(&self) -> Vec<u16> {
        self.hues.clone()
    }

    /// Pointer into wasm memory for a zero-copy `Uint16Array` view of
    /// `cols * rows` hues. Valid until the next `tick`.
    #[wasm_bindgen(js_name = huesPtr)]
    pub fn hues_ptr(&self) -> *const u16 {
        self.hues.as_ptr()
    }
}

#[wasm_bindgen(js_name = emptyHue)]
#[must_use]
pub fn empty_hue() -> u16 {
    EMPTY_HUE
}

#[cfg(test)]
mod tests {
    use super::*;

    fn universe(width: u32, height: u32, cell_size: u32) -> Universe {
        Universe::with_config(&SimConfig {
            width,
            height,
            cell_size,
            ..SimConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn fresh_snapshot_is_all_empty() {
        let u = universe(600, 600, 10);
        assert_eq!((u.cols(), u.rows(), u.cell_size()), (60, 60, 10));
        assert_eq!(u.hues().len(), 3600);
        assert!(u.hues().iter().all(|&h| h == EMPTY_HUE));
        assert_eq!(u.target_fps(), 60);
        assert!(u.show_grid_lines());
    }

    #[test]
    fn tick_refreshes_snapshot() {
        let mut u = universe(30, 30, 10);
        u.pointer_down(12, 3);
        u.tick();
        u.pointer_up();
        // Placed at (1,0) with hue 0 and fell one row to (1,1).
        let hues = u.hues();
        assert_eq!(hues[3 + 1], 0);
        assert_eq!(hues.iter().filter(|&&h| h != EMPTY_HUE).count(), 1);
        assert_eq!(u.current_hue(), 1);
        assert_eq!(u.particle_count(), 1);
        assert_eq!(u.frames(), 1);

        u.tick();
        assert_eq!(u.hues()[2 * 3 + 1], 0);
        assert_eq!(u.particle_count(), 1);
        assert_eq!(u.lost_particles(), 0);
    }

    #[test]
    fn pointer_move_without_press_places_nothing() {
        let mut u = universe(30, 30, 10);
        u.pointer_move(12, 3);
        u.tick();
        assert_eq!(u.particle_count(), 0);
    }

    #[test]
    fn grid_line_flag_lives_outside_the_grid() {
        let mut u = universe(30, 30, 10);
        assert!(!u.toggle_grid_lines());
        u.set_show_grid_lines(true);
        assert!(u.show_grid_lines());
    }

    #[test]
    fn config_errors_surface_before_js() {
        let config = SimConfig {
            cell_size: 1000,
            ..SimConfig::default()
        };
        assert!(matches!(
            Universe::with_config(&config),
            Err(ConfigError::Grid(_))
        ));
    }

    #[test]
    fn hues_ptr_points_at_snapshot() {
        let u = universe(20, 20, 10);
        assert_eq!(u.hues_ptr(), u.hues.as_ptr());
        assert_eq!(empty_hue(), u16::MAX);
    }
}
