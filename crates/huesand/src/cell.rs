//! Particle and per-cell snapshot types for the simulation grid.

use std::fmt;

use crate::hue::HUE_RANGE;

/// One unit of sand. Carries the hue it was created with and nothing else,
/// so moving it around the grid can never change its color.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Particle {
    original_hue: u16,
}

impl Particle {
    /// Hues outside `0..360` wrap around the color wheel.
    #[must_use]
    pub fn new(hue: u16) -> Self {
        Self {
            original_hue: hue % HUE_RANGE,
        }
    }

    #[must_use]
    pub fn original_hue(self) -> u16 {
        self.original_hue
    }
}

impl fmt::Display for Particle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Particle(hue={})", self.original_hue)
    }
}

/// A grid location holds zero or one particle.
pub type Cell = Option<Particle>;

/// Read-only view of a cell handed to the renderer.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct CellView {
    pub occupied: bool,
    /// Zero for empty cells.
    pub original_hue: u16,
}

impl From<Cell> for CellView {
    fn from(cell: Cell) -> Self {
        match cell {
            Some(p) => Self {
                occupied: true,
                original_hue: p.original_hue(),
            },
            None => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn particle_keeps_hue() {
        let p = Particle::new(120);
        assert_eq!(p.original_hue(), 120);
        assert_eq!(format!("{p}"), "Particle(hue=120)");
    }

    #[test]
    fn particle_is_two_bytes() {
        assert_eq!(std::mem::size_of::<Particle>(), 2);
    }

    #[test]
    fn view_of_empty_cell() {
        let view = CellView::from(None::<Particle>);
        assert!(!view.occupied);
        assert_eq!(view.original_hue, 0);
    }

    #[test]
    fn view_of_occupied_cell() {
        let view = CellView::from(Some(Particle::new(359)));
        assert!(view.occupied);
        assert_eq!(view.original_hue, 359);
    }

    proptest! {
        #[test]
        fn prop_particle_hue_always_on_wheel(hue in any::<u16>()) {
            let p = Particle::new(hue);
            prop_assert!(p.original_hue() < HUE_RANGE);
            prop_assert_eq!(p.original_hue(), hue % HUE_RANGE);
        }
    }
}
