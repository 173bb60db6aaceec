//! Pointer-to-grid input adapter.

use crate::Grid;

/// Floor-divide a pixel position into `(col, row)`. Negative pixels map to
/// negative cells, which the grid then rejects as out of bounds.
#[must_use]
pub fn pixel_to_cell(x: i32, y: i32, cell_size: u32) -> (i32, i32) {
    let size = cell_size.max(1) as i32;
    (x.div_euclid(size), y.div_euclid(size))
}

/// Drop a particle with `hue` under the pointer. Out-of-bounds and occupied
/// targets are ignored; returns whether a particle was placed.
pub fn place_at_pixel(grid: &mut Grid, x: i32, y: i32, hue: u16) -> bool {
    let (col, row) = pixel_to_cell(x, y, grid.cell_size());
    match grid.place(col, row, hue) {
        Ok(()) => true,
        Err(err) => {
            debug_assert!(err.is_recoverable());
            false
        }
    }
}
