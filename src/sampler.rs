//! Cell selection and per-cell placement.

use crate::grid::GridSpec;
use crate::model::{Cell, Rect, SizeRange};
use crate::random::RandomSource;

/// Anchors land in the 20%..80% band of their cell on each axis.
pub const JITTER_BAND_START: f64 = 0.2;
pub const JITTER_BAND_SPAN: f64 = 0.6;
pub const MAX_TILT_DEG: f64 = 12.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub rotation: f64,
}

/// `count` distinct cells drawn uniformly without replacement.
/// Asking for more cells than the grid holds returns every cell.
pub fn sample_cells<R: RandomSource + ?Sized>(grid: &GridSpec, count: usize, rng: &mut R) -> Vec<Cell> {
    let mut cells = Vec::with_capacity(grid.capacity());
    for row in 0..grid.rows {
        for col in 0..grid.cols {
            cells.push(Cell { row, col });
        }
    }
    for i in (1..cells.len()).rev() {
        let j = rng.index(i + 1);
        cells.swap(i, j);
    }
    cells.truncate(count);
    cells
}

/// Places one token inside `cell`. The box is clamped so it stays within the
/// board minus `padding`; neighbouring tokens may overlap.
pub fn place_in_cell<R: RandomSource + ?Sized>(
    cell: Cell,
    grid: &GridSpec,
    padding: f64,
    sizes: SizeRange,
    board: Rect,
    rng: &mut R,
) -> Placement {
    let fit = (board.width - padding * 2.0).min(board.height - padding * 2.0);
    let size = rng.range(sizes.min, sizes.max).min(fit);
    let (ox, oy) = grid.cell_origin(cell);
    let x0 = padding + ox;
    let y0 = padding + oy;
    let jx = rng.next_f64() * grid.cell_width * JITTER_BAND_SPAN + grid.cell_width * JITTER_BAND_START;
    let jy = rng.next_f64() * grid.cell_height * JITTER_BAND_SPAN + grid.cell_height * JITTER_BAND_START;
    let x = (x0 + jx - size / 2.0).max(padding).min(board.width - padding - size);
    let y = (y0 + jy - size / 2.0).max(padding).min(board.height - padding - size);
    let rotation = rng.range(-MAX_TILT_DEG, MAX_TILT_DEG);
    Placement { x, y, size, rotation }
}
