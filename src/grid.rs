use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::model::Cell;

/// Smallest cell edge, in pixels, the densest grid may use.
pub const MIN_CELL_EDGE: f64 = 1.0;

/// Uniform grid cut from the inner (padded) board area.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    pub rows: u32,
    pub cols: u32,
    pub cell_width: f64,
    pub cell_height: f64,
}

impl GridSpec {
    /// Cell count, saturating on 32-bit targets.
    pub fn capacity(&self) -> usize {
        (self.rows as usize).saturating_mul(self.cols as usize)
    }

    /// Top-left of `cell`, relative to the inner area.
    pub fn cell_origin(&self, cell: Cell) -> (f64, f64) {
        (
            cell.col as f64 * self.cell_width,
            cell.row as f64 * self.cell_height,
        )
    }

    /// Cell containing an inner-area point, if any.
    pub fn cell_at(&self, x: f64, y: f64) -> Option<Cell> {
        if !(x >= 0.0 && y >= 0.0) {
            return None;
        }
        let col = (x / self.cell_width).floor() as u32;
        let row = (y / self.cell_height).floor() as u32;
        if col >= self.cols || row >= self.rows {
            return None;
        }
        Some(Cell { row, col })
    }
}

fn check_area(inner_width: f64, inner_height: f64) -> Result<(), LayoutError> {
    if inner_width.is_finite() && inner_height.is_finite() && inner_width > 0.0 && inner_height > 0.0 {
        Ok(())
    } else {
        Err(LayoutError::InvalidDimensions {
            width: inner_width,
            height: inner_height,
        })
    }
}

/// Near-square grid with at least `count` cells. Column count follows the
/// area's aspect ratio; rows are derived from columns so `rows * cols >= count`.
pub fn partition(inner_width: f64, inner_height: f64, count: usize) -> Result<GridSpec, LayoutError> {
    check_area(inner_width, inner_height)?;
    let cols = ((count as f64 * inner_width / inner_height).sqrt().ceil() as usize).max(1);
    let rows = count.div_ceil(cols).max(1);
    Ok(GridSpec {
        rows: rows as u32,
        cols: cols as u32,
        cell_width: inner_width / cols as f64,
        cell_height: inner_height / rows as f64,
    })
}

/// Densest grid the area can host without cells shrinking below [`MIN_CELL_EDGE`].
pub fn densest(inner_width: f64, inner_height: f64) -> Result<GridSpec, LayoutError> {
    check_area(inner_width, inner_height)?;
    let cols = ((inner_width / MIN_CELL_EDGE).floor() as u32).max(1);
    let rows = ((inner_height / MIN_CELL_EDGE).floor() as u32).max(1);
    Ok(GridSpec {
        rows,
        cols,
        cell_width: inner_width / cols as f64,
        cell_height: inner_height / rows as f64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partition_matches_aspect() {
        let grid = partition(268.0, 168.0, 10).unwrap();
        assert_eq!((grid.rows, grid.cols), (3, 4));
        assert!((grid.cell_width - 67.0).abs() < 1e-9);
        assert!((grid.cell_height - 56.0).abs() < 1e-9);
    }

    #[test]
    fn partition_covers_count() {
        for count in 1..500 {
            for (w, h) in [(100.0, 100.0), (968.0, 612.0), (40.0, 900.0), (1200.0, 30.0)] {
                let grid = partition(w, h, count).unwrap();
                assert!(grid.capacity() >= count, "{w}x{h} count {count}: {grid:?}");
            }
        }
    }

    #[test]
    fn partition_rejects_empty_area() {
        assert_eq!(
            partition(0.0, 10.0, 5),
            Err(LayoutError::InvalidDimensions {
                width: 0.0,
                height: 10.0
            })
        );
        assert!(partition(10.0, -1.0, 5).is_err());
        assert!(partition(f64::INFINITY, 10.0, 5).is_err());
    }

    #[test]
    fn zero_count_still_yields_one_cell() {
        let grid = partition(50.0, 50.0, 0).unwrap();
        assert_eq!(grid.capacity(), 1);
    }

    #[test]
    fn densest_uses_whole_pixels() {
        let grid = densest(68.0, 68.0).unwrap();
        assert_eq!((grid.rows, grid.cols), (68, 68));
        assert_eq!(grid.capacity(), 4624);
        let thin = densest(0.5, 10.0).unwrap();
        assert_eq!(thin.cols, 1);
    }

    #[test]
    fn huge_grids_do_not_overflow_capacity() {
        let grid = GridSpec {
            rows: u32::MAX,
            cols: u32::MAX,
            cell_width: 1.0,
            cell_height: 1.0,
        };
        assert!(grid.capacity() >= u32::MAX as usize);
        let wide = densest(100_000.0, 100_000.0).unwrap();
        assert_eq!((wide.rows, wide.cols), (100_000, 100_000));
        assert!(wide.capacity() >= 100_000);
    }

    #[test]
    fn cell_lookup_round_trips_origins() {
        let grid = partition(268.0, 168.0, 10).unwrap();
        let cell = Cell { row: 2, col: 3 };
        let (x, y) = grid.cell_origin(cell);
        assert_eq!(grid.cell_at(x + 1.0, y + 1.0), Some(cell));
        assert_eq!(grid.cell_at(268.0, 0.0), None);
        assert_eq!(grid.cell_at(-0.1, 0.0), None);
    }
}
