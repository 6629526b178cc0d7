//! Core data models for Clover Hunt.
//! Geometry is in CSS pixels with the origin at the board's top-left corner.

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// Index of an item within one [`crate::layout::Layout`].
pub type ItemId = usize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn is_positive(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Shrinks the rect by `padding` on every side.
    pub fn inset(&self, padding: f64) -> Result<Rect, LayoutError> {
        let inner = Rect::new(self.width - padding * 2.0, self.height - padding * 2.0);
        if !self.is_positive() || !padding.is_finite() || padding < 0.0 || !inner.is_positive() {
            return Err(LayoutError::InvalidDimensions {
                width: inner.width,
                height: inner.height,
            });
        }
        Ok(inner)
    }
}

/// Pixel diameter bounds for a token, `min` inclusive and `max` exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SizeRange {
    pub min: f64,
    pub max: f64,
}

impl SizeRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.min.is_finite() && self.max.is_finite() && self.min > 0.0 && self.min <= self.max {
            Ok(())
        } else {
            Err(LayoutError::InvalidSizeRange {
                min: self.min,
                max: self.max,
            })
        }
    }
}

impl Default for SizeRange {
    fn default() -> Self {
        Self { min: 36.0, max: 64.0 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: u32,
    pub col: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlacedItem {
    pub id: ItemId,
    /// Top-left corner.
    pub x: f64,
    pub y: f64,
    /// Diameter of the token's square box.
    pub size: f64,
    pub is_target: bool,
    /// Grid cell the item was sampled from.
    pub cell: Cell,
    /// Tilt in degrees, purely cosmetic.
    pub rotation: f64,
}

impl PlacedItem {
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.x + self.size && y >= self.y && y < self.y + self.size
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.size / 2.0, self.y + self.size / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inset_shrinks_both_axes() {
        let inner = Rect::new(300.0, 200.0).inset(16.0).unwrap();
        assert_eq!(inner, Rect::new(268.0, 168.0));
    }

    #[test]
    fn inset_rejects_degenerate_areas() {
        assert!(Rect::new(0.0, 0.0).inset(16.0).is_err());
        assert!(Rect::new(32.0, 100.0).inset(16.0).is_err());
        assert!(Rect::new(100.0, f64::NAN).inset(0.0).is_err());
        assert!(Rect::new(100.0, 100.0).inset(-1.0).is_err());
    }

    #[test]
    fn size_range_validation() {
        assert!(SizeRange::new(20.0, 40.0).validate().is_ok());
        assert!(SizeRange::new(20.0, 20.0).validate().is_ok());
        assert!(SizeRange::new(0.0, 40.0).validate().is_err());
        assert!(SizeRange::new(50.0, 40.0).validate().is_err());
    }

    #[test]
    fn item_box_contains_its_corner_but_not_far_edge() {
        let item = PlacedItem {
            id: 0,
            x: 10.0,
            y: 20.0,
            size: 30.0,
            is_target: false,
            cell: Cell { row: 0, col: 0 },
            rotation: 0.0,
        };
        assert!(item.contains(10.0, 20.0));
        assert!(item.contains(39.9, 49.9));
        assert!(!item.contains(40.0, 30.0));
        assert_eq!(item.center(), (25.0, 35.0));
    }
}
