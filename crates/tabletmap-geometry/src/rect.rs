//! Integer rectangles in device-native units.

use serde::{Deserialize, Serialize};

use crate::error::GeometryError;

/// A tablet input rectangle in device-native units.
///
/// The corners satisfy `x1 <= x2` and `y1 <= y2`, with both extents small
/// enough to fit in `i32`; [`Rect::new`] rejects anything else. Zero-width
/// and zero-height rectangles are representable
/// (they appear naturally as differences of equal coordinates) but cannot be
/// fed to [`fit`](crate::fit), which needs a defined aspect ratio.
///
/// Rectangles are plain `Copy` values with no identity: operations take them
/// by value and return new ones rather than mutating in place.
///
/// # Example
///
/// ```
/// use tabletmap_geometry::Rect;
///
/// let area = Rect::new(0, 0, 44704, 27940)?;
/// assert_eq!(area.width(), 44704);
/// assert_eq!(area.height(), 27940);
/// # Ok::<(), tabletmap_geometry::GeometryError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x1: i32,
    /// Top edge.
    pub y1: i32,
    /// Right edge (`>= x1`).
    pub x2: i32,
    /// Bottom edge (`>= y1`).
    pub y2: i32,
}

impl Rect {
    /// Create a rectangle from its corner coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvertedCorners`] if `x2 < x1` or `y2 < y1`,
    /// and [`GeometryError::OversizedArea`] if either extent is too large for
    /// `i32`. The second case cannot come from a real tablet; the guard keeps
    /// [`width`](Rect::width) and [`height`](Rect::height) total.
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Result<Self, GeometryError> {
        if x2 < x1 || y2 < y1 {
            return Err(GeometryError::InvertedCorners { x1, y1, x2, y2 });
        }
        let width = i64::from(x2) - i64::from(x1);
        let height = i64::from(y2) - i64::from(y1);
        if width > i64::from(i32::MAX) || height > i64::from(i32::MAX) {
            return Err(GeometryError::OversizedArea { width, height });
        }
        Ok(Self { x1, y1, x2, y2 })
    }

    /// Width of the rectangle (`x2 - x1`), always non-negative.
    #[inline]
    pub fn width(&self) -> i32 {
        self.x2 - self.x1
    }

    /// Height of the rectangle (`y2 - y1`), always non-negative.
    #[inline]
    pub fn height(&self) -> i32 {
        self.y2 - self.y1
    }

    /// Whether the rectangle has zero extent on either axis.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Width divided by height as `f64`.
    ///
    /// Never stored anywhere: recomputed at point of use so it cannot drift
    /// from the integer coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateArea`] for zero-width or
    /// zero-height rectangles, where the ratio is undefined.
    pub fn aspect_ratio(&self) -> Result<f64, GeometryError> {
        if self.is_degenerate() {
            return Err(GeometryError::DegenerateArea {
                width: self.width(),
                height: self.height(),
            });
        }
        Ok(f64::from(self.width()) / f64::from(self.height()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_ordered_corners() -> Result<(), GeometryError> {
        let rect = Rect::new(100, 200, 300, 400)?;
        assert_eq!(rect.width(), 200);
        assert_eq!(rect.height(), 200);
        Ok(())
    }

    #[test]
    fn test_new_accepts_negative_origin() -> Result<(), GeometryError> {
        // Some tablets report areas offset into negative coordinates.
        let rect = Rect::new(-100, -50, 100, 50)?;
        assert_eq!(rect.width(), 200);
        assert_eq!(rect.height(), 100);
        Ok(())
    }

    #[test]
    fn test_new_rejects_inverted_x() {
        assert_eq!(
            Rect::new(10, 0, 5, 20),
            Err(GeometryError::InvertedCorners {
                x1: 10,
                y1: 0,
                x2: 5,
                y2: 20,
            })
        );
    }

    #[test]
    fn test_new_rejects_inverted_y() {
        assert!(Rect::new(0, 20, 10, 5).is_err());
    }

    #[test]
    fn test_new_rejects_extent_wider_than_i32() {
        assert_eq!(
            Rect::new(i32::MIN, 0, i32::MAX, 10),
            Err(GeometryError::OversizedArea {
                width: 4_294_967_295,
                height: 10,
            })
        );
    }

    #[test]
    fn test_zero_extent_is_representable_but_degenerate() -> Result<(), GeometryError> {
        let flat = Rect::new(0, 100, 500, 100)?;
        assert!(flat.is_degenerate());
        assert_eq!(
            flat.aspect_ratio(),
            Err(GeometryError::DegenerateArea {
                width: 500,
                height: 0,
            })
        );
        Ok(())
    }

    #[test]
    fn test_aspect_ratio_of_square_is_one() -> Result<(), GeometryError> {
        let square = Rect::new(0, 0, 1000, 1000)?;
        assert!((square.aspect_ratio()? - 1.0).abs() < f64::EPSILON);
        Ok(())
    }

    #[test]
    fn test_serde_roundtrip() -> Result<(), Box<dyn std::error::Error>> {
        let rect = Rect::new(0, 0, 15200, 9500)?;
        let json = serde_json::to_string(&rect)?;
        let back: Rect = serde_json::from_str(&json)?;
        assert_eq!(rect, back);
        Ok(())
    }
}
