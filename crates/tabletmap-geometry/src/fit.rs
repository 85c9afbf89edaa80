//! Aspect-ratio area fitting.

use crate::error::GeometryError;
use crate::rect::Rect;
use crate::screen::ScreenSize;

/// Compute the largest sub-rectangle of `original` whose aspect ratio
/// matches `screen`, anchored at `(original.x1, original.y1)`.
///
/// Exactly one axis is recomputed; the other keeps the original extent:
///
/// - tablet proportionally taller than the screen: width is kept,
///   `y2 = y1 + round(width / screen_ratio)`;
/// - tablet proportionally wider than or equal to the screen: height is
///   kept, `x2 = x1 + round(height * screen_ratio)`.
///
/// Equal ratios fall into the second branch, where the recomputed width
/// equals the original width and the rectangle passes through unchanged.
/// Rounding is round-half-away-from-zero (`f64::round`), which keeps the
/// recomputed dimension within half a device unit of the exact value.
///
/// # Errors
///
/// Returns [`GeometryError::DegenerateArea`] when `original` has zero width
/// or zero height; its aspect ratio would otherwise be a division by zero.
/// Returns [`GeometryError::CoordinateOverflow`] when the recomputed edge
/// would leave the `i32` device range. A rectangle built through
/// [`Rect::new`] never triggers this (a fitted edge cannot pass the kept
/// one); it guards values assembled directly from fields.
///
/// # Example
///
/// ```
/// use tabletmap_geometry::{fit, Rect, ScreenSize};
///
/// let screen = ScreenSize::new(1920, 1080)?;
/// let wide_tablet = Rect::new(0, 0, 20000, 8000)?;
///
/// // Ratio 2.5 is wider than 16:9: height is kept, width shrinks.
/// assert_eq!(fit(screen, wide_tablet)?, Rect::new(0, 0, 14222, 8000)?);
/// # Ok::<(), tabletmap_geometry::GeometryError>(())
/// ```
pub fn fit(screen: ScreenSize, original: Rect) -> Result<Rect, GeometryError> {
    let screen_ratio = screen.aspect_ratio();
    let tablet_ratio = original.aspect_ratio()?;

    let mut fitted = original;
    if tablet_ratio < screen_ratio {
        fitted.y2 = refit_edge(original.y1, f64::from(original.width()) / screen_ratio, "y2")?;
    } else {
        fitted.x2 = refit_edge(original.x1, f64::from(original.height()) * screen_ratio, "x2")?;
    }

    Ok(fitted)
}

/// Add a rounded span to an anchor edge, keeping the result in `i32`.
///
/// `edge` is a sum of two integer-valued doubles, so once the range check
/// passes the cast is exact.
fn refit_edge(anchor: i32, span: f64, axis: &'static str) -> Result<i32, GeometryError> {
    let edge = f64::from(anchor) + span.round();
    if edge < f64::from(i32::MIN) || edge > f64::from(i32::MAX) {
        return Err(GeometryError::CoordinateOverflow { axis });
    }
    Ok(edge as i32)
}
