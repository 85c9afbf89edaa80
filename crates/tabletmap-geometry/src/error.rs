//! Error types for geometry operations.

use thiserror::Error;

/// Error type for rectangle and screen-size validation.
///
/// Aspect ratios are quotients, so the validation rules exist to keep every
/// division in this crate well-defined: rectangles must have non-negative
/// extent on both axes, a rectangle fed to the fitter must have positive
/// area, and screens must have positive pixel dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// Rectangle corners are swapped on at least one axis (`x2 < x1` or
    /// `y2 < y1`).
    #[error("rectangle corners are inverted: ({x1}, {y1})-({x2}, {y2})")]
    InvertedCorners {
        /// Left edge as given.
        x1: i32,
        /// Top edge as given.
        y1: i32,
        /// Right edge as given.
        x2: i32,
        /// Bottom edge as given.
        y2: i32,
    },

    /// Rectangle has zero width or zero height, making its aspect ratio
    /// undefined.
    #[error("rectangle has no area: {width}x{height} device units")]
    DegenerateArea {
        /// Rectangle width (`x2 - x1`).
        width: i32,
        /// Rectangle height (`y2 - y1`).
        height: i32,
    },

    /// Screen size has a zero dimension.
    #[error("screen size has a zero dimension: {width}x{height} pixels")]
    EmptyScreen {
        /// Screen width in pixels.
        width: u32,
        /// Screen height in pixels.
        height: u32,
    },

    /// Rectangle extent does not fit in device units.
    #[error("rectangle extent {width}x{height} exceeds the device unit range")]
    OversizedArea {
        /// Full width (`x2 - x1`) as a wide integer.
        width: i64,
        /// Full height (`y2 - y1`) as a wide integer.
        height: i64,
    },

    /// Fitting would push an edge coordinate outside the device unit range.
    #[error("fitted {axis} edge exceeds the device unit range")]
    CoordinateOverflow {
        /// Name of the edge that overflowed (`x2` or `y2`).
        axis: &'static str,
    },
}
