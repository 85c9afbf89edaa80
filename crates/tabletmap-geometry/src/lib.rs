//! Tablet Area Geometry for tabletmap
//!
//! This crate implements the aspect-ratio area fitting that keeps a tablet's
//! active input rectangle proportional to the screen it is mapped onto.
//!
//! # Overview
//!
//! A tablet reports pen positions inside an integer **input rectangle** in
//! device-native units. When that rectangle's aspect ratio differs from the
//! target screen's, drawn circles come out as ellipses. [`fit`] computes the
//! largest sub-rectangle of the tablet's area, anchored at the area's origin,
//! whose width:height ratio equals the screen's:
//!
//! - A tablet proportionally **taller** than the screen keeps its full width
//!   and gives up height.
//! - A tablet proportionally **wider** than (or equal to) the screen keeps
//!   its full height and gives up width.
//!
//! The untouched axis is preserved exactly; the other is recomputed with
//! round-half-away-from-zero rounding, so the result is within half a device
//! unit of the ideal ratio.
//!
//! # Purity
//!
//! Everything here is I/O-free and deterministic: plain `Copy` values in,
//! new values out. Talking to actual devices lives in `tabletmap-engine`.
//!
//! # Example
//!
//! ```
//! use tabletmap_geometry::{fit, Rect, ScreenSize};
//!
//! let screen = ScreenSize::new(1920, 1080)?;
//! let tablet = Rect::new(0, 0, 15200, 9500)?;
//!
//! // 15200:9500 is 1.6, taller than the screen's 1.78: width is kept,
//! // height shrinks until the ratios match.
//! let fitted = fit(screen, tablet)?;
//! assert_eq!(fitted, Rect::new(0, 0, 15200, 8550)?);
//! # Ok::<(), tabletmap_geometry::GeometryError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod fit;
pub mod rect;
pub mod screen;

pub use error::GeometryError;
pub use fit::fit;
pub use rect::Rect;
pub use screen::ScreenSize;
