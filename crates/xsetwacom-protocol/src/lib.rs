//! Textual protocol of the `xsetwacom` control utility.
//!
//! This crate builds the argument vectors the utility expects and parses the
//! line-oriented text it prints. It performs no I/O itself; the surrounding
//! engine decides how (and whether) to run the real program.
//!
//! ## Covered surface
//! - `--list devices`: tab-separated device lines (name, numeric id, kind)
//! - `--get <id> Area`: four whitespace-separated coordinates
//! - `--set <id> Area|ResetArea|MapToOutput`: argument builders

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod area;
pub mod command;
pub mod device;

pub use area::*;
pub use command::*;
pub use device::*;

use tabletmap_geometry::GeometryError;
use thiserror::Error;

/// Errors returned while parsing `xsetwacom` output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A device line did not carry the expected tab-separated fields.
    #[error("Malformed device line (expected `name<TAB>id: N<TAB>type: KIND`): {line:?}")]
    MalformedDeviceLine {
        /// The offending line, verbatim.
        line: String,
    },

    /// The `id:` field of a device line was not a decimal integer.
    #[error("Device id is not an integer: {token:?}")]
    InvalidDeviceId {
        /// The token that failed to parse.
        token: String,
        /// The underlying integer parse failure.
        #[source]
        source: std::num::ParseIntError,
    },

    /// An area query printed the wrong number of coordinates.
    #[error("Expected 4 area coordinates, found {found}")]
    CoordinateCount {
        /// How many whitespace-separated tokens were present.
        found: usize,
    },

    /// An area coordinate was not a decimal integer.
    #[error("Area coordinate {index} is not an integer: {token:?}")]
    InvalidCoordinate {
        /// Zero-based position of the coordinate in `x1 y1 x2 y2` order.
        index: usize,
        /// The token that failed to parse.
        token: String,
        /// The underlying integer parse failure.
        #[source]
        source: std::num::ParseIntError,
    },

    /// The parsed coordinates violate rectangle invariants.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Default program name of the Wacom control utility.
pub const PROGRAM: &str = "xsetwacom";
