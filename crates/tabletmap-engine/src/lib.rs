//! Tablet mapping engine.
//!
//! The crate is organized around one seam: [`ports`] defines the capability
//! traits the logic needs, [`xsetwacom`] and [`xrandr`] adapt those traits
//! onto the real utilities via child processes, and [`resolver`] plus
//! [`pipeline`] hold the behavior worth testing against an in-memory mock
//! instead of hardware.
//!
//! Everything here is synchronous. Devices are configured one at a time and
//! each external call either completes or fails the run.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]
#![warn(missing_docs)]

pub mod pipeline;
pub mod ports;
mod process;
pub mod resolver;
pub mod xrandr;
pub mod xsetwacom;

pub use pipeline::{apply_mapping, AppliedArea};
pub use ports::{DeviceSource, MonitorSource, TabletPort};
pub use resolver::resolve_native_area;
pub use xrandr::XrandrSource;
pub use xsetwacom::XSetWacomPort;

use std::process::ExitStatus;

use tabletmap_geometry::GeometryError;
use tabletmap_xrandr_protocol::MonitorParseError;
use tabletmap_xsetwacom_protocol::ParseError;
use thiserror::Error;

/// Errors returned by engine operations.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The external utility could not be started at all.
    #[error("Could not launch `{program}`")]
    Launch {
        /// Program that failed to start.
        program: String,
        /// The underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// The external utility ran but exited unsuccessfully.
    #[error("`{program}` {operation} failed ({status}): {stderr}")]
    Failed {
        /// Program that failed.
        program: String,
        /// Engine operation that was running it.
        operation: &'static str,
        /// The child's exit status.
        status: ExitStatus,
        /// Captured standard error, trimmed.
        stderr: String,
    },

    /// Tablet utility output could not be parsed.
    #[error("Unreadable tablet utility output")]
    DeviceProtocol(#[from] ParseError),

    /// Monitor listing could not be parsed.
    #[error("Unreadable monitor listing")]
    MonitorProtocol(#[from] MonitorParseError),

    /// A geometry precondition was violated.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_errors_convert() {
        let parse_err = match tabletmap_xsetwacom_protocol::parse_area("not numbers") {
            Err(err) => err,
            Ok(rect) => unreachable!("garbage must not parse to {rect:?}"),
        };
        assert!(matches!(
            EngineError::from(parse_err),
            EngineError::DeviceProtocol(_)
        ));
    }

    #[test]
    fn test_error_chain_is_preserved() {
        let err = EngineError::Launch {
            program: "xsetwacom".to_string(),
            source: std::io::Error::other("no such file"),
        };
        let source = std::error::Error::source(&err);
        assert!(source.is_some_and(|s| s.to_string().contains("no such file")));
    }
}
