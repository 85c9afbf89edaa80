//! Process-backed adapter for the `xrandr` utility.

use tabletmap_xrandr_protocol as protocol;
use tabletmap_xrandr_protocol::Monitor;

use crate::ports::MonitorSource;
use crate::process::run;
use crate::EngineError;

/// [`MonitorSource`] implementation that shells out to `xrandr`.
///
/// As with [`crate::XSetWacomPort`], the program name can be overridden for
/// tests and unusual installs.
#[derive(Debug, Clone)]
pub struct XrandrSource {
    program: String,
}

impl XrandrSource {
    /// Adapter invoking the default `xrandr` program from `PATH`.
    pub fn new() -> Self {
        Self::with_program(protocol::PROGRAM)
    }

    /// Adapter invoking `program` instead of the default.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for XrandrSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MonitorSource for XrandrSource {
    fn monitors(&self) -> Result<Vec<Monitor>, EngineError> {
        let stdout = run(
            &self.program,
            "list monitors",
            &protocol::list_monitors_args(),
        )?;
        Ok(protocol::parse_monitor_list(&stdout)?)
    }
}
