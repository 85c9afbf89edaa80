//! Process-backed adapter for the `xsetwacom` utility.

use tabletmap_geometry::Rect;
use tabletmap_xsetwacom_protocol as protocol;
use tabletmap_xsetwacom_protocol::TabletDevice;

use crate::ports::{DeviceSource, TabletPort};
use crate::process::run;
use crate::EngineError;

/// [`TabletPort`] and [`DeviceSource`] implementation that shells out to
/// `xsetwacom`.
///
/// The program name can be overridden, which the integration tests use to
/// substitute recording fake utilities, and users can use to point at a
/// wrapper or a non-`PATH` install.
#[derive(Debug, Clone)]
pub struct XSetWacomPort {
    program: String,
}

impl XSetWacomPort {
    /// Adapter invoking the default `xsetwacom` program from `PATH`.
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

impl Default for XSetWacomPort {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceSource for XSetWacomPort {
    fn devices(&self) -> Result<Vec<TabletDevice>, EngineError> {
        let stdout = run(
            &self.program,
            "list devices",
            &protocol::list_devices_args(),
        )?;
        Ok(protocol::parse_device_list(&stdout)?)
    }
}

impl TabletPort for XSetWacomPort {
    fn area(&self, device: &TabletDevice) -> Result<Rect, EngineError> {
        let stdout = run(&self.program, "get area", &protocol::get_area_args(device.id))?;
        Ok(protocol::parse_area(&stdout)?)
    }

    fn set_area(&self, device: &TabletDevice, area: Rect) -> Result<(), EngineError> {
        run(
            &self.program,
            "set area",
            &protocol::set_area_args(device.id, area),
        )?;
        Ok(())
    }

    fn reset_area(&self, device: &TabletDevice) -> Result<(), EngineError> {
        run(
            &self.program,
            "reset area",
            &protocol::reset_area_args(device.id),
        )?;
        Ok(())
    }

    fn map_to_output(&self, device: &TabletDevice, output: &str) -> Result<(), EngineError> {
        run(
            &self.program,
            "map to output",
            &protocol::map_to_output_args(device.id, output),
        )?;
        Ok(())
    }
}
