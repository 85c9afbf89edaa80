//! The full mapping pipeline for one device and one monitor.

use serde::Serialize;
use tabletmap_geometry::{fit, Rect, ScreenSize};
use tabletmap_xrandr_protocol::Monitor;
use tabletmap_xsetwacom_protocol::TabletDevice;
use tracing::debug;

use crate::ports::TabletPort;
use crate::resolver::resolve_native_area;
use crate::EngineError;

/// The input area a device ended up with after [`apply_mapping`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AppliedArea {
    /// The device was given this aspect-corrected sub-area.
    Fitted(Rect),
    /// The device was reset to its full factory-default area.
    NativeDefault,
}

/// Map `device` onto `monitor`, optionally correcting the input area so the
/// tablet's aspect ratio matches the monitor's.
///
/// With `preserve_aspect` set, the device's native area is resolved
/// non-destructively, fitted to the monitor's ratio, and written back; the
/// mapping then covers the fitted area edge to edge without distortion. The
/// monitor's resolution is validated before the device is touched, so a
/// degenerate monitor leaves the device exactly as it was.
///
/// Without `preserve_aspect` the device area is reset to its factory
/// default, trading proportionality for reach over the full surface.
///
/// Either way the device is finally mapped onto the monitor's output. Errors
/// abort the remaining steps; a failure after the area write leaves the area
/// configured but the device still mapped to its previous output.
pub fn apply_mapping(
    port: &dyn TabletPort,
    device: &TabletDevice,
    monitor: &Monitor,
    preserve_aspect: bool,
) -> Result<AppliedArea, EngineError> {
    let applied = if preserve_aspect {
        let screen = ScreenSize::new(monitor.width, monitor.height)?;
        let native = resolve_native_area(port, device)?;
        let fitted = fit(screen, native)?;
        port.set_area(device, fitted)?;
        AppliedArea::Fitted(fitted)
    } else {
        port.reset_area(device)?;
        AppliedArea::NativeDefault
    };

    port.map_to_output(device, &monitor.output)?;

    debug!(
        "Mapped `{}` to `{}` with area {:?}",
        device, monitor.output, applied
    );
    Ok(applied)
}
