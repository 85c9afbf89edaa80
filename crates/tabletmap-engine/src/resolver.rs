//! Non-destructive discovery of a device's native input area.

use tabletmap_geometry::Rect;
use tabletmap_xsetwacom_protocol::TabletDevice;
use tracing::debug;

use crate::ports::TabletPort;
use crate::EngineError;

/// Read the device's factory-native input area without losing the
/// currently configured one.
///
/// The only way to read the native rectangle is to reset the device, and
/// the reset destroys whatever area the user had configured. The resolver
/// therefore brackets the destructive read:
///
/// 1. read the active area and keep it as `saved`,
/// 2. reset the device,
/// 3. read the now-native area,
/// 4. write `saved` back,
/// 5. return the native area.
///
/// Any failing step aborts immediately and surfaces that step's error. A
/// reset or post-reset read failure can leave the device reset with `saved`
/// lost; nothing can be done about that from here, the caller sees the
/// failure and the device is at factory defaults rather than in an undefined
/// state. A failed restore also surfaces as the error: the native value was
/// read by then, but returning it would hide that the device no longer holds
/// the user's area.
pub fn resolve_native_area(
    port: &dyn TabletPort,
    device: &TabletDevice,
) -> Result<Rect, EngineError> {
    let saved = port.area(device)?;
    port.reset_area(device)?;
    let native = port.area(device)?;
    port.set_area(device, saved)?;

    debug!("Resolved native area {:?} for `{}`", native, device);
    Ok(native)
}
