//! Interactive selection prompts

use dialoguer::{Confirm, MultiSelect, Select};
use tabletmap_xrandr_protocol::Monitor;
use tabletmap_xsetwacom_protocol::TabletDevice;

use crate::error::CliError;

/// Multi-select over the connected devices, with every device checked by
/// default.
pub fn pick_devices(devices: &[TabletDevice]) -> Result<Vec<TabletDevice>, CliError> {
    let checked = vec![true; devices.len()];
    let selection = MultiSelect::new()
        .with_prompt("Choose your devices")
        .items(devices)
        .defaults(&checked)
        .interact()?;

    Ok(selection
        .into_iter()
        .filter_map(|index| devices.get(index))
        .cloned()
        .collect())
}

/// Single-select over the monitors, with the primary preselected.
pub fn pick_monitor(monitors: &[Monitor], default_index: usize) -> Result<Monitor, CliError> {
    let index = Select::new()
        .with_prompt("Choose your monitor")
        .items(monitors)
        .default(default_index)
        .interact()?;

    monitors.get(index).cloned().ok_or(CliError::NoMonitors)
}

/// Confirm aspect preservation, defaulting to the flag value.
pub fn confirm_preserve_aspect(default: bool) -> Result<bool, CliError> {
    Ok(Confirm::new()
        .with_prompt("Preserve aspect ratio?")
        .default(default)
        .interact()?)
}
