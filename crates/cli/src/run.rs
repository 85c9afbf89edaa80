//! The end-to-end mapping run: enumerate, select, apply

use anyhow::Result;
use serde::Serialize;
use tabletmap_engine::{
    apply_mapping, AppliedArea, DeviceSource, MonitorSource, XrandrSource, XSetWacomPort,
};
use tabletmap_xrandr_protocol::primary_index;
use tabletmap_xsetwacom_protocol::TabletDevice;
use tracing::{info, warn};

use crate::error::CliError;
use crate::output;
use crate::prompt;
use crate::Cli;

/// One device successfully mapped during a run.
#[derive(Debug, Serialize)]
pub struct MappingRecord {
    pub device: TabletDevice,
    pub area: AppliedArea,
}

/// Execute the mapping run described by the parsed command line.
pub fn execute(cli: &Cli) -> Result<()> {
    let port = match cli.xsetwacom.as_deref() {
        Some(program) => XSetWacomPort::with_program(program),
        None => XSetWacomPort::new(),
    };
    let display = match cli.xrandr.as_deref() {
        Some(program) => XrandrSource::with_program(program),
        None => XrandrSource::new(),
    };

    let devices = port.devices()?;
    if devices.is_empty() {
        return Err(CliError::NoDevices.into());
    }

    let monitors = display.monitors()?;
    let primary = primary_index(&monitors);
    let Some(default_monitor) = primary
        .and_then(|index| monitors.get(index))
        .or_else(|| monitors.first())
    else {
        return Err(CliError::NoMonitors.into());
    };
    if primary.is_none() {
        warn!(
            "No monitor is flagged primary; defaulting to `{}`",
            default_monitor.output
        );
    }

    let (selected, monitor, preserve_aspect) = if cli.interactive {
        let selected = prompt::pick_devices(&devices)?;
        let monitor = prompt::pick_monitor(&monitors, primary.unwrap_or(0))?;
        let preserve = prompt::confirm_preserve_aspect(cli.preserve_aspect_ratio)?;
        (selected, monitor, preserve)
    } else {
        (devices, default_monitor.clone(), cli.preserve_aspect_ratio)
    };

    if selected.is_empty() {
        output::print_warning("No devices selected", cli.json);
        return Ok(());
    }

    info!("Mapping {} device(s) to `{}`", selected.len(), monitor.output);

    let mut mappings = Vec::with_capacity(selected.len());
    for device in selected {
        if !cli.json {
            println!("Mapping device `{}` to monitor `{}`.", device, monitor);
        }
        let area = apply_mapping(&port, &device, &monitor, preserve_aspect)?;
        mappings.push(MappingRecord { device, area });
    }

    output::print_mapping_report(&monitor, &mappings, cli.json);
    Ok(())
}
