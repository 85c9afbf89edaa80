//! Device enumeration: `xsetwacom --list devices` output.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ParseError;

/// Kind of input device, from the `type:` field of a device line.
///
/// The utility reports upper-case kind names. Kinds this crate does not know
/// about are carried through as [`DeviceKind::Other`] rather than rejected,
/// so new hardware keeps enumerating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceKind {
    /// Pen tip.
    Stylus,
    /// Pen eraser end.
    Eraser,
    /// Relative-mode puck or mouse.
    Cursor,
    /// Express keys and touch rings on the tablet body.
    Pad,
    /// Finger touch surface.
    Touch,
    /// Any kind not listed above, verbatim.
    Other(String),
}

impl DeviceKind {
    fn from_field(field: &str) -> Self {
        match field {
            "STYLUS" => Self::Stylus,
            "ERASER" => Self::Eraser,
            "CURSOR" => Self::Cursor,
            "PAD" => Self::Pad,
            "TOUCH" => Self::Touch,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stylus => f.write_str("STYLUS"),
            Self::Eraser => f.write_str("ERASER"),
            Self::Cursor => f.write_str("CURSOR"),
            Self::Pad => f.write_str("PAD"),
            Self::Touch => f.write_str("TOUCH"),
            Self::Other(kind) => f.write_str(kind),
        }
    }
}

/// One input device as listed by `xsetwacom --list devices`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabletDevice {
    /// Human-readable device name, e.g. `Wacom Intuos4 6x9 stylus`.
    pub name: String,
    /// Numeric X input device id; all other commands address the device
    /// through this id.
    pub id: u32,
    /// Device kind from the `type:` field.
    pub kind: DeviceKind,
}

impl fmt::Display for TabletDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Parse the output of `xsetwacom --list devices`.
///
/// Each non-empty line carries three tab-separated fields:
///
/// ```text
/// Wacom Intuos4 6x9 stylus        	id: 10	type: STYLUS
/// ```
///
/// Field padding is trimmed and the `id: ` / `type: ` prefixes are stripped.
/// Empty output parses to an empty list; deciding whether that is an error
/// is left to the caller.
///
/// # Errors
///
/// [`ParseError::MalformedDeviceLine`] for a non-empty line with fewer than
/// three tab-separated fields, [`ParseError::InvalidDeviceId`] when the id
/// field does not hold a decimal integer.
pub fn parse_device_list(output: &str) -> Result<Vec<TabletDevice>, ParseError> {
    let mut devices = Vec::new();

    for line in output.lines() {
        if line.trim().is_empty() {
            continue;
        }

        let mut fields = line.split('\t');
        let (Some(name), Some(id_field), Some(kind_field)) =
            (fields.next(), fields.next(), fields.next())
        else {
            return Err(ParseError::MalformedDeviceLine {
                line: line.to_string(),
            });
        };

        let id_token = id_field.trim();
        let id_token = id_token.strip_prefix("id: ").unwrap_or(id_token).trim();
        let id = id_token
            .parse()
            .map_err(|source| ParseError::InvalidDeviceId {
                token: id_token.to_string(),
                source,
            })?;

        let kind_field = kind_field.trim();
        let kind_field = kind_field
            .strip_prefix("type: ")
            .unwrap_or(kind_field)
            .trim();

        devices.push(TabletDevice {
            name: name.trim().to_string(),
            id,
            kind: DeviceKind::from_field(kind_field),
        });
    }

    Ok(devices)
}
