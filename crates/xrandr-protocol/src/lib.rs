//! Monitor enumeration via `xrandr --listmonitors`.
//!
//! This crate parses the listing format into [`Monitor`] values and picks the
//! primary display out of a list. It performs no I/O; the surrounding engine
//! runs the actual program. The covered output looks like:
//!
//! ```text
//! Monitors: 2
//!  0: +*eDP-1 1920/344x1080/194+0+0  eDP-1
//!  1: +HDMI-1 2560/597x1440/336+1920+0  HDMI-1
//! ```
//!
//! Only connected, active monitors appear in this listing, which is exactly
//! the set a tablet can be mapped onto.

#![deny(static_mut_refs)]
#![deny(clippy::unwrap_used)]

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors returned while parsing `xrandr --listmonitors` output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MonitorParseError {
    /// The output did not start with the `Monitors:` count header.
    #[error("Expected a `Monitors:` header, got: {line:?}")]
    MissingHeader {
        /// First non-empty line of the output, or empty when there was none.
        line: String,
    },

    /// A monitor line did not carry the expected whitespace-separated fields.
    #[error("Malformed monitor line (expected `N: flags geometry name`): {line:?}")]
    MalformedMonitorLine {
        /// The offending line, verbatim.
        line: String,
    },

    /// The geometry field was not of the `W/mmWxH/mmH+X+Y` shape.
    #[error("Malformed monitor geometry (expected `W/mmWxH/mmH+X+Y`): {token:?}")]
    InvalidGeometry {
        /// The geometry token, verbatim.
        token: String,
    },

    /// A pixel dimension inside the geometry field was not an integer.
    #[error("Monitor dimension is not an integer in {token:?}")]
    InvalidDimension {
        /// The geometry token the dimension came from.
        token: String,
        /// The underlying integer parse failure.
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Default program name of the display configuration utility.
pub const PROGRAM: &str = "xrandr";

/// Arguments listing connected, active monitors: `--listmonitors`.
pub fn list_monitors_args() -> Vec<String> {
    vec!["--listmonitors".to_string()]
}

/// One active monitor as listed by `xrandr --listmonitors`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monitor {
    /// Output connector name, e.g. `eDP-1` or `HDMI-1`.
    pub output: String,
    /// Horizontal resolution in pixels.
    pub width: u32,
    /// Vertical resolution in pixels.
    pub height: u32,
    /// Whether this is the primary monitor (`*` flag in the listing).
    pub primary: bool,
}

impl fmt::Display for Monitor {
    /// Renders the selection label, e.g. `eDP-1 (1920x1080) [Primary]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}x{})", self.output, self.width, self.height)?;
        if self.primary {
            write!(f, " [Primary]")?;
        }
        Ok(())
    }
}

/// Index of the primary monitor within `monitors`, if one is flagged.
///
/// `xrandr` does not guarantee a primary exists (it can be unset with
/// `--noprimary`), so callers fall back to the first monitor themselves.
pub fn primary_index(monitors: &[Monitor]) -> Option<usize> {
    monitors.iter().position(|monitor| monitor.primary)
}

/// Parse the output of `xrandr --listmonitors`.
///
/// The first non-empty line must be the `Monitors: N` count header; it is
/// validated and then ignored (the monitor lines themselves are
/// authoritative). Each following non-empty line needs at least four
/// whitespace-separated fields: list index, flags + connector, geometry, and
/// the output name, which is always the last field. A `*` among the flags
/// marks the primary monitor. Pixel offsets in the geometry, including
/// negative ones, are ignored.
///
/// A listing with zero monitors parses to an empty list; deciding whether
/// that is an error is left to the caller.
///
/// # Errors
///
/// See [`MonitorParseError`] for the rejected shapes.
pub fn parse_monitor_list(output: &str) -> Result<Vec<Monitor>, MonitorParseError> {
    let mut lines = output.lines().filter(|line| !line.trim().is_empty());

    let header = lines.next().unwrap_or("");
    if !header.trim_start().starts_with("Monitors:") {
        return Err(MonitorParseError::MissingHeader {
            line: header.to_string(),
        });
    }

    lines.map(parse_monitor_line).collect()
}

fn parse_monitor_line(line: &str) -> Result<Monitor, MonitorParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let &[_, flags, geometry, .., output] = tokens.as_slice() else {
        return Err(MonitorParseError::MalformedMonitorLine {
            line: line.to_string(),
        });
    };

    let (width, height) = parse_geometry(geometry)?;

    Ok(Monitor {
        output: output.to_string(),
        width,
        height,
        primary: flags.contains('*'),
    })
}

/// Split a `W/mmWxH/mmH+X+Y` geometry token into pixel width and height.
fn parse_geometry(token: &str) -> Result<(u32, u32), MonitorParseError> {
    let (width_part, height_part) =
        token
            .split_once('x')
            .ok_or_else(|| MonitorParseError::InvalidGeometry {
                token: token.to_string(),
            })?;

    Ok((
        parse_dimension(token, width_part)?,
        parse_dimension(token, height_part)?,
    ))
}

/// Parse the pixel count at the front of a dimension part, dropping the
/// physical millimetre size and any position offsets behind it.
fn parse_dimension(token: &str, part: &str) -> Result<u32, MonitorParseError> {
    let digits = part.split(['/', '+', '-']).next().unwrap_or(part);
    digits
        .parse()
        .map_err(|source| MonitorParseError::InvalidDimension {
            token: token.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const DUAL_HEAD: &str = "Monitors: 2\n \
                             0: +*eDP-1 1920/344x1080/194+0+0  eDP-1\n \
                             1: +HDMI-1 2560/597x1440/336+1920+0  HDMI-1\n";

    #[test]
    fn test_parse_dual_head_listing() -> Result<(), MonitorParseError> {
        let monitors = parse_monitor_list(DUAL_HEAD)?;
        assert_eq!(
            monitors,
            vec![
                Monitor {
                    output: "eDP-1".to_string(),
                    width: 1920,
                    height: 1080,
                    primary: true,
                },
                Monitor {
                    output: "HDMI-1".to_string(),
                    width: 2560,
                    height: 1440,
                    primary: false,
                },
            ]
        );
        Ok(())
    }

    #[test]
    fn test_zero_monitors_is_empty_list() -> Result<(), MonitorParseError> {
        assert!(parse_monitor_list("Monitors: 0\n")?.is_empty());
        Ok(())
    }

    #[test]
    fn test_missing_header_is_rejected() {
        let result = parse_monitor_list(" 0: +*eDP-1 1920/344x1080/194+0+0  eDP-1\n");
        assert!(matches!(
            result,
            Err(MonitorParseError::MissingHeader { .. })
        ));
    }

    #[test]
    fn test_empty_output_is_rejected() {
        assert_eq!(
            parse_monitor_list(""),
            Err(MonitorParseError::MissingHeader {
                line: String::new(),
            })
        );
    }

    #[test]
    fn test_negative_offsets_are_ignored() -> Result<(), MonitorParseError> {
        let output = "Monitors: 1\n 0: +*DP-3 3440/800x1440/335-3440+0  DP-3\n";
        let monitors = parse_monitor_list(output)?;
        assert_eq!(
            monitors.first(),
            Some(&Monitor {
                output: "DP-3".to_string(),
                width: 3440,
                height: 1440,
                primary: true,
            })
        );
        Ok(())
    }

    #[test]
    fn test_short_monitor_line_is_malformed() {
        let output = "Monitors: 1\n 0: +*eDP-1 1920/344x1080/194+0+0\n";
        assert!(matches!(
            parse_monitor_list(output),
            Err(MonitorParseError::MalformedMonitorLine { .. })
        ));
    }

    #[test]
    fn test_geometry_without_x_is_rejected() {
        let output = "Monitors: 1\n 0: +*eDP-1 1920+0+0  eDP-1\n";
        assert!(matches!(
            parse_monitor_list(output),
            Err(MonitorParseError::InvalidGeometry { .. })
        ));
    }

    #[test]
    fn test_non_integer_dimension_is_rejected() {
        let output = "Monitors: 1\n 0: +*eDP-1 wide/344x1080/194+0+0  eDP-1\n";
        assert!(matches!(
            parse_monitor_list(output),
            Err(MonitorParseError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_primary_index_finds_flagged_monitor() {
        let monitors = vec![
            Monitor {
                output: "HDMI-1".to_string(),
                width: 2560,
                height: 1440,
                primary: false,
            },
            Monitor {
                output: "eDP-1".to_string(),
                width: 1920,
                height: 1080,
                primary: true,
            },
        ];
        assert_eq!(primary_index(&monitors), Some(1));
    }

    #[test]
    fn test_primary_index_none_without_flag() {
        let monitors = vec![Monitor {
            output: "eDP-1".to_string(),
            width: 1920,
            height: 1080,
            primary: false,
        }];
        assert_eq!(primary_index(&monitors), None);
        assert_eq!(primary_index(&[]), None);
    }

    #[test]
    fn test_display_label_with_primary() {
        let monitor = Monitor {
            output: "eDP-1".to_string(),
            width: 1920,
            height: 1080,
            primary: true,
        };
        assert_eq!(monitor.to_string(), "eDP-1 (1920x1080) [Primary]");
    }

    #[test]
    fn test_display_label_without_primary() {
        let monitor = Monitor {
            output: "HDMI-1".to_string(),
            width: 2560,
            height: 1440,
            primary: false,
        };
        assert_eq!(monitor.to_string(), "HDMI-1 (2560x1440)");
    }

    #[test]
    fn test_list_monitors_args() {
        assert_eq!(list_monitors_args(), ["--listmonitors"]);
    }

    #[test]
    fn test_extra_fields_keep_last_token_as_name() -> Result<(), MonitorParseError> {
        // Some servers pad the listing with extra columns; the name is
        // always the final field.
        let output = "Monitors: 1\n 0: +*eDP-1 1920/344x1080/194+0+0 pad eDP-1\n";
        let monitors = parse_monitor_list(output)?;
        assert_eq!(monitors.first().map(|m| m.output.clone()), Some("eDP-1".to_string()));
        Ok(())
    }
}
