//! Argument vectors for the `xsetwacom` command line.
//!
//! Builders return ready-to-pass argv tails; the program itself is chosen by
//! the caller (the default name lives in [`crate::PROGRAM`]). Arguments are
//! individual entries, never a joined shell string, so device and output
//! names containing spaces survive intact.

use tabletmap_geometry::Rect;

/// Arguments listing all connected devices: `--list devices`.
pub fn list_devices_args() -> Vec<String> {
    vec!["--list".to_string(), "devices".to_string()]
}

/// Arguments querying the active area of device `id`: `--get <id> Area`.
pub fn get_area_args(id: u32) -> Vec<String> {
    vec!["--get".to_string(), id.to_string(), "Area".to_string()]
}

/// Arguments setting the active area of device `id`:
/// `--set <id> Area x1 y1 x2 y2`.
pub fn set_area_args(id: u32, area: Rect) -> Vec<String> {
    vec![
        "--set".to_string(),
        id.to_string(),
        "Area".to_string(),
        area.x1.to_string(),
        area.y1.to_string(),
        area.x2.to_string(),
        area.y2.to_string(),
    ]
}

/// Arguments restoring the factory default area of device `id`:
/// `--set <id> ResetArea`.
pub fn reset_area_args(id: u32) -> Vec<String> {
    vec!["--set".to_string(), id.to_string(), "ResetArea".to_string()]
}

/// Arguments mapping device `id` onto the display output `output`:
/// `--set <id> MapToOutput <output>`.
pub fn map_to_output_args(id: u32, output: &str) -> Vec<String> {
    vec![
        "--set".to_string(),
        id.to_string(),
        "MapToOutput".to_string(),
        output.to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabletmap_geometry::GeometryError;

    #[test]
    fn test_list_devices_args() {
        assert_eq!(list_devices_args(), ["--list", "devices"]);
    }

    #[test]
    fn test_get_area_args() {
        assert_eq!(get_area_args(21), ["--get", "21", "Area"]);
    }

    #[test]
    fn test_set_area_args() -> Result<(), GeometryError> {
        let area = Rect::new(-10, 0, 15200, 8550)?;
        assert_eq!(
            set_area_args(21, area),
            ["--set", "21", "Area", "-10", "0", "15200", "8550"]
        );
        Ok(())
    }

    #[test]
    fn test_reset_area_args() {
        assert_eq!(reset_area_args(7), ["--set", "7", "ResetArea"]);
    }

    #[test]
    fn test_map_to_output_args_keeps_name_as_one_entry() {
        let args = map_to_output_args(7, "DisplayPort-1 extra");
        assert_eq!(args, ["--set", "7", "MapToOutput", "DisplayPort-1 extra"]);
        assert_eq!(args.len(), 4);
    }
}
