//! Property-based tests for the xsetwacom textual protocol.
//!
//! Verifies parser invariants across generated device listings and area
//! outputs using `proptest`.

use proptest::prelude::*;
use tabletmap_geometry::Rect;
use tabletmap_xsetwacom_protocol::{
    parse_area, parse_device_list, set_area_args, DeviceKind, ParseError,
};

fn kind_field() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("STYLUS".to_string()),
        Just("ERASER".to_string()),
        Just("CURSOR".to_string()),
        Just("PAD".to_string()),
        Just("TOUCH".to_string()),
        "[A-Z]{3,10}",
    ]
}

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(500))]

    /// A well-formed device line always parses back to its own fields.
    #[test]
    fn prop_device_line_round_trips(
        name in "[A-Za-z][A-Za-z0-9 ]{0,28}[A-Za-z0-9]",
        id in 0u32..=1024,
        kind in kind_field(),
    ) {
        let line = format!("{name}\tid: {id}\ttype: {kind}\n");
        let devices = parse_device_list(&line).expect("well-formed line");
        prop_assert_eq!(devices.len(), 1);
        let device = devices.first().expect("one device");
        prop_assert_eq!(&device.name, &name);
        prop_assert_eq!(device.id, id);
        prop_assert_eq!(device.kind.to_string(), kind);
    }

    /// Lines without a tab never parse, whatever their content.
    #[test]
    fn prop_tabless_line_is_malformed(line in "[A-Za-z0-9 :]{1,40}") {
        prop_assume!(!line.trim().is_empty());
        let result = parse_device_list(&line);
        // Explicit message: the single-argument form stringifies the condition
        // into a format string, and the `{ .. }` pattern is not a valid
        // placeholder there.
        prop_assert!(
            matches!(result, Err(ParseError::MalformedDeviceLine { .. })),
            "assertion failed: matches!(result, Err(ParseError::MalformedDeviceLine {{ .. }}))"
        );
    }

    /// An area printed as `x1 y1 x2 y2` parses back to the same rectangle.
    #[test]
    fn prop_area_output_round_trips(
        x1 in -30_000i32..=30_000,
        y1 in -30_000i32..=30_000,
        w in 0i32..=60_000,
        h in 0i32..=60_000,
    ) {
        let rect = Rect::new(x1, y1, x1 + w, y1 + h).expect("ordered corners");
        let output = format!("{} {} {} {}\n", rect.x1, rect.y1, rect.x2, rect.y2);
        prop_assert_eq!(parse_area(&output).expect("well-formed output"), rect);
    }

    /// `set_area_args` always renders coordinates in x1 y1 x2 y2 order.
    #[test]
    fn prop_set_area_args_order(
        id in 0u32..=1024,
        x1 in -30_000i32..=30_000,
        y1 in -30_000i32..=30_000,
        w in 0i32..=60_000,
        h in 0i32..=60_000,
    ) {
        let rect = Rect::new(x1, y1, x1 + w, y1 + h).expect("ordered corners");
        let args = set_area_args(id, rect);
        prop_assert_eq!(args.len(), 7);
        let coords: Vec<String> = args.iter().skip(3).cloned().collect();
        prop_assert_eq!(
            coords,
            vec![
                rect.x1.to_string(),
                rect.y1.to_string(),
                rect.x2.to_string(),
                rect.y2.to_string(),
            ]
        );
    }

    /// Any token count other than four is a `CoordinateCount` error.
    #[test]
    fn prop_wrong_token_count_rejected(count in 0usize..=8) {
        prop_assume!(count != 4);
        let output = vec!["12"; count].join(" ");
        prop_assert_eq!(
            parse_area(&output),
            Err(ParseError::CoordinateCount { found: count })
        );
    }

    /// Unknown device kinds are preserved verbatim, never dropped.
    #[test]
    fn prop_unknown_kind_preserved(kind in "[A-Z]{3,10}") {
        let known = ["STYLUS", "ERASER", "CURSOR", "PAD", "TOUCH"];
        prop_assume!(!known.contains(&kind.as_str()));
        let line = format!("Pen\tid: 1\ttype: {kind}");
        let devices = parse_device_list(&line).expect("well-formed line");
        prop_assert_eq!(
            devices.first().map(|d| d.kind.clone()),
            Some(DeviceKind::Other(kind))
        );
    }
}
