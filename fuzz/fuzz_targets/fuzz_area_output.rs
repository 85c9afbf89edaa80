//! Fuzzes the `xsetwacom --get <id> Area` output parser.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_area_output
#![no_main]
use libfuzzer_sys::fuzz_target;
use tabletmap_xsetwacom_protocol::{parse_area, set_area_args};

fuzz_target!(|data: &[u8]| {
    let Ok(output) = std::str::from_utf8(data) else {
        return;
    };

    // Must never panic; errors are acceptable.
    if let Ok(area) = parse_area(output) {
        // Accepted areas rebuild into arguments that parse back unchanged.
        let args = set_area_args(0, area);
        let rebuilt = args[3..].join(" ");
        assert_eq!(parse_area(&rebuilt), Ok(area));
    }
});
