//! Fuzzes the `xsetwacom --list devices` output parser.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_device_list
#![no_main]
use libfuzzer_sys::fuzz_target;
use tabletmap_xsetwacom_protocol::{get_area_args, parse_device_list};

fuzz_target!(|data: &[u8]| {
    let Ok(listing) = std::str::from_utf8(data) else {
        return;
    };

    // Must never panic on arbitrary listings; errors are acceptable.
    if let Ok(devices) = parse_device_list(listing) {
        for device in devices {
            // Formatting and argument building stay total for anything
            // the parser accepts.
            let _ = device.to_string();
            let _ = get_area_args(device.id);
        }
    }
});
