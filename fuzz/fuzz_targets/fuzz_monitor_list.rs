//! Fuzzes the `xrandr --listmonitors` output parser.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_monitor_list
#![no_main]
use libfuzzer_sys::fuzz_target;
use tabletmap_xrandr_protocol::{parse_monitor_list, primary_index};

fuzz_target!(|data: &[u8]| {
    let Ok(listing) = std::str::from_utf8(data) else {
        return;
    };

    // Must never panic on arbitrary listings; errors are acceptable.
    if let Ok(monitors) = parse_monitor_list(listing) {
        // The primary index always points into the list.
        if let Some(index) = primary_index(&monitors) {
            assert!(index < monitors.len());
        }
        for monitor in monitors {
            let _ = monitor.to_string();
        }
    }
});
