//! Fuzzes the aspect-ratio area fitter with arbitrary screens and areas.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_area_fit
#![no_main]
use libfuzzer_sys::fuzz_target;
use tabletmap_geometry::{fit, Rect, ScreenSize};

fuzz_target!(|data: &[u8]| {
    if data.len() < 24 {
        return;
    }

    let w = u32::from_le_bytes([data[0], data[1], data[2], data[3]]);
    let h = u32::from_le_bytes([data[4], data[5], data[6], data[7]]);
    let x1 = i32::from_le_bytes([data[8], data[9], data[10], data[11]]);
    let y1 = i32::from_le_bytes([data[12], data[13], data[14], data[15]]);
    let x2 = i32::from_le_bytes([data[16], data[17], data[18], data[19]]);
    let y2 = i32::from_le_bytes([data[20], data[21], data[22], data[23]]);

    let (Ok(screen), Ok(original)) = (ScreenSize::new(w, h), Rect::new(x1, y1, x2, y2)) else {
        return;
    };

    // Must never panic; a fitted area never outgrows the original.
    if let Ok(fitted) = fit(screen, original) {
        assert!(fitted.width() <= original.width());
        assert!(fitted.height() <= original.height());
        assert_eq!((fitted.x1, fitted.y1), (original.x1, original.y1));
    }
});
