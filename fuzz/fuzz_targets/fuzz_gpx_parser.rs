#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(xml) = std::str::from_utf8(data) {
        if let Ok(gpx) = gpx_track::parse_gpx(xml) {
            // Alle gelieferten Koordinaten muessen endlich sein
            assert!(gpx
                .primary_points()
                .iter()
                .all(|p| p.latitude.is_finite() && p.longitude.is_finite()));
        }
    }
});
