#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if let Some(family) = resprobe::fuzzing::parse_stat_input(input) {
            debug_assert!(!family.points.is_empty());
            for point in &family.points {
                debug_assert!(point.label("cpu").is_some());
                debug_assert!(point.label("mode").is_some());
                debug_assert!(point.value.get() >= 0.0);
            }
        }
    }
});
