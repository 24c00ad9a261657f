#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if let Some(family) = resprobe::fuzzing::parse_meminfo_input(input) {
            debug_assert_eq!(family.points.len(), 1);
        }
    }
});
