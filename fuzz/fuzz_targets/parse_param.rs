#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if let Ok((key, _value)) = resprobe::fuzzing::parse_param_input(input) {
            debug_assert!(!key.is_empty());
            debug_assert!(input.contains('='));
        }
    }
});
