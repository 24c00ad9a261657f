#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let (receive, transmit) = resprobe::fuzzing::parse_net_dev_input(input);
        debug_assert_eq!(receive.is_some(), transmit.is_some());
        if let (Some(receive), Some(transmit)) = (receive, transmit) {
            debug_assert_eq!(receive.points.len(), transmit.points.len());
        }
    }
});
