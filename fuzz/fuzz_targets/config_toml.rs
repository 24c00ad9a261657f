#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if let Ok(settings) = resprobe::fuzzing::apply_config_from_toml(input) {
            debug_assert!(settings.interval.as_millis() > 0);
            debug_assert!(settings.report.chart_height >= 1);
            debug_assert!(settings.report.chart_offset >= 1);
        }
    }
});
