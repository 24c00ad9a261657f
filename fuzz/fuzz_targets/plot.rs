#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }
    let width = usize::from(data[0] % 128);
    let height = usize::from(data[1] % 32).max(1);
    let offset = usize::from(data[2] % 16);
    let values: Vec<f64> = data[3..]
        .chunks_exact(8)
        .take(512)
        .filter_map(|chunk| chunk.try_into().ok().map(f64::from_le_bytes))
        .collect();
    let rendered = resprobe::fuzzing::plot_input(&values, width, height, offset);
    if values.is_empty() {
        debug_assert!(rendered.is_empty());
    }
});
