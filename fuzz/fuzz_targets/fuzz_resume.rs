#![no_main]

use libfuzzer_sys::fuzz_target;
use zigzag_skeleton::{compress, distance, Compressed, Sample};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    // First byte picks the split point, the rest are values
    let values = &data[1..];
    let split = usize::from(data[0]).min(values.len());
    let points: Vec<Sample> = values
        .iter()
        .enumerate()
        .map(|(i, &b)| Sample::new(i as u64, f64::from(b as i8)))
        .collect();

    let whole = compress(points.iter().copied(), &distance::absolute, Compressed::new());
    let head = compress(points[..split].iter().copied(), &distance::absolute, Compressed::new());
    let resumed = compress(points[split..].iter().copied(), &distance::absolute, head);

    assert_eq!(whole, resumed, "resumed compression diverged at split {split}");
});
