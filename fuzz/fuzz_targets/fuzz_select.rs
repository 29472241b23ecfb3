#![no_main]

use libfuzzer_sys::fuzz_target;
use zigzag_skeleton::{compress, distance, refine, select, Compressed, Sample};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let deviation = f64::from(data[0]);
    let points = data[1..]
        .iter()
        .enumerate()
        .map(|(i, &b)| Sample::new(i as u64, f64::from(b)));
    let state = compress(points, &distance::absolute, Compressed::new());

    let fine = select(&state.skeleton, &state.archive, deviation / 2.0, Sample::key);
    let coarse = select(&state.skeleton, &state.archive, deviation, Sample::key);

    // Sorted by index, every point above the threshold
    assert!(coarse.windows(2).all(|w| w[0].point.index <= w[1].point.index));
    assert!(coarse.iter().all(|z| z.importance >= deviation));

    // Nothing appears at a coarser deviation that was missing at a finer one
    for z in &coarse {
        assert!(fine.iter().any(|f| f.point.index == z.point.index));
    }
    assert!(refine(&fine, deviation).len() <= fine.len());
});
