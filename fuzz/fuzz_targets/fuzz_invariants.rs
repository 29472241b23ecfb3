#![no_main]

use libfuzzer_sys::fuzz_target;
use zigzag_skeleton::{compress, distance, Compressed, Sample};

fuzz_target!(|data: &[u8]| {
    // Each byte is one value; small integers keep absolute distances exact
    let points = data
        .iter()
        .enumerate()
        .map(|(i, &b)| Sample::new(i as u64, f64::from(b)));
    let state = compress(points, &distance::absolute, Compressed::new());

    assert!(state.skeleton.is_alternating(), "diffs do not alternate");
    assert!(state.skeleton.is_folded(), "interior minimum survived folding");

    // Every byte lands at most once in skeleton + archive
    let held = state.skeleton.len() + 2 * state.archive.len();
    assert!(held <= data.len());
});
