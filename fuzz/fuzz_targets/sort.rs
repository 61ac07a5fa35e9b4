#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut v = data.to_vec();
    hqsort::sort(&mut v);

    assert_eq!(v.len(), data.len());
    assert!(v.windows(2).all(|w| w[0] <= w[1]));
});
