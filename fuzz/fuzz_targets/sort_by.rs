#![no_main]

use std::cmp::Ordering;

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // First byte picks a comparator, the rest is the input. The derived
    // comparators are not required to be consistent with a total order, the
    // sort must terminate and keep the input multiset anyway.
    if data.is_empty() {
        return;
    }

    let selector = data[0];
    let mut v = data[1..].to_vec();

    let mut expected = v.clone();
    expected.sort_unstable();

    hqsort::sort_by(&mut v, |a, b| match selector % 4 {
        0 => a.cmp(b),
        1 => b.cmp(a),
        2 => Ordering::Less,
        _ => match (*a ^ *b ^ selector) % 3 {
            0 => Ordering::Less,
            1 => Ordering::Equal,
            _ => Ordering::Greater,
        },
    });

    v.sort_unstable();
    assert_eq!(v, expected);
});
