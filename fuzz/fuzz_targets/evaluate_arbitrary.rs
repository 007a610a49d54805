//! Feeds arbitrary bytes to the evaluator and asserts the cover invariants:
//! the cover partitions the password, every entropy is finite and
//! non-negative, and the reported total is the cover's sum.

#![no_main]

use libfuzzer_sys::fuzz_target;
use zxcvbn::{Analyzer, Options, PASSWORD_LEN_MAX};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() || data.len() > PASSWORD_LEN_MAX {
        return;
    }

    let mut analyzer = Analyzer::new(Options::default());
    let id = analyzer.register_dictionary("common");
    for (rank, word) in ["password", "qwerty", "dragon"].iter().enumerate() {
        analyzer.add_word(id, word.as_bytes(), rank as u32 + 1);
    }

    let analysis = analyzer
        .evaluate(data, &[b"fuzz"], &[])
        .expect("in-range passwords must evaluate");

    let mut next = 0;
    let mut sum = 0.0;
    for m in analysis.cover() {
        assert_eq!(m.i, next);
        assert!(m.j >= m.i && m.j < data.len());
        assert!(m.entropy.is_finite() && m.entropy >= 0.0);
        sum += m.entropy;
        next = m.j + 1;
    }
    assert_eq!(next, data.len());
    assert!((sum - analysis.entropy()).abs() < 1e-6);
});
