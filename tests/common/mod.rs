//! Shared helpers for integration tests
//!
//! Provides an independent brute-force oracle and a closed-form count so that
//! tests never check the counter against itself.

#![allow(dead_code)]

use fizzbuzz_bench::Triple;

/// Binary name used by CLI tests
pub const BIN: &str = "fizzbuzz-bench";

/// Bound the tool is normally run with
pub const REFERENCE_BOUND: i64 = 100_000;

/// Independent rendition: two divisibility predicates evaluated per integer
pub fn brute_force(n: i64) -> Triple {
    let mut triple = Triple::default();
    let mut i = 0;
    while i < n {
        match (i % 2 == 0, i % 3 == 0) {
            (true, true) => triple.fizzbuzz += 1,
            (false, true) => triple.buzz += 1,
            (true, false) => triple.fizz += 1,
            (false, false) => {}
        }
        i += 1;
    }
    triple
}

/// Counts derived from the number of multiples of 2, 3 and 6 in `[0, n)`
pub fn closed_form(n: i64) -> Triple {
    if n <= 0 {
        return Triple::default();
    }
    let n = n as u64;
    let multiples = |k: u64| n.div_ceil(k);
    Triple::new(
        multiples(2) - multiples(6),
        multiples(3) - multiples(6),
        multiples(6),
    )
}
