//! Divisibility counter
//!
//! Classifies every integer in `[0, n)` into at most one bucket. Precedence is
//! first match wins: multiples of 6 are `fizzbuzz`, remaining multiples of 3
//! are `buzz`, remaining even numbers are `fizz`. Everything else (integers
//! coprime to 6) is counted nowhere.
//!
//! Four renditions of the loop are provided behind the [`Forward`] trait so
//! the harness can time them side by side.

use clap::ValueEnum;
use std::fmt;
use std::hint::black_box;

/// Counts per bucket for one bound
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Triple {
    pub fizz: u64,
    pub buzz: u64,
    pub fizzbuzz: u64,
}

impl Triple {
    #[must_use]
    pub const fn new(fizz: u64, buzz: u64, fizzbuzz: u64) -> Self {
        Self {
            fizz,
            buzz,
            fizzbuzz,
        }
    }

    /// Increment the counter for `bucket`
    pub fn record(&mut self, bucket: Bucket) {
        match bucket {
            Bucket::Fizz => self.fizz += 1,
            Bucket::Buzz => self.buzz += 1,
            Bucket::FizzBuzz => self.fizzbuzz += 1,
        }
    }

    /// Sum of all three counters
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.fizz + self.buzz + self.fizzbuzz
    }
}

impl From<Triple> for [u64; 3] {
    fn from(t: Triple) -> Self {
        [t.fizz, t.buzz, t.fizzbuzz]
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.fizz, self.buzz, self.fizzbuzz)
    }
}

/// Classification outcome for a single integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    Fizz,
    Buzz,
    FizzBuzz,
}

impl Bucket {
    /// Bucket for `i`, or `None` when `i` is divisible by neither 2 nor 3
    #[must_use]
    pub const fn of(i: i64) -> Option<Self> {
        if i % 6 == 0 {
            Some(Bucket::FizzBuzz)
        } else if i % 3 == 0 {
            Some(Bucket::Buzz)
        } else if i % 2 == 0 {
            Some(Bucket::Fizz)
        } else {
            None
        }
    }
}

/// Count buckets over `[0, n)`. Empty when `n <= 0`.
#[must_use]
pub fn classify(n: i64) -> Triple {
    let (mut fizz, mut buzz, mut fizzbuzz) = (0u64, 0u64, 0u64);
    for i in 0..n {
        if i % 6 == 0 {
            fizzbuzz += 1;
        } else if i % 3 == 0 {
            buzz += 1;
        } else if i % 2 == 0 {
            fizz += 1;
        }
    }
    Triple::new(fizz, buzz, fizzbuzz)
}

/// Same loop as [`classify`], with the bound and every counter update routed
/// through [`black_box`] so the optimizer cannot collapse it.
#[must_use]
pub fn classify_opaque(n: i64) -> Triple {
    let n = black_box(n);
    let (mut fizz, mut buzz, mut fizzbuzz) = (0u64, 0u64, 0u64);
    for i in 0..n {
        if i % 6 == 0 {
            fizzbuzz = black_box(fizzbuzz + 1);
        } else if i % 3 == 0 {
            buzz = black_box(buzz + 1);
        } else if i % 2 == 0 {
            fizz = black_box(fizz + 1);
        }
    }
    Triple::new(fizz, buzz, fizzbuzz)
}

/// Element-at-a-time rendition: one [`Bucket::of`] lookup and one
/// [`Triple::record`] per integer.
#[must_use]
pub fn classify_bucketed(n: i64) -> Triple {
    (0..n)
        .filter_map(Bucket::of)
        .fold(Triple::default(), |mut acc, bucket| {
            acc.record(bucket);
            acc
        })
}

/// Whole-range rendition: materialize `[0, n)` once, then count each bucket
/// with its own masked pass over the buffer.
#[must_use]
pub fn classify_vectorized(n: i64) -> Triple {
    let xs: Vec<i64> = (0..n.max(0)).collect();
    let count = |mask: fn(i64) -> bool| xs.iter().filter(|&&x| mask(x)).count() as u64;

    Triple::new(
        count(|x| x % 2 == 0 && x % 6 != 0),
        count(|x| x % 3 == 0 && x % 6 != 0),
        count(|x| x % 6 == 0),
    )
}

/// A computation mapping a bound to a [`Triple`]
pub trait Forward {
    /// Human-readable name used in timing reports
    fn label(&self) -> &'static str;

    fn forward(&self, n: i64) -> Triple;
}

/// Rendition of the counting loop selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Variant {
    /// Plain loop
    Native,
    /// Loop with optimization barriers on every update
    Opaque,
    /// Per-element bucket lookup and accumulate
    Bucketed,
    /// Masked counts over a materialized range
    Vectorized,
}

impl Variant {
    pub const ALL: [Variant; 4] = [
        Variant::Native,
        Variant::Opaque,
        Variant::Bucketed,
        Variant::Vectorized,
    ];
}

impl Forward for Variant {
    fn label(&self) -> &'static str {
        match self {
            Variant::Native => "Native",
            Variant::Opaque => "Native Opaque",
            Variant::Bucketed => "Bucketed",
            Variant::Vectorized => "Vectorized",
        }
    }

    fn forward(&self, n: i64) -> Triple {
        match self {
            Variant::Native => classify(n),
            Variant::Opaque => classify_opaque(n),
            Variant::Bucketed => classify_bucketed(n),
            Variant::Vectorized => classify_vectorized(n),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
