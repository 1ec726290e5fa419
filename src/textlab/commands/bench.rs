//! Naive string-building comparison.
//!
//! Builds the same `size`-character string two ways and times both:
//!
//! 1. **Accumulate**: push one character at a time onto a fresh `String`, letting
//!    it grow (and reallocate) as needed.
//! 2. **Pre-sized join**: collect the pieces into a `Vec` sized up front, then
//!    join them into a buffer allocated once.
//!
//! Timings are wall-clock and unscientific; the point is the comparison.

use serde::Serialize;
use std::hint::black_box;
use std::time::{Duration, Instant};

const ALPHABET: &[char] = &['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

#[derive(Debug, Clone, Serialize)]
pub struct BenchReport {
    pub size: usize,
    pub accumulate: Duration,
    pub presized_join: Duration,
}

impl BenchReport {
    /// How many times slower accumulation was than the pre-sized join.
    pub fn ratio(&self) -> f64 {
        let join = self.presized_join.as_secs_f64();
        if join == 0.0 {
            return 1.0;
        }
        self.accumulate.as_secs_f64() / join
    }
}

fn accumulate(size: usize) -> String {
    let mut out = String::new();
    for i in 0..size {
        out.push(ALPHABET[i % ALPHABET.len()]);
    }
    out
}

fn presized_join(size: usize) -> String {
    let mut pieces: Vec<String> = Vec::with_capacity(size);
    for i in 0..size {
        pieces.push(ALPHABET[i % ALPHABET.len()].to_string());
    }
    pieces.join("")
}

pub fn compare_concat(size: usize) -> BenchReport {
    let started = Instant::now();
    let a = black_box(accumulate(size));
    let accumulate_time = started.elapsed();

    let started = Instant::now();
    let b = black_box(presized_join(size));
    let join_time = started.elapsed();

    debug_assert_eq!(a, b);
    tracing::debug!(
        size,
        accumulate_us = accumulate_time.as_micros() as u64,
        join_us = join_time.as_micros() as u64,
        "string building comparison finished"
    );

    BenchReport {
        size,
        accumulate: accumulate_time,
        presized_join: join_time,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_strategies_build_the_same_string() {
        assert_eq!(accumulate(20), presized_join(20));
        assert_eq!(accumulate(20).chars().count(), 20);
        assert_eq!(accumulate(0), "");
    }

    #[test]
    fn report_carries_size() {
        let report = compare_concat(1_000);
        assert_eq!(report.size, 1_000);
        assert!(report.ratio() >= 0.0);
    }

    #[test]
    fn ratio_guards_zero_duration() {
        let report = BenchReport {
            size: 0,
            accumulate: Duration::ZERO,
            presized_join: Duration::ZERO,
        };
        assert_eq!(report.ratio(), 1.0);
    }
}
