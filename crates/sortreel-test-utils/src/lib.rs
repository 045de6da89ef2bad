//! Test utilities and reference algorithms for Sortreel development.
//!
//! Provides algorithm fixtures implementing
//! [`Algorithm`](sortreel_record::Algorithm) and deterministic input
//! generators for building test scenarios.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{BubbleSort, EarlyExitSort, InsertionSort, OutOfBoundsAlgorithm, SelectionSort};

/// `n - 1, n - 2, ..., 0`: worst case for the quadratic sorts.
pub fn reversed(n: u32) -> Vec<u32> {
    (0..n).rev().collect()
}

/// A deterministic permutation of `0..n` that depends on `seed`.
///
/// Walks `0..n` with a stride coprime to `n`, so every value appears
/// exactly once. Not random, but scrambled enough for sort fixtures.
pub fn scrambled(n: u32, seed: u32) -> Vec<u32> {
    if n == 0 {
        return Vec::new();
    }
    let mut stride = (seed % n) | 1;
    while gcd(stride, n) != 1 {
        stride += 2;
    }
    let offset = seed.wrapping_mul(31) % n;
    (0..n)
        .map(|i| ((u64::from(i) * u64::from(stride) + u64::from(offset)) % u64::from(n)) as u32)
        .collect()
}

/// Items with many duplicates: `i % distinct` in reverse order.
pub fn with_duplicates(n: u32, distinct: u32) -> Vec<u32> {
    let distinct = distinct.max(1);
    (0..n).rev().map(|i| i % distinct).collect()
}

fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}
