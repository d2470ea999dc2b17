//! Radix sort (least significant digit first, base 10)

use crate::{
    constants::algorithms::RADIX,
    error::{SortError, SortResult},
};

const BASE: u64 = 10;

/// Sort non-negative integers one decimal digit at a time.
///
/// Each digit pass is a stable counting sort over ten buckets. Negative,
/// fractional and non-finite values (including `-0.0`) are rejected with
/// [`SortError::AlgorithmExecution`] instead of producing a wrong order.
pub fn sort(input: &[f64]) -> SortResult<Vec<f64>> {
    if input.is_empty() {
        return Ok(Vec::new());
    }

    let mut keys = input
        .iter()
        .map(|&value| to_key(value))
        .collect::<SortResult<Vec<u64>>>()?;
    let max_value = keys.iter().copied().max().unwrap_or(0);

    let mut scratch = vec![0u64; keys.len()];
    let mut exponent: u64 = 1;

    while max_value / exponent >= 1 {
        counting_pass(&keys, &mut scratch, exponent);
        std::mem::swap(&mut keys, &mut scratch);

        exponent = match exponent.checked_mul(BASE) {
            Some(next) => next,
            None => break,
        };
    }

    Ok(keys.into_iter().map(|key| key as f64).collect())
}

fn to_key(value: f64) -> SortResult<u64> {
    if !value.is_finite() {
        return Err(SortError::execution(
            RADIX,
            format!("non-finite value {}", value),
        ));
    }
    // Sign bit check; -0.0 counts as negative
    if value.is_sign_negative() {
        return Err(SortError::execution(
            RADIX,
            format!("negative value {} (only non-negative integers are supported)", value),
        ));
    }
    if value.fract() != 0.0 {
        return Err(SortError::execution(
            RADIX,
            format!("non-integer value {} (only non-negative integers are supported)", value),
        ));
    }
    if value >= u64::MAX as f64 {
        return Err(SortError::execution(RADIX, format!("value {} is too large", value)));
    }

    Ok(value as u64)
}

/// Stable counting sort of `keys` into `output` on the digit at `exponent`.
fn counting_pass(keys: &[u64], output: &mut [u64], exponent: u64) {
    let digit = |key: u64| ((key / exponent) % BASE) as usize;

    let mut counts = [0usize; BASE as usize];
    for &key in keys {
        counts[digit(key)] += 1;
    }
    for d in 1..counts.len() {
        counts[d] += counts[d - 1];
    }

    // Walk backwards so equal digits keep their previous order
    for &key in keys.iter().rev() {
        let d = digit(key);
        counts[d] -= 1;
        output[counts[d]] = key;
    }
}
