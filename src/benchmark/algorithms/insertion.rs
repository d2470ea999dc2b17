//! Insertion sort

use crate::error::SortResult;

/// Sort by shifting each element left past strictly greater predecessors.
///
/// An element equal to its predecessor stays put, so equal values keep
/// their relative order. O(n²).
pub fn sort(input: &[f64]) -> SortResult<Vec<f64>> {
    let mut data = input.to_vec();

    for i in 1..data.len() {
        let key = data[i];
        let mut j = i;

        while j > 0 && data[j - 1] > key {
            data[j] = data[j - 1];
            j -= 1;
        }

        data[j] = key;
    }

    Ok(data)
}
