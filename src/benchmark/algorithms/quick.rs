//! Quick sort (Lomuto partitioning, first-element pivot)

use crate::error::SortResult;

/// Sort a private copy of `input` with a deterministic quick sort.
///
/// The pivot is always the first element of the active range, so the same
/// input always takes the same path. Average O(n log n), O(n²) on sorted or
/// adversarial input.
pub fn sort(input: &[f64]) -> SortResult<Vec<f64>> {
    let mut data = input.to_vec();
    quick_sort(&mut data);
    Ok(data)
}

/// Recurse into the smaller side and loop over the larger one, which keeps
/// stack depth logarithmic even when partitions are lopsided.
fn quick_sort(mut data: &mut [f64]) {
    while data.len() > 1 {
        let pivot_index = partition(data);
        let (left, rest) = std::mem::take(&mut data).split_at_mut(pivot_index);
        let right = &mut rest[1..];

        if left.len() < right.len() {
            quick_sort(left);
            data = right;
        } else {
            quick_sort(right);
            data = left;
        }
    }
}

/// Move everything `< pivot` in front of the pivot and return its final index.
fn partition(data: &mut [f64]) -> usize {
    let pivot = data[0];
    let mut store = 0;

    for i in 1..data.len() {
        if data[i] < pivot {
            store += 1;
            data.swap(store, i);
        }
    }

    data.swap(0, store);
    store
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_deterministic_with_duplicates() {
        let input = [3.0, 3.0, 2.0, 2.0, 1.0];
        let first = sort(&input).unwrap();
        for _ in 0..10 {
            assert_eq!(sort(&input).unwrap(), first);
        }
        assert_eq!(first, vec![1.0, 2.0, 2.0, 3.0, 3.0]);
    }

    #[test]
    fn test_partition_places_pivot() {
        let mut data = [4.0, 7.0, 1.0, 9.0, 3.0];
        let index = partition(&mut data);
        assert_eq!(index, 2);
        assert_eq!(data[index], 4.0);
        assert!(data[..index].iter().all(|&v| v < 4.0));
        assert!(data[index + 1..].iter().all(|&v| v >= 4.0));
    }

    #[test]
    fn test_large_sorted_input() {
        let input: Vec<f64> = (0..5_000).map(f64::from).collect();
        assert_eq!(sort(&input).unwrap(), input);
    }
}
