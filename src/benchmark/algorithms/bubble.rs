//! Bubble sort

use crate::error::SortResult;

/// Sort with repeated adjacent swaps, stopping after a pass with no swap.
///
/// O(n²) comparisons. Works on a private copy of `input`.
pub fn sort(input: &[f64]) -> SortResult<Vec<f64>> {
    let mut data = input.to_vec();
    let n = data.len();

    for pass in 0..n {
        let mut swapped = false;

        // The last `pass` elements are already in their final place
        for i in 0..n.saturating_sub(pass + 1) {
            if data[i] > data[i + 1] {
                data.swap(i, i + 1);
                swapped = true;
            }
        }

        if !swapped {
            break;
        }
    }

    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorts_small_line() {
        assert_eq!(
            sort(&[5.0, 3.0, 1.0, 4.0, 2.0]).unwrap(),
            vec![1.0, 2.0, 3.0, 4.0, 5.0]
        );
    }

    #[test]
    fn test_empty_and_single() {
        assert_eq!(sort(&[]).unwrap(), Vec::<f64>::new());
        assert_eq!(sort(&[9.5]).unwrap(), vec![9.5]);
    }

    #[test]
    fn test_handles_floats_and_negatives() {
        assert_eq!(
            sort(&[0.5, -1.0, 2.25, -3.5]).unwrap(),
            vec![-3.5, -1.0, 0.5, 2.25]
        );
    }
}
