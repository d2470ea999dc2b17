//! Algorithm selection
//!
//! The requested algorithm name is resolved against the closed
//! [`SortAlgorithm`] enum, and the enum is mapped onto its implementation with
//! an exhaustive match. Adding a variant without an implementation does not
//! compile.

use crate::{error::SortResult, models::SortAlgorithm};

use super::algorithms::{self, AlgorithmFn};

impl SortAlgorithm {
    /// The implementation backing this algorithm
    pub fn sorter(self) -> AlgorithmFn {
        match self {
            SortAlgorithm::Bubble => algorithms::bubble::sort,
            SortAlgorithm::Insertion => algorithms::insertion::sort,
            SortAlgorithm::Quick => algorithms::quick::sort,
            SortAlgorithm::Radix => algorithms::radix::sort,
        }
    }
}

/// Resolve a requested name to its algorithm identifier
pub fn resolve(name: &str) -> SortResult<SortAlgorithm> {
    name.parse()
}

/// Resolve a requested name straight to its implementation
pub fn select(name: &str) -> SortResult<AlgorithmFn> {
    resolve(name).map(SortAlgorithm::sorter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SortError;

    #[test]
    fn test_select_known_names() {
        for name in crate::constants::algorithms::ALL {
            let sorter = select(name).unwrap();
            assert_eq!(sorter(&[2.0, 1.0]).unwrap(), vec![1.0, 2.0]);
        }
    }

    #[test]
    fn test_select_rejects_unknown_name() {
        match select("bogus") {
            Err(SortError::UnsupportedAlgorithm(name)) => assert_eq!(name, "bogus"),
            Err(other) => panic!("unexpected error: {:?}", other),
            Ok(_) => panic!("bogus should not resolve"),
        }
    }

    #[test]
    fn test_resolve_has_no_default() {
        assert!(resolve("").is_err());
        assert!(resolve("RADIX").is_err());
        assert_eq!(resolve("radix"), Ok(SortAlgorithm::Radix));
    }
}
