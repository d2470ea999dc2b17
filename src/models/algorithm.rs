//! Sort algorithm identifiers

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{constants::algorithms, error::SortError};

/// The closed set of sorting algorithms a job may request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortAlgorithm {
    Bubble,
    Insertion,
    Quick,
    Radix,
}

impl SortAlgorithm {
    /// Every supported algorithm, in declaration order
    pub const ALL: [SortAlgorithm; 4] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Insertion,
        SortAlgorithm::Quick,
        SortAlgorithm::Radix,
    ];

    /// Wire identifier of the algorithm
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bubble => algorithms::BUBBLE,
            Self::Insertion => algorithms::INSERTION,
            Self::Quick => algorithms::QUICK,
            Self::Radix => algorithms::RADIX,
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive lookup; there is no fallback algorithm.
impl FromStr for SortAlgorithm {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            algorithms::BUBBLE => Ok(Self::Bubble),
            algorithms::INSERTION => Ok(Self::Insertion),
            algorithms::QUICK => Ok(Self::Quick),
            algorithms::RADIX => Ok(Self::Radix),
            other => Err(SortError::UnsupportedAlgorithm(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trips_every_identifier() {
        for algorithm in SortAlgorithm::ALL {
            assert_eq!(algorithm.as_str().parse::<SortAlgorithm>(), Ok(algorithm));
        }
        assert_eq!(SortAlgorithm::ALL.len(), algorithms::ALL.len());
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(
            "Bubble".parse::<SortAlgorithm>(),
            Err(SortError::UnsupportedAlgorithm("Bubble".to_string()))
        );
        assert!(" quick".parse::<SortAlgorithm>().is_err());
    }
}
