//! Validated minimization input

use crate::error::{Error, Result};
use tracing::warn;

/// Minterms and don't-cares, sorted, deduplicated and disjoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    minterms: Vec<u64>,
    dont_cares: Vec<u64>,
    width: usize,
}

impl Problem {
    /// Validate caller-supplied integers.
    ///
    /// Rejects negative values and an empty minterm set. A value listed
    /// in both sets is kept as a minterm only.
    pub fn new(minterms: &[i64], dont_cares: &[i64]) -> Result<Self> {
        if minterms.is_empty() {
            return Err(Error::InvalidInput(
                "at least one minterm is required".to_string(),
            ));
        }
        let minterms = to_unsigned(minterms, "minterm")?;
        let dont_cares = to_unsigned(dont_cares, "don't-care")?;
        Ok(Self::from_unsigned(&minterms, &dont_cares))
    }

    /// Build from values that are already non-negative. Empty input is
    /// allowed here and yields a zero-width problem.
    pub fn from_unsigned(minterms: &[u64], dont_cares: &[u64]) -> Self {
        let mut minterms = minterms.to_vec();
        minterms.sort_unstable();
        minterms.dedup();

        let mut dont_cares = dont_cares.to_vec();
        dont_cares.sort_unstable();
        dont_cares.dedup();
        dont_cares.retain(|d| {
            let overlap = minterms.binary_search(d).is_ok();
            if overlap {
                warn!(value = *d, "value listed as minterm and don't-care, keeping minterm");
            }
            !overlap
        });

        let width = bit_width(minterms.iter().chain(dont_cares.iter()).copied().max());
        Problem {
            minterms,
            dont_cares,
            width,
        }
    }

    pub fn minterms(&self) -> &[u64] {
        &self.minterms
    }

    pub fn dont_cares(&self) -> &[u64] {
        &self.dont_cares
    }

    /// Pattern width shared by every term of a run
    pub fn width(&self) -> usize {
        self.width
    }

    /// Minterms followed by don't-cares, each part ascending
    pub fn values(&self) -> Vec<u64> {
        let mut values = self.minterms.clone();
        values.extend_from_slice(&self.dont_cares);
        values
    }
}

/// Binary digits of the largest value; `0` needs one digit, no value none
fn bit_width(max: Option<u64>) -> usize {
    match max {
        None => 0,
        Some(0) => 1,
        Some(v) => (u64::BITS - v.leading_zeros()) as usize,
    }
}

fn to_unsigned(values: &[i64], what: &str) -> Result<Vec<u64>> {
    values
        .iter()
        .map(|&v| {
            u64::try_from(v)
                .map_err(|_| Error::InvalidInput(format!("negative {} {}", what, v)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width() {
        assert_eq!(Problem::from_unsigned(&[], &[]).width(), 0);
        assert_eq!(Problem::from_unsigned(&[0], &[]).width(), 1);
        assert_eq!(Problem::from_unsigned(&[4, 5], &[]).width(), 3);
        assert_eq!(Problem::from_unsigned(&[1], &[8]).width(), 4);
        assert_eq!(Problem::from_unsigned(&[u64::MAX], &[]).width(), 64);
    }

    #[test]
    fn test_sorted_and_deduplicated() {
        let problem = Problem::new(&[5, 1, 5, 3], &[7, 7]).unwrap();
        assert_eq!(problem.minterms(), &[1, 3, 5]);
        assert_eq!(problem.dont_cares(), &[7]);
        assert_eq!(problem.values(), vec![1, 3, 5, 7]);
    }

    #[test]
    fn test_overlap_kept_as_minterm() {
        let problem = Problem::new(&[1, 2], &[2, 3]).unwrap();
        assert_eq!(problem.minterms(), &[1, 2]);
        assert_eq!(problem.dont_cares(), &[3]);
    }

    #[test]
    fn test_negative_rejected() {
        let err = Problem::new(&[1, -2], &[]).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        let err = Problem::new(&[1], &[-1]).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_empty_rejected() {
        let err = Problem::new(&[], &[1]).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }
}
