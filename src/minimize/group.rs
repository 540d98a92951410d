//! Popcount buckets
//!
//! Terms are grouped by the number of `1` positions in their pattern.
//! Only terms in neighbouring buckets can differ in a single `0`/`1`
//! position, so the combiner scans bucket pairs `(k, k + 1)`.

use super::term::Term;

/// Terms bucketed by popcount. Bucket `k` holds every term with `k` ones;
/// there is one bucket per popcount `0..=width`, empty or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Groups {
    buckets: Vec<Vec<Term>>,
    width: usize,
}

impl Groups {
    /// Empty buckets for patterns of `width` positions
    pub fn new(width: usize) -> Self {
        Groups {
            buckets: vec![Vec::new(); width + 1],
            width,
        }
    }

    /// Bucket every term by popcount, keeping input order within a bucket
    pub fn from_terms<I>(terms: I, width: usize) -> Self
    where
        I: IntoIterator<Item = Term>,
    {
        let mut groups = Groups::new(width);
        for term in terms {
            groups.insert(term);
        }
        groups
    }

    /// Append a term to its popcount bucket
    pub fn insert(&mut self, term: Term) {
        debug_assert_eq!(term.pattern().width(), self.width);
        let ones = term.popcount();
        self.buckets[ones].push(term);
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Bucket for popcount `ones` (empty past the width)
    pub fn bucket(&self, ones: usize) -> &[Term] {
        self.buckets.get(ones).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All buckets in ascending popcount order
    pub fn buckets(&self) -> &[Vec<Term>] {
        &self.buckets
    }

    /// Total number of terms across buckets
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }

    /// Terms in ascending popcount order, input order within a bucket
    pub fn iter(&self) -> impl Iterator<Item = &Term> {
        self.buckets.iter().flatten()
    }

    pub fn into_terms(self) -> impl Iterator<Item = Term> {
        self.buckets.into_iter().flatten()
    }
}

/// Generation-0 grouping: one singleton term per value
pub fn group_values(values: &[u64], width: usize) -> Groups {
    Groups::from_terms(values.iter().map(|&v| Term::from_value(v, width)), width)
}
