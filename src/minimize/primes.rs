//! Prime implicant collection
//!
//! Accumulates the terms left uncombined at the end of each round.

use super::term::Term;
use std::collections::HashSet;

/// Prime implicants in collection order, free of structural duplicates
#[derive(Debug, Clone, Default)]
pub struct PrimeImplicants {
    terms: Vec<Term>,
    seen: HashSet<Term>,
}

impl PrimeImplicants {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a term unless one with the same covered set and pattern is
    /// already present. Returns whether the term was added.
    pub fn insert(&mut self, term: Term) -> bool {
        if self.seen.contains(&term) {
            return false;
        }
        self.seen.insert(term.clone());
        self.terms.push(term);
        true
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn as_slice(&self) -> &[Term] {
        &self.terms
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Term> {
        self.terms.iter()
    }

    pub fn into_vec(self) -> Vec<Term> {
        self.terms
    }
}

impl Extend<Term> for PrimeImplicants {
    fn extend<I: IntoIterator<Item = Term>>(&mut self, iter: I) {
        for term in iter {
            self.insert(term);
        }
    }
}
