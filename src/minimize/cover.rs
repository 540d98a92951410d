//! Essential implicant selection
//!
//! Builds the minterm to prime-implicant coverage table and repeatedly
//! picks an implicant that is the only coverer of some remaining minterm.
//! Minterms that stay covered by two or more implicants are left in the
//! table; `resolve_residual` covers them with a greedy pass.

use super::term::Term;
use std::collections::BTreeMap;
use tracing::trace;

/// Remaining coverage obligations: minterm -> indices of covering primes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageTable {
    rows: BTreeMap<u64, Vec<usize>>,
}

impl CoverageTable {
    /// One row per minterm, listing the primes that cover it in
    /// collection order. Don't-cares never get a row.
    pub fn new(minterms: &[u64], primes: &[Term]) -> Self {
        let rows = minterms
            .iter()
            .map(|&m| {
                let coverers = primes
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| p.covers(m))
                    .map(|(i, _)| i)
                    .collect();
                (m, coverers)
            })
            .collect();
        CoverageTable { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Coverers of `minterm`, if it is still an obligation
    pub fn coverers(&self, minterm: u64) -> Option<&[usize]> {
        self.rows.get(&minterm).map(Vec::as_slice)
    }

    /// Remaining minterms, ascending
    pub fn minterms(&self) -> Vec<u64> {
        self.rows.keys().copied().collect()
    }

    /// First minterm (ascending) with exactly one coverer, and that coverer
    fn singleton(&self) -> Option<(u64, usize)> {
        self.rows
            .iter()
            .find(|(_, coverers)| coverers.len() == 1)
            .map(|(&m, coverers)| (m, coverers[0]))
    }

    /// Drop every row `prime` covers. Returns how many rows went away.
    fn remove_covered(&mut self, prime: &Term) -> usize {
        let before = self.rows.len();
        for m in prime.covered() {
            self.rows.remove(m);
        }
        before - self.rows.len()
    }

    /// Number of remaining rows `prime` covers
    fn remaining_covered_by(&self, prime: &Term) -> usize {
        prime
            .covered()
            .iter()
            .filter(|m| self.rows.contains_key(m))
            .count()
    }
}

/// Result of the selection passes
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    /// Indices into the prime list, in selection order
    pub chosen: Vec<usize>,
    /// Minterms no chosen implicant covers
    pub unresolved: Vec<u64>,
}

/// Select essential prime implicants for `minterms`.
///
/// With `resolve_residual` unset, minterms that never become singly
/// covered are returned in `unresolved`.
pub fn select_essentials(minterms: &[u64], primes: &[Term], resolve_residual: bool) -> Selection {
    let mut table = CoverageTable::new(minterms, primes);
    let mut chosen: Vec<usize> = Vec::new();

    while let Some((minterm, index)) = table.singleton() {
        let prime = &primes[index];
        if !chosen.contains(&index) {
            chosen.push(index);
        }
        let removed = table.remove_covered(prime);
        trace!(minterm, implicant = %prime.pattern(), removed, "essential");
    }

    if resolve_residual {
        while let Some(index) = best_residual(&table, primes) {
            let prime = &primes[index];
            chosen.push(index);
            let removed = table.remove_covered(prime);
            trace!(implicant = %prime.pattern(), removed, "residual");
        }
    }

    Selection {
        chosen,
        unresolved: table.minterms(),
    }
}

/// Prime covering the most remaining minterms; earliest index on ties
fn best_residual(table: &CoverageTable, primes: &[Term]) -> Option<usize> {
    let mut best: Option<(usize, usize)> = None;
    for (i, prime) in primes.iter().enumerate() {
        let count = table.remaining_covered_by(prime);
        if count == 0 {
            continue;
        }
        match best {
            Some((_, best_count)) if best_count >= count => {}
            _ => best = Some((i, count)),
        }
    }
    best.map(|(i, _)| i)
}
