//! # Quine-McCluskey minimization
//!
//! Reduces a Boolean function, given as minterms plus optional don't-cares,
//! to a sum of products.
//!
//! ## Pipeline
//!
//! 1. **Group**: bucket the generation-0 terms by popcount
//! 2. **Combine**: join terms differing in one position, round after round,
//!    until a round joins nothing; unjoined terms are prime implicants
//! 3. **Select**: pick implicants that are the sole coverer of a minterm
//! 4. **Render**: print the selection with the configured variable names
//!
//! Selection only takes singly-covered minterms. A cyclic coverage table
//! leaves minterms in [`Solution::unresolved`] unless
//! [`MinimizeOptions::resolve_residual`] is set.
//!
//! ## Example
//!
//! ```
//! use qmc::minimize;
//!
//! let solution = minimize(&[1, 3, 5, 7], &[]).unwrap();
//! assert_eq!(solution.expression, "C");
//! ```

pub mod combine;
pub mod cover;
pub mod group;
pub mod primes;
pub mod term;

pub use combine::{combine_round, prime_implicants, Combination, Round};
pub use cover::{select_essentials, CoverageTable, Selection};
pub use group::{group_values, Groups};
pub use primes::PrimeImplicants;
pub use term::{Bit, Pattern, Term};

use crate::config::MinimizeOptions;
use crate::error::{Error, Result};
use crate::problem::Problem;
use crate::render::render;
use crate::solution::Solution;
use crate::trace::{Step, Trace};
use tracing::debug;

/// Minimize with default options
pub fn minimize(minterms: &[u64], dont_cares: &[u64]) -> Result<Solution> {
    Minimizer::default().solve(&Problem::from_unsigned(minterms, dont_cares))
}

/// Runs the pipeline for a fixed set of options
#[derive(Debug, Clone, Default)]
pub struct Minimizer {
    options: MinimizeOptions,
}

impl Minimizer {
    pub fn new(options: MinimizeOptions) -> Self {
        Minimizer { options }
    }

    pub fn options(&self) -> &MinimizeOptions {
        &self.options
    }

    /// Minimize one problem. Fails only when the problem is wider than
    /// `max_width`.
    pub fn solve(&self, problem: &Problem) -> Result<Solution> {
        let width = problem.width();
        if width > self.options.max_width {
            return Err(Error::InvalidInput(format!(
                "{} variables needed, at most {} allowed",
                width, self.options.max_width
            )));
        }

        let mut steps = if self.options.record_trace {
            Trace::enabled()
        } else {
            Trace::disabled()
        };

        let groups = group_values(&problem.values(), width);
        steps.record(|| Step::InitialGroupsHeader);
        for term in groups.iter() {
            steps.record(|| Step::Initial {
                pattern: term.pattern().clone(),
                covered: term.covered().to_vec(),
            });
        }

        let (primes, rounds) = prime_implicants(groups, &mut steps);
        let primes = primes.into_vec();
        let selection =
            select_essentials(problem.minterms(), &primes, self.options.resolve_residual);
        let essentials: Vec<Term> = selection
            .chosen
            .iter()
            .map(|&i| primes[i].clone())
            .collect();
        let expression = render(&essentials, &self.options.variables);

        debug!(
            width,
            rounds,
            primes = primes.len(),
            essentials = essentials.len(),
            unresolved = selection.unresolved.len(),
            "minimized"
        );

        Ok(Solution {
            width,
            minterms: problem.minterms().to_vec(),
            dont_cares: problem.dont_cares().to_vec(),
            prime_implicants: primes,
            essential_implicants: essentials,
            unresolved: selection.unresolved,
            expression,
            rounds,
            trace: steps,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_always_true() {
        let solution = minimize(&[0, 1, 2, 3], &[]).unwrap();
        assert_eq!(solution.width, 2);
        assert_eq!(solution.prime_implicants.len(), 1);
        assert_eq!(solution.prime_implicants[0].pattern().to_string(), "--");
        assert_eq!(solution.expression, "");
    }

    #[test]
    fn test_odd_values() {
        let solution = minimize(&[1, 3, 5, 7], &[]).unwrap();
        assert_eq!(solution.width, 3);
        assert_eq!(solution.essential_implicants.len(), 1);
        let prime = &solution.essential_implicants[0];
        assert_eq!(prime.pattern().to_string(), "--1");
        assert_eq!(prime.covered(), &[1, 3, 5, 7]);
        assert_eq!(solution.expression, "C");
    }

    #[test]
    fn test_adjacent_pair() {
        let solution = minimize(&[4, 5], &[]).unwrap();
        assert_eq!(solution.essential_implicants.len(), 1);
        assert_eq!(solution.essential_implicants[0].pattern().to_string(), "10-");
        assert_eq!(solution.expression, "AB'");
    }

    #[test]
    fn test_empty() {
        let solution = minimize(&[], &[]).unwrap();
        assert_eq!(solution.width, 0);
        assert!(solution.prime_implicants.is_empty());
        assert!(solution.essential_implicants.is_empty());
        assert_eq!(solution.expression, "");
        assert_eq!(solution.rounds, 0);
    }

    #[test]
    fn test_dont_cares_enable_combination() {
        // 5 alone would stay 101; with 7 as don't-care it grows to 1-1
        let solution = minimize(&[5], &[7]).unwrap();
        assert_eq!(solution.expression, "AC");
        assert!(solution.unresolved.is_empty());
    }

    #[test]
    fn test_width_limit() {
        let options = MinimizeOptions {
            max_width: 3,
            ..MinimizeOptions::default()
        };
        let problem = Problem::from_unsigned(&[8], &[]);
        let err = Minimizer::new(options).solve(&problem).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_trace_can_be_disabled() {
        let options = MinimizeOptions {
            record_trace: false,
            ..MinimizeOptions::default()
        };
        let problem = Problem::from_unsigned(&[4, 5], &[]);
        let solution = Minimizer::new(options).solve(&problem).unwrap();
        assert!(solution.trace.is_empty());
        assert_eq!(solution.expression, "AB'");
    }

    #[test]
    fn test_trace_lists_initial_groups() {
        let solution = minimize(&[4, 5], &[]).unwrap();
        let lines: Vec<String> = solution.trace.iter().map(ToString::to_string).collect();
        assert_eq!(lines[0], "Initial groups:");
        assert_eq!(lines[1], "100 -> [4]");
        assert_eq!(lines[2], "101 -> [5]");
        assert_eq!(lines[3], "Step 1: Combinations");
    }
}
