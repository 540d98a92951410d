//! Iterative term combination
//!
//! Each round scans neighbouring popcount buckets and joins every pair of
//! terms whose patterns differ in one `0`/`1` position. Terms that take
//! part in no join during their round are prime implicants. The loop stops
//! after the first round without a join.

use super::group::Groups;
use super::primes::PrimeImplicants;
use super::term::{Pattern, Term};
use crate::trace::{Step, Trace};
use std::collections::HashSet;
use tracing::{debug, trace};

/// One successful join between two terms of the same generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combination {
    pub left: Pattern,
    pub right: Pattern,
    pub result: Term,
}

/// Outcome of a single combination round
#[derive(Debug, Clone)]
pub struct Round {
    /// Number of joins made this round
    pub joins: usize,
    /// Every join made this round, in scan order; empty unless recorded
    pub combinations: Vec<Combination>,
    /// Terms of the just-finished generation that joined with nothing
    pub unconsumed: Vec<Term>,
    /// The next generation, bucketed by popcount
    pub next: Groups,
}

impl Round {
    /// Whether the round made no join at all
    pub fn is_final(&self) -> bool {
        self.joins == 0
    }
}

/// Run one round over `groups`.
///
/// The consumed flags live only for the duration of this call. The next
/// generation holds each distinct term once even when several pairs join
/// to the same result. Joins are kept in `combinations` only when
/// `record` is set.
pub fn combine_round(groups: &Groups, record: bool) -> Round {
    let width = groups.width();
    let buckets = groups.buckets();
    let mut consumed: Vec<Vec<bool>> = buckets.iter().map(|b| vec![false; b.len()]).collect();
    let mut combinations = Vec::new();
    let mut joins = 0;
    let mut next = Groups::new(width);
    let mut produced: HashSet<Term> = HashSet::new();

    for k in 0..buckets.len().saturating_sub(1) {
        let (lower, upper) = (&buckets[k], &buckets[k + 1]);
        for (i, t1) in lower.iter().enumerate() {
            for (j, t2) in upper.iter().enumerate() {
                let Some(joined) = t1.combine(t2) else {
                    continue;
                };
                trace!(left = %t1.pattern(), right = %t2.pattern(), result = %joined.pattern(), "combined");
                consumed[k][i] = true;
                consumed[k + 1][j] = true;
                joins += 1;
                if record {
                    combinations.push(Combination {
                        left: t1.pattern().clone(),
                        right: t2.pattern().clone(),
                        result: joined.clone(),
                    });
                }
                if produced.insert(joined.clone()) {
                    next.insert(joined);
                }
            }
        }
    }

    let unconsumed = buckets
        .iter()
        .zip(consumed.iter())
        .flat_map(|(bucket, flags)| {
            bucket
                .iter()
                .zip(flags.iter())
                .filter(|(_, used)| !**used)
                .map(|(term, _)| term.clone())
        })
        .collect();

    Round {
        joins,
        combinations,
        unconsumed,
        next,
    }
}

/// Combine rounds until none joins anything, collecting prime implicants.
///
/// Returns the collected primes and the number of rounds run.
pub fn prime_implicants(initial: Groups, steps: &mut Trace) -> (PrimeImplicants, usize) {
    let mut primes = PrimeImplicants::new();
    let mut groups = initial;
    let mut round = 0;

    if groups.is_empty() {
        return (primes, round);
    }

    loop {
        round += 1;
        steps.record(|| Step::RoundHeader { round });

        let result = combine_round(&groups, steps.is_recording());
        for combination in &result.combinations {
            steps.record(|| Step::Combination {
                left: combination.left.clone(),
                right: combination.right.clone(),
                pattern: combination.result.pattern().clone(),
                covered: combination.result.covered().to_vec(),
            });
        }

        let is_final = result.is_final();
        let before = primes.len();
        primes.extend(result.unconsumed);
        debug!(
            round,
            terms = groups.len(),
            combinations = result.joins,
            primes = primes.len() - before,
            "round finished"
        );

        if is_final {
            break;
        }
        groups = result.next;
    }

    (primes, round)
}

#[cfg(test)]
mod tests {
    use super::super::group::group_values;
    use super::*;

    fn patterns(primes: &PrimeImplicants) -> Vec<String> {
        let mut out: Vec<String> = primes.iter().map(|t| t.pattern().to_string()).collect();
        out.sort();
        out
    }

    #[test]
    fn test_round_marks_both_parents() {
        let round = combine_round(&group_values(&[4, 5], 3), true);
        assert_eq!(round.combinations.len(), 1);
        assert!(round.unconsumed.is_empty());
        assert_eq!(round.next.len(), 1);
        assert_eq!(round.next.bucket(1)[0].pattern().to_string(), "10-");
    }

    #[test]
    fn test_unrecorded_round_only_counts_joins() {
        let round = combine_round(&group_values(&[0, 1, 2, 3], 2), false);
        assert_eq!(round.joins, 4);
        assert!(round.combinations.is_empty());
        assert!(!round.is_final());
        assert_eq!(round.next.len(), 4);
        assert!(round.unconsumed.is_empty());
    }

    #[test]
    fn test_round_without_partner() {
        let round = combine_round(&group_values(&[0, 3], 2), true);
        assert!(round.is_final());
        assert_eq!(round.unconsumed.len(), 2);
        assert!(round.next.is_empty());
    }

    #[test]
    fn test_next_generation_is_deduplicated() {
        // 00+01, 10+11 -> 0-, 1- ; 00+10, 01+11 -> -0, -1
        let first = combine_round(&group_values(&[0, 1, 2, 3], 2), true);
        assert_eq!(first.next.len(), 4);
        // 0-+1- and -0+-1 both give -- over {0,1,2,3}
        let second = combine_round(&first.next, true);
        assert_eq!(second.combinations.len(), 2);
        assert_eq!(second.next.len(), 1);
    }

    #[test]
    fn test_full_cube_reduces_to_single_prime() {
        let mut steps = Trace::disabled();
        let (primes, rounds) = prime_implicants(group_values(&[0, 1, 2, 3], 2), &mut steps);
        assert_eq!(patterns(&primes), vec!["--"]);
        assert_eq!(primes.as_slice()[0].covered(), &[0, 1, 2, 3]);
        assert_eq!(rounds, 3);
    }

    #[test]
    fn test_single_minterm_is_its_own_prime() {
        let mut steps = Trace::disabled();
        let (primes, rounds) = prime_implicants(group_values(&[5], 3), &mut steps);
        assert_eq!(patterns(&primes), vec!["101"]);
        assert_eq!(rounds, 1);
    }

    #[test]
    fn test_empty_input() {
        let mut steps = Trace::enabled();
        let (primes, rounds) = prime_implicants(Groups::new(0), &mut steps);
        assert!(primes.is_empty());
        assert_eq!(rounds, 0);
        assert!(steps.is_empty());
    }

    #[test_log::test]
    fn test_classic_four_variable_example() {
        // f = sum m(0, 1, 2, 5, 6, 7, 8, 9, 10, 14)
        let mut steps = Trace::disabled();
        let values = [0, 1, 2, 5, 6, 7, 8, 9, 10, 14];
        let (primes, _) = prime_implicants(group_values(&values, 4), &mut steps);
        assert_eq!(
            patterns(&primes),
            vec!["--10", "-0-0", "-00-", "0-01", "01-1", "011-"]
        );
    }

    #[test_log::test]
    fn test_trace_records_rounds_and_joins() {
        let mut steps = Trace::enabled();
        prime_implicants(group_values(&[4, 5], 3), &mut steps);
        let lines: Vec<String> = steps.iter().map(ToString::to_string).collect();
        assert_eq!(
            lines,
            vec![
                "Step 1: Combinations",
                "100 + 101 -> 10- -> [4, 5]",
                "Step 2: Combinations",
            ]
        );
    }
}
