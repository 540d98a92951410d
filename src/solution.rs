//! Minimization result

use crate::minimize::term::Term;
use crate::trace::Trace;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Everything a caller gets back from one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Solution {
    /// Bits per pattern
    pub width: usize,
    /// Minterms, ascending
    pub minterms: Vec<u64>,
    /// Don't-cares, ascending, disjoint from the minterms
    pub dont_cares: Vec<u64>,
    /// All prime implicants, in collection order
    pub prime_implicants: Vec<Term>,
    /// Selected implicants, in selection order
    pub essential_implicants: Vec<Term>,
    /// Minterms no selected implicant covers
    pub unresolved: Vec<u64>,
    /// Sum-of-products rendering of the selected implicants
    pub expression: String,
    /// Combination rounds run, including the final empty one
    pub rounds: usize,
    /// Step-by-step record of the reduction
    pub trace: Trace,
}

impl Solution {
    /// Value of the selected implicants on input combination `value`
    pub fn evaluate(&self, value: u64) -> bool {
        self.essential_implicants
            .iter()
            .any(|t| t.pattern().matches(value))
    }

    /// Whether every minterm is covered by the selection
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }

    /// Human-readable report: primes, steps, expression
    pub fn to_report(&self) -> String {
        let mut out = String::new();

        out.push_str("Prime implicants:\n");
        for prime in &self.prime_implicants {
            let covered: Vec<String> = prime.covered().iter().map(u64::to_string).collect();
            out.push_str(&format!("{} -> {}\n", prime.pattern(), covered.join(",")));
        }

        if !self.trace.is_empty() {
            out.push_str("\nReduction steps:\n");
            for step in self.trace.iter() {
                out.push_str(&format!("{}\n", step));
            }
        }

        out.push_str("\nSimplified expression:\n");
        out.push_str(&self.expression);
        out.push('\n');

        if !self.unresolved.is_empty() {
            let unresolved: Vec<String> = self.unresolved.iter().map(u64::to_string).collect();
            out.push_str(&format!(
                "\n⚠ Minterms not covered by essential implicants: {}\n",
                unresolved.join(", ")
            ));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use crate::minimize::minimize;

    #[test]
    fn test_evaluate_agrees_outside_unresolved() {
        let minterms = [0, 1, 2, 5, 6, 7, 8, 9, 10, 14];
        let solution = minimize(&minterms, &[]).unwrap();
        // 5 and 7 each keep two coverers after -00- and --10 are picked
        assert_eq!(solution.unresolved, vec![5, 7]);
        assert_eq!(solution.expression, "B'C' + CD'");
        for value in 0..16 {
            if solution.unresolved.contains(&value) {
                assert!(!solution.evaluate(value));
                continue;
            }
            assert_eq!(solution.evaluate(value), minterms.contains(&value), "value {}", value);
        }
    }

    #[test]
    fn test_report_sections() {
        let solution = minimize(&[4, 5], &[]).unwrap();
        let report = solution.to_report();
        assert!(report.starts_with("Prime implicants:\n10- -> 4,5\n"));
        assert!(report.contains("\nReduction steps:\nInitial groups:\n100 -> [4]\n"));
        assert!(report.ends_with("\nSimplified expression:\nAB'\n"));
    }

    #[test]
    fn test_report_flags_unresolved() {
        let solution = minimize(&[0, 1, 2, 5, 6, 7], &[]).unwrap();
        assert!(!solution.is_complete());
        assert!(solution.to_report().contains("not covered"));
    }

    #[test]
    fn test_json_shape() {
        let solution = minimize(&[4, 5], &[]).unwrap();
        let json = serde_json::to_value(&solution).unwrap();
        assert_eq!(json["expression"], "AB'");
        assert_eq!(json["prime_implicants"][0]["pattern"], "10-");
        assert_eq!(json["prime_implicants"][0]["covered"][1], 5);
    }

    #[test]
    fn test_json_round_trip() {
        let solution = minimize(&[0, 4, 8, 12, 3], &[]).unwrap();
        let json = serde_json::to_string(&solution).unwrap();
        let back: super::Solution = serde_json::from_str(&json).unwrap();
        assert_eq!(back, solution);
        assert!(back.prime_implicants[1].covers(12));
    }

    #[test]
    fn test_json_with_inconsistent_implicant_is_rejected() {
        let solution = minimize(&[4, 5], &[]).unwrap();
        let mut json = serde_json::to_value(&solution).unwrap();
        json["prime_implicants"][0]["covered"] = serde_json::json!([7]);
        assert!(serde_json::from_value::<super::Solution>(json).is_err());
    }
}
