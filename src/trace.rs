//! Human-readable record of a minimization run
//!
//! The trace is for display and diagnostics only; nothing downstream reads it.

use crate::minimize::term::Pattern;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single line of the reduction trace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Step {
    /// Heading before the generation-0 listing
    InitialGroupsHeader,
    /// A generation-0 term, listed in popcount order
    Initial {
        #[schemars(with = "String")]
        pattern: Pattern,
        covered: Vec<u64>,
    },
    /// Start of a combination round (1-based)
    RoundHeader { round: usize },
    /// Two terms joined into one
    Combination {
        #[schemars(with = "String")]
        left: Pattern,
        #[schemars(with = "String")]
        right: Pattern,
        #[schemars(with = "String")]
        pattern: Pattern,
        covered: Vec<u64>,
    },
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::InitialGroupsHeader => write!(f, "Initial groups:"),
            Step::Initial { pattern, covered } => write!(f, "{} -> {:?}", pattern, covered),
            Step::RoundHeader { round } => write!(f, "Step {}: Combinations", round),
            Step::Combination {
                left,
                right,
                pattern,
                covered,
            } => write!(f, "{} + {} -> {} -> {:?}", left, right, pattern, covered),
        }
    }
}

/// Ordered steps of one run. A disabled trace drops everything recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct Trace {
    steps: Vec<Step>,
    #[serde(skip)]
    disabled: bool,
}

impl Trace {
    pub fn enabled() -> Self {
        Trace {
            steps: Vec::new(),
            disabled: false,
        }
    }

    pub fn disabled() -> Self {
        Trace {
            steps: Vec::new(),
            disabled: true,
        }
    }

    /// Append the step built by `step` if recording is on
    pub fn record<F>(&mut self, step: F)
    where
        F: FnOnce() -> Step,
    {
        if !self.disabled {
            self.steps.push(step());
        }
    }

    /// Whether recorded steps are kept
    pub fn is_recording(&self) -> bool {
        !self.disabled
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let step = Step::Combination {
            left: "01-1".parse().unwrap(),
            right: "11-1".parse().unwrap(),
            pattern: "-1-1".parse().unwrap(),
            covered: vec![5, 7, 13, 15],
        };
        assert_eq!(step.to_string(), "01-1 + 11-1 -> -1-1 -> [5, 7, 13, 15]");
        assert_eq!(Step::RoundHeader { round: 2 }.to_string(), "Step 2: Combinations");
    }

    #[test]
    fn test_disabled_trace_drops_steps() {
        let mut trace = Trace::disabled();
        trace.record(|| Step::InitialGroupsHeader);
        assert!(trace.is_empty());
        assert!(!trace.is_recording());

        let mut trace = Trace::enabled();
        trace.record(|| Step::InitialGroupsHeader);
        assert_eq!(trace.len(), 1);
    }

    #[test]
    fn test_serializes_as_tagged_list() {
        let mut trace = Trace::enabled();
        trace.record(|| Step::RoundHeader { round: 1 });
        let json = serde_json::to_string(&trace).unwrap();
        assert_eq!(json, r#"[{"kind":"round_header","round":1}]"#);
    }
}
