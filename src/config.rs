//! Minimizer configuration
//!
//! Options can be built in code or loaded from a YAML or JSON file.
//! Every field has a default, so a config file only lists what it changes.

use crate::error::{Error, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Largest supported bit-width; inputs are `u64`
pub const MAX_SUPPORTED_WIDTH: usize = 64;

/// Options for a minimization run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct MinimizeOptions {
    /// Variable naming used by the expression renderer
    pub variables: VariableNames,

    /// Reject inputs needing more bits than this
    pub max_width: usize,

    /// Cover minterms left after the essential pass with a greedy pick
    pub resolve_residual: bool,

    /// Record the step-by-step trace
    pub record_trace: bool,
}

impl Default for MinimizeOptions {
    fn default() -> Self {
        MinimizeOptions {
            variables: VariableNames::default(),
            max_width: 32,
            resolve_residual: false,
            record_trace: true,
        }
    }
}

impl MinimizeOptions {
    /// Parse options from YAML
    pub fn from_yaml(content: &str) -> Result<Self> {
        let options: MinimizeOptions = serde_norway::from_str(content)?;
        options.validate()?;
        Ok(options)
    }

    /// Parse options from JSON
    pub fn from_json(content: &str) -> Result<Self> {
        let options: MinimizeOptions = serde_json::from_str(content)?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a file, choosing the format by extension
    /// (`.json` is JSON, anything else is YAML)
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(Error::Io)?;
        match path.extension().and_then(|s| s.to_str()) {
            Some("json") => Self::from_json(&content),
            _ => Self::from_yaml(&content),
        }
    }

    /// Check values that parse but make no sense together
    pub fn validate(&self) -> Result<()> {
        if self.max_width > MAX_SUPPORTED_WIDTH {
            return Err(Error::Config(format!(
                "max_width {} exceeds the supported {} bits",
                self.max_width, MAX_SUPPORTED_WIDTH
            )));
        }
        self.variables.validate()
    }
}

/// How bit positions are named in the rendered expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct VariableNames {
    /// Labels for positions left to right, used while the width fits
    pub alphabet: Vec<String>,

    /// Prefix for positional names (`x0`, `x1`, ...) once the width
    /// exceeds the alphabet
    pub positional_prefix: String,

    /// Appended to a variable to negate it
    pub negation: String,

    /// Placed between literals of one product term
    pub and_separator: String,

    /// Placed between product terms
    pub or_separator: String,
}

impl Default for VariableNames {
    fn default() -> Self {
        VariableNames {
            alphabet: ["A", "B", "C", "D", "E", "F", "G", "H"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            positional_prefix: "x".to_string(),
            negation: "'".to_string(),
            and_separator: String::new(),
            or_separator: " + ".to_string(),
        }
    }
}

impl VariableNames {
    /// Names for each position of a `width`-bit pattern, left to right.
    ///
    /// When the width exceeds the alphabet every position gets a
    /// positional name, so one expression never mixes both schemes.
    pub fn names(&self, width: usize) -> Vec<String> {
        if width <= self.alphabet.len() {
            self.alphabet[..width].to_vec()
        } else {
            (0..width)
                .map(|i| format!("{}{}", self.positional_prefix, i))
                .collect()
        }
    }

    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for label in &self.alphabet {
            if label.is_empty() {
                return Err(Error::Config("empty variable label".to_string()));
            }
            if !seen.insert(label.as_str()) {
                return Err(Error::Config(format!("duplicate variable label '{}'", label)));
            }
        }
        if self.positional_prefix.is_empty() {
            return Err(Error::Config("empty positional prefix".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_names() {
        let names = VariableNames::default();
        assert_eq!(names.names(3), vec!["A", "B", "C"]);
        assert!(names.names(0).is_empty());
        assert_eq!(names.names(8).last().map(String::as_str), Some("H"));
    }

    #[test]
    fn test_positional_names_past_alphabet() {
        let names = VariableNames::default();
        let wide = names.names(10);
        assert_eq!(wide.len(), 10);
        assert_eq!(wide[0], "x0");
        assert_eq!(wide[9], "x9");
    }

    #[test]
    fn test_yaml_partial_override() {
        let options = MinimizeOptions::from_yaml(
            r#"
resolve_residual: true
variables:
  alphabet: [P, Q, R]
  or_separator: " | "
"#,
        )
        .unwrap();
        assert!(options.resolve_residual);
        assert!(options.record_trace);
        assert_eq!(options.max_width, 32);
        assert_eq!(options.variables.alphabet, vec!["P", "Q", "R"]);
        assert_eq!(options.variables.or_separator, " | ");
        assert_eq!(options.variables.negation, "'");
    }

    #[test]
    fn test_json_options() {
        let options = MinimizeOptions::from_json(r#"{"record_trace": false}"#).unwrap();
        assert!(!options.record_trace);
        assert_eq!(options.variables, VariableNames::default());
    }

    #[test]
    fn test_duplicate_label_rejected() {
        let err = MinimizeOptions::from_yaml("variables:\n  alphabet: [A, A]\n").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_width_ceiling() {
        let err = MinimizeOptions::from_yaml("max_width: 65\n").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
