//! Sum-of-products rendering
//!
//! Each implicant becomes one product term: `1` positions emit the
//! variable, `0` positions emit the negated variable, eliminated
//! positions emit nothing.

use crate::config::VariableNames;
use crate::minimize::term::{Bit, Pattern, Term};

/// Render one pattern as a product term
pub fn render_term(pattern: &Pattern, names: &VariableNames) -> String {
    let labels = names.names(pattern.width());
    let literals: Vec<String> = pattern
        .bits()
        .iter()
        .zip(labels.iter())
        .filter_map(|(bit, label)| match bit {
            Bit::One => Some(label.clone()),
            Bit::Zero => Some(format!("{}{}", label, names.negation)),
            Bit::Eliminated => None,
        })
        .collect();
    literals.join(&names.and_separator)
}

/// Render implicants as a sum of products, in the given order.
/// No implicants render as the empty string.
pub fn render(implicants: &[Term], names: &VariableNames) -> String {
    implicants
        .iter()
        .map(|t| render_term(t.pattern(), names))
        .collect::<Vec<_>>()
        .join(&names.or_separator)
}
