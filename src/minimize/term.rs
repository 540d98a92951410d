//! Term representation for the tabulation method
//!
//! A term pairs the set of minterms it stands for with a fixed-width
//! pattern over `0`, `1` and `-`. Each position of the pattern is one
//! input variable, most significant bit first.

use crate::error::Error;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Value of a single position in a pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Bit {
    /// Variable must be false
    Zero,
    /// Variable must be true
    One,
    /// Variable eliminated by a combination
    Eliminated,
}

impl Bit {
    /// Parse a character into a Bit
    pub fn from_char(c: char) -> Result<Self, Error> {
        match c {
            '0' => Ok(Bit::Zero),
            '1' => Ok(Bit::One),
            '-' => Ok(Bit::Eliminated),
            _ => Err(Error::InvalidInput(format!(
                "Invalid character '{}' in pattern",
                c
            ))),
        }
    }

    /// Convert to character representation
    pub fn to_char(self) -> char {
        match self {
            Bit::Zero => '0',
            Bit::One => '1',
            Bit::Eliminated => '-',
        }
    }
}

/// Fixed-width sequence of bits, leftmost position is the most significant
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Pattern(Vec<Bit>);

impl Pattern {
    /// Binary rendering of `value`, zero-padded to `width` positions
    pub fn from_value(value: u64, width: usize) -> Self {
        let bits = (0..width)
            .rev()
            .map(|shift| {
                if shift < 64 && (value >> shift) & 1 == 1 {
                    Bit::One
                } else {
                    Bit::Zero
                }
            })
            .collect();
        Pattern(bits)
    }

    /// Number of positions
    pub fn width(&self) -> usize {
        self.0.len()
    }

    /// All positions, left to right
    pub fn bits(&self) -> &[Bit] {
        &self.0
    }

    /// Number of `1` positions; eliminated positions never count
    pub fn popcount(&self) -> usize {
        self.0.iter().filter(|b| **b == Bit::One).count()
    }

    /// Number of positions where the two patterns hold different symbols.
    /// An eliminated position only matches another eliminated position.
    pub fn distance(&self, other: &Pattern) -> usize {
        self.0
            .iter()
            .zip(other.0.iter())
            .filter(|(a, b)| a != b)
            .count()
    }

    /// Index of the single position where the patterns differ as `0` against
    /// `1`, or `None` when they differ anywhere else or in more places.
    pub fn merge_position(&self, other: &Pattern) -> Option<usize> {
        if self.width() != other.width() {
            return None;
        }

        let mut diff_pos = None;
        for (i, (a, b)) in self.0.iter().zip(other.0.iter()).enumerate() {
            if a == b {
                continue;
            }
            match (a, b) {
                (Bit::Zero, Bit::One) | (Bit::One, Bit::Zero) => {
                    if diff_pos.is_some() {
                        return None;
                    }
                    diff_pos = Some(i);
                }
                _ => return None,
            }
        }
        diff_pos
    }

    /// Copy of this pattern with position `pos` eliminated
    pub fn eliminate(&self, pos: usize) -> Pattern {
        let mut bits = self.0.clone();
        bits[pos] = Bit::Eliminated;
        Pattern(bits)
    }

    /// Whether the input combination `value` falls inside this pattern
    pub fn matches(&self, value: u64) -> bool {
        let width = self.width();
        self.0.iter().enumerate().all(|(i, bit)| {
            let shift = width - 1 - i;
            let set = shift < 64 && (value >> shift) & 1 == 1;
            match bit {
                Bit::Zero => !set,
                Bit::One => set,
                Bit::Eliminated => true,
            }
        })
    }

    /// Whether every position is eliminated (true for width 0)
    pub fn is_tautology(&self) -> bool {
        self.0.iter().all(|b| *b == Bit::Eliminated)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: String = self.0.iter().map(|b| b.to_char()).collect();
        write!(f, "{}", s)
    }
}

impl FromStr for Pattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bits: Result<Vec<Bit>, _> = s.chars().map(Bit::from_char).collect();
        Ok(Pattern(bits?))
    }
}

impl From<Pattern> for String {
    fn from(pattern: Pattern) -> Self {
        pattern.to_string()
    }
}

impl TryFrom<String> for Pattern {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// A term of one generation: the minterms it represents and its pattern.
///
/// Two terms are equal when both the covered set and the pattern are equal.
/// Deserialization checks that the covered set is exactly the set of values
/// the pattern matches.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(try_from = "RawTerm")]
pub struct Term {
    /// Represented minterms (and don't-cares), ascending, no duplicates
    covered: Vec<u64>,
    /// Binary pattern with eliminated positions
    #[schemars(with = "String")]
    pattern: Pattern,
}

/// Unchecked serialized form of a [`Term`]
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RawTerm {
    covered: Vec<u64>,
    #[schemars(with = "String")]
    pattern: Pattern,
}

impl TryFrom<RawTerm> for Term {
    type Error = Error;

    fn try_from(raw: RawTerm) -> Result<Self, Self::Error> {
        let term = Term::new(raw.covered, raw.pattern);
        let width = term.pattern.width();
        let eliminated = term
            .pattern
            .bits()
            .iter()
            .filter(|b| **b == Bit::Eliminated)
            .count();

        if let Some(&v) = term
            .covered
            .iter()
            .find(|&&v| (width < 64 && v >> width != 0) || !term.pattern.matches(v))
        {
            return Err(Error::InvalidInput(format!(
                "value {} does not fit pattern {}",
                v, term.pattern
            )));
        }
        // every matching value must be listed
        if eliminated >= 64 || term.covered.len() as u64 != 1u64 << eliminated {
            return Err(Error::InvalidInput(format!(
                "pattern {} covers {} values, {} listed",
                term.pattern,
                1u128 << eliminated.min(127),
                term.covered.len()
            )));
        }
        Ok(term)
    }
}

impl Term {
    /// Generation-0 term for a single input value
    pub fn from_value(value: u64, width: usize) -> Self {
        Term {
            covered: vec![value],
            pattern: Pattern::from_value(value, width),
        }
    }

    /// Build a term from parts. `covered` is sorted and deduplicated.
    pub fn new(mut covered: Vec<u64>, pattern: Pattern) -> Self {
        covered.sort_unstable();
        covered.dedup();
        Term { covered, pattern }
    }

    pub fn covered(&self) -> &[u64] {
        &self.covered
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn popcount(&self) -> usize {
        self.pattern.popcount()
    }

    pub fn covers(&self, minterm: u64) -> bool {
        self.covered.binary_search(&minterm).is_ok()
    }

    /// Combine with a term whose pattern differs in exactly one position.
    ///
    /// The result eliminates that position and covers the union of both
    /// parents. Returns `None` when the patterns are not adjacent.
    pub fn combine(&self, other: &Term) -> Option<Term> {
        let pos = self.pattern.merge_position(&other.pattern)?;
        let mut covered = Vec::with_capacity(self.covered.len() + other.covered.len());
        covered.extend_from_slice(&self.covered);
        covered.extend_from_slice(&other.covered);
        Some(Term::new(covered, self.pattern.eliminate(pos)))
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {:?}", self.pattern, self.covered)
    }
}
