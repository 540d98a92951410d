// Production-quality lints
#![warn(
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
// Deny truly dangerous patterns
#![deny(clippy::mem_forget)]
// Allow common patterns in library code
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! # qmc — Quine-McCluskey Boolean minimization
//!
//! Reduces a Boolean function given as a set of minterms (and optional
//! don't-cares) to a sum-of-products expression.
//!
//! ## Quick Start
//!
//! ```rust
//! use qmc::{Minimizer, MinimizeOptions, Problem};
//!
//! let problem = Problem::new(&[4, 5], &[])?;
//! let solution = Minimizer::new(MinimizeOptions::default()).solve(&problem)?;
//!
//! assert_eq!(solution.expression, "AB'");
//! for prime in &solution.prime_implicants {
//!     println!("{}", prime);
//! }
//! # Ok::<(), qmc::Error>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                                                             │
//! │  Problem (minterms, don't-cares, width)                     │
//! │       │                                                     │
//! │       ├──► group_values ──► Groups (popcount buckets)       │
//! │       │                                                     │
//! │       ├──► prime_implicants ──► PrimeImplicants + Trace     │
//! │       │                                                     │
//! │       ├──► select_essentials ──► Selection                  │
//! │       │                                                     │
//! │       └──► render ──► expression String                     │
//! │                                                             │
//! │  Solution = primes + essentials + unresolved + expression   │
//! │                                                             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Essential selection is greedy: only implicants that are the sole
//! coverer of some minterm are taken. Minterms caught in a cyclic
//! coverage table end up in [`Solution::unresolved`].

pub mod config;
pub mod error;
pub mod minimize;
pub mod problem;
pub mod render;
pub mod solution;
pub mod trace;

// Re-exports
pub use config::{MinimizeOptions, VariableNames, MAX_SUPPORTED_WIDTH};
pub use error::{Error, Result};
pub use minimize::{
    combine_round, group_values, minimize, prime_implicants, select_essentials, Bit,
    Combination, CoverageTable, Groups, Minimizer, Pattern, PrimeImplicants, Round, Selection,
    Term,
};
pub use problem::Problem;
pub use render::{render, render_term};
pub use solution::Solution;
pub use trace::{Step, Trace};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
