//! CLI command implementations
//!
//! - `minimize`: Run the minimizer on a minterm list
//! - `schema`: JSON schemas for the solution and the options file
//! - `util`: Argument helpers, logging setup and output

pub mod minimize;
pub mod schema;
pub mod util;

pub use minimize::cmd_minimize;
pub use schema::cmd_schema;
