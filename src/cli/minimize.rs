//! Minimize CLI command

use super::util::{flag_value, has_switch, parse_terms, positional, write_output};
use qmc::*;
use std::path::{Path, PathBuf};

pub fn cmd_minimize(args: &[String]) -> Result<()> {
    let minterm_text = positional(args).join(" ");
    if minterm_text.trim().is_empty() {
        return Err("Usage: qmc minimize <minterms> [--dc <list>] [--config <file>] [--json]".into());
    }

    let minterms = parse_terms(&minterm_text)?;
    let dont_cares = match flag_value(args, "--dc")? {
        Some(text) => parse_terms(text)?,
        None => Vec::new(),
    };

    let mut options = match flag_value(args, "--config")? {
        Some(path) => MinimizeOptions::from_path(Path::new(path))?,
        None => MinimizeOptions::default(),
    };

    let output = match flag_value(args, "--output")? {
        Some(path) => Some(PathBuf::from(path)),
        None => flag_value(args, "-o")?.map(PathBuf::from),
    };

    let json_output = has_switch(args, "--json");
    let show_steps = has_switch(args, "--steps");
    if !json_output && !show_steps {
        options.record_trace = false;
    }

    let problem = Problem::new(&minterms, &dont_cares)?;
    let solution = Minimizer::new(options).solve(&problem)?;

    let content = if json_output {
        serde_json::to_string_pretty(&solution)?
    } else {
        solution.to_report()
    };
    write_output(&output, content.trim_end())
}
