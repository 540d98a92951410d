//! CLI utility helpers

use qmc::{Error, Result};
use regex::Regex;
use std::fs;
use std::path::PathBuf;
use tracing::Level;

/// Flags that take a value
pub const VALUE_FLAGS: &[&str] = &["--dc", "--config", "--output", "-o"];

/// Switches without a value
pub const SWITCHES: &[&str] = &["--json", "--steps", "-v", "-vv"];

/// Value following `flag`, if the flag is present.
/// A flag at the end of the arguments, or followed by another flag, has
/// no value and is an error.
pub fn flag_value<'a>(args: &'a [String], flag: &str) -> Result<Option<&'a str>> {
    let Some(i) = args.iter().position(|a| a == flag) else {
        return Ok(None);
    };
    match args.get(i + 1).map(String::as_str) {
        Some(value) if !VALUE_FLAGS.contains(&value) && !SWITCHES.contains(&value) => {
            Ok(Some(value))
        }
        _ => Err(Error::InvalidInput(format!("{} requires a value", flag))),
    }
}

pub fn has_switch(args: &[String], switch: &str) -> bool {
    args.iter().any(|a| a == switch)
}

/// Arguments that are neither flags nor flag values
pub fn positional(args: &[String]) -> Vec<&str> {
    let mut out = Vec::new();
    let mut skip_next = false;
    for arg in args {
        if skip_next {
            skip_next = false;
            continue;
        }
        if VALUE_FLAGS.contains(&arg.as_str()) {
            skip_next = true;
            continue;
        }
        if SWITCHES.contains(&arg.as_str()) {
            continue;
        }
        out.push(arg.as_str());
    }
    out
}

/// Parse a comma or whitespace separated list of integers
pub fn parse_terms(text: &str) -> Result<Vec<i64>> {
    let separator = Regex::new(r"[,;\s]+").map_err(|e| Error::Other(e.to_string()))?;
    separator
        .split(text.trim())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<i64>()
                .map_err(|_| Error::InvalidInput(format!("'{}' is not an integer", token)))
        })
        .collect()
}

/// Log level from `-v` / `-vv`
pub fn log_level(args: &[String]) -> Level {
    if has_switch(args, "-vv") {
        Level::TRACE
    } else if has_switch(args, "-v") {
        Level::DEBUG
    } else {
        Level::WARN
    }
}

/// Install the stderr log subscriber
pub fn init_logging(args: &[String]) {
    tracing_subscriber::fmt()
        .with_max_level(log_level(args))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Write content to file or stdout
pub fn write_output(path: &Option<PathBuf>, content: &str) -> Result<()> {
    match path {
        Some(p) => {
            fs::write(p, content).map_err(Error::Io)?;
            eprintln!("Written to: {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
