//! qmc CLI - Command-line interface
//!
//! Commands:
//!   minimize - Reduce minterms to a sum-of-products expression
//!   schema   - Print a JSON schema for an output type
//!   version  - Print the version

mod cli;

use qmc::*;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::from(1);
    }

    cli::util::init_logging(&args[2..]);

    let result = match args[1].as_str() {
        "minimize" | "min" => cli::cmd_minimize(&args[2..]),
        "schema" => cli::cmd_schema(&args[2..]),
        "version" | "--version" | "-V" => {
            println!("qmc {}", VERSION);
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            Err("Unknown command".into())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

fn print_usage() {
    println!(
        r#"
qmc - Quine-McCluskey Boolean minimization

USAGE:
    qmc <COMMAND> [OPTIONS]

COMMANDS:
    minimize <minterms>              Minimize a function given by its minterms
    schema [solution|options]        Print JSON schema for output or config
    version                          Print version

OPTIONS:
    --dc <list>                      Don't-care values
    --config <file>                  Options file (.yaml/.yml or .json)
    --json                           JSON output
    --steps                          Include the reduction steps in the report
    --output <file>                  Output file (default: stdout)
    -v, -vv                          Log debug / trace output to stderr

Lists are decimal integers separated by commas or whitespace.

EXAMPLES:
    qmc minimize 1,3,5,7
    qmc minimize "0 1 2 5 6 7" --steps
    qmc minimize 4,8,10,11,12,15 --dc 9,14 --json
"#
    );
}
