//! Rinha CLI
//!
//! Runs Rinha programs given as JSON syntax trees.

use rinhac::commands::{check_file, parse_run_options, run_file};
use rinhac::init_tracing;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    let code = match command.as_str() {
        "run" => run_command(&args[2..]),
        "check" => {
            if args.len() != 3 {
                eprintln!("Usage: rinha check <file.json | ->");
                std::process::exit(2);
            }
            check_file(&args[2])
        }
        "help" | "--help" | "-h" => {
            print_usage();
            0
        }
        "version" | "--version" | "-V" => {
            println!("rinha {}", env!("CARGO_PKG_VERSION"));
            0
        }
        _ => {
            // A JSON path on its own means `run <path>`
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
            {
                run_command(&args[1..])
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                1
            }
        }
    };

    std::process::exit(code);
}

fn run_command(args: &[String]) -> i32 {
    match parse_run_options(args) {
        Ok((path, options)) => run_file(&path, &options),
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!("Usage: rinha run <file.json | -> [options]");
            eprintln!();
            print_run_options();
            2
        }
    }
}

fn print_usage() {
    println!("Rinha interpreter");
    println!();
    println!("Usage: rinha <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file.json>      Evaluate a program (`-` reads stdin)");
    println!("  check <file.json>    Load the syntax tree without evaluating it");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Run options:");
    println!("  --no-memo              Never reuse call results");
    println!("  --memo-capacity=<n>    Keep at most n cached call results");
    println!("  --show-result          Print the final value after the program's output");
    println!("  --file-name=<name>     Report locations against <name>");
    println!();
    println!("Set RUST_LOG=rinha_eval=debug to trace evaluation on stderr.");
}

fn print_run_options() {
    eprintln!("Options:");
    eprintln!("  --no-memo              Never reuse call results");
    eprintln!("  --memo-capacity=<n>    Keep at most n cached call results");
    eprintln!("  --show-result          Print the final value after the program's output");
    eprintln!("  --file-name=<name>     Report locations against <name>");
}
