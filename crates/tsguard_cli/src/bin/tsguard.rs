//! tsguard CLI entry point.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use tsguard_cli::generate_file;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    input: Option<PathBuf>,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            path => {
                if config.input.is_some() {
                    return Err("expected exactly one input file".into());
                }
                config.input = Some(PathBuf::from(path));
            }
        }
        i += 1;
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("tsguard {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let Some(input) = config.input else {
        print_help();
        return Err("no input file given".into());
    };

    let output = generate_file(&input).map_err(|e| e.display_with_context())?;
    println!("{}", output.display());

    Ok(())
}

fn print_help() {
    println!("tsguard - generate runtime type guards from TypeScript interfaces");
    println!();
    println!("Usage: tsguard [OPTIONS] <FILE>");
    println!();
    println!("Arguments:");
    println!("  <FILE>  Interface declaration file (e.g. point.interface.ts)");
    println!();
    println!("Options:");
    println!("  -h, --help     Print help");
    println!("  -V, --version  Print version");
    println!();
    println!("The guard file is written next to the input, with the");
    println!("declaration suffix replaced (point.interface.ts -> point.guard.ts).");
}
