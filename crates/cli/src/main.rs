//! Fibonacci CLI entry point
//!
//! With no arguments prints `The 10th Fibonacci number is: 55`.

use clap::Parser as ClapParser;
use fib_cli::{Cli, logging};
use std::io;
use std::process;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let stdout = io::stdout();
    if let Err(e) = fib_cli::run(&cli, &mut stdout.lock()) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
