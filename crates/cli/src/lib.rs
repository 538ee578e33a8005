//! Fibonacci CLI
//!
//! Resolves which index and strategy to use, computes the value with
//! `fib-core` and writes `The {n}th Fibonacci number is: {value}`.
//!
//! Precedence for each setting: command line, then `--config` file, then the
//! default (index 10, naive recursion).

pub mod config;
pub mod logging;

use clap::Parser as ClapParser;
use config::FibConfig;
use fib_core::{DEFAULT_INDEX, FibError, Index, Strategy};
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(ClapParser, Debug)]
#[command(name = "fib")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Print the n-th Fibonacci number", long_about = None)]
pub struct Cli {
    /// Sequence position (defaults to 10)
    #[arg(allow_negative_numbers = true)]
    pub index: Option<i64>,

    /// Algorithm: naive, iterative or stack
    #[arg(short, long, value_name = "STRATEGY")]
    pub strategy: Option<Strategy>,

    /// Path to a TOML configuration file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Error type for a CLI run
#[derive(Debug)]
pub enum CliError {
    /// The configuration file could not be read or parsed
    Config(String),
    /// Index validation or arithmetic failed
    Compute(FibError),
    /// Writing the result failed
    Io(std::io::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Config(s) => write!(f, "{}", s),
            CliError::Compute(e) => write!(f, "{}", e),
            CliError::Io(e) => write!(f, "Failed to write output: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Compute(e) => Some(e),
            CliError::Io(e) => Some(e),
            CliError::Config(_) => None,
        }
    }
}

impl From<FibError> for CliError {
    fn from(e: FibError) -> Self {
        CliError::Compute(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

/// Fully resolved request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    pub index: Index,
    pub strategy: Strategy,
}

impl Request {
    /// Merge command-line values over config values over defaults
    pub fn resolve(cli: &Cli, config: &FibConfig) -> Result<Self, CliError> {
        let raw_index = cli
            .index
            .or(config.index)
            .unwrap_or(i64::from(DEFAULT_INDEX));
        let index = Index::new(raw_index)?;
        let strategy = cli.strategy.or(config.strategy).unwrap_or_default();
        Ok(Request { index, strategy })
    }
}

/// The output sentence; the suffix is always "th"
pub fn render(index: Index, value: u64) -> String {
    format!("The {}th Fibonacci number is: {}", index, value)
}

/// Run the CLI, writing the result line to `out`
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<(), CliError> {
    let config = match &cli.config {
        Some(path) => {
            debug!("Loading config from {}", path.display());
            FibConfig::load(path).map_err(CliError::Config)?
        }
        None => FibConfig::default(),
    };

    let request = Request::resolve(cli, &config)?;
    info!(
        "Computing F({}) with {} strategy",
        request.index, request.strategy
    );

    let value = fib_core::compute(request.index, request.strategy)?;
    writeln!(out, "{}", render(request.index, value))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("fib").chain(args.iter().copied())).unwrap()
    }

    fn run_to_string(cli: &Cli) -> Result<String, CliError> {
        let mut out = Vec::new();
        run(cli, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_no_arguments_prints_fixed_line() {
        let output = run_to_string(&parse(&[])).unwrap();
        assert_eq!(output, "The 10th Fibonacci number is: 55\n");
    }

    #[test]
    fn test_render_keeps_th_suffix() {
        assert_eq!(render(Index::from(1), 1), "The 1th Fibonacci number is: 1");
        assert_eq!(render(Index::from(2), 1), "The 2th Fibonacci number is: 1");
    }

    #[test]
    fn test_index_argument() {
        let output = run_to_string(&parse(&["20"])).unwrap();
        assert_eq!(output, "The 20th Fibonacci number is: 6765\n");
    }

    #[test]
    fn test_strategy_argument() {
        let cli = parse(&["--strategy", "iterative", "90"]);
        assert_eq!(cli.strategy, Some(Strategy::Iterative));
        let output = run_to_string(&cli).unwrap();
        assert_eq!(
            output,
            "The 90th Fibonacci number is: 2880067194370816120\n"
        );
    }

    #[test]
    fn test_negative_index_is_an_error() {
        let cli = parse(&["-3"]);
        assert_eq!(cli.index, Some(-3));
        let err = run_to_string(&cli).unwrap_err();
        assert!(matches!(err, CliError::Compute(FibError::NegativeIndex(-3))));
        assert_eq!(err.to_string(), "Fibonacci index must be non-negative, got -3");
    }

    #[test]
    fn test_overflow_is_an_error() {
        let err = run_to_string(&parse(&["-s", "iterative", "100"])).unwrap_err();
        assert!(matches!(err, CliError::Compute(FibError::Overflow { .. })));
    }

    #[test]
    fn test_unknown_strategy_rejected_by_parser() {
        assert!(Cli::try_parse_from(["fib", "--strategy", "memo"]).is_err());
    }

    #[test]
    fn test_resolve_precedence() {
        let config = FibConfig {
            index: Some(7),
            strategy: Some(Strategy::Stack),
        };

        let request = Request::resolve(&parse(&[]), &config).unwrap();
        assert_eq!(request.index.get(), 7);
        assert_eq!(request.strategy, Strategy::Stack);

        let request = Request::resolve(&parse(&["12", "-s", "naive"]), &config).unwrap();
        assert_eq!(request.index.get(), 12);
        assert_eq!(request.strategy, Strategy::Naive);

        let request = Request::resolve(&parse(&[]), &FibConfig::default()).unwrap();
        assert_eq!(request.index, Index::default());
        assert_eq!(request.strategy, Strategy::Naive);
    }
}
