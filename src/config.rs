//! Command-line configuration
//!
//! [`Cli`] is the raw clap surface; [`Config::from_cli`] resolves it into
//! typed values (algorithm, parsed input, interval) and rejects anything the
//! rest of the program could not use.

use crate::catalog::Catalog;
use crate::constants::DEFAULT_PLAY_INTERVAL;
use crate::input::{self, InputError};
use crate::sorts::Algorithm;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Step through sorting algorithms in the terminal
#[derive(Debug, Clone, Parser)]
#[command(name = "sortty", version, about)]
pub struct Cli {
    /// Algorithm to visualize (bubble, selection, insertion, shell, merge, quick, heap, counting)
    #[arg(short, long, default_value = "insertion")]
    pub algorithm: String,

    /// Comma-separated values to sort, e.g. "5,3,8,2,1"
    #[arg(short, long)]
    pub input: Option<String>,

    /// Milliseconds between steps while playing
    #[arg(long, default_value_t = DEFAULT_PLAY_INTERVAL.as_millis() as u64)]
    pub interval_ms: u64,

    /// Print every step to stdout instead of opening the TUI
    #[arg(short, long)]
    pub print: bool,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Errors that can occur while resolving the command line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown algorithm '{name}' (expected one of: {expected})")]
    UnknownAlgorithm { name: String, expected: String },

    #[error("invalid input: {0}")]
    Input(#[from] InputError),

    #[error("interval must be greater than zero")]
    ZeroInterval,
}

/// Validated run configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub algorithm: Algorithm,
    pub input: Vec<i64>,
    pub interval: Duration,
    pub print: bool,
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        let catalog = Catalog::new();
        let algorithm =
            catalog
                .lookup(&cli.algorithm)
                .ok_or_else(|| ConfigError::UnknownAlgorithm {
                    name: cli.algorithm.clone(),
                    expected: catalog.keys().join(", "),
                })?;

        let input = match cli.input.as_deref() {
            Some(text) => input::parse_values(text)?.values,
            None => algorithm.default_input().to_vec(),
        };

        if cli.interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }

        Ok(Config {
            algorithm,
            input,
            interval: Duration::from_millis(cli.interval_ms),
            print: cli.print,
            log_file: cli.log_file,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Config, ConfigError> {
        let cli = Cli::try_parse_from(std::iter::once("sortty").chain(args.iter().copied()))
            .expect("arguments parse");
        Config::from_cli(cli)
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]).expect("default config");
        assert_eq!(config.algorithm, Algorithm::Insertion);
        assert_eq!(config.input, Algorithm::Insertion.default_input().to_vec());
        assert_eq!(config.interval, DEFAULT_PLAY_INTERVAL);
        assert!(!config.print);
    }

    #[test]
    fn test_algorithm_default_input() {
        let config = parse(&["-a", "counting sort"]).expect("valid config");
        assert_eq!(config.algorithm, Algorithm::Counting);
        assert_eq!(config.input, vec![4, 2, 1, 4, 1, 3, 2, 1]);
    }

    #[test]
    fn test_explicit_input_and_interval() {
        let config = parse(&["--algorithm", "quick", "--input", "3,1,2", "--interval-ms", "250"])
            .expect("valid config");
        assert_eq!(config.input, vec![3, 1, 2]);
        assert_eq!(config.interval, Duration::from_millis(250));
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            parse(&["-a", "bogo"]),
            Err(ConfigError::UnknownAlgorithm { .. })
        ));
        assert_eq!(
            parse(&["-i", "x,y"]),
            Err(ConfigError::Input(InputError::NoValues))
        );
        assert_eq!(parse(&["--interval-ms", "0"]), Err(ConfigError::ZeroInterval));
    }
}
