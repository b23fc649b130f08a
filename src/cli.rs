use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::generators::QueryMode;
use crate::output::DEFAULT_QUERY_FILE;

#[derive(Debug, Parser)]
#[command(name = "generate_rows")]
#[command(about = "Write a sequential `i|i|` table file of n rows")]
pub struct RowArgs {
    /// Number of rows to write
    pub n: u64,
}

#[derive(Debug, Parser)]
#[command(name = "generate_queries")]
#[command(about = "Generate random range queries over an integer domain")]
pub struct QueryArgs {
    /// Minimum value of the range
    #[arg(allow_negative_numbers = true)]
    pub min_val: i64,

    /// Maximum value of the range
    #[arg(allow_negative_numbers = true)]
    pub max_val: i64,

    /// Number of queries to generate
    pub num_queries: usize,

    /// Generate overlapping queries
    #[arg(long)]
    pub overlapping: bool,

    /// Output file name
    #[arg(long = "output_file", default_value = DEFAULT_QUERY_FILE)]
    pub output_file: PathBuf,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl QueryArgs {
    pub fn mode(&self) -> QueryMode {
        QueryMode::from_flag(self.overlapping)
    }
}

/// What to print when the row generator's arguments don't parse.
pub fn row_args_message(err: &clap::Error) -> String {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.to_string(),
        ErrorKind::InvalidValue | ErrorKind::ValueValidation => {
            "Please provide a valid integer for n.".to_string()
        }
        _ => "Usage: generate_rows <n>".to_string(),
    }
}

/// Logs go to stderr; stdout is reserved for the result message.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        "bench_inputs=debug,info"
    } else {
        "bench_inputs=info,warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_message(args: &[&str]) -> String {
        let err = RowArgs::try_parse_from(args).unwrap_err();
        row_args_message(&err)
    }

    #[test]
    fn parses_row_count() {
        let args = RowArgs::try_parse_from(["generate_rows", "25"]).unwrap();
        assert_eq!(args.n, 25);
    }

    #[test]
    fn row_usage_on_wrong_argument_count() {
        assert_eq!(row_message(&["generate_rows"]), "Usage: generate_rows <n>");
        assert_eq!(row_message(&["generate_rows", "1", "2"]), "Usage: generate_rows <n>");
    }

    #[test]
    fn row_count_must_be_an_integer() {
        assert_eq!(
            row_message(&["generate_rows", "ten"]),
            "Please provide a valid integer for n."
        );
        assert_eq!(
            row_message(&["generate_rows", "2.5"]),
            "Please provide a valid integer for n."
        );
    }

    #[test]
    fn query_defaults() {
        let args = QueryArgs::try_parse_from(["generate_queries", "0", "10", "2"]).unwrap();
        assert_eq!((args.min_val, args.max_val, args.num_queries), (0, 10, 2));
        assert_eq!(args.mode(), QueryMode::NonOverlapping);
        assert_eq!(args.output_file, PathBuf::from("queries.txt"));
        assert_eq!(args.seed, None);
    }

    #[test]
    fn query_flags_and_negative_bounds() {
        let args = QueryArgs::try_parse_from([
            "generate_queries",
            "-100",
            "-10",
            "5",
            "--overlapping",
            "--output_file",
            "out/q.txt",
            "--seed",
            "42",
        ])
        .unwrap();
        assert_eq!((args.min_val, args.max_val), (-100, -10));
        assert_eq!(args.mode(), QueryMode::Overlapping);
        assert_eq!(args.output_file, PathBuf::from("out/q.txt"));
        assert_eq!(args.seed, Some(42));
    }

    #[test]
    fn negative_query_count_is_rejected() {
        assert!(QueryArgs::try_parse_from(["generate_queries", "0", "10", "-1"]).is_err());
    }
}
