pub mod cli;
pub mod error;
pub mod generators;
pub mod output;

pub use error::{GeneratorError, Result};
pub use generators::{
    generate_queries, generate_rows, partition_intervals, Interval, Query, QueryMode, Row,
};
