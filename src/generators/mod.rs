pub mod queries;
pub mod rows;

pub use queries::{generate_queries, partition_intervals, Interval, Query, QueryMode};
pub use rows::{generate_rows, Row};
