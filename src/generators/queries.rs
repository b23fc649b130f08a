use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{GeneratorError, Result};

/// A range query `x y` with `x < y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    pub x: i64,
    pub y: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryMode {
    Overlapping,
    NonOverlapping,
}

impl QueryMode {
    pub fn from_flag(overlapping: bool) -> Self {
        if overlapping {
            QueryMode::Overlapping
        } else {
            QueryMode::NonOverlapping
        }
    }
}

impl fmt::Display for QueryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryMode::Overlapping => f.write_str("overlapping"),
            QueryMode::NonOverlapping => f.write_str("non-overlapping"),
        }
    }
}

/// Closed sub-range `[start, end]` of the domain owned by one query.
/// Neighbouring intervals share their boundary point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: i64,
    pub end: i64,
}

impl Interval {
    pub fn width(&self) -> u64 {
        (self.end as i128 - self.start as i128) as u64
    }

    /// Draws `x` from `[start, end - 1]`, then `y` from `[x + 1, end]`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Query {
        let x = rng.gen_range(self.start..self.end);
        let y = rng.gen_range(x + 1..=self.end);
        Query { x, y }
    }
}

fn total_range(min_val: i64, max_val: i64) -> Result<u64> {
    if min_val >= max_val {
        return Err(GeneratorError::InvalidDomain { min_val, max_val });
    }
    Ok((max_val as i128 - min_val as i128) as u64)
}

/// Splits `[min_val, max_val]` into `count` contiguous intervals whose widths
/// differ by at most one. The remainder goes to the earliest intervals.
pub fn partition_intervals(min_val: i64, max_val: i64, count: usize) -> Result<Vec<Interval>> {
    let total_range = total_range(min_val, max_val)?;
    if count == 0 {
        return Err(GeneratorError::NoQueries);
    }
    if total_range < count as u64 {
        return Err(GeneratorError::RangeTooSmall {
            total_range,
            num_queries: count,
        });
    }

    let interval_length = total_range / count as u64;
    let extra = total_range % count as u64;
    tracing::debug!(
        total_range,
        interval_length,
        extra,
        "partitioning [{}, {}] into {} intervals",
        min_val,
        max_val,
        count
    );

    let mut intervals = Vec::with_capacity(count);
    let mut current_start = min_val as i128;
    for i in 0..count as u64 {
        let length = interval_length + u64::from(i < extra);
        let current_end = current_start + length as i128;
        // Bounded by max_val, so both ends fit in i64.
        intervals.push(Interval {
            start: current_start as i64,
            end: current_end as i64,
        });
        current_start = current_end;
    }
    Ok(intervals)
}

/// Generates `num_queries` queries over `[min_val, max_val]`.
///
/// Overlapping queries draw both endpoints from the whole domain and may
/// repeat. Non-overlapping queries get one partition interval each, and the
/// request fails with [`GeneratorError::RangeTooSmall`] when the domain is
/// narrower than `num_queries`.
pub fn generate_queries<R: Rng + ?Sized>(
    rng: &mut R,
    min_val: i64,
    max_val: i64,
    num_queries: usize,
    mode: QueryMode,
) -> Result<Vec<Query>> {
    match mode {
        QueryMode::Overlapping => {
            total_range(min_val, max_val)?;
            let domain = Interval {
                start: min_val,
                end: max_val,
            };
            Ok((0..num_queries).map(|_| domain.sample(rng)).collect())
        }
        QueryMode::NonOverlapping => {
            let intervals = partition_intervals(min_val, max_val, num_queries)?;
            Ok(intervals.iter().map(|interval| interval.sample(rng)).collect())
        }
    }
}
