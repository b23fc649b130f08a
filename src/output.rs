use csv::{ReaderBuilder, Terminator, WriterBuilder};
use fs_extra::dir::create_all;
use std::path::Path;

use crate::error::{GeneratorError, Result};
use crate::generators::{generate_rows, Query, Row};

/// File written by the row generator.
pub const ROW_FILE_NAME: &str = "temp.tbl.csv";

/// Default destination of the query generator.
pub const DEFAULT_QUERY_FILE: &str = "queries.txt";

const ROW_DELIMITER: u8 = b'|';
const QUERY_DELIMITER: u8 = b' ';

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            create_all(dir, false)?;
        }
    }
    Ok(())
}

/// Writes rows `0..n` to `path` as `i|i|` lines, replacing any existing file.
pub fn write_rows<P: AsRef<Path>>(path: P, n: u64) -> Result<u64> {
    let path = path.as_ref();
    ensure_parent_dir(path)?;

    let mut writer = WriterBuilder::new()
        .delimiter(ROW_DELIMITER)
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_path(path)?;
    for row in generate_rows(n) {
        writer.write_record(row.to_record())?;
    }
    writer.flush()?;

    tracing::info!(rows = n, path = %path.display(), "row file written");
    Ok(n)
}

/// Writes one `x y` line per query, in order, replacing any existing file.
pub fn write_queries<P: AsRef<Path>>(path: P, queries: &[Query]) -> Result<usize> {
    let path = path.as_ref();
    ensure_parent_dir(path)?;

    let mut writer = WriterBuilder::new()
        .delimiter(QUERY_DELIMITER)
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_path(path)?;
    for query in queries {
        writer.serialize(query)?;
    }
    writer.flush()?;

    tracing::info!(queries = queries.len(), path = %path.display(), "query file written");
    Ok(queries.len())
}

/// Loads a row file. Only the first column is read; the row identifier is
/// the record's position in the file.
pub fn read_rows<P: AsRef<Path>>(path: P) -> Result<Vec<Row>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(ROW_DELIMITER)
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut rows = Vec::new();
    for (position, record) in reader.records().enumerate() {
        let record = record?;
        let cell = record.get(0).unwrap_or_default();
        let index_value = cell.trim().parse().map_err(|_| GeneratorError::Parse {
            line: position + 1,
            value: cell.to_string(),
        })?;
        rows.push(Row {
            index_value,
            row_identifier: position as u64,
        });
    }
    Ok(rows)
}

pub fn read_queries<P: AsRef<Path>>(path: P) -> Result<Vec<Query>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(QUERY_DELIMITER)
        .has_headers(false)
        .from_path(path)?;

    let mut queries = Vec::new();
    for query in reader.deserialize() {
        queries.push(query?);
    }
    Ok(queries)
}
