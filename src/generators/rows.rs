/// One record of the sequential table file.
///
/// `index_value` is the first column, `row_identifier` is the row's position.
/// Freshly generated rows carry the same value in both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row {
    pub index_value: u64,
    pub row_identifier: u64,
}

impl Row {
    pub fn new(i: u64) -> Self {
        Row {
            index_value: i,
            row_identifier: i,
        }
    }

    /// The fields as written to disk. The trailing empty field produces the
    /// closing `|`.
    pub fn to_record(&self) -> [String; 3] {
        [
            self.index_value.to_string(),
            self.row_identifier.to_string(),
            String::new(),
        ]
    }
}

/// Rows `0..n` in increasing order.
pub fn generate_rows(n: u64) -> impl Iterator<Item = Row> {
    (0..n).map(Row::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yields_n_sequential_rows() {
        let rows: Vec<Row> = generate_rows(3).collect();
        assert_eq!(rows, vec![Row::new(0), Row::new(1), Row::new(2)]);
    }

    #[test]
    fn zero_rows_is_empty() {
        assert_eq!(generate_rows(0).count(), 0);
    }

    #[test]
    fn record_ends_with_empty_field() {
        assert_eq!(
            Row::new(42).to_record(),
            ["42".to_string(), "42".to_string(), String::new()]
        );
    }
}
