//! Pure read-only scans over a [`DataTable`].
//!
//! Everything here is recomputed on each render pass; nothing is cached
//! because the table is ten rows.

use crate::data::datatable::{DataTable, DataType};

/// Missing-value count for one column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingCount {
    pub column_name: String,
    pub missing: usize,
}

/// Count nulls per column. Always computed by scanning the cells, even
/// though the embedded dataset contains none.
pub fn missing_counts(table: &DataTable) -> Vec<MissingCount> {
    table
        .columns
        .iter()
        .enumerate()
        .map(|(idx, column)| MissingCount {
            column_name: column.name.clone(),
            missing: table
                .rows
                .iter()
                .filter(|row| row.get(idx).map(|v| v.is_null()).unwrap_or(true))
                .count(),
        })
        .collect()
}

/// One line of the dtype listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DtypeEntry {
    pub column_name: String,
    pub data_type: DataType,
}

impl DtypeEntry {
    /// `"int64 (numeric)"`, `"object (categorical)"`, ...
    pub fn describe(&self) -> String {
        format!("{} ({})", self.data_type, self.data_type.class_name())
    }
}

/// Declared type per column, in positional order
pub fn dtype_listing(table: &DataTable) -> Vec<DtypeEntry> {
    table
        .columns
        .iter()
        .map(|column| DtypeEntry {
            column_name: column.name.clone(),
            data_type: column.data_type,
        })
        .collect()
}

/// Distinct values of one column with their row counts, in first-seen
/// order. Nulls are not a category.
pub fn category_counts(table: &DataTable, col: usize) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for row in &table.rows {
        let Some(value) = row.get(col) else { continue };
        if value.is_null() {
            continue;
        }
        let key = value.to_string();
        match counts.iter_mut().find(|(k, _)| *k == key) {
            Some((_, n)) => *n += 1,
            None => counts.push((key, 1)),
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::datatable::{DataColumn, DataRow, DataValue};
    use crate::data::fixture::{self, col};

    #[test]
    fn test_fixture_missing_counts_are_all_zero() {
        let table = fixture::electronics_purchases();
        let counts = missing_counts(&table);
        assert_eq!(counts.len(), 9);
        assert!(counts.iter().all(|c| c.missing == 0));
    }

    #[test]
    fn test_missing_counts_see_nulls() {
        let mut table = DataTable::new("holes");
        table.add_column(DataColumn::new("a", DataType::Integer));
        table.add_column(DataColumn::new("b", DataType::Float));
        table
            .add_row(DataRow::new(vec![DataValue::Integer(1), DataValue::Null]))
            .unwrap();
        table
            .add_row(DataRow::new(vec![DataValue::Null, DataValue::Null]))
            .unwrap();

        let counts = missing_counts(&table);
        assert_eq!(counts[0].missing, 1);
        assert_eq!(counts[1].missing, 2);
    }

    #[test]
    fn test_dtype_listing_follows_labels() {
        let mut table = fixture::electronics_purchases();
        let listing = dtype_listing(&table);
        assert_eq!(listing[col::CATEGORY].data_type, DataType::Categorical);
        assert_eq!(listing[col::PRICE].describe(), "float64 (numeric)");

        let labels: Vec<String> = (0..9).map(|i| format!("c{}", i)).collect();
        table.set_column_names(&labels).unwrap();
        let listing = dtype_listing(&table);
        assert_eq!(listing[0].column_name, "c0");
        // types ride along unchanged
        assert_eq!(listing[col::PRICE].data_type, DataType::Float);
    }

    #[test]
    fn test_brand_counts_first_seen_order() {
        let table = fixture::electronics_purchases();
        let counts = category_counts(&table, col::BRAND);
        assert_eq!(
            counts,
            vec![
                ("Other Brands".to_string(), 2),
                ("Samsung".to_string(), 6),
                ("Sony".to_string(), 2),
            ]
        );
    }

    #[test]
    fn test_gender_counts() {
        let table = fixture::electronics_purchases();
        let counts = category_counts(&table, col::GENDER);
        assert_eq!(
            counts,
            vec![("0".to_string(), 5), ("1".to_string(), 5)]
        );
    }
}
