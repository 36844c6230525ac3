//! The embedded electronics-purchase dataset.
//!
//! Kept apart from every rendering component so the analysis layer can be
//! tested against synthetic tables of other shapes.

use crate::data::datatable::{DataColumn, DataRow, DataTable, DataType, DataValue};

const PRODUCT_IDS: [i64; 10] = [5874, 5875, 5876, 5877, 5878, 5879, 5880, 5881, 5882, 5883];

const CATEGORIES: [&str; 10] = [
    "Smartphones",
    "Smart Watches",
    "Tablets",
    "Smartphones",
    "Tablets",
    "Smart Watches",
    "Tablets",
    "Smartphones",
    "Smartphones",
    "Smart Watches",
];

const BRANDS: [&str; 10] = [
    "Other Brands",
    "Samsung",
    "Samsung",
    "Samsung",
    "Sony",
    "Samsung",
    "Sony",
    "Other Brands",
    "Samsung",
    "Samsung",
];

const PRICES: [f64; 10] = [
    312.949668, 980.389404, 2606.718293, 870.395450, 1798.955875, 1500.52534, 899.23456, 1020.4956,
    1750.34978, 825.6475,
];

const AGES: [i64; 10] = [18, 35, 63, 63, 57, 28, 42, 19, 33, 45];
const GENDERS: [i64; 10] = [0, 1, 0, 1, 0, 1, 0, 0, 1, 1];
const FREQUENCIES: [i64; 10] = [2, 7, 1, 10, 17, 5, 8, 2, 12, 9];
const SATISFACTION: [i64; 10] = [1, 2, 5, 3, 3, 4, 4, 1, 2, 4];
const INTENT: [i64; 10] = [0, 1, 1, 1, 0, 1, 0, 0, 1, 1];

/// Build the fixed 10-row, 9-column purchase table.
pub fn electronics_purchases() -> DataTable {
    let mut table = DataTable::new("electronics_purchases");

    table.add_column(DataColumn::new("ProductID", DataType::Integer));
    table.add_column(DataColumn::new("ProductCategory", DataType::Categorical));
    table.add_column(DataColumn::new("ProductBrand", DataType::Categorical));
    table.add_column(DataColumn::new("ProductPrice", DataType::Float));
    table.add_column(DataColumn::new("CustomerAge", DataType::Integer));
    table.add_column(DataColumn::new("CustomerGender", DataType::Integer));
    table.add_column(DataColumn::new("PurchaseFrequency", DataType::Integer));
    table.add_column(DataColumn::new("CustomerSatisfaction", DataType::Integer));
    table.add_column(DataColumn::new("PurchaseIntent", DataType::Integer));

    for i in 0..PRODUCT_IDS.len() {
        let row = DataRow::new(vec![
            DataValue::Integer(PRODUCT_IDS[i]),
            DataValue::Text(CATEGORIES[i].to_string()),
            DataValue::Text(BRANDS[i].to_string()),
            DataValue::Float(PRICES[i]),
            DataValue::Integer(AGES[i]),
            DataValue::Integer(GENDERS[i]),
            DataValue::Integer(FREQUENCIES[i]),
            DataValue::Integer(SATISFACTION[i]),
            DataValue::Integer(INTENT[i]),
        ]);
        // every literal row matches the 9-column schema
        table.add_row(row).expect("fixture row width");
    }

    table
}

/// Column positions used by the fixed chart set. Charts address columns by
/// position so renaming labels never changes what gets plotted.
pub mod col {
    pub const PRODUCT_ID: usize = 0;
    pub const CATEGORY: usize = 1;
    pub const BRAND: usize = 2;
    pub const PRICE: usize = 3;
    pub const AGE: usize = 4;
    pub const GENDER: usize = 5;
    pub const FREQUENCY: usize = 6;
    pub const SATISFACTION: usize = 7;
    pub const INTENT: usize = 8;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_shape() {
        let table = electronics_purchases();
        assert_eq!(table.row_count(), 10);
        assert_eq!(table.column_count(), 9);
    }

    #[test]
    fn test_fixture_schema_order() {
        let table = electronics_purchases();
        assert_eq!(
            table.column_names(),
            vec![
                "ProductID",
                "ProductCategory",
                "ProductBrand",
                "ProductPrice",
                "CustomerAge",
                "CustomerGender",
                "PurchaseFrequency",
                "CustomerSatisfaction",
                "PurchaseIntent",
            ]
        );
    }

    #[test]
    fn test_fixture_numeric_set() {
        let table = electronics_purchases();
        // everything except the two text columns
        assert_eq!(
            table.numeric_column_indices(),
            vec![
                col::PRODUCT_ID,
                col::PRICE,
                col::AGE,
                col::GENDER,
                col::FREQUENCY,
                col::SATISFACTION,
                col::INTENT
            ]
        );
    }

    #[test]
    fn test_fixture_has_no_nulls() {
        let table = electronics_purchases();
        for row in &table.rows {
            assert!(row.values.iter().all(|v| !v.is_null()));
        }
    }

    #[test]
    fn test_fixture_sample_values() {
        let table = electronics_purchases();
        assert_eq!(
            table.get_value(0, col::PRODUCT_ID),
            Some(&DataValue::Integer(5874))
        );
        assert_eq!(
            table.get_value(4, col::BRAND),
            Some(&DataValue::Text("Sony".to_string()))
        );
        assert_eq!(
            table.get_value(2, col::PRICE),
            Some(&DataValue::Float(2606.718293))
        );
    }
}
