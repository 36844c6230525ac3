use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents the declared type of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataType {
    Integer,
    Float,
    Categorical,
}

impl DataType {
    /// Whether values of this type participate in numeric analysis
    /// (correlation, scatter plots, histograms)
    pub fn is_numeric(&self) -> bool {
        matches!(self, DataType::Integer | DataType::Float)
    }

    /// Coarse class shown in the dtype listing
    pub fn class_name(&self) -> &'static str {
        if self.is_numeric() {
            "numeric"
        } else {
            "categorical"
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::Integer => write!(f, "int64"),
            DataType::Float => write!(f, "float64"),
            DataType::Categorical => write!(f, "object"),
        }
    }
}

/// Column metadata: a label and a declared type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataColumn {
    pub name: String,
    pub data_type: DataType,
}

impl DataColumn {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }
}

/// A single cell value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DataValue {
    Integer(i64),
    Float(f64),
    Text(String),
    Null,
}

impl DataValue {
    pub fn is_null(&self) -> bool {
        matches!(self, DataValue::Null)
    }

    /// Numeric view of the value; `None` for text and nulls
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            DataValue::Integer(i) => Some(*i as f64),
            DataValue::Float(f) => Some(*f),
            DataValue::Text(_) | DataValue::Null => None,
        }
    }
}

impl fmt::Display for DataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataValue::Integer(i) => write!(f, "{}", i),
            DataValue::Float(fl) => write!(f, "{:.2}", fl),
            DataValue::Text(s) => write!(f, "{}", s),
            DataValue::Null => write!(f, ""),
        }
    }
}

/// A row of data in the table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataRow {
    pub values: Vec<DataValue>,
}

impl DataRow {
    pub fn new(values: Vec<DataValue>) -> Self {
        Self { values }
    }

    pub fn get(&self, index: usize) -> Option<&DataValue> {
        self.values.get(index)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// The in-memory record table.
///
/// Values and column order are fixed after construction; the only supported
/// mutation is [`DataTable::set_column_names`], which swaps every column
/// label in one step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataTable {
    pub name: String,
    pub columns: Vec<DataColumn>,
    pub rows: Vec<DataRow>,
}

impl DataTable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    pub fn add_column(&mut self, column: DataColumn) -> &mut Self {
        self.columns.push(column);
        self
    }

    pub fn add_row(&mut self, row: DataRow) -> Result<(), String> {
        if row.len() != self.columns.len() {
            return Err(format!(
                "Row has {} values but table has {} columns",
                row.len(),
                self.columns.len()
            ));
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Current column labels, in positional order
    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    /// First column whose label matches, like label lookup in the usual
    /// dataframe libraries. Positions stay unambiguous even when labels
    /// collide.
    pub fn get_column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Replace every column label at once.
    ///
    /// All-or-nothing: a label list of the wrong length leaves the table
    /// untouched. Duplicate and blank labels are accepted; lookups stay
    /// positional.
    pub fn set_column_names(&mut self, names: &[String]) -> Result<(), String> {
        if names.len() != self.columns.len() {
            return Err(format!(
                "Got {} labels for {} columns",
                names.len(),
                self.columns.len()
            ));
        }
        for (column, name) in self.columns.iter_mut().zip(names) {
            column.name = name.clone();
        }
        Ok(())
    }

    /// Indices of columns whose declared type is numeric
    pub fn numeric_column_indices(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .filter(|(_, c)| c.data_type.is_numeric())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn get_value(&self, row: usize, col: usize) -> Option<&DataValue> {
        self.rows.get(row)?.get(col)
    }

    /// Non-null numeric values of one column, nulls skipped
    pub fn numeric_values(&self, col: usize) -> Vec<f64> {
        self.rows
            .iter()
            .filter_map(|row| row.get(col).and_then(DataValue::as_f64))
            .collect()
    }

    /// One row rendered to strings, for table display
    pub fn get_row_as_strings(&self, index: usize) -> Option<Vec<String>> {
        self.rows
            .get(index)
            .map(|row| row.values.iter().map(|v| v.to_string()).collect())
    }
}
