pub mod analyzer;
pub mod datatable;
pub mod fixture;
pub mod stats;

pub use datatable::{DataColumn, DataRow, DataTable, DataType, DataValue};
