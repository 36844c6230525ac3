pub mod bars;
pub mod dtypes;
pub mod heatmap;
pub mod help_widget;
pub mod histogram;
pub mod missing;
pub mod preview;
pub mod rename_form;
pub mod scatter;
