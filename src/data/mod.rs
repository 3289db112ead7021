//! Data module - report loading and column extraction

pub mod extractor;
pub mod loader;

pub use extractor::{columns, ColumnExtractor, ExtractedReport};
pub use loader::{LoadedTable, RawCell, RawTable, ReportLoader, SourceFormat, Upload};
