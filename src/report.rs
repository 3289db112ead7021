//! Load → extract → derive, in one call.

use crate::data::{ColumnExtractor, RawTable, ReportLoader, Upload};
use crate::error::ReportError;
use crate::metrics::{MetricDeriver, MetricRow};
use log::info;

/// A fully derived report, ready for the views.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    /// File name or fallback path the rows came from
    pub source: String,
    pub rows: Vec<MetricRow>,
}

impl Report {
    /// Run the whole pipeline. Any load error halts before extraction.
    pub fn load(loader: &ReportLoader, upload: Option<&Upload>) -> Result<Self, ReportError> {
        let loaded = loader.load(upload)?;
        let report = Self::from_table(loaded.source, &loaded.table);
        info!(
            "Derived {} monthly rows from {}",
            report.rows.len(),
            report.source
        );
        Ok(report)
    }

    pub fn from_table(source: impl Into<String>, table: &RawTable) -> Self {
        let extracted = ColumnExtractor::extract(table);
        Self {
            source: source.into(),
            rows: MetricDeriver::derive(&extracted),
        }
    }

    pub fn months(&self) -> Vec<String> {
        self.rows.iter().map(|r| r.month.clone()).collect()
    }
}
