//! Error types for report loading.
//!
//! Library code returns `ReportError`; the binary wraps it with `anyhow`.
//! Missing cell values are not errors and never show up here.

use polars::prelude::PolarsError;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Unsupported file '{file_name}': supported formats are .ods, .xlsx, .xls, .csv")]
    UnsupportedFormat { file_name: String },

    #[error(
        "No report loaded: open a file (.ods/.xlsx/.xls/.csv) or place one at {}",
        display_paths(.searched)
    )]
    NoSourceAvailable { searched: Vec<PathBuf> },

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read spreadsheet: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("Failed to read CSV: {0}")]
    Csv(#[from] PolarsError),

    #[error("Workbook contains no sheets")]
    EmptyWorkbook,
}

impl ReportError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        ReportError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return "a fallback path".to_string();
    }
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(" or ")
}
