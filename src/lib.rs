//! Traffic Report
//!
//! Loads a monthly marketing report (Google Ads, eBay, SEO and site sales)
//! from ODS/XLSX/XLS/CSV and derives CTR, conversion, ROAS and CPA series for
//! the dashboard.
//!
//! Data flows one way: `data::ReportLoader` → `data::ColumnExtractor` →
//! `metrics::MetricDeriver` → `charts::DashboardViews`.

pub mod charts;
pub mod config;
pub mod data;
pub mod error;
pub mod metrics;
pub mod report;

pub use error::ReportError;
pub use report::Report;
