//! Metrics module - monthly rows and derived ratios

mod deriver;
mod row;

pub use deriver::{safe_percent, safe_ratio, sum_present, MetricDeriver};
pub use row::{ChannelMetrics, DerivedMetrics, MetricRow};
