//! Column Extractor Module
//! Maps fixed column positions of the report layout to named series.
//!
//! Positions are the contract with existing report files; header text is
//! never consulted.

use crate::data::loader::{RawCell, RawTable};
use crate::metrics::ChannelMetrics;

/// Fixed 0-based column positions of the report layout.
pub mod columns {
    pub const MONTH: usize = 0;

    pub const GOOGLE_CLICKS: usize = 1;
    pub const GOOGLE_CPC: usize = 2;
    pub const GOOGLE_COST: usize = 3;
    pub const GOOGLE_IMPRESSIONS: usize = 4;

    pub const EBAY_CLICKS: usize = 5;
    pub const EBAY_IMPRESSIONS: usize = 6;
    pub const EBAY_ORDERS: usize = 7;
    pub const EBAY_COST: usize = 8;

    pub const CART_ADDS: usize = 9;
    pub const SITE_ORDERS: usize = 10;
    pub const REVENUE: usize = 11;

    pub const SEO_CLICKS: usize = 12;
    pub const SEO_IMPRESSIONS: usize = 13;
    pub const SEO_POSITION: usize = 14;

    /// Number of columns the layout defines.
    pub const COUNT: usize = 15;
}

/// Named series pulled out of a raw table, all aligned by row index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedReport {
    pub months: Vec<String>,

    pub google_clicks: Vec<Option<f64>>,
    pub google_cpc: Vec<Option<f64>>,
    pub google_cost: Vec<Option<f64>>,
    pub google_impressions: Vec<Option<f64>>,

    pub ebay_clicks: Vec<Option<f64>>,
    pub ebay_impressions: Vec<Option<f64>>,
    pub ebay_orders: Vec<Option<f64>>,
    pub ebay_cost: Vec<Option<f64>>,

    pub cart_adds: Vec<Option<f64>>,
    pub site_orders: Vec<Option<f64>>,
    pub revenue: Vec<Option<f64>>,

    pub seo_clicks: Vec<Option<f64>>,
    pub seo_impressions: Vec<Option<f64>>,
    pub seo_position: Vec<Option<f64>>,
}

impl ExtractedReport {
    pub fn len(&self) -> usize {
        self.months.len()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// Channel metrics of a single row.
    pub fn channel_metrics(&self, row: usize) -> ChannelMetrics {
        let at = |series: &[Option<f64>]| series.get(row).copied().flatten();
        ChannelMetrics {
            google_clicks: at(&self.google_clicks),
            google_cpc: at(&self.google_cpc),
            google_cost: at(&self.google_cost),
            google_impressions: at(&self.google_impressions),
            ebay_clicks: at(&self.ebay_clicks),
            ebay_impressions: at(&self.ebay_impressions),
            ebay_orders: at(&self.ebay_orders),
            ebay_cost: at(&self.ebay_cost),
            cart_adds: at(&self.cart_adds),
            site_orders: at(&self.site_orders),
            revenue: at(&self.revenue),
            seo_clicks: at(&self.seo_clicks),
            seo_impressions: at(&self.seo_impressions),
            seo_position: at(&self.seo_position),
        }
    }
}

/// Handles positional extraction and numeric coercion.
pub struct ColumnExtractor;

impl ColumnExtractor {
    /// Extract every layout column, skipping table row 0 (the sub-header).
    pub fn extract(table: &RawTable) -> ExtractedReport {
        use columns::*;

        ExtractedReport {
            months: Self::text_series(table, MONTH),
            google_clicks: Self::numeric_series(table, GOOGLE_CLICKS),
            google_cpc: Self::numeric_series(table, GOOGLE_CPC),
            google_cost: Self::numeric_series(table, GOOGLE_COST),
            google_impressions: Self::numeric_series(table, GOOGLE_IMPRESSIONS),
            ebay_clicks: Self::numeric_series(table, EBAY_CLICKS),
            ebay_impressions: Self::numeric_series(table, EBAY_IMPRESSIONS),
            ebay_orders: Self::numeric_series(table, EBAY_ORDERS),
            ebay_cost: Self::numeric_series(table, EBAY_COST),
            cart_adds: Self::numeric_series(table, CART_ADDS),
            site_orders: Self::numeric_series(table, SITE_ORDERS),
            revenue: Self::numeric_series(table, REVENUE),
            seo_clicks: Self::numeric_series(table, SEO_CLICKS),
            seo_impressions: Self::numeric_series(table, SEO_IMPRESSIONS),
            seo_position: Self::numeric_series(table, SEO_POSITION),
        }
    }

    /// Column as text, data rows only.
    pub fn text_series(table: &RawTable, col: usize) -> Vec<String> {
        Self::data_rows(table)
            .map(|row| table.cell(row, col).as_text())
            .collect()
    }

    /// Column coerced to numbers, data rows only. A column past the table
    /// width yields a series of `None`.
    pub fn numeric_series(table: &RawTable, col: usize) -> Vec<Option<f64>> {
        Self::data_rows(table)
            .map(|row| Self::coerce_number(table.cell(row, col)))
            .collect()
    }

    /// Lenient numeric coercion: unparseable or non-finite values become `None`.
    pub fn coerce_number(cell: &RawCell) -> Option<f64> {
        let value = match cell {
            RawCell::Empty => return None,
            RawCell::Number(v) => *v,
            RawCell::Bool(b) => f64::from(u8::from(*b)),
            RawCell::Text(text) => text.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }

    fn data_rows(table: &RawTable) -> std::ops::Range<usize> {
        1..table.row_count().max(1)
    }
}
