//! Metric Deriver Module
//! Per-row totals, CTR, CR, ROAS and CPA with missing-safe division.
//!
//! Every formula is evaluated row by row with no state carried between rows.
//! A ratio whose denominator is missing or not strictly positive is `None`.

use crate::data::ExtractedReport;
use crate::metrics::{ChannelMetrics, DerivedMetrics, MetricRow};

/// Ratio of two optional values; `None` unless both are present, the
/// denominator is positive and the result is finite.
pub fn safe_ratio(numerator: Option<f64>, denominator: Option<f64>) -> Option<f64> {
    let numerator = numerator?;
    let denominator = denominator.filter(|d| *d > 0.0)?;
    Some(numerator / denominator).filter(|r| r.is_finite())
}

/// `safe_ratio` scaled to a percentage.
pub fn safe_percent(numerator: Option<f64>, denominator: Option<f64>) -> Option<f64> {
    safe_ratio(numerator, denominator)
        .map(|r| r * 100.0)
        .filter(|p| p.is_finite())
}

/// Sum of the present values; `None` only when every term is missing.
pub fn sum_present(values: &[Option<f64>]) -> Option<f64> {
    values
        .iter()
        .flatten()
        .fold(None, |acc, v| Some(acc.unwrap_or(0.0) + v))
}

/// Computes derived metrics from extracted series.
pub struct MetricDeriver;

impl MetricDeriver {
    /// Derive one `MetricRow` per extracted row, in order.
    pub fn derive(report: &ExtractedReport) -> Vec<MetricRow> {
        (0..report.len())
            .map(|row| {
                let inputs = report.channel_metrics(row);
                MetricRow {
                    month: report.months[row].clone(),
                    inputs,
                    derived: Self::derive_row(&inputs),
                }
            })
            .collect()
    }

    pub fn derive_row(m: &ChannelMetrics) -> DerivedMetrics {
        let total_clicks = sum_present(&[m.google_clicks, m.ebay_clicks, m.seo_clicks]);

        DerivedMetrics {
            total_clicks,

            ctr_google: safe_percent(m.google_clicks, m.google_impressions),
            ctr_ebay: safe_percent(m.ebay_clicks, m.ebay_impressions),
            ctr_seo: safe_percent(m.seo_clicks, m.seo_impressions),

            cr_cart: safe_percent(m.cart_adds, total_clicks),
            cr_order: safe_percent(m.site_orders, total_clicks),
            cr_order_from_cart: safe_percent(m.site_orders, m.cart_adds),

            roas_google: safe_percent(m.revenue, m.google_cost),
            // Google spend is attributed to site orders
            cpa_google: safe_ratio(m.google_cost, m.site_orders),
            roas_ebay: safe_percent(m.revenue, m.ebay_cost),
            // eBay spend is attributed to orders placed on eBay
            cpa_ebay: safe_ratio(m.ebay_cost, m.ebay_orders),
        }
    }
}
