//! Monthly metric row: source metrics plus the ratios derived from them.

/// Metrics read from the report for one month. `None` marks a missing or
/// non-numeric cell.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ChannelMetrics {
    pub google_clicks: Option<f64>,
    pub google_cpc: Option<f64>,
    pub google_cost: Option<f64>,
    pub google_impressions: Option<f64>,

    pub ebay_clicks: Option<f64>,
    pub ebay_impressions: Option<f64>,
    pub ebay_orders: Option<f64>,
    pub ebay_cost: Option<f64>,

    pub cart_adds: Option<f64>,
    pub site_orders: Option<f64>,
    pub revenue: Option<f64>,

    pub seo_clicks: Option<f64>,
    pub seo_impressions: Option<f64>,
    pub seo_position: Option<f64>,
}

/// Ratios computed from `ChannelMetrics`. Percentages are in 0..100 scale.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DerivedMetrics {
    pub total_clicks: Option<f64>,

    pub ctr_google: Option<f64>,
    pub ctr_ebay: Option<f64>,
    pub ctr_seo: Option<f64>,

    /// Cart adds per click
    pub cr_cart: Option<f64>,
    /// Site orders per click
    pub cr_order: Option<f64>,
    /// Site orders per cart add
    pub cr_order_from_cart: Option<f64>,

    pub roas_google: Option<f64>,
    pub cpa_google: Option<f64>,
    pub roas_ebay: Option<f64>,
    pub cpa_ebay: Option<f64>,
}

/// One calendar month of the report.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricRow {
    pub month: String,
    pub inputs: ChannelMetrics,
    pub derived: DerivedMetrics,
}
